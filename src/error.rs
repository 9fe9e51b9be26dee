use thiserror::Error;

/// Errors raised while encoding or decoding a CertificateRequest.
///
/// Every variant is terminal for the handshake. Nothing here is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Truncated input")]
    TruncatedInput,

    #[error("Malformed message: {0}")]
    MalformedMessage(&'static str),

    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(&'static str),

    #[error("No common signature/hash algorithm")]
    NoCommonAlgorithm,

    #[error("Buffer full")]
    BufferFull,

    #[error("Invalid config: {0}")]
    InvalidConfig(&'static str),
}

impl<'a> From<nom::Err<nom::error::Error<&'a [u8]>>> for Error {
    fn from(value: nom::Err<nom::error::Error<&'a [u8]>>) -> Self {
        match value {
            // Element parsers signal unknown codes with a Failure.
            nom::Err::Failure(_) => Error::MalformedMessage("unknown code"),
            nom::Err::Error(_) | nom::Err::Incomplete(_) => Error::TruncatedInput,
        }
    }
}
