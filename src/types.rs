//! Wire-level types shared by the CertificateRequest codec.
//!
//! Code points follow the IANA TLS registries. Unlike a permissive parser
//! that would carry `Unknown(_)` values forward, every type here rejects
//! codes it does not know: a CertificateRequest naming something we cannot
//! interpret is a malformed message.

use std::fmt;

use nom::error::{Error as NomError, ErrorKind};
use nom::number::complete::{be_u16, be_u8};
use nom::{Err, IResult};

use crate::Error;

// ============================================================================
// Protocol Version
// ============================================================================

/// Negotiated TLS protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum ProtocolVersion {
    SSLv3,
    TLS1_0,
    TLS1_1,
    TLS1_2,
    TLS1_3,
    Unknown(u16),
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::Unknown(0)
    }
}

impl ProtocolVersion {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0x0300 => ProtocolVersion::SSLv3,
            0x0301 => ProtocolVersion::TLS1_0,
            0x0302 => ProtocolVersion::TLS1_1,
            0x0303 => ProtocolVersion::TLS1_2,
            0x0304 => ProtocolVersion::TLS1_3,
            _ => ProtocolVersion::Unknown(value),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            ProtocolVersion::SSLv3 => 0x0300,
            ProtocolVersion::TLS1_0 => 0x0301,
            ProtocolVersion::TLS1_1 => 0x0302,
            ProtocolVersion::TLS1_2 => 0x0303,
            ProtocolVersion::TLS1_3 => 0x0304,
            ProtocolVersion::Unknown(value) => *value,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], ProtocolVersion> {
        let (input, version) = be_u16(input)?;
        Ok((input, ProtocolVersion::from_u16(version)))
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolVersion::SSLv3 => write!(f, "SSLv3"),
            ProtocolVersion::TLS1_0 => write!(f, "TLS1.0"),
            ProtocolVersion::TLS1_1 => write!(f, "TLS1.1"),
            ProtocolVersion::TLS1_2 => write!(f, "TLS1.2"),
            ProtocolVersion::TLS1_3 => write!(f, "TLS1.3"),
            ProtocolVersion::Unknown(v) => write!(f, "Unknown(0x{:04x})", v),
        }
    }
}

/// Raise a nom `Failure` for an unrecognized code, so that callers can tell
/// it apart from running out of input.
fn unknown_code(input: &[u8]) -> Err<NomError<&[u8]>> {
    Err::Failure(NomError::new(input, ErrorKind::Verify))
}

// ============================================================================
// Client Certificate Types
// ============================================================================

/// Kind of certificate a client may present (RFC 5246 7.4.4, RFC 8422).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(non_camel_case_types)]
pub enum ClientCertificateType {
    #[default]
    RSA_SIGN,
    DSS_SIGN,
    RSA_FIXED_DH,
    DSS_FIXED_DH,
    RSA_EPHEMERAL_DH,
    DSS_EPHEMERAL_DH,
    FORTEZZA_DMS,
    ECDSA_SIGN,
    RSA_FIXED_ECDH,
    ECDSA_FIXED_ECDH,
}

impl ClientCertificateType {
    pub fn as_u8(&self) -> u8 {
        (*self).into()
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], ClientCertificateType> {
        let (rest, value) = be_u8(input)?;
        let t = ClientCertificateType::try_from(value).map_err(|_| unknown_code(input))?;
        Ok((rest, t))
    }
}

impl From<ClientCertificateType> for u8 {
    fn from(value: ClientCertificateType) -> Self {
        use ClientCertificateType::*;
        match value {
            RSA_SIGN => 1,
            DSS_SIGN => 2,
            RSA_FIXED_DH => 3,
            DSS_FIXED_DH => 4,
            RSA_EPHEMERAL_DH => 5,
            DSS_EPHEMERAL_DH => 6,
            FORTEZZA_DMS => 20,
            ECDSA_SIGN => 64,
            RSA_FIXED_ECDH => 65,
            ECDSA_FIXED_ECDH => 66,
        }
    }
}

impl TryFrom<u8> for ClientCertificateType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use ClientCertificateType::*;
        let t = match value {
            1 => RSA_SIGN,
            2 => DSS_SIGN,
            3 => RSA_FIXED_DH,
            4 => DSS_FIXED_DH,
            5 => RSA_EPHEMERAL_DH,
            6 => DSS_EPHEMERAL_DH,
            20 => FORTEZZA_DMS,
            64 => ECDSA_SIGN,
            65 => RSA_FIXED_ECDH,
            66 => ECDSA_FIXED_ECDH,
            _ => return Err(Error::MalformedMessage("unknown certificate type")),
        };
        Ok(t)
    }
}

// ============================================================================
// Hash Algorithms
// ============================================================================

/// Hash half of a TLS 1.2 signature_algorithms entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(non_camel_case_types)]
pub enum HashAlgorithm {
    #[default]
    None,
    MD5,
    SHA1,
    SHA224,
    SHA256,
    SHA384,
    SHA512,
    /// The signature scheme defines its own hash (RFC 8422, RFC 8446).
    Intrinsic,
}

impl HashAlgorithm {
    pub fn as_u8(&self) -> u8 {
        (*self).into()
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], HashAlgorithm> {
        let (rest, value) = be_u8(input)?;
        let h = HashAlgorithm::try_from(value).map_err(|_| unknown_code(input))?;
        Ok((rest, h))
    }
}

impl From<HashAlgorithm> for u8 {
    fn from(value: HashAlgorithm) -> Self {
        use HashAlgorithm::*;
        match value {
            None => 0,
            MD5 => 1,
            SHA1 => 2,
            SHA224 => 3,
            SHA256 => 4,
            SHA384 => 5,
            SHA512 => 6,
            Intrinsic => 8,
        }
    }
}

impl TryFrom<u8> for HashAlgorithm {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use HashAlgorithm::*;
        let h = match value {
            0 => None,
            1 => MD5,
            2 => SHA1,
            3 => SHA224,
            4 => SHA256,
            5 => SHA384,
            6 => SHA512,
            8 => Intrinsic,
            _ => return Err(Error::MalformedMessage("unknown hash algorithm")),
        };
        Ok(h)
    }
}

// ============================================================================
// Signature Algorithms
// ============================================================================

/// Signature half of a TLS 1.2 signature_algorithms entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(non_camel_case_types)]
pub enum SignatureAlgorithm {
    #[default]
    Anonymous,
    RSA,
    DSA,
    ECDSA,
    RSA_PSS_RSAE_SHA256,
    RSA_PSS_RSAE_SHA384,
    RSA_PSS_RSAE_SHA512,
    ED25519,
    ED448,
    RSA_PSS_PSS_SHA256,
    RSA_PSS_PSS_SHA384,
    RSA_PSS_PSS_SHA512,
}

impl SignatureAlgorithm {
    pub fn as_u8(&self) -> u8 {
        (*self).into()
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], SignatureAlgorithm> {
        let (rest, value) = be_u8(input)?;
        let s = SignatureAlgorithm::try_from(value).map_err(|_| unknown_code(input))?;
        Ok((rest, s))
    }
}

impl From<SignatureAlgorithm> for u8 {
    fn from(value: SignatureAlgorithm) -> Self {
        use SignatureAlgorithm::*;
        match value {
            Anonymous => 0,
            RSA => 1,
            DSA => 2,
            ECDSA => 3,
            RSA_PSS_RSAE_SHA256 => 4,
            RSA_PSS_RSAE_SHA384 => 5,
            RSA_PSS_RSAE_SHA512 => 6,
            ED25519 => 7,
            ED448 => 8,
            RSA_PSS_PSS_SHA256 => 9,
            RSA_PSS_PSS_SHA384 => 10,
            RSA_PSS_PSS_SHA512 => 11,
        }
    }
}

impl TryFrom<u8> for SignatureAlgorithm {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use SignatureAlgorithm::*;
        let s = match value {
            0 => Anonymous,
            1 => RSA,
            2 => DSA,
            3 => ECDSA,
            4 => RSA_PSS_RSAE_SHA256,
            5 => RSA_PSS_RSAE_SHA384,
            6 => RSA_PSS_RSAE_SHA512,
            7 => ED25519,
            8 => ED448,
            9 => RSA_PSS_PSS_SHA256,
            10 => RSA_PSS_PSS_SHA384,
            11 => RSA_PSS_PSS_SHA512,
            _ => return Err(Error::MalformedMessage("unknown signature algorithm")),
        };
        Ok(s)
    }
}

// ============================================================================
// Signature and Hash pairs
// ============================================================================

/// One entry of `supported_signature_algorithms`.
///
/// On the wire the hash byte comes first, then the signature byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignatureAndHashAlgorithm {
    pub hash: HashAlgorithm,
    pub signature: SignatureAlgorithm,
}

impl SignatureAndHashAlgorithm {
    pub const fn new(hash: HashAlgorithm, signature: SignatureAlgorithm) -> Self {
        SignatureAndHashAlgorithm { hash, signature }
    }

    pub fn as_u16(&self) -> u16 {
        ((self.hash.as_u8() as u16) << 8) | (self.signature.as_u8() as u16)
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], SignatureAndHashAlgorithm> {
        let (input, hash) = HashAlgorithm::parse(input)?;
        let (input, signature) = SignatureAlgorithm::parse(input)?;
        Ok((input, SignatureAndHashAlgorithm { hash, signature }))
    }

    /// Default local preference, most preferred first.
    pub const fn supported() -> &'static [SignatureAndHashAlgorithm; 4] {
        const SUPPORTED: &[SignatureAndHashAlgorithm; 4] = &[
            SignatureAndHashAlgorithm::new(HashAlgorithm::SHA256, SignatureAlgorithm::ECDSA),
            SignatureAndHashAlgorithm::new(HashAlgorithm::SHA384, SignatureAlgorithm::ECDSA),
            SignatureAndHashAlgorithm::new(HashAlgorithm::SHA256, SignatureAlgorithm::RSA),
            SignatureAndHashAlgorithm::new(HashAlgorithm::SHA384, SignatureAlgorithm::RSA),
        ];

        SUPPORTED
    }
}
