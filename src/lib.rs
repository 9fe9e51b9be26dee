//! CertificateRequest for TLS.
//!
//! The server uses a CertificateRequest to ask for a client certificate. It
//! names the certificate types it accepts and, in TLS 1.2, the
//! signature/hash pairs the client may sign its CertificateVerify with.
//!
//! This crate encodes and decodes that message and does the negotiation
//! attached to it:
//!
//! * [`send`] writes our request, built from a [`Config`], into the
//!   handshake buffer of a [`HandshakeContext`].
//! * [`recv`] reads the peer's request, picks the signature/hash pair to
//!   use (our preference order wins) and stores it in the context.
//!
//! A non-empty `certificate_authorities` list is refused with
//! [`Error::UnsupportedFeature`]. The distinguished names are never parsed.
//!
//! ```
//! use certreq::{recv, send, Buf, Config, HandshakeContext, ProtocolVersion};
//!
//! let config = Config::default();
//!
//! let io = Buf::with_capacity(256);
//! let mut server = HandshakeContext::new(ProtocolVersion::TLS1_2, io);
//! send(&config, &mut server).unwrap();
//!
//! let io = Buf::from_slice(&server.io);
//! let mut client = HandshakeContext::new(ProtocolVersion::TLS1_2, io);
//! recv(&config, &mut client).unwrap();
//!
//! assert!(client.negotiated_signature_and_hash().is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

mod buffer;
mod config;
mod error;
mod handshake;
mod message;
mod types;

pub use buffer::Buf;
pub use config::{
    CertificateTypePreferences, Config, ConfigBuilder, SignatureAlgorithmPreferences,
};
pub use error::Error;
pub use handshake::HandshakeContext;
pub use message::{recv, send, select_certificate_type, CertificateRequest};
pub use message::{
    CertificateTypeVec, SignatureAndHashAlgorithmVec, SupportedSignatureAlgorithms,
};
pub use types::{
    ClientCertificateType, HashAlgorithm, ProtocolVersion, SignatureAlgorithm,
    SignatureAndHashAlgorithm,
};
