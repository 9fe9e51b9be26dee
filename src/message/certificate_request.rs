use log::{debug, trace};

use super::certificate_types::{self, CertificateTypeVec};
use super::certificate_authorities;
use super::signature_algorithms::SupportedSignatureAlgorithms;
use crate::buffer::Buf;
use crate::handshake::HandshakeContext;
use crate::types::ProtocolVersion;
use crate::{Config, Error};

/// A CertificateRequest handshake body (RFC 5246 7.4.4).
///
/// ```text
/// struct {
///     ClientCertificateType certificate_types<1..2^8-1>;
///     SignatureAndHashAlgorithm
///       supported_signature_algorithms<2^16-1>;   -- TLS 1.2 only
///     DistinguishedName certificate_authorities<0..2^16-1>;
/// } CertificateRequest;
/// ```
///
/// There is no `certificate_authorities` member: the list is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRequest {
    pub certificate_types: CertificateTypeVec,
    pub supported_signature_algorithms: SupportedSignatureAlgorithms,
}

impl CertificateRequest {
    /// The request we send, given our configuration and the negotiated version.
    pub fn from_config(config: &Config, version: ProtocolVersion) -> Self {
        CertificateRequest {
            certificate_types: config.certificate_types().iter().copied().collect(),
            supported_signature_algorithms: SupportedSignatureAlgorithms::from_local(
                version,
                config.signature_algorithms(),
            ),
        }
    }

    pub fn encode(&self, out: &mut Buf) -> Result<(), Error> {
        certificate_types::encode(&self.certificate_types, out)?;
        self.supported_signature_algorithms.encode(out)?;
        certificate_authorities::encode(out)
    }

    pub fn decode(input: &mut Buf, version: ProtocolVersion) -> Result<Self, Error> {
        let certificate_types = certificate_types::decode(input)?;
        let supported_signature_algorithms = SupportedSignatureAlgorithms::decode(input, version)?;
        certificate_authorities::decode(input)?;

        Ok(CertificateRequest {
            certificate_types,
            supported_signature_algorithms,
        })
    }
}

/// Write our CertificateRequest to the handshake I/O buffer.
///
/// Only fails if the buffer runs out of space.
pub fn send(config: &Config, ctx: &mut HandshakeContext) -> Result<(), Error> {
    let request = CertificateRequest::from_config(config, ctx.actual_protocol_version);

    let start = ctx.io.len();
    request.encode(&mut ctx.io)?;

    trace!(
        "Sent CertificateRequest ({}), {} bytes",
        ctx.actual_protocol_version,
        ctx.io.len() - start
    );
    Ok(())
}

/// Read the peer's CertificateRequest from the handshake I/O buffer.
///
/// For TLS 1.2 the signature/hash pair to use for CertificateVerify is
/// selected as soon as the peer's list is read, so an empty intersection
/// fails before the authorities field is looked at. The pair and the
/// peer's certificate types are stored in `ctx` only once the whole
/// message is accepted.
pub fn recv(config: &Config, ctx: &mut HandshakeContext) -> Result<(), Error> {
    let version = ctx.actual_protocol_version;

    let certificate_types = certificate_types::decode(&mut ctx.io)?;
    let selected = SupportedSignatureAlgorithms::decode(&mut ctx.io, version)?
        .select(config.signature_algorithms())?;
    certificate_authorities::decode(&mut ctx.io)?;

    debug!(
        "Received CertificateRequest ({}) with {} certificate types",
        version,
        certificate_types.len()
    );

    if let Some(pair) = selected {
        ctx.set_negotiated(pair);
    }
    ctx.set_peer_certificate_types(certificate_types);

    Ok(())
}
