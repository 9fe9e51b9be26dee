use crate::buffer::Buf;
use crate::message::CertificateTypeVec;
use crate::types::{
    ClientCertificateType, HashAlgorithm, ProtocolVersion, SignatureAlgorithm,
    SignatureAndHashAlgorithm,
};

/// Per-connection handshake state touched by the CertificateRequest codec.
///
/// Owned by the connection driving the handshake. The negotiated fields
/// are written by [`recv`](crate::recv) only, and only once the whole
/// message has been accepted. Resetting them between handshakes is up to
/// the owner.
#[derive(Debug)]
pub struct HandshakeContext {
    /// Version agreed in ServerHello.
    pub actual_protocol_version: ProtocolVersion,

    /// Handshake message I/O.
    pub io: Buf,

    negotiated_hash_algorithm: Option<HashAlgorithm>,
    negotiated_signature_algorithm: Option<SignatureAlgorithm>,
    peer_certificate_types: Option<CertificateTypeVec>,
}

impl HandshakeContext {
    pub fn new(actual_protocol_version: ProtocolVersion, io: Buf) -> Self {
        HandshakeContext {
            actual_protocol_version,
            io,
            negotiated_hash_algorithm: None,
            negotiated_signature_algorithm: None,
            peer_certificate_types: None,
        }
    }

    /// Hash to use for the client CertificateVerify.
    ///
    /// `None` before a TLS 1.2 CertificateRequest has been received.
    pub fn negotiated_hash_algorithm(&self) -> Option<HashAlgorithm> {
        self.negotiated_hash_algorithm
    }

    /// Signature algorithm to use for the client CertificateVerify.
    pub fn negotiated_signature_algorithm(&self) -> Option<SignatureAlgorithm> {
        self.negotiated_signature_algorithm
    }

    /// Both negotiated halves as one pair.
    pub fn negotiated_signature_and_hash(&self) -> Option<SignatureAndHashAlgorithm> {
        match (
            self.negotiated_hash_algorithm,
            self.negotiated_signature_algorithm,
        ) {
            (Some(hash), Some(signature)) => Some(SignatureAndHashAlgorithm::new(hash, signature)),
            _ => None,
        }
    }

    /// Certificate types the server will accept, in the server's order.
    ///
    /// Input for picking which local certificate to send.
    pub fn peer_certificate_types(&self) -> Option<&[ClientCertificateType]> {
        self.peer_certificate_types.as_deref()
    }

    pub(crate) fn set_negotiated(&mut self, pair: SignatureAndHashAlgorithm) {
        self.negotiated_hash_algorithm = Some(pair.hash);
        self.negotiated_signature_algorithm = Some(pair.signature);
    }

    pub(crate) fn set_peer_certificate_types(&mut self, types: CertificateTypeVec) {
        self.peer_certificate_types = Some(types);
    }
}
