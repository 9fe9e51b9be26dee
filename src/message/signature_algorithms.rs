use log::{debug, trace, warn};
use tinyvec::TinyVec;

use super::util::parse_all;
use crate::buffer::Buf;
use crate::types::{ProtocolVersion, SignatureAndHashAlgorithm};
use crate::Error;

pub type SignatureAndHashAlgorithmVec = TinyVec<[SignatureAndHashAlgorithm; 16]>;

/// The `supported_signature_algorithms` field of a CertificateRequest.
///
/// The field only exists in TLS 1.2. For every other version it is absent
/// from the wire entirely, not sent with length zero. The version check
/// lives in [`Self::is_present_for`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportedSignatureAlgorithms {
    Absent,
    Tls12(SignatureAndHashAlgorithmVec),
}

impl SupportedSignatureAlgorithms {
    /// Whether the field is part of the message for `version`.
    pub fn is_present_for(version: ProtocolVersion) -> bool {
        matches!(version, ProtocolVersion::TLS1_2)
    }

    /// Our own advertisement for `version`.
    pub fn from_local(version: ProtocolVersion, local: &[SignatureAndHashAlgorithm]) -> Self {
        if Self::is_present_for(version) {
            Self::Tls12(local.iter().copied().collect())
        } else {
            Self::Absent
        }
    }

    pub fn encode(&self, out: &mut Buf) -> Result<(), Error> {
        let Self::Tls12(algorithms) = self else {
            return Ok(());
        };

        // Two bytes per pair, hash then signature.
        let len = algorithms
            .len()
            .checked_mul(2)
            .and_then(|n| u16::try_from(n).ok())
            .ok_or(Error::MalformedMessage("too many signature algorithms"))?;

        out.write_u16(len)?;
        for alg in algorithms.iter() {
            out.write_u16(alg.as_u16())?;
        }

        trace!("Wrote {} signature algorithms", algorithms.len());
        Ok(())
    }

    /// Read the field if `version` has it. Otherwise nothing is consumed.
    pub fn decode(input: &mut Buf, version: ProtocolVersion) -> Result<Self, Error> {
        if !Self::is_present_for(version) {
            return Ok(Self::Absent);
        }

        let len = input.read_u16()? as usize;
        if len % 2 != 0 {
            return Err(Error::MalformedMessage("odd signature algorithm list length"));
        }

        let bytes = input.read_bytes(len)?;
        let algorithms = parse_all(
            bytes,
            SignatureAndHashAlgorithm::parse,
            "unknown signature algorithm",
        )?;

        trace!("Read {} signature algorithms", algorithms.len());
        Ok(Self::Tls12(algorithms))
    }

    /// Pick the pair to sign with.
    ///
    /// Local order is authoritative: the first entry of `local` that the peer
    /// also advertised. `Ok(None)` when the field is absent.
    pub fn select(
        &self,
        local: &[SignatureAndHashAlgorithm],
    ) -> Result<Option<SignatureAndHashAlgorithm>, Error> {
        let Self::Tls12(peer) = self else {
            return Ok(None);
        };

        match local.iter().find(|alg| peer.contains(*alg)) {
            Some(alg) => {
                debug!(
                    "Selected signature algorithm {:?} with hash {:?}",
                    alg.signature, alg.hash
                );
                Ok(Some(*alg))
            }
            None => {
                warn!("No common signature algorithm, peer offered: {:?}", peer);
                Err(Error::NoCommonAlgorithm)
            }
        }
    }
}
