use tinyvec::ArrayVec;

use crate::types::{ClientCertificateType, SignatureAndHashAlgorithm};
use crate::Error;

/// Local certificate type preference list, most preferred first.
///
/// Entries are unique and the capacity is far below 255, so the list
/// always fits the one byte length prefix on the wire.
pub type CertificateTypePreferences = ArrayVec<[ClientCertificateType; 16]>;

/// Local signature/hash preference list, most preferred first.
pub type SignatureAlgorithmPreferences = ArrayVec<[SignatureAndHashAlgorithm; 32]>;

/// CertificateRequest configuration.
///
/// Built once and then only read. Both `send` and `recv` take it by
/// reference, so one `Config` (typically behind an `Arc`) can serve any
/// number of connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    certificate_types: CertificateTypePreferences,
    signature_algorithms: SignatureAlgorithmPreferences,
}

impl Config {
    /// Create a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder {
            certificate_types: vec![
                ClientCertificateType::RSA_SIGN,
                ClientCertificateType::ECDSA_SIGN,
            ],
            signature_algorithms: SignatureAndHashAlgorithm::supported().to_vec(),
        }
    }

    /// Certificate types we advertise, and accept, in preference order.
    #[inline(always)]
    pub fn certificate_types(&self) -> &[ClientCertificateType] {
        &self.certificate_types
    }

    /// Signature/hash pairs we advertise, and select from, in preference order.
    ///
    /// Only used when the negotiated version is TLS 1.2.
    #[inline(always)]
    pub fn signature_algorithms(&self) -> &[SignatureAndHashAlgorithm] {
        &self.signature_algorithms
    }
}

impl Default for Config {
    fn default() -> Self {
        // The builder defaults are non-empty and unique.
        Config::builder()
            .build()
            .expect("default config is valid")
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    certificate_types: Vec<ClientCertificateType>,
    signature_algorithms: Vec<SignatureAndHashAlgorithm>,
}

impl ConfigBuilder {
    /// Set the certificate type preference list.
    ///
    /// Defaults to `[RSA_SIGN, ECDSA_SIGN]`.
    pub fn certificate_types(
        mut self,
        types: impl IntoIterator<Item = ClientCertificateType>,
    ) -> Self {
        self.certificate_types = types.into_iter().collect();
        self
    }

    /// Set the signature/hash preference list.
    ///
    /// Defaults to [`SignatureAndHashAlgorithm::supported()`].
    pub fn signature_algorithms(
        mut self,
        algorithms: impl IntoIterator<Item = SignatureAndHashAlgorithm>,
    ) -> Self {
        self.signature_algorithms = algorithms.into_iter().collect();
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<Config, Error> {
        let certificate_types = unique_list(&self.certificate_types, "certificate type list")?;
        let signature_algorithms =
            unique_list(&self.signature_algorithms, "signature algorithm list")?;

        Ok(Config {
            certificate_types,
            signature_algorithms,
        })
    }
}

fn unique_list<A>(items: &[A::Item], what: &'static str) -> Result<ArrayVec<A>, Error>
where
    A: tinyvec::Array,
    A::Item: Copy + PartialEq,
{
    if items.is_empty() {
        return Err(Error::InvalidConfig(what));
    }

    let mut out: ArrayVec<A> = ArrayVec::new();
    for item in items {
        if out.contains(item) {
            return Err(Error::InvalidConfig(what));
        }
        if out.try_push(*item).is_some() {
            return Err(Error::InvalidConfig(what));
        }
    }
    Ok(out)
}
