mod certificate_authorities;
mod certificate_request;
mod certificate_types;
mod signature_algorithms;
mod util;

pub use certificate_request::{recv, send, CertificateRequest};
pub use certificate_types::{select_certificate_type, CertificateTypeVec};
pub use signature_algorithms::{SignatureAndHashAlgorithmVec, SupportedSignatureAlgorithms};
