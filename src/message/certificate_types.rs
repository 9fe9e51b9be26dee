use log::trace;
use tinyvec::TinyVec;

use super::util::parse_all;
use crate::buffer::Buf;
use crate::types::ClientCertificateType;
use crate::Error;

/// Certificate types advertised by the peer, in the peer's order.
pub type CertificateTypeVec = TinyVec<[ClientCertificateType; 8]>;

/// Write `certificate_types<1..2^8-1>`.
///
/// A list the grammar cannot carry is refused before anything is written.
pub fn encode(types: &[ClientCertificateType], out: &mut Buf) -> Result<(), Error> {
    if types.is_empty() {
        return Err(Error::MalformedMessage("empty certificate type list"));
    }
    let len = u8::try_from(types.len())
        .map_err(|_| Error::MalformedMessage("too many certificate types"))?;

    out.write_u8(len)?;
    for t in types {
        out.write_u8(t.as_u8())?;
    }

    trace!("Wrote {} certificate types", types.len());
    Ok(())
}

/// Read `certificate_types<1..2^8-1>`, rejecting codes we do not know.
pub fn decode(input: &mut Buf) -> Result<CertificateTypeVec, Error> {
    let len = input.read_u8()? as usize;
    if len == 0 {
        return Err(Error::MalformedMessage("empty certificate type list"));
    }

    let bytes = input.read_bytes(len)?;
    let types = parse_all(bytes, ClientCertificateType::parse, "unknown certificate type")?;

    trace!("Read {} certificate types", types.len());
    Ok(types)
}

/// Pick the certificate type to answer with.
///
/// The peer's order wins: the first advertised type that we also have a
/// certificate for is chosen.
pub fn select_certificate_type(
    peer: &[ClientCertificateType],
    available: &[ClientCertificateType],
) -> Option<ClientCertificateType> {
    peer.iter().find(|t| available.contains(*t)).copied()
}
