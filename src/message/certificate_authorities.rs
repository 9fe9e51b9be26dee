//! The `certificate_authorities` field.
//!
//! We never send a list of acceptable issuers, and refuse to receive one.
//! Distinguished names are not parsed; a non-empty list fails the
//! handshake.

use log::warn;

use crate::buffer::Buf;
use crate::Error;

/// Write an empty `certificate_authorities<0..2^16-1>`.
///
/// RFC 5246 7.4.4: with an empty list the client may send any certificate
/// of an appropriate type.
pub fn encode(out: &mut Buf) -> Result<(), Error> {
    out.write_u16(0)
}

/// Read the length and require it to be zero.
///
/// On a non-zero length nothing past the length field is consumed.
pub fn decode(input: &mut Buf) -> Result<(), Error> {
    let len = input.read_u16()?;

    if len != 0 {
        warn!("Refusing certificate_authorities of {} bytes", len);
        return Err(Error::UnsupportedFeature("certificate authorities"));
    }

    Ok(())
}
