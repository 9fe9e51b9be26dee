//! Bounds-checked cursor over a fixed-capacity byte buffer.
//!
//! [`Buf`] is the handshake I/O buffer. Writes append to the end and fail
//! with [`Error::BufferFull`] once the capacity is reached. Reads move a
//! forward-only position and fail with [`Error::TruncatedInput`] when fewer
//! bytes remain than requested. All integers are big-endian.

use std::fmt;
use std::ops::Deref;

use nom::bytes::complete::take;
use nom::number::complete::{be_u16, be_u8};
use nom::IResult;

use crate::Error;

/// Fixed-capacity handshake buffer with a read cursor.
pub struct Buf {
    data: Vec<u8>,
    capacity: usize,
    read_pos: usize,
}

impl Buf {
    /// Create an empty buffer that accepts at most `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Buf {
            data: Vec::with_capacity(capacity),
            capacity,
            read_pos: 0,
        }
    }

    /// Create a full buffer from a slice, positioned at the first byte.
    pub fn from_slice(data: &[u8]) -> Self {
        Buf {
            data: data.to_vec(),
            capacity: data.len(),
            read_pos: 0,
        }
    }

    /// Number of bytes written.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Max number of bytes this buffer holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Offset of the next byte to be read.
    pub fn read_position(&self) -> usize {
        self.read_pos
    }

    /// Bytes written but not yet read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.read_pos
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), Error> {
        self.write_bytes(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), Error> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Append bytes. Either all of `bytes` is written or nothing is.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if self.data.len() + bytes.len() > self.capacity {
            return Err(Error::BufferFull);
        }
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        self.read_with(|i| be_u8(i))
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        self.read_with(|i| be_u16(i))
    }

    /// Read exactly `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&[u8], Error> {
        let start = self.read_pos;
        self.read_with(|i| take(n)(i).map(|(rest, _)| (rest, ())))?;
        Ok(&self.data[start..start + n])
    }

    fn read_with<O, F>(&mut self, parser: F) -> Result<O, Error>
    where
        F: FnOnce(&[u8]) -> IResult<&[u8], O>,
    {
        let input = &self.data[self.read_pos..];
        let (rest, value) = parser(input)?;
        self.read_pos += input.len() - rest.len();
        Ok(value)
    }
}

impl Deref for Buf {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl AsRef<[u8]> for Buf {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Buf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buf")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field("read_pos", &self.read_pos)
            .finish()
    }
}
