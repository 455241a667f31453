//! Bounds-checked Encoder/Decoder
//!
//! The decoder is a read cursor over the caller's slice that carries the
//! byte order of the innermost header it has entered. The encoder appends
//! the canonical little-endian form to a growable buffer.

use super::header::{
    ByteOrder, Header, Kind, COUNT_SIZE, FLOAT_SIZE, HEADER_SIZE, MAX_NESTING_DEPTH,
};
use crate::error::{Result, WkbError};

/// Canonical little-endian writer
#[derive(Debug, Default)]
pub struct Encoder {
    buffer: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder with room for `capacity` bytes before it reallocates
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Reset encoder for reuse, keeping the allocation
    #[inline(always)]
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    #[inline(always)]
    pub fn write_header(&mut self, kind: Kind) {
        let header = Header::new(ByteOrder::LittleEndian, kind);
        self.buffer.extend_from_slice(&header.encode());
    }

    /// Write a sequence count; more than `u32::MAX` elements cannot be
    /// represented on the wire.
    #[inline(always)]
    pub fn write_count(&mut self, count: usize) -> Result<()> {
        let count = u32::try_from(count).map_err(|_| WkbError::InvalidStorage)?;
        self.buffer.extend_from_slice(&count.to_le_bytes());
        Ok(())
    }

    #[inline(always)]
    pub fn write_f64(&mut self, v: f64) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Read cursor
///
/// Counts and coordinates are read in the order of the innermost header
/// entered through [`Decoder::headered`]. Before any header has been
/// entered that order is little-endian.
pub struct Decoder<'a> {
    buffer: &'a [u8],
    read_pos: usize,
    order: ByteOrder,
    depth: usize,
}

impl<'a> Decoder<'a> {
    /// Cursor at the start of `buffer`, outside any header.
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            read_pos: 0,
            order: ByteOrder::LittleEndian,
            depth: 0,
        }
    }

    #[inline(always)]
    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let end = self.read_pos + N;
        let bytes = self
            .buffer
            .get(self.read_pos..end)
            .ok_or(WkbError::InvalidStorage)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.read_pos = end;
        Ok(out)
    }

    /// Read a header without changing the current byte order.
    pub fn read_header(&mut self) -> Result<Header> {
        let header = Header::decode(&self.buffer[self.read_pos..])?;
        self.read_pos += HEADER_SIZE;
        Ok(header)
    }

    /// Read a header and decode the payload that follows it in that
    /// header's byte order, restoring the enclosing order afterwards.
    pub fn headered<T>(&mut self, body: impl FnOnce(&mut Self, Header) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            tracing::trace!(depth = self.depth, "wkb nesting limit exceeded");
            return Err(WkbError::InvalidStorage);
        }
        let header = self.read_header()?;
        let outer = self.order;
        self.order = header.order;
        self.depth += 1;
        let result = body(self, header);
        self.depth -= 1;
        self.order = outer;
        result
    }

    /// Read a `u32` count in the current byte order. Outside any header
    /// this is little-endian.
    #[inline(always)]
    pub fn read_count(&mut self) -> Result<usize> {
        let bytes = self.take::<COUNT_SIZE>()?;
        Ok(self.order.read_u32(bytes) as usize)
    }

    /// Read an IEEE-754 double in the current byte order.
    #[inline(always)]
    pub fn read_f64(&mut self) -> Result<f64> {
        let bytes = self.take::<FLOAT_SIZE>()?;
        Ok(self.order.read_f64(bytes))
    }

    /// Byte order of the innermost header entered
    #[inline(always)]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.read_pos
    }

    /// Remaining bytes
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.read_pos)
    }

    /// Top-level decodes must consume the whole slice.
    pub fn finish(&self) -> Result<()> {
        if self.remaining() != 0 {
            tracing::trace!(trailing = self.remaining(), "wkb trailing bytes");
            return Err(WkbError::InvalidStorage);
        }
        Ok(())
    }
}
