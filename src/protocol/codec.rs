//! Core codec traits.
//!
//! `Payload` is the body of a value without its header: points inside a
//! line string, rings inside a polygon. `Wkb` adds the tag, which makes a
//! value decodable and encodable on its own.

use super::encoder::{Decoder, Encoder};
use super::header::{Kind, HEADER_SIZE};
use crate::error::Result;

pub trait Payload: Sized {
    /// Smallest possible encoded payload, used to reject impossible counts
    /// before allocating.
    const MIN_SIZE: usize;

    fn decode_payload(decoder: &mut Decoder<'_>) -> Result<Self>;
    fn encode_payload(&self, encoder: &mut Encoder) -> Result<()>;
    fn payload_len(&self) -> usize;
}

/// A geometry that carries its own header on the wire.
pub trait Wkb: Payload {
    const KIND: Kind;

    /// Decode one geometry occupying the whole of `buf`.
    fn from_wkb(buf: &[u8]) -> Result<Self> {
        let mut decoder = Decoder::new(buf);
        let value = decoder
            .headered(|d, header| {
                header.expect(Self::KIND)?;
                Self::decode_payload(d)
            })
            .and_then(|value| decoder.finish().map(|_| value));

        if let Err(e) = &value {
            tracing::trace!(kind = %Self::KIND, len = buf.len(), error = %e, "wkb decode failed");
        }
        value
    }

    /// Canonical little-endian encoding.
    fn to_wkb(&self) -> Result<Vec<u8>> {
        let mut encoder = Encoder::with_capacity(self.encoded_len());
        self.encode_headered(&mut encoder)?;
        Ok(encoder.into_bytes())
    }

    fn encode_headered(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_header(Self::KIND);
        self.encode_payload(encoder)
    }

    /// Exact size of `to_wkb` output.
    fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.payload_len()
    }
}
