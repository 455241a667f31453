//! Sequence Codec
//!
//! Layout:
//! ┌───────────────┬───────────┬───────────┬─────┬───────────┐
//! │ count (4, u32)│ element 1 │ element 2 │ ... │ element N │
//! └───────────────┴───────────┴───────────┴─────┴───────────┘
//!
//! Elements are either bare payloads (points of a line string, rings of a
//! polygon) or headered geometries (members of the multi-* types). The
//! element shape is a strategy type; count validation happens here only.

use std::marker::PhantomData;

use super::codec::{Payload, Wkb};
use super::encoder::{Decoder, Encoder};
use super::header::{COUNT_SIZE, HEADER_SIZE};
use crate::error::{Result, WkbError};

/// Minimum number of elements a sequence must declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    AllowEmpty,
    NonEmpty,
}

/// How a single element is laid out on the wire.
pub trait ElementCodec {
    type Item;

    /// Lower bound on the encoded size of one element.
    const MIN_SIZE: usize;

    fn decode(decoder: &mut Decoder<'_>) -> Result<Self::Item>;
    fn encode(item: &Self::Item, encoder: &mut Encoder) -> Result<()>;
    fn encoded_len(item: &Self::Item) -> usize;
}

/// Payload only, in the enclosing byte order.
pub struct Bare<T>(PhantomData<T>);

impl<T: Payload> ElementCodec for Bare<T> {
    type Item = T;
    const MIN_SIZE: usize = T::MIN_SIZE;

    #[inline(always)]
    fn decode(decoder: &mut Decoder<'_>) -> Result<T> {
        T::decode_payload(decoder)
    }

    #[inline(always)]
    fn encode(item: &T, encoder: &mut Encoder) -> Result<()> {
        item.encode_payload(encoder)
    }

    #[inline(always)]
    fn encoded_len(item: &T) -> usize {
        item.payload_len()
    }
}

/// Header plus payload; the inner tag must be `T::KIND`.
pub struct Headered<T>(PhantomData<T>);

impl<T: Wkb> ElementCodec for Headered<T> {
    type Item = T;
    // Only the header counts, so a wrong inner tag is reported ahead of
    // a truncated inner payload.
    const MIN_SIZE: usize = HEADER_SIZE;

    fn decode(decoder: &mut Decoder<'_>) -> Result<T> {
        decoder.headered(|d, header| {
            header.expect(T::KIND)?;
            T::decode_payload(d)
        })
    }

    fn encode(item: &T, encoder: &mut Encoder) -> Result<()> {
        item.encode_headered(encoder)
    }

    fn encoded_len(item: &T) -> usize {
        item.encoded_len()
    }
}

pub fn decode_sequence<E: ElementCodec>(
    decoder: &mut Decoder<'_>,
    cardinality: Cardinality,
) -> Result<Vec<E::Item>> {
    let count = decoder.read_count()?;

    if count == 0 && cardinality == Cardinality::NonEmpty {
        tracing::trace!(
            pos = decoder.position(),
            "wkb empty sequence where one is required"
        );
        return Err(WkbError::InvalidStorage);
    }

    // Reject counts the buffer cannot possibly hold before allocating.
    if count > decoder.remaining() / E::MIN_SIZE.max(1) {
        tracing::trace!(
            count,
            remaining = decoder.remaining(),
            "wkb sequence count exceeds buffer"
        );
        return Err(WkbError::InvalidStorage);
    }

    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(E::decode(decoder)?);
    }
    Ok(items)
}

pub fn encode_sequence<E: ElementCodec>(
    items: &[E::Item],
    cardinality: Cardinality,
    encoder: &mut Encoder,
) -> Result<()> {
    if items.is_empty() && cardinality == Cardinality::NonEmpty {
        return Err(WkbError::InvalidStorage);
    }

    encoder.write_count(items.len())?;
    for item in items {
        E::encode(item, encoder)?;
    }
    Ok(())
}

pub fn sequence_len<E: ElementCodec>(items: &[E::Item]) -> usize {
    COUNT_SIZE + items.iter().map(E::encoded_len).sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LineString, Point};

    fn le_points(count: u32, points: &[(f64, f64)]) -> Vec<u8> {
        let mut buf = count.to_le_bytes().to_vec();
        for (x, y) in points {
            buf.extend_from_slice(&x.to_le_bytes());
            buf.extend_from_slice(&y.to_le_bytes());
        }
        buf
    }

    #[test]
    fn test_decode_bare_points() {
        let buf = le_points(2, &[(1.0, 2.0), (3.0, 4.0)]);
        let mut decoder = Decoder::new(&buf);
        let points = decode_sequence::<Bare<Point>>(&mut decoder, Cardinality::NonEmpty).unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(decoder.remaining(), 0);
    }

    #[test]
    fn test_decode_count_exceeds_buffer() {
        let buf = le_points(3, &[(1.0, 2.0), (3.0, 4.0)]);
        let mut decoder = Decoder::new(&buf);
        assert_eq!(
            decode_sequence::<Bare<Point>>(&mut decoder, Cardinality::AllowEmpty),
            Err(WkbError::InvalidStorage)
        );

        // Huge counts are rejected without attempting the allocation
        let buf = le_points(u32::MAX, &[]);
        let mut decoder = Decoder::new(&buf);
        assert_eq!(
            decode_sequence::<Headered<LineString>>(&mut decoder, Cardinality::AllowEmpty),
            Err(WkbError::InvalidStorage)
        );
    }

    #[test]
    fn test_decode_missing_count() {
        let mut decoder = Decoder::new(&[0x01, 0x00]);
        assert_eq!(
            decode_sequence::<Bare<Point>>(&mut decoder, Cardinality::AllowEmpty),
            Err(WkbError::InvalidStorage)
        );
    }

    #[test]
    fn test_cardinality() {
        let buf = le_points(0, &[]);

        let mut decoder = Decoder::new(&buf);
        let points = decode_sequence::<Bare<Point>>(&mut decoder, Cardinality::AllowEmpty).unwrap();
        assert!(points.is_empty());

        let mut decoder = Decoder::new(&buf);
        assert_eq!(
            decode_sequence::<Bare<Point>>(&mut decoder, Cardinality::NonEmpty),
            Err(WkbError::InvalidStorage)
        );

        let mut encoder = Encoder::new();
        assert_eq!(
            encode_sequence::<Bare<Point>>(&[], Cardinality::NonEmpty, &mut encoder),
            Err(WkbError::InvalidStorage)
        );
        let result = encode_sequence::<Bare<Point>>(&[], Cardinality::AllowEmpty, &mut encoder);
        assert!(result.is_ok());
        assert_eq!(encoder.as_bytes(), &[0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_headered_element_tag_checked() {
        // One element announced, carrying a Point tag where a LineString is expected
        let mut buf = 1u32.to_le_bytes().to_vec();
        buf.extend_from_slice(&[0x01, 0x01, 0x00, 0x00, 0x00]);
        let mut decoder = Decoder::new(&buf);
        assert_eq!(
            decode_sequence::<Headered<LineString>>(&mut decoder, Cardinality::NonEmpty),
            Err(WkbError::UnsupportedValue)
        );
    }

    #[test]
    fn test_encode_and_len() {
        let points = vec![Point::new(30.0, 10.0), Point::new(10.0, 30.0)];
        let mut encoder = Encoder::new();
        encode_sequence::<Bare<Point>>(&points, Cardinality::NonEmpty, &mut encoder).unwrap();
        let expected = le_points(2, &[(30.0, 10.0), (10.0, 30.0)]);
        assert_eq!(encoder.as_bytes(), expected.as_slice());
        assert_eq!(sequence_len::<Bare<Point>>(&points), encoder.len());
    }
}
