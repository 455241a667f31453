use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::error::Result;
use crate::protocol::{
    decode_sequence, encode_sequence, sequence_len, Bare, Cardinality, Decoder, Encoder, Kind,
    Payload, Wkb, COUNT_SIZE,
};

/// Ordered path of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString(pub Vec<Point>);

/// Closed boundary of a polygon. Closure is conventional, not enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearRing(pub Vec<Point>);

super::sequence_newtype!(LineString, Point);
super::sequence_newtype!(LinearRing, Point);

impl Payload for LineString {
    const MIN_SIZE: usize = COUNT_SIZE;

    fn decode_payload(decoder: &mut Decoder<'_>) -> Result<Self> {
        decode_sequence::<Bare<Point>>(decoder, Cardinality::AllowEmpty).map(Self)
    }

    fn encode_payload(&self, encoder: &mut Encoder) -> Result<()> {
        encode_sequence::<Bare<Point>>(&self.0, Cardinality::AllowEmpty, encoder)
    }

    fn payload_len(&self) -> usize {
        sequence_len::<Bare<Point>>(&self.0)
    }
}

impl Wkb for LineString {
    const KIND: Kind = Kind::LineString;
}

// A ring has no header of its own; it only ever appears inside a polygon.
impl Payload for LinearRing {
    const MIN_SIZE: usize = COUNT_SIZE;

    fn decode_payload(decoder: &mut Decoder<'_>) -> Result<Self> {
        decode_sequence::<Bare<Point>>(decoder, Cardinality::AllowEmpty).map(Self)
    }

    fn encode_payload(&self, encoder: &mut Encoder) -> Result<()> {
        encode_sequence::<Bare<Point>>(&self.0, Cardinality::AllowEmpty, encoder)
    }

    fn payload_len(&self) -> usize {
        sequence_len::<Bare<Point>>(&self.0)
    }
}

impl From<LinearRing> for LineString {
    fn from(ring: LinearRing) -> Self {
        Self(ring.0)
    }
}

impl From<LineString> for LinearRing {
    fn from(line: LineString) -> Self {
        Self(line.0)
    }
}
