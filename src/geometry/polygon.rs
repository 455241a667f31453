use serde::{Deserialize, Serialize};

use super::line::LinearRing;
use crate::error::Result;
use crate::protocol::{
    decode_sequence, encode_sequence, sequence_len, Bare, Cardinality, Decoder, Encoder, Kind,
    Payload, Wkb, COUNT_SIZE,
};

/// Rings of a polygon: the first is the exterior, the rest are holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon(pub Vec<LinearRing>);

super::sequence_newtype!(Polygon, LinearRing);

impl Polygon {
    pub fn exterior(&self) -> Option<&LinearRing> {
        self.0.first()
    }

    pub fn interiors(&self) -> &[LinearRing] {
        self.0.get(1..).unwrap_or(&[])
    }
}

impl Payload for Polygon {
    const MIN_SIZE: usize = COUNT_SIZE;

    fn decode_payload(decoder: &mut Decoder<'_>) -> Result<Self> {
        decode_sequence::<Bare<LinearRing>>(decoder, Cardinality::NonEmpty).map(Self)
    }

    fn encode_payload(&self, encoder: &mut Encoder) -> Result<()> {
        encode_sequence::<Bare<LinearRing>>(&self.0, Cardinality::NonEmpty, encoder)
    }

    fn payload_len(&self) -> usize {
        sequence_len::<Bare<LinearRing>>(&self.0)
    }
}

impl Wkb for Polygon {
    const KIND: Kind = Kind::Polygon;
}
