use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::protocol::{Decoder, Encoder, Kind, Payload, Wkb, POINT_SIZE};

/// A single (x, y) coordinate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl Payload for Point {
    const MIN_SIZE: usize = POINT_SIZE;

    #[inline(always)]
    fn decode_payload(decoder: &mut Decoder<'_>) -> Result<Self> {
        let x = decoder.read_f64()?;
        let y = decoder.read_f64()?;
        Ok(Self { x, y })
    }

    #[inline(always)]
    fn encode_payload(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_f64(self.x);
        encoder.write_f64(self.y);
        Ok(())
    }

    #[inline(always)]
    fn payload_len(&self) -> usize {
        POINT_SIZE
    }
}

impl Wkb for Point {
    const KIND: Kind = Kind::Point;
}
