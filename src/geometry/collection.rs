//! Heterogeneous geometries.
//!
//! `Geometry` is the closed set of the seven WKB kinds. Decoding one reads
//! the element's own header and dispatches on its tag; this is the only
//! place where the wire decides which type is built.

use serde::{Deserialize, Serialize};

use super::line::LineString;
use super::multi::{MultiLineString, MultiPoint, MultiPolygon};
use super::point::Point;
use super::polygon::Polygon;
use crate::error::Result;
use crate::protocol::{
    decode_sequence, encode_sequence, sequence_len, Cardinality, Decoder, ElementCodec, Encoder,
    Header, Kind, Payload, Wkb, COUNT_SIZE, HEADER_SIZE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection(pub Vec<Geometry>);

super::sequence_newtype!(GeometryCollection, Geometry);

impl Geometry {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Point(_) => Kind::Point,
            Self::LineString(_) => Kind::LineString,
            Self::Polygon(_) => Kind::Polygon,
            Self::MultiPoint(_) => Kind::MultiPoint,
            Self::MultiLineString(_) => Kind::MultiLineString,
            Self::MultiPolygon(_) => Kind::MultiPolygon,
            Self::GeometryCollection(_) => Kind::GeometryCollection,
        }
    }

    /// Decode a geometry of any kind occupying the whole of `buf`.
    pub fn from_wkb(buf: &[u8]) -> Result<Self> {
        let mut decoder = Decoder::new(buf);
        let value = Tagged::decode(&mut decoder).and_then(|g| decoder.finish().map(|_| g));

        if let Err(e) = &value {
            tracing::trace!(len = buf.len(), error = %e, "wkb geometry decode failed");
        }
        value
    }

    pub fn to_wkb(&self) -> Result<Vec<u8>> {
        let mut encoder = Encoder::with_capacity(self.encoded_len());
        Tagged::encode(self, &mut encoder)?;
        Ok(encoder.into_bytes())
    }

    pub fn encoded_len(&self) -> usize {
        Tagged::encoded_len(self)
    }

    fn decode_payload(header: Header, decoder: &mut Decoder<'_>) -> Result<Self> {
        Ok(match header.kind {
            Kind::Point => Self::Point(Point::decode_payload(decoder)?),
            Kind::LineString => Self::LineString(LineString::decode_payload(decoder)?),
            Kind::Polygon => Self::Polygon(Polygon::decode_payload(decoder)?),
            Kind::MultiPoint => Self::MultiPoint(MultiPoint::decode_payload(decoder)?),
            Kind::MultiLineString => {
                Self::MultiLineString(MultiLineString::decode_payload(decoder)?)
            }
            Kind::MultiPolygon => Self::MultiPolygon(MultiPolygon::decode_payload(decoder)?),
            Kind::GeometryCollection => {
                Self::GeometryCollection(GeometryCollection::decode_payload(decoder)?)
            }
        })
    }

    fn encode_payload(&self, encoder: &mut Encoder) -> Result<()> {
        match self {
            Self::Point(g) => g.encode_payload(encoder),
            Self::LineString(g) => g.encode_payload(encoder),
            Self::Polygon(g) => g.encode_payload(encoder),
            Self::MultiPoint(g) => g.encode_payload(encoder),
            Self::MultiLineString(g) => g.encode_payload(encoder),
            Self::MultiPolygon(g) => g.encode_payload(encoder),
            Self::GeometryCollection(g) => g.encode_payload(encoder),
        }
    }

    fn payload_len(&self) -> usize {
        match self {
            Self::Point(g) => g.payload_len(),
            Self::LineString(g) => g.payload_len(),
            Self::Polygon(g) => g.payload_len(),
            Self::MultiPoint(g) => g.payload_len(),
            Self::MultiLineString(g) => g.payload_len(),
            Self::MultiPolygon(g) => g.payload_len(),
            Self::GeometryCollection(g) => g.payload_len(),
        }
    }
}

/// Element strategy for collections: the member's header picks its type.
pub struct Tagged;

impl ElementCodec for Tagged {
    type Item = Geometry;
    const MIN_SIZE: usize = HEADER_SIZE;

    fn decode(decoder: &mut Decoder<'_>) -> Result<Geometry> {
        decoder.headered(|d, header| Geometry::decode_payload(header, d))
    }

    fn encode(item: &Geometry, encoder: &mut Encoder) -> Result<()> {
        encoder.write_header(item.kind());
        item.encode_payload(encoder)
    }

    fn encoded_len(item: &Geometry) -> usize {
        HEADER_SIZE + item.payload_len()
    }
}

impl Payload for GeometryCollection {
    const MIN_SIZE: usize = COUNT_SIZE;

    fn decode_payload(decoder: &mut Decoder<'_>) -> Result<Self> {
        decode_sequence::<Tagged>(decoder, Cardinality::NonEmpty).map(Self)
    }

    fn encode_payload(&self, encoder: &mut Encoder) -> Result<()> {
        encode_sequence::<Tagged>(&self.0, Cardinality::NonEmpty, encoder)
    }

    fn payload_len(&self) -> usize {
        sequence_len::<Tagged>(&self.0)
    }
}

impl Wkb for GeometryCollection {
    const KIND: Kind = Kind::GeometryCollection;
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(g: $variant) -> Self {
                    Self::$variant(g)
                }
            }
        )*
    };
}

impl_from_variant!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);
