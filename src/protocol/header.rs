//! WKB Header Format
//!
//! Layout:
//! ┌───────────────────┬──────────────────────────────────────┐
//! │ byte order (1)    │ type tag (4, u32 in that byte order) │
//! └───────────────────┴──────────────────────────────────────┘
//!
//! Every geometry carries one, top-level or nested. The encoder always
//! writes the little-endian marker; the decoder accepts both.

use std::fmt;

use crate::error::{Result, WkbError};

pub const BYTE_ORDER_SIZE: usize = 1;
pub const KIND_SIZE: usize = 4;
pub const HEADER_SIZE: usize = BYTE_ORDER_SIZE + KIND_SIZE;
pub const COUNT_SIZE: usize = 4;
pub const FLOAT_SIZE: usize = 8;
pub const POINT_SIZE: usize = 2 * FLOAT_SIZE;

/// Maximum number of nested headered levels accepted by the decoder.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Byte order marker
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian = 0,
    LittleEndian = 1,
}

impl ByteOrder {
    #[inline(always)]
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::BigEndian),
            1 => Some(Self::LittleEndian),
            _ => None,
        }
    }

    #[inline(always)]
    pub(crate) fn read_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::BigEndian => u32::from_be_bytes(bytes),
            Self::LittleEndian => u32::from_le_bytes(bytes),
        }
    }

    #[inline(always)]
    pub(crate) fn read_f64(self, bytes: [u8; 8]) -> f64 {
        match self {
            Self::BigEndian => f64::from_be_bytes(bytes),
            Self::LittleEndian => f64::from_le_bytes(bytes),
        }
    }
}

/// Geometry type tag
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl Kind {
    #[inline(always)]
    pub fn from_u32(v: u32) -> Option<Self> {
        match v {
            1 => Some(Self::Point),
            2 => Some(Self::LineString),
            3 => Some(Self::Polygon),
            4 => Some(Self::MultiPoint),
            5 => Some(Self::MultiLineString),
            6 => Some(Self::MultiPolygon),
            7 => Some(Self::GeometryCollection),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiPolygon => "MULTIPOLYGON",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
        };
        f.write_str(name)
    }
}

/// Decoded 5-byte header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub order: ByteOrder,
    pub kind: Kind,
}

impl Header {
    pub fn new(order: ByteOrder, kind: Kind) -> Self {
        Self { order, kind }
    }

    /// Parse the header at the start of `buf`.
    ///
    /// The byte order is validated before the tag, so a bad marker is
    /// always `InvalidStorage` even when the tag is also garbage.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(WkbError::InvalidStorage);
        }
        let order = ByteOrder::from_u8(buf[0]).ok_or(WkbError::InvalidStorage)?;
        let tag = order.read_u32([buf[1], buf[2], buf[3], buf[4]]);
        let kind = Kind::from_u32(tag).ok_or(WkbError::UnsupportedValue)?;
        Ok(Self { order, kind })
    }

    /// Canonical wire form: little-endian marker, little-endian tag.
    #[inline(always)]
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let marker = ByteOrder::LittleEndian as u8;
        let tag = (self.kind as u32).to_le_bytes();
        [marker, tag[0], tag[1], tag[2], tag[3]]
    }

    /// Fail with `UnsupportedValue` unless this header introduces `kind`.
    #[inline(always)]
    pub fn expect(&self, kind: Kind) -> Result<()> {
        if self.kind != kind {
            tracing::trace!(expected = %kind, found = %self.kind, "wkb tag mismatch");
            return Err(WkbError::UnsupportedValue);
        }
        Ok(())
    }
}
