//! geowkb - Well-Known Binary geometry codec
//!
//! Architecture (layered, leaf-first):
//! - `protocol`: header, bounds-checked cursor, count-prefixed sequences
//! - `geometry`: typed values for the seven WKB kinds
//!
//! ```text
//! bytes ──► Header ──► tag check ──► Sequence ──► Point / nested headered
//!   ▲                                                       │
//!   └──────────── canonical little-endian encode ◄──────────┘
//! ```
//!
//! Decoding accepts either byte order and validates every tag and count;
//! encoding always produces the little-endian form.
//!
//! ```
//! use geowkb::{Point, Wkb};
//!
//! let bytes = [
//!     0x01, 0x01, 0x00, 0x00, 0x00,
//!     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3e, 0x40,
//!     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x24, 0x40,
//! ];
//! let point = Point::from_wkb(&bytes).unwrap();
//! assert_eq!(point, Point::new(30.0, 10.0));
//! assert_eq!(point.to_wkb().unwrap(), bytes);
//! ```

pub mod error;
pub mod geometry;
pub mod protocol;

pub use error::{Result, WkbError};
pub use geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
pub use protocol::{ByteOrder, Kind, Wkb};

/// Decode one geometry of type `T` from exactly `bytes`.
pub fn decode<T: Wkb>(bytes: &[u8]) -> Result<T> {
    T::from_wkb(bytes)
}

/// Encode `value` in canonical little-endian form.
pub fn encode<T: Wkb>(value: &T) -> Result<Vec<u8>> {
    value.to_wkb()
}
