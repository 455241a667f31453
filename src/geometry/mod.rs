//! Geometry values and their WKB payloads.
//!
//! Every type here is a plain owned value. Decoding builds a fresh one,
//! encoding borrows it; nothing is shared between calls.

mod collection;
mod interop;
mod line;
mod multi;
mod point;
mod polygon;

pub use collection::{Geometry, GeometryCollection, Tagged};
pub use line::{LineString, LinearRing};
pub use multi::{MultiLineString, MultiPoint, MultiPolygon};
pub use point::Point;
pub use polygon::Polygon;

/// Slice-like access for the `Vec` newtypes.
macro_rules! sequence_newtype {
    ($name:ident, $item:ty) => {
        impl std::ops::Deref for $name {
            type Target = [$item];

            fn deref(&self) -> &[$item] {
                &self.0
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl FromIterator<$item> for $name {
            fn from_iter<I: IntoIterator<Item = $item>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

pub(crate) use sequence_newtype;
