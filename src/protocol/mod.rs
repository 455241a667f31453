//! Protocol Layer: WKB wire format
//!
//! - Fixed 5-byte header: byte order marker + type tag
//! - Count-prefixed sequences of bare or headered elements
//! - Decode accepts both byte orders, encode is always little-endian

mod codec;
mod encoder;
mod header;
mod sequence;

pub use codec::{Payload, Wkb};
pub use encoder::{Decoder, Encoder};
pub use header::{
    ByteOrder, Header, Kind, BYTE_ORDER_SIZE, COUNT_SIZE, FLOAT_SIZE, HEADER_SIZE, KIND_SIZE,
    MAX_NESTING_DEPTH, POINT_SIZE,
};
pub use sequence::{
    decode_sequence, encode_sequence, sequence_len, Bare, Cardinality, ElementCodec, Headered,
};
