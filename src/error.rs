//! Error taxonomy for WKB decode/encode.
//!
//! Deliberately coarse: callers only need to tell "the bytes are broken"
//! apart from "the bytes describe a geometry we were not asked for".

use thiserror::Error;

/// WKB codec errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WkbError {
    /// Structurally malformed buffer: too short for a header or payload,
    /// a count larger than the remaining bytes, an empty required sequence,
    /// an invalid byte-order marker, trailing bytes or excessive nesting.
    #[error("Invalid storage type or size")]
    InvalidStorage,

    /// Well-formed buffer whose type tag is unknown or does not match the
    /// kind expected at that position.
    #[error("Unsupported value")]
    UnsupportedValue,
}

/// Result type for WKB operations.
pub type Result<T> = std::result::Result<T, WkbError>;
