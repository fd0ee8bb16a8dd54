//! Error types for the static arithmetic coder.

use thiserror::Error;

/// Error variants for modelling, coding and container parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// No probability distribution exists for an empty source.
    #[error("empty input")]
    EmptyInput,

    /// Source is longer than the coder's precision can represent.
    #[error("input of {0} bytes exceeds the {max} byte limit", max = crate::models::MAX_TOTAL)]
    InputTooLong(usize),

    /// The bit source ran dry before all symbols were decoded.
    #[error("bit stream exhausted after {decoded} of {expected} symbols")]
    StreamExhausted { decoded: usize, expected: usize },

    /// A frequency table or model broke one of its invariants.
    #[error("model mismatch: {0}")]
    ModelMismatch(&'static str),

    /// The byte being encoded has no entry in the model.
    #[error("byte {0:#04x} is not in the model")]
    UnknownSymbol(u8),

    /// The container ended before a field could be read.
    #[error("truncated container: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    /// The stream's padding count is out of range.
    #[error("invalid padding bit count {0}")]
    InvalidPadding(u8),

    /// Stored frequencies don't add up to the stored length.
    #[error("header length {header} doesn't match frequency sum {frequencies}")]
    LengthMismatch { header: u32, frequencies: u64 },

    /// An I/O error occurred while reading or writing files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for coder operations.
pub type Result<T> = std::result::Result<T, Error>;
