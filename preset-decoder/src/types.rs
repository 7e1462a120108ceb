//! Core types for the preset decoder library
//!
//! This module defines the error type shared by all decoding operations.
//! Decoding is deterministic, so errors are never retried - they propagate
//! unchanged to the caller, which maps them to its own failure surface.

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while unwrapping a container or decoding a program
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Input is shorter than the minimum viable program record.
    #[error("data too short to be a valid program: got {len} bytes, need at least {min}")]
    TooShort { len: usize, min: usize },

    /// The fixed-layout extraction could not consume the expected byte pattern.
    #[error("malformed program layout: {0}")]
    MalformedLayout(String),

    /// A strict enumerated field holds a code outside its domain.
    #[error("unknown value {raw} for field '{field}'")]
    UnknownEnumValue { field: &'static str, raw: u8 },

    /// An archive container was opened but holds nothing to decode.
    #[error("no program entries found in archive")]
    NoEntries,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
