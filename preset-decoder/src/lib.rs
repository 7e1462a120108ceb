//! Preset Decoder Library
//!
//! A stateless, reusable library for decoding synthesizer program presets
//! from their 160-byte binary records and the ZIP containers they ship in.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on decoding:
//! - Unwraps program/library archive files (or raw records) to record bytes
//! - Decodes the fixed-layout record into a fully typed [`Program`]
//! - Maps enumerated codes to their panel names
//! - Converts raw knob values to display units (cents, percent, dB, labels)
//!
//! The library does NOT:
//! - Encode or write program files
//! - Talk MIDI/SysEx to hardware
//! - Render reports or serve requests
//!
//! All higher-level functionality is in the application layer (preset-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use preset_decoder::{container, parser};
//!
//! // Unwrap the container (raw records pass through unchanged)
//! let bytes = container::unwrap_file("MySound.mnlgxdprog", 0).unwrap();
//!
//! // Decode the record
//! let program = parser::decode(&bytes).unwrap();
//! println!(
//!     "{}: cutoff {} ({})",
//!     program.program_name,
//!     program.filter_cutoff,
//!     program.voice_mode_type
//! );
//! ```

// Public modules
pub mod container;
pub mod display;
pub mod enums;
pub mod layout;
pub mod parser;
pub mod program;
pub mod types;

// Re-export main types for convenience
pub use container::{unwrap_file, unwrap_upload};
pub use parser::decode;
pub use program::Program;
pub use types::{DecodeError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
