// this_file: crates/glyphcode-core/src/error.rs

//! Error types for glyphcode.
//!
//! All failures in this crate are per-request and recoverable: a bad array
//! name or a malformed bitmap fails that one generation and nothing else.

use thiserror::Error;

/// Main error type for glyphcode operations.
#[derive(Error, Debug)]
pub enum GlyphCodeError {
    /// Array name is not a valid identifier in the target format
    #[error("Invalid array name '{name}': {reason}")]
    InvalidArrayName { name: String, reason: String },

    /// Bitmap dimensions or pixel data are inconsistent
    #[error("Invalid bitmap: {reason}")]
    InvalidBitmap { reason: String },

    /// Internal error (should not happen in production)
    #[error("Internal error: {0}")]
    Internal(String),
}
