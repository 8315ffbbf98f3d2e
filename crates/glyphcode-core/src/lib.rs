// this_file: crates/glyphcode-core/src/lib.rs

//! Core types, bit packing and source-code emission for the glyphcode engine.

pub mod emit;
pub mod error;
pub mod pack;
pub mod types;

pub use emit::{emit, validate_array_name};
pub use error::GlyphCodeError;
pub use pack::pack;
pub use types::{
    BitNumbering, Bitmap, Format, IndentationStyle, SourceCodeOptions, DEFAULT_ARRAY_NAME,
};

/// Result type for glyphcode operations
pub type Result<T> = std::result::Result<T, GlyphCodeError>;
