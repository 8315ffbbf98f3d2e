// this_file: crates/glyphcode-gen/src/request.rs

//! Generation request snapshots and their results.

use glyphcode_core::{emit, pack, Bitmap, Format, Result, SourceCodeOptions};

/// Immutable snapshot of everything one generation needs.
///
/// Created per submission and destroyed when its result is delivered or
/// dropped; identity is the sequence number.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub seq: u64,
    pub bitmap: Bitmap,
    pub options: SourceCodeOptions,
    pub format: Format,
    pub array_name: String,
}

impl GenerationRequest {
    /// Run packing and emission for this snapshot. Pure CPU-bound work,
    /// safe to execute on any worker thread.
    pub fn generate(&self) -> Result<GeneratedCode> {
        let packed = pack(
            &self.bitmap,
            self.options.bit_numbering,
            self.options.invert_bits,
        );
        let text = emit(
            self.format,
            &packed,
            &self.array_name,
            &self.options,
            (self.bitmap.width(), self.bitmap.height()),
        )?;
        Ok(GeneratedCode {
            seq: self.seq,
            format: self.format,
            text,
        })
    }
}

/// Rendered source code, tagged with the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub seq: u64,
    pub format: Format,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphcode_core::{BitNumbering, GlyphCodeError};

    fn request(name: &str) -> GenerationRequest {
        GenerationRequest {
            seq: 1,
            bitmap: Bitmap::from_text("#.#.#.#.").unwrap(),
            options: SourceCodeOptions {
                bit_numbering: BitNumbering::Msb,
                ..Default::default()
            },
            format: Format::C,
            array_name: name.to_string(),
        }
    }

    #[test]
    fn test_generate_success() {
        let code = request("glyph").generate().unwrap();
        assert_eq!(code.seq, 1);
        assert_eq!(code.format, Format::C);
        assert!(code.text.contains("0xaa"));
    }

    #[test]
    fn test_generate_invalid_name() {
        let err = request("3bad").generate().unwrap_err();
        assert!(matches!(err, GlyphCodeError::InvalidArrayName { .. }));
    }
}
