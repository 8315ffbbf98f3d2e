// this_file: crates/glyphcode-core/src/types.rs

//! Core value types used throughout the glyphcode engine.

use crate::error::GlyphCodeError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder array name used when the caller supplies none.
pub const DEFAULT_ARRAY_NAME: &str = "font";

/// Monochrome glyph bitmap.
///
/// Row-major boolean pixels, origin top-left. Every row has exactly
/// `width` pixels; a 0x0 bitmap is valid and packs to zero bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Bitmap {
    /// Create a bitmap from a flat row-major pixel vector.
    pub fn new(width: usize, height: usize, pixels: Vec<bool>) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(GlyphCodeError::InvalidBitmap {
                reason: format!(
                    "pixel count {} does not match {}x{}",
                    pixels.len(),
                    width,
                    height
                ),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// The empty 0x0 bitmap.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    /// Parse an ASCII-art bitmap: `#`, `*` or `1` for an on pixel,
    /// `.`, space or `0` for off. Lines shorter than the widest line are
    /// padded on the right with off pixels.
    pub fn from_text(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Ok(Self::empty());
        }

        let mut pixels = Vec::with_capacity(width * lines.len());
        for (y, line) in lines.iter().enumerate() {
            let mut count = 0;
            for (x, ch) in line.chars().enumerate() {
                let on = match ch {
                    '#' | '*' | '1' => true,
                    '.' | ' ' | '0' => false,
                    other => {
                        return Err(GlyphCodeError::InvalidBitmap {
                            reason: format!("unexpected character '{}' at {}:{}", other, y, x),
                        })
                    }
                };
                pixels.push(on);
                count += 1;
            }
            pixels.extend(std::iter::repeat(false).take(width - count));
        }

        Self::new(width, lines.len(), pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel row `y` as a slice.
    pub fn row(&self, y: usize) -> &[bool] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Iterate over pixel rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }
}

/// Direction in which sequential pixels map onto bit positions in a byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitNumbering {
    /// First pixel of a byte occupies bit 7
    Msb,
    /// First pixel of a byte occupies bit 0
    #[default]
    Lsb,
}

/// Indentation used for emitted code lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", content = "count", rename_all = "lowercase")]
pub enum IndentationStyle {
    #[default]
    Tab,
    /// N-space indentation, 1..=8
    Space(u8),
}

impl IndentationStyle {
    /// Space indentation with `count` clamped into 1..=8.
    pub fn spaces(count: u8) -> Self {
        Self::Space(count.clamp(1, 8))
    }

    /// Clamp an out-of-range space count, e.g. after deserialization.
    pub fn normalized(self) -> Self {
        match self {
            Self::Tab => Self::Tab,
            Self::Space(n) => Self::spaces(n),
        }
    }

    /// One level of indentation as a string.
    pub fn unit(&self) -> String {
        match self {
            Self::Tab => "\t".to_string(),
            Self::Space(n) => " ".repeat(usize::from(*n)),
        }
    }
}

impl fmt::Display for IndentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab => write!(f, "Tab"),
            Self::Space(1) => write!(f, "1 Space"),
            Self::Space(n) => write!(f, "{} Spaces", n),
        }
    }
}

/// Options controlling packing and emission.
///
/// Copied into each generation request; never shared mutably.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceCodeOptions {
    pub bit_numbering: BitNumbering,
    pub invert_bits: bool,
    pub include_line_spacing: bool,
    pub indentation: IndentationStyle,
}

/// Target source-code format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    #[default]
    C,
    Arduino,
    PythonList,
    PythonBytes,
}

impl Format {
    /// All formats, in registration order.
    pub const ALL: [Format; 4] = [
        Format::C,
        Format::Arduino,
        Format::PythonList,
        Format::PythonBytes,
    ];

    /// Stable string key used for persistence and lookup.
    pub fn identifier(&self) -> &'static str {
        match self {
            Format::C => "c",
            Format::Arduino => "arduino",
            Format::PythonList => "python-list",
            Format::PythonBytes => "python-bytes",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Format::C => "C/C++",
            Format::Arduino => "Arduino",
            Format::PythonList => "Python List",
            Format::PythonBytes => "Python Bytes",
        }
    }

    /// Look up a format by its string key. Unknown keys fall back to the
    /// first registered format rather than failing.
    pub fn from_key(key: &str) -> Format {
        Format::ALL
            .iter()
            .copied()
            .find(|f| f.identifier() == key)
            .unwrap_or_else(|| {
                log::warn!(
                    target: "glyphcode::format",
                    "unknown format key '{}', falling back to '{}'",
                    key,
                    Format::ALL[0].identifier()
                );
                Format::ALL[0]
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
