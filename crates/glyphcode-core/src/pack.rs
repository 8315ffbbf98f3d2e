// this_file: crates/glyphcode-core/src/pack.rs

//! Bit packing: glyph pixel rows into byte rows.
//!
//! Packing is pure and total. The same (bitmap, numbering, invert) inputs
//! always yield byte-identical output, which the emitters rely on.

use crate::types::{BitNumbering, Bitmap};

/// Pack a bitmap into one byte-row per pixel row.
///
/// Pixels are consumed left to right. Under MSB numbering the first pixel
/// of each byte lands in bit 7, under LSB in bit 0. Rows whose width is not
/// a multiple of 8 are padded with zero bits; `invert` flips pixel bits
/// only, never padding. Each byte-row holds `ceil(width / 8)` bytes.
pub fn pack(bitmap: &Bitmap, numbering: BitNumbering, invert: bool) -> Vec<Vec<u8>> {
    bitmap
        .rows()
        .map(|row| pack_row(row, numbering, invert))
        .collect()
}

fn pack_row(row: &[bool], numbering: BitNumbering, invert: bool) -> Vec<u8> {
    let mut bytes = vec![0u8; row.len().div_ceil(8)];
    for (i, &pixel) in row.iter().enumerate() {
        if pixel != invert {
            let shift = match numbering {
                BitNumbering::Msb => 7 - (i % 8),
                BitNumbering::Lsb => i % 8,
            };
            bytes[i / 8] |= 1 << shift;
        }
    }
    bytes
}
