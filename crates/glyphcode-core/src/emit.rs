// this_file: crates/glyphcode-core/src/emit.rs

//! Source-code emission: packed byte rows into format-specific text.
//!
//! All formats share the packing result; only the textual rendering
//! differs. Emission is a one-way codec: there is no decode path, and the
//! same (packed, options, format) inputs always produce byte-identical
//! text. Headers carry no timestamps for that reason.

use crate::error::GlyphCodeError;
use crate::types::{Format, SourceCodeOptions};
use crate::Result;
use std::fmt::Write;

/// Check that `name` is a valid identifier in every target format:
/// non-empty, starts with an ASCII letter or underscore, and contains only
/// ASCII alphanumerics and underscores.
pub fn validate_array_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| GlyphCodeError::InvalidArrayName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("name is empty")),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Err(invalid("must start with a letter or underscore")),
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid(
            "may contain only letters, digits and underscores",
        ));
    }
    Ok(())
}

/// Render packed byte rows as source code in the given format.
///
/// `dimensions` is the original glyph (width, height), reported in the
/// header comment. Body lines are indented one level per
/// `options.indentation`; `options.include_line_spacing` inserts one blank
/// line between consecutive bitmap rows.
pub fn emit(
    format: Format,
    packed: &[Vec<u8>],
    array_name: &str,
    options: &SourceCodeOptions,
    dimensions: (usize, usize),
) -> Result<String> {
    validate_array_name(array_name)?;

    let (width, height) = dimensions;
    let total: usize = packed.iter().map(Vec::len).sum();
    let comment = match format {
        Format::C | Format::Arduino => "//",
        Format::PythonList | Format::PythonBytes => "#",
    };
    let indent = options.indentation.unit();

    let mut out = String::with_capacity(64 + total * 6);
    let _ = writeln!(
        &mut out,
        "{} {}: {}x{} glyph bitmap, {} bytes",
        comment, array_name, width, height, total
    );

    match format {
        Format::C => {
            let _ = writeln!(
                &mut out,
                "static const unsigned char {}[{}] = {{",
                array_name, total
            );
        }
        Format::Arduino => {
            let _ = writeln!(
                &mut out,
                "const uint8_t {}[{}] PROGMEM = {{",
                array_name, total
            );
        }
        Format::PythonList => {
            let _ = writeln!(&mut out, "{} = [", array_name);
        }
        Format::PythonBytes => {
            let _ = writeln!(&mut out, "{} = bytes([", array_name);
        }
    }

    let mut first = true;
    for row in packed {
        if row.is_empty() {
            continue;
        }
        if !first && options.include_line_spacing {
            out.push('\n');
        }
        first = false;

        out.push_str(&indent);
        for byte in row {
            let _ = write!(&mut out, "0x{:02x}, ", byte);
        }
        // Drop the trailing space, keep the trailing comma.
        out.pop();
        out.push('\n');
    }

    match format {
        Format::C | Format::Arduino => out.push_str("};\n"),
        Format::PythonList => out.push_str("]\n"),
        Format::PythonBytes => out.push_str("])\n"),
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::pack;
    use crate::types::{BitNumbering, Bitmap, IndentationStyle};

    fn sample_packed() -> Vec<Vec<u8>> {
        let bitmap = Bitmap::from_text("#.#.#.#.\n########").unwrap();
        pack(&bitmap, BitNumbering::Msb, false)
    }

    #[test]
    fn test_emit_c() {
        let text = emit(
            Format::C,
            &sample_packed(),
            "glyph_a",
            &SourceCodeOptions::default(),
            (8, 2),
        )
        .unwrap();
        assert_eq!(
            text,
            "// glyph_a: 8x2 glyph bitmap, 2 bytes\n\
             static const unsigned char glyph_a[2] = {\n\
             \t0xaa,\n\
             \t0xff,\n\
             };\n"
        );
    }

    #[test]
    fn test_emit_arduino() {
        let text = emit(
            Format::Arduino,
            &sample_packed(),
            "glyph_a",
            &SourceCodeOptions::default(),
            (8, 2),
        )
        .unwrap();
        assert!(text.contains("const uint8_t glyph_a[2] PROGMEM = {"));
        assert!(text.starts_with("// glyph_a:"));
        assert!(text.ends_with("};\n"));
    }

    #[test]
    fn test_emit_python_list() {
        let text = emit(
            Format::PythonList,
            &sample_packed(),
            "glyph_a",
            &SourceCodeOptions::default(),
            (8, 2),
        )
        .unwrap();
        assert_eq!(
            text,
            "# glyph_a: 8x2 glyph bitmap, 2 bytes\n\
             glyph_a = [\n\
             \t0xaa,\n\
             \t0xff,\n\
             ]\n"
        );
    }

    #[test]
    fn test_emit_python_bytes() {
        let text = emit(
            Format::PythonBytes,
            &sample_packed(),
            "glyph_a",
            &SourceCodeOptions::default(),
            (8, 2),
        )
        .unwrap();
        assert!(text.contains("glyph_a = bytes(["));
        assert!(text.ends_with("])\n"));
    }

    #[test]
    fn test_multi_byte_rows_on_one_line() {
        let bitmap = Bitmap::new(9, 1, vec![true; 9]).unwrap();
        let packed = pack(&bitmap, BitNumbering::Msb, false);
        let text = emit(
            Format::C,
            &packed,
            "wide",
            &SourceCodeOptions::default(),
            (9, 1),
        )
        .unwrap();
        assert!(text.contains("\t0xff, 0x80,\n"));
    }

    #[test]
    fn test_line_spacing_groups_rows() {
        let options = SourceCodeOptions {
            include_line_spacing: true,
            ..Default::default()
        };
        let text = emit(Format::C, &sample_packed(), "glyph_a", &options, (8, 2)).unwrap();
        assert!(text.contains("0xaa,\n\n\t0xff,"));

        // Spacing changes grouping only, never byte content.
        let plain = emit(
            Format::C,
            &sample_packed(),
            "glyph_a",
            &SourceCodeOptions::default(),
            (8, 2),
        )
        .unwrap();
        assert_eq!(
            text.replace("\n\n", "\n"),
            plain
        );
    }

    #[test]
    fn test_indentation_fidelity() {
        let tab = emit(
            Format::C,
            &sample_packed(),
            "glyph_a",
            &SourceCodeOptions::default(),
            (8, 2),
        )
        .unwrap();
        let spaces = emit(
            Format::C,
            &sample_packed(),
            "glyph_a",
            &SourceCodeOptions {
                indentation: IndentationStyle::spaces(4),
                ..Default::default()
            },
            (8, 2),
        )
        .unwrap();
        assert_ne!(tab, spaces);
        // Only leading whitespace differs.
        let strip = |s: &str| {
            s.lines()
                .map(|l| l.trim_start().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(strip(&tab), strip(&spaces));
    }

    #[test]
    fn test_emission_determinism() {
        let options = SourceCodeOptions::default();
        let a = emit(Format::Arduino, &sample_packed(), "g", &options, (8, 2)).unwrap();
        let b = emit(Format::Arduino, &sample_packed(), "g", &options, (8, 2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_bitmap_emits_empty_array() {
        let text = emit(
            Format::C,
            &[],
            "empty",
            &SourceCodeOptions::default(),
            (0, 0),
        )
        .unwrap();
        assert_eq!(
            text,
            "// empty: 0x0 glyph bitmap, 0 bytes\n\
             static const unsigned char empty[0] = {\n\
             };\n"
        );
    }

    #[test]
    fn test_invalid_array_names() {
        for name in ["", "3bad", "has space", "dash-ed", "ün"] {
            let err = emit(
                Format::C,
                &sample_packed(),
                name,
                &SourceCodeOptions::default(),
                (8, 2),
            )
            .unwrap_err();
            assert!(
                matches!(err, GlyphCodeError::InvalidArrayName { .. }),
                "name {:?}",
                name
            );
        }
    }

    #[test]
    fn test_valid_array_names() {
        for name in ["_", "a", "_private", "glyph_42", "X"] {
            assert!(validate_array_name(name).is_ok(), "name {:?}", name);
        }
    }
}
