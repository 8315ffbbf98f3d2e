// this_file: crates/glyphcode-cli/src/main.rs

//! glyphcode CLI: generate source code from an ASCII-art glyph bitmap.
//!
//! Reads a bitmap (`#`/`*`/`1` on, `.`/space/`0` off) from a file or
//! stdin, runs it through the generation pipeline, and prints the
//! resulting array to stdout.

use anyhow::Context;
use clap::Parser;
use glyphcode_core::{BitNumbering, Bitmap, Format, IndentationStyle};
use glyphcode_gen::{GenerationEvent, GenerationScheduler, Settings, SettingsStore};
use std::io::Read;
use std::path::PathBuf;
use std::sync::mpsc;

/// Glyph bitmap to source code generator
#[derive(Parser)]
#[command(name = "glyphcode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// ASCII-art bitmap file (reads stdin if omitted)
    input: Option<PathBuf>,

    /// Output format key: c, arduino, python-list, python-bytes
    #[arg(short, long)]
    format: Option<String>,

    /// Array/variable name for the generated code
    #[arg(short, long)]
    name: Option<String>,

    /// Use MSB bit numbering (first pixel at bit 7)
    #[arg(long)]
    msb: bool,

    /// Invert pixel bits before packing
    #[arg(long)]
    invert: bool,

    /// Emit a blank line between bitmap rows
    #[arg(long)]
    line_spacing: bool,

    /// Indentation: "tab" or a space count 1-8
    #[arg(long, value_parser = parse_indentation)]
    indent: Option<IndentationStyle>,

    /// Settings file providing defaults; updated with the effective choices
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_indentation(value: &str) -> Result<IndentationStyle, String> {
    if value.eq_ignore_ascii_case("tab") {
        return Ok(IndentationStyle::Tab);
    }
    match value.parse::<u8>() {
        Ok(n @ 1..=8) => Ok(IndentationStyle::spaces(n)),
        _ => Err(format!(
            "expected 'tab' or a space count 1-8, got '{}'",
            value
        )),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = cli.settings.as_ref().map(SettingsStore::new);
    let mut settings = store
        .as_ref()
        .map(SettingsStore::load)
        .unwrap_or_default();

    if let Some(key) = &cli.format {
        settings.format = Format::from_key(key);
    }
    if let Some(name) = &cli.name {
        settings.array_name = name.clone();
    }
    if cli.msb {
        settings.options.bit_numbering = BitNumbering::Msb;
    }
    if cli.invert {
        settings.options.invert_bits = true;
    }
    if cli.line_spacing {
        settings.options.include_line_spacing = true;
    }
    if let Some(indent) = cli.indent {
        settings.options.indentation = indent;
    }

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading bitmap from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading bitmap from stdin")?;
            buf
        }
    };
    let bitmap = Bitmap::from_text(&text)?;
    log::info!(
        "loaded {}x{} bitmap, generating {} code",
        bitmap.width(),
        bitmap.height(),
        settings.format
    );

    let (tx, rx) = mpsc::channel();
    let scheduler = GenerationScheduler::new(tx)?;
    scheduler.submit(
        bitmap,
        settings.options,
        settings.format,
        Some(&settings.array_name),
    );

    for event in rx.iter() {
        match event {
            GenerationEvent::Started { seq } => {
                log::debug!("generation {} started", seq);
            }
            GenerationEvent::Completed { result, .. } => {
                let code = result?;
                print!("{}", code.text);
                break;
            }
        }
    }

    if let Some(store) = &store {
        persist(store, &settings);
    }

    Ok(())
}

fn persist(store: &SettingsStore, settings: &Settings) {
    if store.load() != *settings {
        if let Err(e) = store.save(settings) {
            log::warn!("failed to save settings to {}: {}", store.path().display(), e);
        }
    }
}

/// Initialize logging based on verbosity.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .init();
}
