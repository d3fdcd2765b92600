//! Command-line entry point — LinguaSpeak.
//!
//! # Flow
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Read the source: positional `FILE`, or stdin when absent.  RTF files
//!    are run through the extractor unless `--raw` is given.
//! 4. Truncate to the configured source cap (warn when clipping).
//! 5. Print either the bare text or, with `--prompt`, the full translation
//!    prompt for the selected target language.
//! 6. Optionally copy the printed text to the system clipboard.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use linguaspeak::{
    clipboard,
    config::AppConfig,
    input,
    rtf::extract_plain_text,
    translate::{Language, PromptBuilder},
};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Prepare text for LLM translation: extract plain text from RTF uploads
/// and wrap it in the translation prompt.
#[derive(Debug, Parser)]
#[command(name = "linguaspeak", version)]
struct Cli {
    /// Source file (.rtf is extracted, anything else is read verbatim).
    /// Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Target language: a name (Spanish) or ISO code (es).
    /// Defaults to the configured target.
    #[arg(short, long)]
    language: Option<String>,

    /// Print the full translation prompt instead of the bare text.
    #[arg(short, long)]
    prompt: bool,

    /// Copy the output to the system clipboard.
    #[arg(short, long)]
    copy: bool,

    /// Treat the input as plain text even if it looks like RTF.
    #[arg(long)]
    raw: bool,
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    let target: Language = match &cli.language {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid --language value {s:?}"))?,
        None => config.target_language,
    };

    // --- Ingest -----------------------------------------------------------
    let text = match &cli.file {
        Some(path) if cli.raw => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        Some(path) => input::load_source(path)?,
        None => input::read_stdin()?,
    };
    // Stdin may still carry pasted RTF source.
    let text = if cli.file.is_none() && !cli.raw && text.starts_with("{\\rtf") {
        extract_plain_text(&text)
    } else {
        text
    };

    if text.trim().is_empty() {
        log::warn!("no text content in input; nothing to translate");
        return Ok(());
    }

    // --- Source cap -------------------------------------------------------
    let clipped = input::truncate_chars(&text, config.source.max_chars);
    if clipped.len() < text.len() {
        log::warn!(
            "source exceeds {} characters; truncating",
            config.source.max_chars
        );
    }

    // --- Build output -----------------------------------------------------
    let output = if cli.prompt {
        PromptBuilder::new(target).build(clipped.trim())
    } else {
        clipped.trim().to_string()
    };

    println!("{output}");

    // --- Clipboard --------------------------------------------------------
    if cli.copy || config.output.copy_to_clipboard {
        match clipboard::copy_text(&output) {
            Ok(()) => log::info!("copied {} bytes to clipboard", output.len()),
            Err(e) => log::warn!("clipboard copy failed: {e}"),
        }
    }

    Ok(())
}
