//! Shared plumbing for the sample scanners: argument parsing, logging setup,
//! configuration loading and token printing.

use anyhow::Context;
use clap::Parser;
use rule_scanner::{ScannedToken, ScannerConfig, Token};
use std::fmt::Debug;
use std::io::Read;
use std::path::{Path, PathBuf};
use text_model::TextStore;
use tracing_subscriber::EnvFilter;

/// Command-line arguments shared by the sample binaries.
#[derive(Debug, Parser)]
pub struct Args {
    /// File to scan, or `-` for stdin; a built-in sample is used when omitted
    pub path: Option<PathBuf>,

    /// JSON file with a scanner configuration
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Also print whitespace tokens
    #[arg(long)]
    pub whitespace: bool,
}

/// Installs a `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the scanner configuration, falling back to the default.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ScannerConfig> {
    let Some(path) = path else {
        return Ok(ScannerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: ScannerConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    tracing::info!(delimiters = config.line_delimiters.len(), "loaded config");
    Ok(config)
}

/// Reads the input file (`-` for stdin), or returns `sample` when no path
/// was given.
pub fn load_input(path: Option<&Path>, sample: &str) -> anyhow::Result<String> {
    match path {
        Some(path) if path == Path::new("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading input {}", path.display())),
        None => Ok(sample.to_string()),
    }
}

/// Prints one line per token: offset, length, kind and the escaped text.
pub fn print_tokens<St, T>(
    store: &St,
    tokens: &[ScannedToken<T>],
    show_whitespace: bool,
) -> anyhow::Result<()>
where
    St: TextStore + ?Sized,
    T: Debug,
{
    for scanned in tokens {
        let kind = match &scanned.token {
            Token::Whitespace if !show_whitespace => continue,
            Token::Whitespace => "Whitespace".to_string(),
            Token::Undefined => "-".to_string(),
            Token::Eof => "Eof".to_string(),
            Token::Other(data) => format!("{data:?}"),
        };
        let text = store.get(scanned.offset, scanned.length)?;
        println!(
            "{:>6} {:>4}  {:<12} {}",
            scanned.offset,
            scanned.length,
            kind,
            text.escape_debug()
        );
    }
    Ok(())
}
