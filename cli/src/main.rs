//! # terraflow
//!
//! Renders the TerraFlow Studio landing page once and writes it out.
//!
//! ## Usage
//!
//! ```bash
//! # Full HTML document to stdout
//! terraflow > index.html
//!
//! # Straight to a file
//! terraflow --out public/index.html
//!
//! # Display tree as JSON, for a host that renders it itself
//! terraflow --format json
//! ```
//!
//! Logs go to stderr so stdout carries only the document.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use terraflow_page::{display_tree, render_tree};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "terraflow")]
#[command(about = "Render the TerraFlow Studio landing page")]
#[command(version)]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Complete HTML document
    Html,
    /// Display tree as pretty JSON
    Json,
}

// ============================================================================
// Render + write
// ============================================================================

fn render(format: Format) -> Result<String> {
    let tree = display_tree();
    debug!(blocks = tree.blocks.len(), ?format, "built display tree");

    match format {
        Format::Html => Ok(render_tree(&tree)),
        Format::Json => tree
            .to_json_pretty()
            .map(|json| json + "\n")
            .context("serializing display tree"),
    }
}

fn write_file(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, document).with_context(|| format!("writing {}", path.display()))?;
    info!("Wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}

fn write_stdout(document: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(document.as_bytes())
        .and_then(|()| stdout.flush())
        .context("writing to stdout")
}

fn run(args: Args) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("terraflow v{}", env!("CARGO_PKG_VERSION"));

    let document = render(args.format)?;
    match &args.out {
        Some(path) => write_file(path, &document),
        None => write_stdout(&document),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Reader went away (e.g. `terraflow | head`), nothing left to do
            let broken_pipe = e
                .chain()
                .filter_map(|cause| cause.downcast_ref::<io::Error>())
                .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe);
            if broken_pipe {
                ExitCode::SUCCESS
            } else {
                eprintln!("[terraflow] Error: {:#}", e);
                ExitCode::FAILURE
            }
        }
    }
}
