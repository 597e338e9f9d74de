//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use super::convert;
use super::output::{Output, OutputFormat};
use crate::formats;
use crate::writer::ImageWriter;

#[derive(Parser)]
#[command(name = "imgout")]
#[command(author, version, about = "Format-dispatching image writer")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Alternate writer registry file (one writer key per line)
    #[arg(long, global = true, env = "IMGOUT_REGISTRY")]
    pub registry: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List loaded writers and recognized suffixes
    Formats,

    /// Detect which format a target path resolves to
    Detect {
        /// Output target path
        target: String,
    },

    /// Report whether the target's writer supports multi-image stacks
    Stacks {
        /// Output target path
        target: String,
    },

    /// Convert a PPM image (or stack) to the target's format
    Convert {
        /// Input file, binary PPM, single or concatenated frames
        input: PathBuf,

        /// Output target; its suffix selects the writer
        target: String,
    },
}

#[derive(Serialize)]
struct WriterRow<'a> {
    key: &'a str,
    format: &'a str,
    suffixes: &'a [&'a str],
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    let mut writer = load_writer(&cli, &output)?;

    match cli.command {
        Commands::Formats => {
            let rows: Vec<WriterRow> = writer
                .writers()
                .map(|w| WriterRow {
                    key: w.key(),
                    format: w.format_name(),
                    suffixes: w.suffixes(),
                })
                .collect();

            if output.is_json() {
                output.data(&serde_json::json!({
                    "writers": rows,
                    "suffixes": writer.suffixes(),
                }));
            } else {
                for row in &rows {
                    output.row(&[row.key, row.format, &row.suffixes.join(", ")]);
                }
                output.row(&["", "", ""]);
                output.row(&["suffixes:", &writer.suffixes().join(", "), ""]);
            }
        }

        Commands::Detect { target } => {
            output.verbose(&format!("Resolving target: {}", target));
            let name = writer.format_name(&target)?;
            if output.is_json() {
                output.data(&serde_json::json!({ "target": target, "format": name }));
            } else {
                output.success(name);
            }
        }

        Commands::Stacks { target } => {
            // Unresolvable targets report false here rather than
            // failing, matching ImageWriter::can_do_stacks.
            let stacks = writer.can_do_stacks(&target);
            if output.is_json() {
                output.data(&serde_json::json!({ "target": target, "stacks": stacks }));
            } else {
                output.success(if stacks { "true" } else { "false" });
            }
        }

        Commands::Convert { input, target } => {
            convert::run(&mut writer, &input, &target, &output)?;
        }
    }

    Ok(())
}

/// Builds the image writer, honoring --registry when given
fn load_writer(cli: &Cli, output: &Output) -> Result<ImageWriter> {
    match &cli.registry {
        Some(path) => {
            output.verbose(&format!("Loading writer registry: {}", path.display()));
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read writer registry {}", path.display()))?;

            let (writer, diagnostics) = ImageWriter::from_registry(&text, &formats::builtin_table());
            for diagnostic in &diagnostics {
                output.warning(&diagnostic.to_string());
            }
            Ok(writer)
        }
        None => Ok(formats::default_writer()),
    }
}
