//! I/Q Capture Analyzer Command-Line Interface
//!
//! This CLI provides tools for:
//! - Decoding recorded signal captures (raw text, PCM binary, complex text,
//!   tabular I/Q)
//! - Normalizing them into a complex sample sequence
//! - Reporting signal statistics as text or JSON
//!
//! Chart rendering is left to external tooling that consumes the report.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sigscope_core::analysis::SignalStats;
use sigscope_core::ingest::{read_file, Ingested, SourceFormat};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "sigscope")]
#[command(author, version, about = "I/Q capture analyzer CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a capture file and report signal statistics
    Analyze {
        /// Input capture file
        #[arg(short, long)]
        input: PathBuf,

        /// Input format (raw-text, pcm16, complex-text, csv)
        #[arg(short, long)]
        format: String,

        /// Report format (text, json)
        #[arg(long, default_value = "text")]
        output_format: String,
    },

    /// List supported input formats
    Formats,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn cmd_analyze(input: PathBuf, format: String, output_format: String) -> Result<()> {
    let format = SourceFormat::from_name(&format).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid format: {}. Use one of: {}",
            format,
            SourceFormat::names().join(", ")
        )
    })?;

    info!("Reading {:?} as {}", input, format);
    let decoded = read_file(&input, format)
        .with_context(|| format!("Failed to decode {:?}", input))?;

    if decoded.is_empty() {
        // Distinct from a read failure: the file was readable but matched
        // nothing
        warn!("No samples found in {:?}", input);
        println!("No samples found");
        return Ok(());
    }

    let stats = match decoded {
        Ingested::Mono(amplitudes) => {
            info!("Decoded {} amplitude samples", amplitudes.len());
            println!("Decoded {} amplitude samples (mono stream)", amplitudes.len());
            return Ok(());
        }
        Ingested::Pair(pair) => {
            info!("Assembled {} complex samples", pair.len());
            SignalStats::compute_from_pair(&pair)
        }
        Ingested::Signal(signal) => {
            info!("Decoded {} complex samples", signal.len());
            SignalStats::compute(&signal)
        }
    };

    match output_format.as_str() {
        "json" => println!("{}", stats.to_json()),
        _ => print!("{}", stats.to_text()),
    }

    Ok(())
}

fn cmd_formats() -> Result<()> {
    println!("Supported input formats:");
    println!("  raw-text      digit runs in plain text (mono amplitude stream)");
    println!("  pcm16         interleaved signed 16-bit little-endian PCM");
    println!("  complex-text  (real, imag) integer pairs in plain text");
    println!("  csv           delimited table with 'real' and 'imag' columns");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Analyze {
            input,
            format,
            output_format,
        } => cmd_analyze(input, format, output_format),

        Commands::Formats => cmd_formats(),

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}
