//! fenboard - parse, hash and render FEN positions.
//!
//! A thin driver over the `fenboard` library: every position goes through
//! `FenCodec::parse` and is printed back in canonical form.

mod config;
mod report;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fenboard::{FenCodec, STARTPOS};
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "fenboard")]
#[command(about = "Parse, hash and render chess positions in FEN")]
struct Cli {
    /// Path to a TOML config file (default: ./fenboard.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Do not print the board diagram
    #[arg(long, global = true)]
    no_board: bool,

    /// Do not print the hash
    #[arg(long, global = true)]
    no_hash: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a single position
    Show {
        /// FEN string; the six fields may be passed as separate arguments.
        /// Defaults to the starting position.
        fen: Vec<String>,
    },
    /// Read one FEN per line from stdin and report whether each parses
    Check,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    config.json |= cli.json;
    config.show_board &= !cli.no_board;
    config.show_hash &= !cli.no_hash;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Show { fen } => {
            show(&fen, io::stdout().lock(), &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => {
            let failures = check(io::stdin().lock(), io::stdout().lock(), &config)?;
            Ok(if failures == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Parses one position from the command-line words and prints its report.
fn show<W: Write>(args: &[String], mut out: W, config: &Config) -> anyhow::Result<()> {
    let fen = if args.is_empty() {
        STARTPOS.to_string()
    } else {
        args.join(" ")
    };

    let position = FenCodec::new()
        .parse(&fen)
        .with_context(|| format!("parsing FEN '{}'", fen))?;
    writeln!(out, "{}", report::render(&position, config)?)?;
    Ok(())
}

/// Parses every non-empty line of `input`, returning the number of failures.
fn check<R: BufRead, W: Write>(input: R, mut out: W, config: &Config) -> anyhow::Result<usize> {
    let codec = FenCodec::new();
    let mut failures = 0usize;
    let mut total = 0usize;

    for (number, line) in input.lines().enumerate() {
        let line = line.context("reading stdin")?;
        if line.is_empty() {
            continue;
        }
        total += 1;

        match codec.parse(&line) {
            Ok(position) if config.json => {
                writeln!(out, "{}", serde_json::to_string(&report::PositionReport::new(&position))?)?;
            }
            Ok(position) => writeln!(out, "ok {}", position)?,
            Err(err) => {
                failures += 1;
                tracing::warn!(line = number + 1, %err, "invalid FEN");
                writeln!(out, "error line {}: {}", number + 1, err)?;
            }
        }
    }

    tracing::info!(total, failures, "check finished");
    Ok(failures)
}
