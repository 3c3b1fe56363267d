//! wolof-numerals: spell integers out in Wolof.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use wolof_numerals_core::{parse_integer, OutputFormat, SpellerConfig};

#[derive(Parser, Debug)]
#[command(name = "wolof-numerals", version, about = "Spell integers out in Wolof")]
struct Args {
    /// Integers to spell out; read from stdin, one per line, when omitted
    #[arg(allow_negative_numbers = true, value_parser = parse_number)]
    numbers: Vec<i128>,

    /// Spell out every integer inside this text instead
    #[arg(short, long, conflicts_with = "numbers")]
    text: Option<String>,

    /// Print one JSON object per input
    #[arg(long)]
    json: bool,

    /// Path to config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lexicon file, overriding the config
    #[arg(short, long)]
    lexicon: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Rendering<'a> {
    input: i128,
    text: &'a str,
}

fn parse_number(s: &str) -> Result<i128, String> {
    parse_integer(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = SpellerConfig::load(args.config.as_deref()).context("Failed to load config")?;

    // Logs go to stderr; stdout carries renderings only
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.verbose, &config.log_filter)?)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(args, config, stdin.lock(), stdout.lock())
}

/// `RUST_LOG` wins, then `--verbose`, then the configured directive
fn log_filter(verbose: bool, configured: &str) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    if verbose {
        return Ok(EnvFilter::new("debug"));
    }
    EnvFilter::try_new(configured)
        .with_context(|| format!("Invalid log_filter '{configured}' in config"))
}

fn run(
    args: Args,
    mut config: SpellerConfig,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    if let Some(lexicon) = args.lexicon {
        config.lexicon = Some(lexicon);
    }
    if args.json {
        config.output = OutputFormat::Json;
    }
    debug!("Effective config: {:?}", config);

    let renderer = config.build_renderer().context("Failed to load lexicon")?;

    if let Some(text) = args.text {
        writeln!(out, "{}", renderer.normalize_text(&text))?;
        return Ok(());
    }

    if !args.numbers.is_empty() {
        let rendered = renderer.render_all(&args.numbers);
        for (&input, text) in args.numbers.iter().zip(&rendered) {
            emit(&mut out, config.output, input, text)?;
        }
        return Ok(());
    }

    for line in input.lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_integer(&line) {
            Ok(value) => {
                emit(&mut out, config.output, value, &renderer.render_number(value))?;
            }
            Err(e) => warn!("Skipping line: {}", e),
        }
    }

    Ok(())
}

fn emit(
    out: &mut impl Write,
    format: OutputFormat,
    input: i128,
    text: &str,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{text}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &Rendering { input, text })?;
            writeln!(out)?;
        }
    }
    Ok(())
}
