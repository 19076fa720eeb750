//! Postgrid - evaluate a sheet of postfix arithmetic cells.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use log::debug;
use postgrid_core::{Config, Document};

#[derive(Parser, Debug)]
#[command(name = "postgrid", version, about = "Evaluate a sheet of postfix expressions")]
struct Cli {
    /// Sheet file: one row per line, cells separated by commas
    input: PathBuf,

    /// Write results to this file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load settings from a TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Deepest chain of cell references to follow before a cell fails
    #[arg(long)]
    max_depth: Option<usize>,

    /// Report reference cycles before evaluating
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
        if let Err(message) = config.validate() {
            bail!("--max-depth: {}", message);
        }
    }
    if cli.check {
        config.check_cycles = true;
    }
    debug!("using {:?}", config);
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let mut doc = Document::open(&cli.input, config)?;

    match &cli.output {
        Some(path) => doc.save(path)?,
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            doc.write_to(&mut out).context("Failed to write results to stdout")?;
        }
    }

    debug!("ran {} cell programs", doc.sheet.evaluations());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
