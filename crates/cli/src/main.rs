//! Prefetch window simulator CLI.
//!
//! Streams a program image through the two-wide prefetch window and
//! reports fetch/issue statistics. It performs:
//! 1. **Image run:** Load a flat binary or ELF, reset the window to its
//!    start, and simulate for a fixed number of steps.
//! 2. **Tracing:** Optional per-step window dumps on stderr.
//! 3. **Reporting:** Text report or JSON statistics on stdout.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use pfsim_core::common::{InstAddr, SimError};
use pfsim_core::config::Config;
use pfsim_core::sim::{loader, LineMemory, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "pfsim",
    author,
    version,
    about = "Cycle-accurate instruction prefetch window simulator",
    long_about = "Stream a program image through a two-wide, four-slot prefetch window \
and report how the fetch and issue streams behaved.\n\nExamples:\n  \
pfsim program.bin\n  pfsim program.elf --steps 2000 --trace\n  \
pfsim program.bin --base 0x1000 --json"
)]
struct Cli {
    /// Program image to stream (flat binary or ELF).
    file: PathBuf,

    /// JSON configuration file (built-in defaults when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of steps to simulate (overrides the configured maximum).
    #[arg(short, long)]
    steps: Option<u64>,

    /// Load address and reset vector for flat binaries (hex with 0x, or
    /// decimal). ELF images use their entry point instead.
    #[arg(short, long, value_parser = parse_addr)]
    base: Option<u32>,

    /// Emit the per-step window dump on stderr.
    #[arg(long)]
    trace: bool,

    /// Print statistics as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn parse_addr(text: &str) -> Result<u32, String> {
    let trimmed = text.trim();
    let parsed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .map_or_else(|| trimmed.parse(), |hex| u32::from_str_radix(hex, 16));
    parsed.map_err(|e| format!("invalid address '{trimmed}': {e}"))
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("pfsim: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| SimError::Read {
                path: path.display().to_string(),
                source,
            })?;
            Config::from_json(&text)?
        }
        None => Config::default(),
    };

    if let Some(steps) = cli.steps {
        config.general.max_steps = steps;
    }
    if cli.trace {
        config.general.trace_window = true;
    }
    if config.general.trace_window {
        install_trace_subscriber();
    }

    let mut memory = LineMemory::from_config(&config.memory);
    let image = loader::read_image(&cli.file.display().to_string())?;
    let base = cli.base.unwrap_or(config.general.reset_vector);
    let start = loader::place_image(&mut memory, &image, InstAddr::new(base))?;
    config.general.reset_vector = start.val();

    let mut sim = Simulator::new(&config, Box::new(memory));
    sim.run(config.general.max_steps);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(sim.stats())?);
    } else {
        sim.stats().print();
    }
    Ok(())
}

fn install_trace_subscriber() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pfsim=trace"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
