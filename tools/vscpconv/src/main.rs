//! vscpconv - VSCP numeric payload inspector
//!
//! Converts between raw payload bytes and numbers from the command line,
//! using the same coercion rules as the host binding.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vscp_codec::HostBinding;

use crate::commands::Commands;
use crate::config::{CliConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "vscpconv")]
#[command(about = "Convert VSCP payload bytes to and from numbers")]
#[command(long_about = "Convert VSCP payload bytes to and from numbers

Examples:
  vscpconv decode-uint 0x01 0x00          # 256
  vscpconv decode-int --sign-mode twos-complement 0xFF 0xFE
  vscpconv encode-double 21.5 --output hex
  vscpconv --hex decode-float 00 00 c0 3f")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./vscpconv.yaml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Read bare byte arguments as hex
    #[arg(long, global = true)]
    hex: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

fn init_logging(verbose: bool, configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { configured })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config.log_level);
    debug!(?config, "configuration loaded");

    let format = cli.output.unwrap_or(config.output);
    let binding = HostBinding::new(config.sign_mode);

    let rendered = commands::execute(&cli.command, binding, cli.hex)?;
    println!("{}", rendered.render(format));
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "ERROR".red(), e);
        std::process::exit(1);
    }
}
