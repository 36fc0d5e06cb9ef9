//! noisy-tone CLI
//!
//! With no arguments, writes `test_noisy.wav`: 5 s of a 440 Hz tone plus
//! white noise at 44.1 kHz, mono 16-bit.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;

use noisy_tone::cli::{commands, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("noisy-tone v{}", env!("CARGO_PKG_VERSION"));

    commands::run(cli.command).context("noisy-tone failed")
}
