//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;

use crate::cli::{Commands, GenerateArgs};
use crate::error::Result;
use crate::report::{InspectionReport, SynthesisReport};
use crate::synth::generate_test_audio;

/// Dispatch a parsed command; `None` runs the default generation
pub fn run(command: Option<Commands>) -> Result<()> {
    match command {
        None => generate(&GenerateArgs::default()).map(|_| ()),
        Some(Commands::Generate(args)) => generate(&args).map(|_| ()),
        Some(Commands::Inspect { path, json }) => inspect(&path, json).map(|_| ()),
    }
}

/// Generate a fixture and print its summary (or JSON report).
pub fn generate(args: &GenerateArgs) -> Result<SynthesisReport> {
    let params = args.to_params();
    info!(
        "Generating {}s of {} Hz tone + noise at {} Hz",
        params.duration_secs, params.tone_frequency, params.sample_rate
    );

    let report = generate_test_audio(&params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(report)
}

/// Inspect an existing WAV file.
pub fn inspect(path: &Path, json: bool) -> Result<InspectionReport> {
    info!("Inspecting: {}", path.display());

    let report = InspectionReport::from_file(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(report)
}
