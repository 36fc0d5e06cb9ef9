//! CLI Module
//!
//! Command-line interface for the fixture generator. Running with no
//! arguments generates the default fixture.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::synth::params::{
    SynthParams, DEFAULT_DURATION_SECS, DEFAULT_NOISE_AMPLITUDE, DEFAULT_OUTPUT,
    DEFAULT_SAMPLE_RATE, DEFAULT_TONE_AMPLITUDE, DEFAULT_TONE_FREQUENCY,
};

/// noisy-tone - sine tone plus white noise WAV fixture generator
#[derive(Parser, Debug)]
#[command(name = "noisy-tone")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a noisy sine-tone WAV file
    #[command(name = "generate")]
    Generate(GenerateArgs),

    /// Print header fields, levels and checksum of a WAV file
    #[command(name = "inspect")]
    Inspect {
        /// WAV file to inspect
        path: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for `generate`
#[derive(Args, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Output file path (.wav)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Duration in seconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION_SECS)]
    pub duration: f64,

    /// Sample rate in Hz
    #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Tone frequency in Hz
    #[arg(long, default_value_t = DEFAULT_TONE_FREQUENCY)]
    pub frequency: f64,

    /// Tone amplitude (full scale = 1.0)
    #[arg(long, default_value_t = DEFAULT_TONE_AMPLITUDE)]
    pub tone_amplitude: f64,

    /// Noise standard deviation (full scale = 1.0)
    #[arg(long, default_value_t = DEFAULT_NOISE_AMPLITUDE)]
    pub noise_amplitude: f64,

    /// Seed for reproducible noise (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        GenerateArgs::from(SynthParams::default())
    }
}

impl From<SynthParams> for GenerateArgs {
    fn from(params: SynthParams) -> Self {
        GenerateArgs {
            output: params.output,
            duration: params.duration_secs,
            sample_rate: params.sample_rate,
            frequency: params.tone_frequency,
            tone_amplitude: params.tone_amplitude,
            noise_amplitude: params.noise_amplitude,
            seed: params.seed,
            json: false,
        }
    }
}

impl GenerateArgs {
    /// Synthesis parameters these options describe
    pub fn to_params(&self) -> SynthParams {
        SynthParams {
            output: self.output.clone(),
            duration_secs: self.duration,
            sample_rate: self.sample_rate,
            tone_frequency: self.frequency,
            tone_amplitude: self.tone_amplitude,
            noise_amplitude: self.noise_amplitude,
            seed: self.seed,
        }
    }
}
