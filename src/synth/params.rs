//! Synthesis parameters
//!
//! Defaults reproduce the reference fixture: `test_noisy.wav`, 5 seconds of a
//! 440 Hz tone at 0.3 amplitude over 0.15 amplitude white noise, 44.1 kHz.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToneError};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "test_noisy.wav";
/// Default clip length in seconds
pub const DEFAULT_DURATION_SECS: f64 = 5.0;
/// Default sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
/// A4
pub const DEFAULT_TONE_FREQUENCY: f64 = 440.0;
pub const DEFAULT_TONE_AMPLITUDE: f64 = 0.3;
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 0.15;

/// Largest mono 16-bit clip whose RIFF data chunk still fits a u32 size field
pub const MAX_SAMPLES: usize = ((u32::MAX - 36) / 2) as usize;

/// Parameters for one synthesis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthParams {
    /// Where the WAV file is written
    pub output: PathBuf,
    /// Clip length in seconds
    pub duration_secs: f64,
    /// Frame rate in Hz
    pub sample_rate: u32,
    /// Sine tone frequency in Hz
    pub tone_frequency: f64,
    /// Peak amplitude of the tone (full scale = 1.0)
    pub tone_amplitude: f64,
    /// Standard deviation of the white noise (full scale = 1.0)
    pub noise_amplitude: f64,
    /// Noise seed; `None` draws a fresh seed from the OS on every run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SynthParams {
    fn default() -> Self {
        SynthParams {
            output: PathBuf::from(DEFAULT_OUTPUT),
            duration_secs: DEFAULT_DURATION_SECS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            tone_frequency: DEFAULT_TONE_FREQUENCY,
            tone_amplitude: DEFAULT_TONE_AMPLITUDE,
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
            seed: None,
        }
    }
}

impl SynthParams {
    /// Default parameters writing to `output`
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        SynthParams {
            output: output.into(),
            ..Default::default()
        }
    }

    /// Builder-style seed override
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of samples the run will produce: round(sample_rate x duration)
    pub fn num_samples(&self) -> usize {
        sample_count(self.sample_rate, self.duration_secs)
    }

    /// Reject parameters that would produce a degenerate or invalid signal
    ///
    /// # Errors
    /// * `InvalidParameter` - non-positive or non-finite duration/frequency,
    ///   zero sample rate, negative or non-finite amplitudes, or more samples
    ///   than a 16-bit mono WAV data chunk can hold
    /// * `EmptySignal` - the sample count rounds to zero
    pub fn validate(&self) -> Result<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(ToneError::invalid(
                "duration_secs",
                format!("must be a positive number of seconds, got {}", self.duration_secs),
            ));
        }

        if self.sample_rate == 0 {
            return Err(ToneError::invalid("sample_rate", "must be greater than zero"));
        }

        if !self.tone_frequency.is_finite() || self.tone_frequency <= 0.0 {
            return Err(ToneError::invalid(
                "tone_frequency",
                format!("must be a positive frequency in Hz, got {}", self.tone_frequency),
            ));
        }

        check_amplitude("tone_amplitude", self.tone_amplitude)?;
        check_amplitude("noise_amplitude", self.noise_amplitude)?;

        // Compared in f64 before sample_count's saturating cast
        let requested = (self.sample_rate as f64 * self.duration_secs).round();
        if requested > MAX_SAMPLES as f64 {
            return Err(ToneError::invalid(
                "duration_secs",
                format!(
                    "{}s at {} Hz needs {} samples, more than a WAV file holds ({})",
                    self.duration_secs, self.sample_rate, requested, MAX_SAMPLES
                ),
            ));
        }

        if self.num_samples() == 0 {
            return Err(ToneError::EmptySignal {
                sample_rate: self.sample_rate,
                duration_secs: self.duration_secs,
            });
        }

        Ok(())
    }

    /// Nyquist limit for the configured sample rate
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }
}

/// round(sample_rate x duration), clamped at zero for negative durations
pub fn sample_count(sample_rate: u32, duration_secs: f64) -> usize {
    let n = (sample_rate as f64 * duration_secs).round();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

fn check_amplitude(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ToneError::invalid(
            name,
            format!("must be a non-negative finite amplitude, got {}", value),
        ));
    }
    Ok(())
}
