//! Run summary
//!
//! `Display` renders the five-line human summary; `Serialize` backs `--json`.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::audio::io::{expected_file_len, read_pcm16, WavInfo, SAMPLE_WIDTH};
use crate::audio::verification::{file_sha256, inspect_wav, SignalStats};
use crate::error::{Result, ToneError};
use crate::synth::{RenderedClip, SynthParams};

/// What a synthesis run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisReport {
    pub output: PathBuf,
    pub duration_secs: f64,
    pub sample_rate: u32,
    pub tone_frequency: f64,
    pub tone_amplitude: f64,
    pub noise_amplitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub num_samples: usize,
    /// Composite samples limited by the hard clip
    pub clipped_samples: usize,
    /// Size of the PCM data chunk
    pub data_bytes: u64,
    /// Size of the whole file including the header
    pub file_bytes: u64,
    pub generated_at: DateTime<Utc>,
}

impl SynthesisReport {
    pub fn new(params: &SynthParams, clip: &RenderedClip) -> Self {
        let num_samples = clip.samples.len();
        SynthesisReport {
            output: params.output.clone(),
            duration_secs: params.duration_secs,
            sample_rate: params.sample_rate,
            tone_frequency: params.tone_frequency,
            tone_amplitude: params.tone_amplitude,
            noise_amplitude: params.noise_amplitude,
            seed: params.seed,
            num_samples,
            clipped_samples: clip.clipped_samples,
            data_bytes: num_samples as u64 * SAMPLE_WIDTH as u64,
            file_bytes: expected_file_len(num_samples),
            generated_at: Utc::now(),
        }
    }

    /// The summary as individual lines
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Generated: {}", self.output.display()),
            format!("  Duration: {:?}s", self.duration_secs),
            format!("  Sample rate: {} Hz", self.sample_rate),
            format!("  Signal: {} Hz sine wave", self.tone_frequency),
            "  Noise: White noise added".to_string(),
        ]
    }
}

impl fmt::Display for SynthesisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary_lines().join("\n"))
    }
}

/// Header, levels and checksum of an existing WAV file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionReport {
    pub path: PathBuf,
    pub header: WavInfo,
    pub duration_secs: f64,
    pub file_bytes: u64,
    /// Only measured for mono 16-bit PCM
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SignalStats>,
    pub sha256: String,
}

impl InspectionReport {
    /// Inspect a WAV file on disk
    ///
    /// Level statistics are skipped for files that are not mono 16-bit PCM.
    pub fn from_file(path: &Path) -> Result<Self> {
        let header = inspect_wav(path)?;
        let stats = match read_pcm16(path) {
            Ok((_, samples)) => Some(SignalStats::from_samples(&samples)),
            Err(ToneError::UnsupportedFormat { .. }) => None,
            Err(e) => return Err(e),
        };

        Ok(InspectionReport {
            path: path.to_path_buf(),
            header,
            duration_secs: header.duration_secs(),
            file_bytes: std::fs::metadata(path)?.len(),
            stats,
            sha256: file_sha256(path)?,
        })
    }
}

impl fmt::Display for InspectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {}", self.path.display())?;
        writeln!(f, "  Channels: {}", self.header.channels)?;
        writeln!(f, "  Sample width: {} bytes", self.header.sample_width)?;
        writeln!(f, "  Frame rate: {} Hz", self.header.frame_rate)?;
        writeln!(
            f,
            "  Frames: {} ({:.3}s)",
            self.header.num_frames, self.duration_secs
        )?;
        writeln!(f, "  Size: {} bytes", self.file_bytes)?;
        if let Some(stats) = &self.stats {
            writeln!(f, "  Levels: {}", stats.summary())?;
        }
        write!(f, "  SHA-256: {}", self.sha256)
    }
}
