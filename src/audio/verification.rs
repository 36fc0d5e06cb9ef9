//! Fixture verification
//!
//! Objective checks on a written fixture so it can be trusted without
//! listening to it.
//!
//! # Measurements
//! - Header fields (channels, sample width, frame rate, frame count)
//! - Peak and RMS level
//! - Clipped-sample count
//! - DC offset
//! - SHA-256 of the file

use std::fs;
use std::io::Read;
use std::path::Path;

use hound::WavReader;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::audio::io::{info_from_spec, WavInfo};
use crate::error::{Result, ToneError};

/// Sample magnitude treated as clipped
const CLIP_LEVEL: i16 = 32767;

/// Convert linear amplitude to decibels
pub fn linear_to_db(linear: f64) -> f64 {
    if linear <= 0.0 {
        f64::NEG_INFINITY
    } else {
        20.0 * linear.log10()
    }
}

/// Read only the header of a WAV file
///
/// Works for any WAV file hound can parse, not only the mono 16-bit files
/// this crate writes.
pub fn inspect_wav<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let path = path.as_ref();
    let reader = WavReader::open(path).map_err(|e| ToneError::AudioRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(info_from_spec(&reader.spec(), reader.duration()))
}

/// SHA-256 of a file as lowercase hex
pub fn file_sha256<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Level measurements over 16-bit samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalStats {
    /// Number of samples measured
    pub num_samples: usize,
    /// Smallest sample value
    pub min: i16,
    /// Largest sample value
    pub max: i16,
    /// Peak magnitude, full scale = 1.0
    pub peak_linear: f64,
    /// RMS level, full scale = 1.0
    pub rms_linear: f64,
    /// RMS level in dBFS
    pub rms_db: f64,
    /// Samples sitting at +/- full scale
    pub clipped_samples: usize,
    /// Mean sample value, full scale = 1.0
    pub dc_offset: f64,
}

impl SignalStats {
    /// Measure a buffer; an empty buffer reports silence
    pub fn from_samples(samples: &[i16]) -> Self {
        if samples.is_empty() {
            return SignalStats {
                num_samples: 0,
                min: 0,
                max: 0,
                peak_linear: 0.0,
                rms_linear: 0.0,
                rms_db: f64::NEG_INFINITY,
                clipped_samples: 0,
                dc_offset: 0.0,
            };
        }

        let scale = CLIP_LEVEL as f64;
        let n = samples.len() as f64;

        let min = samples.iter().copied().min().unwrap_or(0);
        let max = samples.iter().copied().max().unwrap_or(0);
        let peak = samples
            .iter()
            .map(|&s| (s as i32).abs())
            .max()
            .unwrap_or(0);

        let sum_sq: f64 = samples.iter().map(|&s| (s as f64 / scale).powi(2)).sum();
        let sum: f64 = samples.iter().map(|&s| s as f64 / scale).sum();
        let rms_linear = (sum_sq / n).sqrt();

        SignalStats {
            num_samples: samples.len(),
            min,
            max,
            peak_linear: peak as f64 / scale,
            rms_linear,
            rms_db: linear_to_db(rms_linear),
            clipped_samples: samples
                .iter()
                .filter(|&&s| (s as i32).abs() >= CLIP_LEVEL as i32)
                .count(),
            dc_offset: sum / n,
        }
    }

    /// True when every sample is within [-32767, 32767]
    pub fn within_pcm16_range(&self) -> bool {
        self.min >= -CLIP_LEVEL && self.max <= CLIP_LEVEL
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Peak: {:.3} | RMS: {:.1} dBFS | Clipped: {} | DC: {:.4}",
            self.peak_linear, self.rms_db, self.clipped_samples, self.dc_offset
        )
    }
}
