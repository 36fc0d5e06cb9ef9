//! Whole-buffer signal stages: time axis, tone, mix, clip, quantize

use std::f64::consts::PI;

use crate::error::{Result, ToneError};

/// Full-scale value for 16-bit PCM; -32768 is never produced
pub const PCM16_FULL_SCALE: f64 = 32767.0;

/// `num_samples` evenly spaced timestamps over [0, duration], both ends included
///
/// A single sample sits at 0.0.
pub fn time_axis(num_samples: usize, duration_secs: f64) -> Vec<f64> {
    match num_samples {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let step = duration_secs / (n - 1) as f64;
            let mut axis: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
            // Pin the endpoint so rounding in the step never overshoots it
            axis[n - 1] = duration_secs;
            axis
        }
    }
}

/// amplitude x sin(2 pi f t) for every timestamp
pub fn sine_tone(times: &[f64], frequency: f64, amplitude: f64) -> Vec<f64> {
    let omega = 2.0 * PI * frequency;
    times.iter().map(|&t| amplitude * (omega * t).sin()).collect()
}

/// Elementwise sum of two equally long buffers
pub fn mix(clean: &[f64], noise: &[f64]) -> Result<Vec<f64>> {
    if clean.len() != noise.len() {
        return Err(ToneError::LengthMismatch {
            expected: clean.len(),
            actual: noise.len(),
        });
    }

    Ok(clean.iter().zip(noise).map(|(c, n)| c + n).collect())
}

/// Hard-limit every sample to [-1.0, 1.0]
///
/// Returns the number of samples that were out of range.
pub fn hard_clip(signal: &mut [f64]) -> usize {
    let mut clipped = 0;
    for sample in signal.iter_mut() {
        if *sample > 1.0 || *sample < -1.0 {
            clipped += 1;
            *sample = sample.clamp(-1.0, 1.0);
        }
    }
    clipped
}

/// Scale by 32767 and truncate toward zero
///
/// Input is expected to be clipped already; anything outside [-1, 1]
/// saturates at the i16 bounds.
pub fn quantize_i16(signal: &[f64]) -> Vec<i16> {
    signal
        .iter()
        .map(|&s| (s * PCM16_FULL_SCALE) as i16)
        .collect()
}
