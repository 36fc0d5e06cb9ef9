//! noisy-tone - Noisy Sine-Tone Fixture Generator
//!
//! Writes a short mono WAV clip holding a sine tone buried in white noise,
//! for exercising noise-reduction tooling by hand.
//!
//! # Pipeline
//!
//! 1. Time axis: round(sample_rate x duration) points over [0, duration]
//! 2. Clean tone: 0.3 x sin(2 pi 440 t)
//! 3. Noise: N(0, 1) draws scaled by 0.15
//! 4. Sum, hard clip to [-1, 1], quantize to i16 (x 32767, truncating)
//! 5. Write mono 16-bit PCM WAV
//!
//! ```no_run
//! use noisy_tone::{generate_test_audio, SynthParams};
//!
//! let report = generate_test_audio(&SynthParams::default())?;
//! println!("{}", report);
//! # Ok::<(), noisy_tone::ToneError>(())
//! ```

pub mod audio;
pub mod cli;
pub mod error;
pub mod report;
pub mod synth;

pub use error::{Result, ToneError};
pub use report::{InspectionReport, SynthesisReport};
pub use synth::{
    fixture_wav_bytes, generate_test_audio, AudioSynthesizer, NoiseSource, SynthParams,
};
