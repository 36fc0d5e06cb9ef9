//! Noisy sine-tone synthesis
//!
//! Builds the fixture signal from a 440 Hz tone and Gaussian white noise,
//! then quantizes it to 16-bit PCM.

pub mod noise;
pub mod params;
pub mod signal;
mod synthesizer;

pub use noise::NoiseSource;
pub use params::{sample_count, SynthParams};
pub use signal::{hard_clip, mix, quantize_i16, sine_tone, time_axis};
pub use synthesizer::{fixture_wav_bytes, generate_test_audio, AudioSynthesizer, RenderedClip};
