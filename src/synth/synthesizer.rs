//! The fixture synthesizer
//!
//! One straight pass: time axis, clean tone, noise, sum, hard clip,
//! quantize, write.

use std::io::Cursor;

use log::{debug, info, warn};

use crate::audio::io::{expected_file_len, write_pcm16, write_pcm16_to};
use crate::error::{Result, ToneError};
use crate::report::SynthesisReport;
use crate::synth::noise::NoiseSource;
use crate::synth::params::SynthParams;
use crate::synth::signal::{hard_clip, mix, quantize_i16, sine_tone, time_axis};

/// Quantized output of one synthesis pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedClip {
    /// Mono 16-bit samples, one per timestamp
    pub samples: Vec<i16>,
    /// How many composite samples the hard clip had to limit
    pub clipped_samples: usize,
}

/// Sine-plus-noise fixture generator
#[derive(Debug, Clone)]
pub struct AudioSynthesizer {
    params: SynthParams,
}

impl AudioSynthesizer {
    /// Validate `params` and build a synthesizer
    pub fn new(params: SynthParams) -> Result<Self> {
        params.validate()?;

        if params.tone_frequency >= params.nyquist() {
            warn!(
                "Tone at {} Hz is at or above Nyquist ({} Hz) and will alias",
                params.tone_frequency,
                params.nyquist()
            );
        }

        Ok(AudioSynthesizer { params })
    }

    /// Parameters the synthesizer was validated with
    pub fn params(&self) -> &SynthParams {
        &self.params
    }

    /// Generate the quantized samples without touching the filesystem
    pub fn render(&self, noise: &mut NoiseSource) -> Result<RenderedClip> {
        let p = &self.params;
        let n = p.num_samples();

        let times = time_axis(n, p.duration_secs);
        let clean = sine_tone(&times, p.tone_frequency, p.tone_amplitude);
        let noise = noise.gaussian_noise(times.len(), p.noise_amplitude);

        let mut composite = mix(&clean, &noise)?;
        let clipped_samples = hard_clip(&mut composite);
        let samples = quantize_i16(&composite);

        if samples.len() != n {
            return Err(ToneError::LengthMismatch {
                expected: n,
                actual: samples.len(),
            });
        }

        debug!(
            "Rendered {} samples ({} clipped) for {}s at {} Hz",
            n, clipped_samples, p.duration_secs, p.sample_rate
        );

        Ok(RenderedClip {
            samples,
            clipped_samples,
        })
    }

    /// Render with `noise` and write the result to `params.output`
    pub fn write(&self, noise: &mut NoiseSource) -> Result<SynthesisReport> {
        let clip = self.render(noise)?;
        let p = &self.params;

        write_pcm16(&p.output, &clip.samples, p.sample_rate)?;

        info!(
            "Wrote {} ({} samples, {} bytes)",
            p.output.display(),
            clip.samples.len(),
            expected_file_len(clip.samples.len())
        );

        Ok(SynthesisReport::new(p, &clip))
    }

    /// Render with `noise` into a complete WAV image held in memory
    ///
    /// The bytes are identical to what [`AudioSynthesizer::write`] puts on
    /// disk for the same noise stream; `params.output` is ignored.
    pub fn render_wav_bytes(&self, noise: &mut NoiseSource) -> Result<Vec<u8>> {
        let clip = self.render(noise)?;
        let mut cursor = Cursor::new(Vec::with_capacity(
            expected_file_len(clip.samples.len()) as usize,
        ));

        write_pcm16_to(&mut cursor, &clip.samples, self.params().sample_rate)?;

        let bytes = cursor.into_inner();
        debug!("Rendered {}-byte WAV image in memory", bytes.len());
        Ok(bytes)
    }

    /// Render with the configured seed (or OS entropy) and write the file
    pub fn generate(&self) -> Result<SynthesisReport> {
        let mut noise = NoiseSource::from_seed_option(self.params.seed);
        self.write(&mut noise)
    }
}

/// Generate the noisy test fixture described by `params`
///
/// # Errors
/// * `InvalidParameter` / `EmptySignal` - degenerate parameters
/// * `AudioWrite` - the output path cannot be written
pub fn generate_test_audio(params: &SynthParams) -> Result<SynthesisReport> {
    AudioSynthesizer::new(params.clone())?.generate()
}

/// Build the fixture described by `params` as WAV bytes, without a file
///
/// Uses `params.seed` when set, OS entropy otherwise.
pub fn fixture_wav_bytes(params: &SynthParams) -> Result<Vec<u8>> {
    let synth = AudioSynthesizer::new(params.clone())?;
    let mut noise = NoiseSource::from_seed_option(synth.params().seed);
    synth.render_wav_bytes(&mut noise)
}
