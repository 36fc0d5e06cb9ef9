//! Integration Tests
//!
//! End-to-end tests for fixture generation: parameters in, WAV file out.

use std::f64::consts::PI;
use std::fs;

use approx::assert_abs_diff_eq;
use noisy_tone::audio::{
    expected_file_len, file_sha256, inspect_wav, read_pcm16, SignalStats, WAV_HEADER_LEN,
};
use noisy_tone::{
    fixture_wav_bytes, generate_test_audio, AudioSynthesizer, NoiseSource, SynthParams, ToneError,
};
use tempfile::tempdir;
use test_case::test_case;

// === Reference Fixture ===

#[test]
fn test_reference_fixture_layout() {
    let dir = tempdir().unwrap();
    let params = SynthParams::with_output(dir.path().join("test_noisy.wav"));

    let report = generate_test_audio(&params).unwrap();

    assert_eq!(report.num_samples, 220_500);
    assert_eq!(report.data_bytes, 441_000);

    let info = inspect_wav(&params.output).unwrap();
    assert_eq!(info.channels, 1);
    assert_eq!(info.sample_width, 2);
    assert_eq!(info.frame_rate, 44100);
    assert_eq!(info.num_frames, 220_500);
    assert_eq!(info.data_len(), 441_000);

    let file_len = fs::metadata(&params.output).unwrap().len();
    assert_eq!(file_len, WAV_HEADER_LEN + 441_000);
    assert_eq!(file_len, report.file_bytes);
}

#[test]
fn test_reference_fixture_levels() {
    let dir = tempdir().unwrap();
    let params = SynthParams::with_output(dir.path().join("levels.wav")).seeded(2024);
    generate_test_audio(&params).unwrap();

    let (_, samples) = read_pcm16(&params.output).unwrap();
    let stats = SignalStats::from_samples(&samples);

    // Tone power 0.3^2 / 2 plus noise power 0.15^2
    let expected_rms = (0.3_f64.powi(2) / 2.0 + 0.15_f64.powi(2)).sqrt();
    assert_abs_diff_eq!(stats.rms_linear, expected_rms, epsilon = 0.01);
    assert_abs_diff_eq!(stats.dc_offset, 0.0, epsilon = 0.01);
    assert!(stats.within_pcm16_range());
}

#[test]
fn test_tone_is_present_under_noise() {
    let dir = tempdir().unwrap();
    let params = SynthParams::with_output(dir.path().join("tone.wav")).seeded(8);
    generate_test_audio(&params).unwrap();

    let (_, samples) = read_pcm16(&params.output).unwrap();
    let n = samples.len();
    let step = params.duration_secs / (n - 1) as f64;

    // Project onto the 440 Hz reference; noise averages out, tone does not
    let (mut re, mut im) = (0.0, 0.0);
    for (i, &s) in samples.iter().enumerate() {
        let phase = 2.0 * PI * 440.0 * i as f64 * step;
        let x = s as f64 / 32767.0;
        re += x * phase.sin();
        im += x * phase.cos();
    }
    let amplitude = 2.0 * (re * re + im * im).sqrt() / n as f64;

    assert_abs_diff_eq!(amplitude, 0.3, epsilon = 0.01);
}

// === Invariants ===

#[test_case(44100, 5.0 ; "reference")]
#[test_case(48000, 0.75 ; "48k")]
#[test_case(8000, 2.0 ; "8k")]
#[test_case(22050, 0.123 ; "odd duration")]
#[test_case(1, 3.0 ; "one hertz")]
fn test_sample_count_and_header(sample_rate: u32, duration: f64) {
    let dir = tempdir().unwrap();
    let params = SynthParams {
        output: dir.path().join("case.wav"),
        duration_secs: duration,
        sample_rate,
        ..SynthParams::default()
    };
    let expected = (sample_rate as f64 * duration).round() as usize;

    let report = generate_test_audio(&params).unwrap();
    let (info, samples) = read_pcm16(&params.output).unwrap();

    assert_eq!(samples.len(), expected);
    assert_eq!(report.num_samples, expected);
    assert_eq!(info.channels, 1);
    assert_eq!(info.sample_width, 2);
    assert_eq!(info.frame_rate, sample_rate);
    assert_eq!(
        fs::metadata(&params.output).unwrap().len(),
        expected_file_len(expected)
    );
}

#[test]
fn test_heavy_noise_never_wraps() {
    let dir = tempdir().unwrap();
    let params = SynthParams {
        output: dir.path().join("hot.wav"),
        duration_secs: 1.0,
        noise_amplitude: 3.0,
        ..SynthParams::default()
    }
    .seeded(77);

    let report = generate_test_audio(&params).unwrap();
    let (_, samples) = read_pcm16(&params.output).unwrap();

    assert!(report.clipped_samples > 0);
    assert!(samples.iter().all(|&s| s != i16::MIN));
    assert_eq!(samples.iter().copied().max(), Some(32767));
    assert_eq!(samples.iter().copied().min(), Some(-32767));
}

// === Reproducibility ===

#[test]
fn test_unseeded_runs_same_length_different_content() {
    let dir = tempdir().unwrap();
    let first = SynthParams::with_output(dir.path().join("a.wav"));
    let second = SynthParams::with_output(dir.path().join("b.wav"));

    generate_test_audio(&first).unwrap();
    generate_test_audio(&second).unwrap();

    let len_a = fs::metadata(&first.output).unwrap().len();
    let len_b = fs::metadata(&second.output).unwrap().len();
    assert_eq!(len_a, len_b);
    assert_ne!(
        file_sha256(&first.output).unwrap(),
        file_sha256(&second.output).unwrap()
    );
}

#[test]
fn test_seeded_runs_are_byte_identical() {
    let dir = tempdir().unwrap();
    let first = SynthParams::with_output(dir.path().join("a.wav")).seeded(5);
    let second = SynthParams::with_output(dir.path().join("b.wav")).seeded(5);

    generate_test_audio(&first).unwrap();
    generate_test_audio(&second).unwrap();

    assert_eq!(
        fs::read(&first.output).unwrap(),
        fs::read(&second.output).unwrap()
    );
}

#[test]
fn test_injected_noise_source_matches_seeded_params() {
    let dir = tempdir().unwrap();
    let params = SynthParams::with_output(dir.path().join("inj.wav")).seeded(31);
    let synth = AudioSynthesizer::new(params.clone()).unwrap();

    synth.write(&mut NoiseSource::seeded(31)).unwrap();
    let injected = fs::read(&params.output).unwrap();

    synth.generate().unwrap();
    let from_params = fs::read(&params.output).unwrap();

    assert_eq!(injected, from_params);
}

#[test]
fn test_in_memory_fixture_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let params = SynthParams {
        output: dir.path().join("never_written.wav"),
        duration_secs: 1.0,
        ..SynthParams::default()
    }
    .seeded(12345);

    let bytes = fixture_wav_bytes(&params).unwrap();
    assert!(!params.output.exists());
    assert_eq!(bytes.len() as u64, expected_file_len(44100));

    // Hand the image to a consumer the way a reducer test would
    let staged = dir.path().join("staged.wav");
    fs::write(&staged, &bytes).unwrap();
    let (info, samples) = read_pcm16(&staged).unwrap();
    assert_eq!(info.frame_rate, 44100);
    assert_eq!(samples.len(), 44100);

    generate_test_audio(&params).unwrap();
    assert_eq!(fs::read(&params.output).unwrap(), bytes);
}

#[test]
fn test_regenerate_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("again.wav");
    fs::write(&path, vec![0xAB; 1_000_000]).unwrap();

    let params = SynthParams {
        output: path.clone(),
        duration_secs: 0.1,
        sample_rate: 8000,
        ..SynthParams::default()
    };
    generate_test_audio(&params).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), expected_file_len(800));
}

// === Failure Surfaces ===

#[test]
fn test_zero_duration_is_rejected() {
    let dir = tempdir().unwrap();
    let params = SynthParams {
        output: dir.path().join("zero.wav"),
        duration_secs: 0.0,
        ..SynthParams::default()
    };

    let err = generate_test_audio(&params).unwrap_err();
    assert!(matches!(err, ToneError::InvalidParameter { .. }));
    assert!(!params.output.exists());
}

#[test]
fn test_zero_sample_rate_is_rejected() {
    let params = SynthParams {
        sample_rate: 0,
        ..SynthParams::default()
    };
    let err = generate_test_audio(&params).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_PARAMETER");
}

#[test_case(1e15 ; "count would saturate")]
#[test_case(1e5 ; "data chunk over four gigabytes")]
fn test_overlong_duration_is_rejected_before_rendering(duration: f64) {
    let dir = tempdir().unwrap();
    let params = SynthParams {
        output: dir.path().join("huge.wav"),
        duration_secs: duration,
        ..SynthParams::default()
    };

    let err = generate_test_audio(&params).unwrap_err();
    assert!(matches!(
        err,
        ToneError::InvalidParameter {
            name: "duration_secs",
            ..
        }
    ));
    assert!(AudioSynthesizer::new(params.clone()).is_err());
    assert!(!params.output.exists());
}

#[test]
fn test_unwritable_path_is_fatal() {
    let dir = tempdir().unwrap();
    let params = SynthParams::with_output(dir.path().join("missing").join("out.wav"));

    let err = generate_test_audio(&params).unwrap_err();
    assert!(matches!(err, ToneError::AudioWrite { .. }));
}
