//! WAV file I/O
//!
//! Only one encoding is produced: mono, 16-bit signed little-endian PCM.
//! Writing goes through hound; the writer owns the file handle and closes it
//! on every exit path.

use std::io::{Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;
use serde::Serialize;

use crate::error::{Result, ToneError};

/// Output channel count
pub const CHANNELS: u16 = 1;
/// Bits per output sample
pub const BITS_PER_SAMPLE: u16 = 16;
/// Bytes per output sample
pub const SAMPLE_WIDTH: u16 = BITS_PER_SAMPLE / 8;
/// RIFF + fmt + data chunk headers for plain PCM
pub const WAV_HEADER_LEN: u64 = 44;

/// Header fields of a WAV file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavInfo {
    /// Number of interleaved channels
    pub channels: u16,
    /// Bytes per sample
    pub sample_width: u16,
    /// Frames per second
    pub frame_rate: u32,
    /// Number of frames (samples per channel)
    pub num_frames: u32,
}

impl WavInfo {
    /// Size of the data chunk in bytes
    pub fn data_len(&self) -> u64 {
        self.num_frames as u64 * self.channels as u64 * self.sample_width as u64
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.frame_rate == 0 {
            0.0
        } else {
            self.num_frames as f64 / self.frame_rate as f64
        }
    }
}

/// The one spec this crate writes
pub fn pcm16_mono_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Expected file size for `num_samples` mono 16-bit samples
pub fn expected_file_len(num_samples: usize) -> u64 {
    WAV_HEADER_LEN + num_samples as u64 * SAMPLE_WIDTH as u64
}

/// Write mono 16-bit PCM samples to `path`, replacing any existing file
///
/// # Errors
/// * `AudioWrite` - if the file cannot be created or written
pub fn write_pcm16<P: AsRef<Path>>(path: P, samples: &[i16], sample_rate: u32) -> Result<()> {
    let path = path.as_ref();
    let to_write_error = |e: hound::Error| ToneError::AudioWrite {
        path: path.to_path_buf(),
        source: e,
    };

    debug!(
        "Writing {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        path.display()
    );

    let mut writer =
        WavWriter::create(path, pcm16_mono_spec(sample_rate)).map_err(to_write_error)?;

    for &sample in samples {
        writer.write_sample(sample).map_err(to_write_error)?;
    }

    writer.finalize().map_err(to_write_error)?;

    Ok(())
}

/// Write mono 16-bit PCM samples to any seekable sink (e.g. an in-memory cursor)
///
/// # Errors
/// * `SinkWrite` - if the sink rejects a write or seek
pub fn write_pcm16_to<W: Write + Seek>(sink: W, samples: &[i16], sample_rate: u32) -> Result<()> {
    let to_sink_error = |e: hound::Error| ToneError::SinkWrite { source: e };

    let mut writer = WavWriter::new(sink, pcm16_mono_spec(sample_rate)).map_err(to_sink_error)?;

    for &sample in samples {
        writer.write_sample(sample).map_err(to_sink_error)?;
    }

    writer.finalize().map_err(to_sink_error)?;

    Ok(())
}

/// Read a mono 16-bit PCM file back into its header and samples
///
/// # Errors
/// * `AudioRead` - if the file is missing or not a WAV file
/// * `UnsupportedFormat` - if it is not mono 16-bit integer PCM
pub fn read_pcm16<P: AsRef<Path>>(path: P) -> Result<(WavInfo, Vec<i16>)> {
    let path = path.as_ref();
    let to_read_error = |e: hound::Error| ToneError::AudioRead {
        path: path.to_path_buf(),
        source: e,
    };

    let mut reader = WavReader::open(path).map_err(to_read_error)?;
    let spec = reader.spec();

    if spec.channels != CHANNELS
        || spec.bits_per_sample != BITS_PER_SAMPLE
        || spec.sample_format != SampleFormat::Int
    {
        return Err(ToneError::UnsupportedFormat {
            format: describe_spec(&spec),
        });
    }

    let info = info_from_spec(&spec, reader.duration());
    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, _>>()
        .map_err(to_read_error)?;

    Ok((info, samples))
}

pub(crate) fn info_from_spec(spec: &WavSpec, num_frames: u32) -> WavInfo {
    WavInfo {
        channels: spec.channels,
        sample_width: spec.bits_per_sample.div_ceil(8),
        frame_rate: spec.sample_rate,
        num_frames,
    }
}

pub(crate) fn describe_spec(spec: &WavSpec) -> String {
    let kind = match spec.sample_format {
        SampleFormat::Int => "int",
        SampleFormat::Float => "float",
    };
    format!(
        "{}-channel {}-bit {} PCM (only mono 16-bit int supported)",
        spec.channels, spec.bits_per_sample, kind
    )
}
