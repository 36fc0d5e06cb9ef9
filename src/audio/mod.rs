//! WAV I/O and verification
//!
//! This module writes the fixture container and reads it back for checks.

pub mod io;
pub mod verification;

pub use io::{
    expected_file_len, read_pcm16, write_pcm16, write_pcm16_to, WavInfo, WAV_HEADER_LEN,
};
pub use verification::{file_sha256, inspect_wav, SignalStats};
