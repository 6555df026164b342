//! Audio file I/O for the remolino effect processor.
//!
//! This crate provides WAV reading and writing with a stereo sample
//! container, used by the CLI to drive the processor offline:
//!
//! ```rust,ignore
//! use remolino_io::{read_wav_stereo, write_wav_stereo, WavSpec};
//!
//! let (mut samples, spec) = read_wav_stereo("input.wav")?;
//! // ... process samples.left / samples.right in place ...
//! write_wav_stereo("output.wav", &samples, spec)?;
//! ```

mod wav;

pub use wav::{
    StereoSamples, WavSpec, read_wav_stereo, write_wav_stereo,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
