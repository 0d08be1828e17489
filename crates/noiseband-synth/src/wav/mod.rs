//! Deterministic WAV file encoder.
//!
//! Writes mono 16-bit PCM WAV files with no timestamps or variable metadata,
//! so identical sample buffers encode to byte-identical files. The BLAKE3
//! hash of the PCM payload travels with the result for content comparison.

mod encode;
mod result;


// Re-export public API
pub use encode::{samples_to_pcm16, write_wav, write_wav_to_vec, WavFormat};
pub use result::{extract_pcm_data, WavResult};
