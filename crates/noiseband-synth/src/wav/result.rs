//! Encoded WAV result and PCM payload access.

use std::io;
use std::path::Path;

use super::encode::{samples_to_pcm16, write_wav_to_vec, WavFormat};

/// Result of encoding a sample buffer as a WAV file.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only, for content comparison.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples into a complete WAV file.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(sample_rate);
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Duration of the encoded audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the WAV bytes to a file.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, &self.wav_data)
    }
}

/// Extracts the PCM payload from a WAV file buffer.
///
/// Walks the chunk list looking for `data`; returns `None` when the buffer
/// is not a well-formed WAV file.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let start = pos + 8;
            let end = start.checked_add(chunk_size)?;
            if end <= wav_data.len() {
                return Some(&wav_data[start..end]);
            }
            return None;
        }

        // Chunks are word-aligned; odd sizes carry a pad byte.
        pos += 8 + chunk_size + (chunk_size % 2);
    }

    None
}
