//! WAV container parsing.
//!
//! Minimal reader for the canonical PCM layout this crate writes. Used to
//! verify lossless round-trips and by callers that inspect header fields.

use super::format::WavFormat;

/// A decoded WAV container: format fields plus interleaved samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavAudio {
    /// Header format fields.
    pub format: WavFormat,
    /// Interleaved 16-bit samples in channel order.
    pub samples: Vec<i16>,
}

impl WavAudio {
    /// Sample count per channel.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.format.channels as usize
    }
}

/// Parses a canonical 16-bit PCM WAV buffer.
///
/// Returns `None` if the RIFF/WAVE framing, fmt chunk, or data chunk is
/// missing, truncated, or not 16-bit PCM.
pub fn parse_wav(wav_data: &[u8]) -> Option<WavAudio> {
    if wav_data.len() < 44 {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }
    if &wav_data[12..16] != b"fmt " {
        return None;
    }

    let audio_format = u16::from_le_bytes([wav_data[20], wav_data[21]]);
    if audio_format != 1 {
        return None;
    }
    let channels = u16::from_le_bytes([wav_data[22], wav_data[23]]);
    let sample_rate = u32::from_le_bytes([wav_data[24], wav_data[25], wav_data[26], wav_data[27]]);
    let bits_per_sample = u16::from_le_bytes([wav_data[34], wav_data[35]]);
    if bits_per_sample != 16 || channels == 0 {
        return None;
    }

    // Walk chunks after the fmt chunk to find the data chunk.
    let mut pos = 36;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start.checked_add(chunk_size)?;
            if data_end > wav_data.len() {
                return None;
            }
            let samples = wav_data[data_start..data_end]
                .chunks_exact(2)
                .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            return Some(WavAudio {
                format: WavFormat {
                    channels,
                    sample_rate,
                    bits_per_sample,
                },
                samples,
            });
        }

        pos += 8 + chunk_size;
        // Align to word boundary
        if !chunk_size.is_multiple_of(2) {
            pos += 1;
        }
    }

    None
}
