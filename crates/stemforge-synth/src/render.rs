//! Stem rendering pipeline.
//!
//! Renders the four stems sequentially with one shared configuration,
//! quantizes each mono signal to interleaved stereo PCM, wraps it in a
//! WAV container, and encodes the bytes as a data URI.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::encode::encode_wav_data_uri;
use crate::error::{SynthError, SynthResult};
use crate::stem::{Quality, StemKind};
use crate::synthesis::sample_at;
use crate::wav::{mono_to_stereo_pcm16, write_wav_to_vec, WavFormat};

/// Fixed stem length in seconds. Kept short to bound response time.
pub const STEM_DURATION_SECONDS: f64 = 30.0;

/// Shared render parameters for one request.
///
/// All four stems of a request are rendered with the same config, so
/// their sample rates, durations, and channel counts always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Rendered length in seconds.
    pub duration_seconds: f64,
}

impl RenderConfig {
    /// Config for the given quality at the fixed stem duration.
    pub fn for_quality(quality: Quality) -> Self {
        Self {
            sample_rate: quality.sample_rate(),
            duration_seconds: STEM_DURATION_SECONDS,
        }
    }

    /// Number of samples per channel.
    pub fn num_samples(&self) -> usize {
        (self.sample_rate as f64 * self.duration_seconds) as usize
    }
}

/// All four rendered stems plus timing metadata.
///
/// Holds exactly one entry per [`StemKind`].
#[derive(Debug, Clone)]
pub struct StemBundle {
    /// Data URI per stem kind.
    pub stems: BTreeMap<StemKind, String>,
    /// Wall-clock generation time in seconds.
    pub processing_time: f64,
}

impl StemBundle {
    /// Data URI for one stem.
    pub fn stem(&self, kind: StemKind) -> &str {
        self.stems
            .get(&kind)
            .map(String::as_str)
            .expect("bundle holds every stem kind")
    }
}

/// Renders the mono waveform for one stem.
///
/// Non-finite samples fall back to silence, so a single bad sample never
/// aborts the stem.
pub fn render_waveform(kind: StemKind, config: &RenderConfig) -> Vec<f64> {
    let num_samples = config.num_samples();
    let sample_rate = config.sample_rate as f64;

    let mut samples = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let t = i as f64 / sample_rate;
        samples.push(sample_at(kind, t).unwrap_or(0.0));
    }
    samples
}

/// Renders one stem to a complete WAV byte stream.
pub fn render_stem_wav(kind: StemKind, config: &RenderConfig) -> SynthResult<Vec<u8>> {
    let samples = render_waveform(kind, config);
    let pcm = mono_to_stereo_pcm16(&samples);
    let format = WavFormat::stereo(config.sample_rate);
    write_wav_to_vec(&format, &pcm).map_err(|source| SynthError::Encode { stem: kind, source })
}

/// Renders and encodes all four stems sequentially.
///
/// Generation is flat fail-fast: the first stem that cannot be encoded
/// fails the request, and partial results are not returned.
pub fn render_stems(quality: Quality) -> SynthResult<StemBundle> {
    let config = RenderConfig::for_quality(quality);
    let started = Instant::now();

    let mut stems = BTreeMap::new();
    for kind in StemKind::ALL {
        let wav_data = render_stem_wav(kind, &config)?;
        stems.insert(kind, encode_wav_data_uri(&wav_data));
    }

    Ok(StemBundle {
        stems,
        processing_time: started.elapsed().as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_config() -> RenderConfig {
        RenderConfig {
            sample_rate: 8000,
            duration_seconds: 0.5,
        }
    }

    #[test]
    fn test_config_sample_counts() {
        assert_eq!(
            RenderConfig::for_quality(Quality::High).num_samples(),
            44_100 * 30
        );
        assert_eq!(
            RenderConfig::for_quality(Quality::Low).num_samples(),
            22_050 * 30
        );
    }

    #[test]
    fn test_waveform_length_matches_config() {
        let config = short_config();
        for kind in StemKind::ALL {
            assert_eq!(render_waveform(kind, &config).len(), 4000);
        }
    }

    #[test]
    fn test_waveform_is_deterministic() {
        let config = short_config();
        for kind in StemKind::ALL {
            let first = render_waveform(kind, &config);
            let second = render_waveform(kind, &config);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_stem_wav_has_expected_size() {
        let config = short_config();
        let wav = render_stem_wav(StemKind::Bass, &config).unwrap();
        // 44-byte header + 4000 frames * 2 channels * 2 bytes.
        assert_eq!(wav.len(), 44 + 4000 * 4);
    }
}
