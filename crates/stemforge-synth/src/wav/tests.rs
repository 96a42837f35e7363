//! Tests for the WAV writer and parser.

use pretty_assertions::assert_eq;

use super::format::WavFormat;
use super::parse::parse_wav;
use super::writer::{mono_to_stereo_pcm16, write_wav, write_wav_to_vec};

// =========================================================================
// Format field tests
// =========================================================================

#[test]
fn test_wav_format_stereo() {
    let format = WavFormat::stereo(44_100);
    assert_eq!(format.channels, 2);
    assert_eq!(format.sample_rate, 44_100);
    assert_eq!(format.bits_per_sample, 16);
}

#[test]
fn test_derived_header_fields() {
    let format = WavFormat::stereo(44_100);
    assert_eq!(format.bytes_per_sample(), 2);
    assert_eq!(format.block_align(), 4); // 2 channels * 2 bytes
    assert_eq!(format.byte_rate(), 176_400); // 44100 * 2 * 2

    let low = WavFormat::stereo(22_050);
    assert_eq!(low.byte_rate(), 88_200);
}

// =========================================================================
// Header layout tests
// =========================================================================

#[test]
fn test_header_byte_layout() {
    let format = WavFormat::stereo(44_100);
    let pcm = vec![0u8; 16];
    let wav = write_wav_to_vec(&format, &pcm).unwrap();

    assert_eq!(wav.len(), 44 + 16);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]), 36 + 16);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32::from_le_bytes([wav[16], wav[17], wav[18], wav[19]]), 16);
    assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), 1); // PCM
    assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 2); // channels
    assert_eq!(
        u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]),
        44_100
    );
    assert_eq!(
        u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]),
        176_400
    ); // byte rate
    assert_eq!(u16::from_le_bytes([wav[32], wav[33]]), 4); // block align
    assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16); // bits per sample
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 16);
}

#[test]
fn test_write_wav_matches_write_wav_to_vec() {
    let format = WavFormat::stereo(22_050);
    let pcm = vec![1, 2, 3, 4, 5, 6, 7, 8];

    let mut streamed = Vec::new();
    write_wav(&mut streamed, &format, &pcm).unwrap();
    let vec = write_wav_to_vec(&format, &pcm).unwrap();

    assert_eq!(streamed, vec);
}

// =========================================================================
// Quantization tests
// =========================================================================

#[test]
fn test_mono_to_stereo_duplicates_channels() {
    let pcm = mono_to_stereo_pcm16(&[0.0, 0.5, -0.5]);
    assert_eq!(pcm.len(), 12); // 3 samples * 2 channels * 2 bytes

    for frame in pcm.chunks_exact(4) {
        let left = i16::from_le_bytes([frame[0], frame[1]]);
        let right = i16::from_le_bytes([frame[2], frame[3]]);
        assert_eq!(left, right);
    }

    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
    assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), 16_384); // (0.5 * 32767).round()
    assert_eq!(i16::from_le_bytes([pcm[8], pcm[9]]), -16_384);
}

#[test]
fn test_quantization_clamps_out_of_range_input() {
    let pcm = mono_to_stereo_pcm16(&[2.0, -3.0]);
    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 32_767);
    assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -32_767);
}

// =========================================================================
// Parser and round-trip tests
// =========================================================================

#[test]
fn test_round_trip_is_lossless() {
    let samples: Vec<f64> = (0..1000).map(|i| ((i as f64) * 0.013).sin() * 0.9).collect();
    let pcm = mono_to_stereo_pcm16(&samples);
    let format = WavFormat::stereo(44_100);
    let wav = write_wav_to_vec(&format, &pcm).unwrap();

    let decoded = parse_wav(&wav).expect("valid container");
    assert_eq!(decoded.format, format);
    assert_eq!(decoded.frames(), 1000);

    let expected: Vec<i16> = samples
        .iter()
        .flat_map(|&s| {
            let value = (s.clamp(-1.0, 1.0) * 32767.0).round() as i16;
            [value, value]
        })
        .collect();
    assert_eq!(decoded.samples, expected);
}

#[test]
fn test_parse_rejects_truncated_buffer() {
    assert!(parse_wav(&[0u8; 20]).is_none());
}

#[test]
fn test_parse_rejects_bad_magic() {
    let format = WavFormat::stereo(44_100);
    let mut wav = write_wav_to_vec(&format, &[0u8; 8]).unwrap();
    wav[0] = b'X';
    assert!(parse_wav(&wav).is_none());
}

#[test]
fn test_parse_rejects_truncated_data_chunk() {
    let format = WavFormat::stereo(44_100);
    let mut wav = write_wav_to_vec(&format, &[0u8; 8]).unwrap();
    wav.truncate(wav.len() - 4);
    assert!(parse_wav(&wav).is_none());
}

#[test]
fn test_parse_skips_unknown_chunks() {
    // A LIST chunk between fmt and data must be walked over.
    let format = WavFormat::stereo(22_050);
    let pcm = [1u8, 0, 1, 0];
    let canonical = write_wav_to_vec(&format, &pcm).unwrap();

    let mut wav = canonical[..36].to_vec();
    wav.extend_from_slice(b"LIST");
    wav.extend_from_slice(&4u32.to_le_bytes());
    wav.extend_from_slice(b"INFO");
    wav.extend_from_slice(&canonical[36..]);
    // Fix up the RIFF size for the inserted 12 bytes.
    let riff_size = (wav.len() as u32) - 8;
    wav[4..8].copy_from_slice(&riff_size.to_le_bytes());

    let decoded = parse_wav(&wav).expect("valid container with extra chunk");
    assert_eq!(decoded.samples, vec![1, 1]);
}
