//! Byte-exact WAV container writer and parser.
//!
//! Writes 16-bit PCM WAV files with the canonical 44-byte header and no
//! variable metadata, so output for a given signal is deterministic. The
//! parser reads the same layout back and is used to verify lossless
//! round-trips.

mod format;
mod parse;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use format::WavFormat;
pub use parse::{parse_wav, WavAudio};
pub use writer::{mono_to_stereo_pcm16, write_wav, write_wav_to_vec};
