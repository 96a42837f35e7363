//! Stemforge synthesis core.
//!
//! This crate renders the four placeholder stems (vocals, drums, bass,
//! instruments) as self-contained WAV byte streams and encodes them as
//! `data:audio/wav;base64,` URIs. The waveforms are closed-form functions
//! of time; no input audio is decoded and no state is carried between
//! renders.
//!
//! # Determinism
//!
//! Synthesis is a pure function of (stem kind, quality). Rendering the
//! same stem twice produces byte-identical output.
//!
//! # Example
//!
//! ```
//! use stemforge_synth::{render_stems, Quality, StemKind};
//!
//! let bundle = render_stems(Quality::Low)?;
//! let uri = bundle.stem(StemKind::Drums);
//! assert!(uri.starts_with("data:audio/wav;base64,"));
//! # Ok::<(), stemforge_synth::SynthError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`render_stems()`] - Main entry point, renders all four stems
//! - [`stem`] - Stem kind and quality model
//! - [`synthesis`] - Per-stem waveform formulas
//! - [`wav`] - Byte-exact WAV container writer and parser
//! - [`encode`] - Data-URI base64 codec

pub mod encode;
pub mod error;
pub mod render;
pub mod stem;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use encode::{decode_wav_data_uri, encode_wav_data_uri, DATA_URI_PREFIX};
pub use error::{DataUriError, SynthError, SynthResult};
pub use render::{render_stems, RenderConfig, StemBundle, STEM_DURATION_SECONDS};
pub use stem::{Quality, StemKind};
pub use wav::{parse_wav, WavAudio, WavFormat};
