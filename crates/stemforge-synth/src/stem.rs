//! Stem kind and quality model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four stem categories produced for every request.
///
/// The set is closed. Adding a kind requires a matching synthesis arm in
/// [`crate::synthesis::sample_at`], which matches exhaustively.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StemKind {
    /// Amplitude-modulated voice-range tone.
    Vocals,
    /// Percussive clicks on a fixed beat grid.
    Drums,
    /// Low-frequency tone.
    Bass,
    /// Mid-range melodic tone.
    Instruments,
}

impl StemKind {
    /// All stem kinds, in render and report order.
    pub const ALL: [StemKind; 4] = [
        StemKind::Vocals,
        StemKind::Drums,
        StemKind::Bass,
        StemKind::Instruments,
    ];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StemKind::Vocals => "vocals",
            StemKind::Drums => "drums",
            StemKind::Bass => "bass",
            StemKind::Instruments => "instruments",
        }
    }
}

impl fmt::Display for StemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render quality, selecting the output sample rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// 44.1 kHz output.
    #[default]
    High,
    /// 22.05 kHz output.
    Low,
}

impl Quality {
    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        match self {
            Quality::High => 44_100,
            Quality::Low => 22_050,
        }
    }
}
