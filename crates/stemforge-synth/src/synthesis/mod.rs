//! Per-stem waveform formulas.
//!
//! Each module implements the closed-form signal for one stem kind:
//! - `vocals` - amplitude-modulated sine around 220 Hz
//! - `drums` - decaying 60 Hz click on a 0.5 s beat grid
//! - `bass` - slow-wandering sine around 65 Hz
//! - `instruments` - mid-range sine around 330 Hz
//!
//! Every signal is a pure function of time in seconds, so rendering is
//! deterministic and carries no per-call state.

pub mod bass;
pub mod drums;
pub mod instruments;
pub mod vocals;

use crate::stem::StemKind;

/// Attenuation applied to every raw stem signal before quantization.
pub const MASTER_GAIN: f64 = 0.5;

/// Computes the attenuated sample for `kind` at time `t` seconds.
///
/// Returns `None` when the formula yields a non-finite value. The
/// renderer substitutes silence for `None`, so a single bad sample never
/// aborts a stem.
pub fn sample_at(kind: StemKind, t: f64) -> Option<f64> {
    let raw = match kind {
        StemKind::Vocals => vocals::sample(t),
        StemKind::Drums => drums::sample(t),
        StemKind::Bass => bass::sample(t),
        StemKind::Instruments => instruments::sample(t),
    };
    let attenuated = raw * MASTER_GAIN;
    attenuated.is_finite().then_some(attenuated)
}
