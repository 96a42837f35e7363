//! Drums stem: percussive clicks on a 0.5 s beat grid.
//!
//! A 60 Hz tone with a sharp exponential decay fires during the first 5%
//! of each beat window; the rest of the window is exact digital silence.

use std::f64::consts::PI;

/// Beats per second (one beat every 0.5 s).
const BEAT_RATE: f64 = 2.0;
/// Fraction of the beat window occupied by the click.
const CLICK_WINDOW: f64 = 0.05;
/// Click tone frequency in Hz.
const CLICK_FREQ: f64 = 60.0;
/// Exponential decay rate over the beat phase.
const DECAY_RATE: f64 = 30.0;
/// Output scale.
const SCALE: f64 = 0.8;

/// Raw drums signal at time `t` seconds.
pub fn sample(t: f64) -> f64 {
    let beat = (BEAT_RATE * t).fract();
    if beat < CLICK_WINDOW {
        SCALE * (2.0 * PI * CLICK_FREQ * t).sin() * (-DECAY_RATE * beat).exp()
    } else {
        0.0
    }
}
