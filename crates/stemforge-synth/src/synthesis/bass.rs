//! Bass stem: low sine with a slow pitch wander.

use std::f64::consts::PI;

/// Center frequency in Hz.
const CENTER_FREQ: f64 = 65.0;
/// Deviation in Hz.
const FREQ_DEVIATION: f64 = 10.0;
/// Wander rate in rad/s.
const WANDER_RATE: f64 = 0.5;
/// Output scale.
const SCALE: f64 = 0.6;

/// Raw bass signal at time `t` seconds.
pub fn sample(t: f64) -> f64 {
    let freq = CENTER_FREQ + FREQ_DEVIATION * (WANDER_RATE * t).sin();
    SCALE * (2.0 * PI * freq * t).sin()
}
