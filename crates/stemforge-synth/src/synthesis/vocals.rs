//! Vocals stem: amplitude-modulated sine.
//!
//! The carrier wanders 220 Hz +/- 50 Hz at 2 rad/s and is shaped by a
//! slow sine envelope, giving a voice-like swell.

use std::f64::consts::PI;

/// Carrier center frequency in Hz.
const CENTER_FREQ: f64 = 220.0;
/// Carrier deviation in Hz.
const FREQ_DEVIATION: f64 = 50.0;
/// Carrier wander rate in rad/s.
const WANDER_RATE: f64 = 2.0;
/// Amplitude envelope rate in rad/s.
const ENVELOPE_RATE: f64 = 0.5;
/// Output scale.
const SCALE: f64 = 0.7;

/// Raw vocals signal at time `t` seconds.
pub fn sample(t: f64) -> f64 {
    let freq = CENTER_FREQ + FREQ_DEVIATION * (WANDER_RATE * t).sin();
    let envelope = (ENVELOPE_RATE * t).sin();
    SCALE * (2.0 * PI * freq * t).sin() * envelope
}
