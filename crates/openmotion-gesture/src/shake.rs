//! Shake emulation: held-input oscillation with a snappy release.

use serde::{Deserialize, Serialize};

use openmotion_calibration::GRAVITY_M_S2;

use crate::state::ShakeState;

/// Shake behavior settings, supplied at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShakeConfig {
    /// Peak oscillation amplitude, m/s².
    pub amplitude: f32,
    /// Oscillation frequency, Hz.
    pub frequency_hz: f32,
    /// Phase-invert the waveform. Consumers that compare the extension's
    /// shake phase against the primary controller expect them opposed, so
    /// this defaults to inverted.
    pub invert: bool,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            amplitude: 2.0 * GRAVITY_M_S2,
            frequency_hz: 5.0,
            invert: true,
        }
    }
}

/// Advance the shake state one tick.
///
/// Each held axis follows a sine waveform at the configured frequency and
/// amplitude, phase advancing one step per tick. A released axis reads zero
/// on the very next tick — no decay tail — and restarts from phase zero
/// when pressed again.
pub fn emulate_shake(state: &mut ShakeState, held: [bool; 3], config: &ShakeConfig, dt: f32) {
    let sign = if config.invert { -1.0 } else { 1.0 };
    let amplitude = config.amplitude.abs() * sign;
    for axis in 0..3 {
        if held[axis] {
            let phase = std::f32::consts::TAU * config.frequency_hz * (state.steps[axis] as f32) * dt;
            state.acceleration[axis] = phase.sin() * amplitude;
            state.steps[axis] = state.steps[axis].wrapping_add(1);
        } else {
            state.acceleration[axis] = 0.0;
            state.steps[axis] = 0;
        }
    }
}
