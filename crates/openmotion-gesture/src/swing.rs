//! Swing emulation: a transient impulse with geometric decay.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use openmotion_calibration::GRAVITY_M_S2;

use crate::state::SwingState;

/// Drive magnitude above which a push fires an impulse.
pub const SWING_START_THRESHOLD: f32 = 0.5;

/// Acceleration magnitude below which a decaying swing snaps to rest, m/s².
pub const SWING_REST_EPSILON: f32 = 1e-3;

/// Ticks within which a default-intensity swing, left undriven, is
/// guaranteed back at exactly zero.
pub const SWING_DECAY_WINDOW_TICKS: u32 = 110;

/// Swing behavior settings, supplied at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingConfig {
    /// Peak impulse magnitude, m/s².
    pub intensity: f32,
    /// Invert the impulse direction. Some consumers expect the extension's
    /// swing opposed to the primary controller's default.
    pub invert: bool,
    /// Transient angle at a fully lateral push, radians.
    pub peak_angle: f32,
    /// Exponential decay time constant, seconds.
    pub decay_time_constant: f32,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            intensity: 2.5 * GRAVITY_M_S2,
            invert: false,
            peak_angle: 0.5,
            decay_time_constant: 0.05,
        }
    }
}

/// Advance the swing state one tick.
///
/// A push whose drive magnitude crosses [`SWING_START_THRESHOLD`] while the
/// state is disengaged fires an impulse: acceleration jumps to the
/// normalized push direction times `intensity`, and the transient angle
/// tracks the lateral push component. Every following tick both decay
/// geometrically with per-tick factor `exp(-dt / decay_time_constant)`;
/// once the magnitude falls under [`SWING_REST_EPSILON`] the state snaps to
/// exactly rest instead of trailing an asymptote. Re-triggering requires
/// releasing the input below the threshold first.
pub fn emulate_swing(state: &mut SwingState, input: (f32, f32), config: &SwingConfig, dt: f32) {
    let x = sanitize(input.0);
    let y = sanitize(input.1);
    let magnitude = (x * x + y * y).sqrt();
    let active = magnitude >= SWING_START_THRESHOLD;

    if active && !state.engaged {
        let sign = if config.invert { -1.0 } else { 1.0 };
        let direction = Vector3::new(x / magnitude, y / magnitude, 0.0);
        state.acceleration = direction * (config.intensity.abs() * sign);
        state.angle = (x / magnitude) * config.peak_angle * sign;
    } else {
        let decay = (-dt / config.decay_time_constant.max(f32::EPSILON)).exp();
        state.acceleration *= decay;
        state.angle *= decay;
        if state.acceleration.norm() < SWING_REST_EPSILON {
            state.acceleration = Vector3::zeros();
            state.angle = 0.0;
        }
    }
    state.engaged = active;
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
