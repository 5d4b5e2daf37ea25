//! Tilt emulation: a sustained orientation angle slewing toward the input.

use serde::{Deserialize, Serialize};

use crate::state::TiltState;

/// Which input component drives the scalar tilt angle.
///
/// The tilt input arrives as a normalized (x, y) pair; the binding picks the
/// component mapped onto the single tilt axis. Supplied at configuration
/// time, never per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisBinding {
    /// Horizontal input component.
    X,
    /// Vertical input component.
    #[default]
    Y,
}

/// Tilt behavior settings, supplied at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltConfig {
    /// Angle at full input deflection, radians.
    pub max_angle: f32,
    /// Slew rate toward the target angle, radians per second.
    pub rate: f32,
    /// Input component bound to the angle.
    pub binding: AxisBinding,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_angle: std::f32::consts::FRAC_PI_2,
            rate: std::f32::consts::TAU,
            binding: AxisBinding::Y,
        }
    }
}

/// Advance the tilt state one tick toward the bound input component.
///
/// The target is the clamped component scaled by `max_angle`; the current
/// angle approaches it by at most `rate * dt` per tick, so a step input
/// produces the gradual slope a real inertial sensor would report rather
/// than a discontinuous jump. Releasing the input walks the angle back to
/// neutral at the same bounded rate.
pub fn emulate_tilt(state: &mut TiltState, input: (f32, f32), config: &TiltConfig, dt: f32) {
    let component = match config.binding {
        AxisBinding::X => input.0,
        AxisBinding::Y => input.1,
    };
    let component = if component.is_finite() {
        component.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let target = component * config.max_angle;
    let max_step = (config.rate * dt).abs();
    let delta = (target - state.angle).clamp(-max_step, max_step);
    state.angle += delta;
}
