//! Gesture state types.
//!
//! These three states are the only tick-to-tick history the motion pipeline
//! carries; together they form the snapshot payload for save/rewind. Each is
//! owned exclusively by the peripheral orchestrator and mutated only by its
//! `emulate_*` function.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Common reset behavior across gesture states.
///
/// All states implement this trait so the orchestrator can zero them as a
/// set on reset.
pub trait GestureState: Copy + Clone + std::fmt::Debug {
    /// Reset the state to rest.
    fn reset(&mut self);
}

/// Sustained orientation state driven by the tilt input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltState {
    /// Current tilt angle in radians.
    pub angle: f32,
}

impl GestureState for TiltState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Transient impulse state driven by the swing input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingState {
    /// Transient swing angle in radians.
    pub angle: f32,
    /// Impulse acceleration in m/s², sensor frame before rotation.
    pub acceleration: Vector3<f32>,
    /// Input was active on the previous tick; a new impulse only fires from
    /// the released state.
    pub engaged: bool,
}

impl Default for SwingState {
    fn default() -> Self {
        Self {
            angle: 0.0,
            acceleration: Vector3::zeros(),
            engaged: false,
        }
    }
}

impl GestureState for SwingState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Oscillation state driven by the shake inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShakeState {
    /// Oscillating acceleration in m/s², sensor frame.
    pub acceleration: Vector3<f32>,
    /// Per-axis phase steps, in ticks since the axis was engaged.
    pub steps: [u32; 3],
}

impl Default for ShakeState {
    fn default() -> Self {
        Self {
            acceleration: Vector3::zeros(),
            steps: [0; 3],
        }
    }
}

impl GestureState for ShakeState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// True when every gesture state is at rest.
pub fn all_at_rest(tilt: &TiltState, swing: &SwingState, shake: &ShakeState) -> bool {
    *tilt == TiltState::default()
        && swing.angle == 0.0
        && swing.acceleration == Vector3::zeros()
        && *shake == ShakeState::default()
}
