//! Raw input values consumed each tick.

use nalgebra::Vector3;

use openmotion_register_protocol::{ButtonState, StickState};

/// Raw host input values for one polling tick.
///
/// Produced by the (out-of-scope) input-binding layer, already normalized:
/// stick fractions arrive gate-clipped, gesture drives sit in [-1, 1], and
/// the optional accelerometer sample is in m/s². Out-of-range values are
/// clamped downstream rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawInputs {
    /// Stick deflection fractions.
    pub stick: StickState,
    /// Discrete button state.
    pub buttons: ButtonState,
    /// Tilt drive axes.
    pub tilt: (f32, f32),
    /// Swing drive axes.
    pub swing: (f32, f32),
    /// Shake axis holds (X, Y, Z).
    pub shake: [bool; 3],
    /// Raw accelerometer sample, overriding the resting-gravity default.
    pub accelerometer: Option<Vector3<f32>>,
}

impl RawInputs {
    /// An all-neutral tick.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stick deflection.
    pub fn with_stick(mut self, x: f32, y: f32) -> Self {
        self.stick = StickState::new(x, y);
        self
    }

    /// Set the button state.
    pub fn with_buttons(mut self, c: bool, z: bool) -> Self {
        self.buttons = ButtonState::new(c, z);
        self
    }

    /// Set the tilt drive.
    pub fn with_tilt(mut self, x: f32, y: f32) -> Self {
        self.tilt = (x, y);
        self
    }

    /// Set the swing drive.
    pub fn with_swing(mut self, x: f32, y: f32) -> Self {
        self.swing = (x, y);
        self
    }

    /// Set the shake axis holds.
    pub fn with_shake(mut self, shake: [bool; 3]) -> Self {
        self.shake = shake;
        self
    }

    /// Supply a raw accelerometer sample for this tick.
    pub fn with_accelerometer(mut self, sample: Vector3<f32>) -> Self {
        self.accelerometer = Some(sample);
        self
    }
}
