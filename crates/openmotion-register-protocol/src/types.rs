//! Wire-adjacent input state types.

/// Analog stick state as signed fractions in [-1, 1] relative to the gate
/// shape.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickState {
    /// Horizontal deflection, positive right.
    pub x: f32,
    /// Vertical deflection, positive up.
    pub y: f32,
}

impl StickState {
    /// Build a stick state from raw fractions.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clip the deflection to the circular gate boundary of the given
    /// radius. Non-finite components collapse to neutral.
    pub fn clamped(self, gate_radius: f32) -> Self {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Self::default();
        }
        let radius = gate_radius.max(0.0);
        let magnitude = (self.x * self.x + self.y * self.y).sqrt();
        if magnitude > radius {
            let scale = radius / magnitude;
            Self {
                x: self.x * scale,
                y: self.y * scale,
            }
        } else {
            self
        }
    }
}

/// Discrete button state of the extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// C button held.
    pub c: bool,
    /// Z trigger held.
    pub z: bool,
}

impl ButtonState {
    /// Build a button state.
    pub fn new(c: bool, z: bool) -> Self {
        Self { c, z }
    }
}
