//! Peripheral configuration, supplied once at attach time.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use openmotion_calibration::GRAVITY_M_S2;
use openmotion_gesture::{ShakeConfig, SwingConfig, TiltConfig};

/// Fixed polling rate of the bus collaborator, Hz.
pub const POLL_RATE_HZ: f32 = 200.0;

/// Polling period handed to the gesture functions, seconds.
pub const POLL_PERIOD_S: f32 = 1.0 / POLL_RATE_HZ;

/// Analog stick settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StickConfig {
    /// Gate radius the incoming deflection is clipped against before
    /// encoding. The full-circle 1.0 default suits digital (keyboard) input
    /// mapped onto fractions.
    pub gate_radius: f32,
}

impl Default for StickConfig {
    fn default() -> Self {
        Self { gate_radius: 1.0 }
    }
}

/// Raw accelerometer passthrough settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawAccelConfig {
    /// Acceleration reported when no raw sample is supplied: the sensor
    /// resting under gravity.
    pub resting: Vector3<f32>,
}

impl Default for RawAccelConfig {
    fn default() -> Self {
        Self {
            resting: Vector3::new(0.0, 0.0, GRAVITY_M_S2),
        }
    }
}

/// Aggregate configuration for the emulated peripheral.
///
/// Everything in here is supplied at configuration time, never per tick;
/// the update path only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeripheralConfig {
    /// Analog stick settings.
    pub stick: StickConfig,
    /// Tilt generator settings.
    pub tilt: TiltConfig,
    /// Swing generator settings.
    pub swing: SwingConfig,
    /// Shake generator settings.
    pub shake: ShakeConfig,
    /// Raw accelerometer passthrough settings.
    pub raw_accel: RawAccelConfig,
}

/// The closed set of configurable input groups.
///
/// There is deliberately no open extension point and no "unknown" value; a
/// group that does not exist cannot be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputGroup {
    /// Analog stick.
    Stick,
    /// Tilt generator.
    Tilt,
    /// Swing generator.
    Swing,
    /// Shake generator.
    Shake,
    /// Raw accelerometer passthrough.
    RawAccel,
}

/// Borrowed view of one group's configuration.
#[derive(Debug, Clone, Copy)]
pub enum GroupConfigRef<'a> {
    /// Analog stick settings.
    Stick(&'a StickConfig),
    /// Tilt generator settings.
    Tilt(&'a TiltConfig),
    /// Swing generator settings.
    Swing(&'a SwingConfig),
    /// Shake generator settings.
    Shake(&'a ShakeConfig),
    /// Raw accelerometer passthrough settings.
    RawAccel(&'a RawAccelConfig),
}

impl PeripheralConfig {
    /// Borrow one group's configuration.
    pub fn group(&self, group: InputGroup) -> GroupConfigRef<'_> {
        match group {
            InputGroup::Stick => GroupConfigRef::Stick(&self.stick),
            InputGroup::Tilt => GroupConfigRef::Tilt(&self.tilt),
            InputGroup::Swing => GroupConfigRef::Swing(&self.swing),
            InputGroup::Shake => GroupConfigRef::Shake(&self.shake),
            InputGroup::RawAccel => GroupConfigRef::RawAccel(&self.raw_accel),
        }
    }
}
