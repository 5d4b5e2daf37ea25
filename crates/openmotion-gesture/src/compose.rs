//! Motion composition: fold the gesture states into one sensor-frame
//! acceleration vector.

use nalgebra::{Rotation3, Vector3};

use crate::state::{ShakeState, SwingState, TiltState};

/// Compose gesture states and an optional raw accelerometer sample into the
/// acceleration vector the register codec quantizes.
///
/// The tilt rotation multiplies on the outside and the swing rotation on
/// the inside: tilt is the sustained orientation the whole sensor sits in,
/// swing a transient layered on top of it. Swapping the factors changes the
/// observed gravity under simultaneous tilt and swing and is not an option.
/// Shake is jitter in the sensor's own frame and is added after the
/// rotation, unrotated.
///
/// When no raw sample is supplied the sensor is assumed resting under
/// gravity, reporting `resting`. With every gesture state at rest and no
/// raw sample, the result equals `resting` exactly.
pub fn compose_acceleration(
    tilt: &TiltState,
    swing: &SwingState,
    shake: &ShakeState,
    raw: Option<Vector3<f32>>,
    resting: Vector3<f32>,
) -> Vector3<f32> {
    let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), -tilt.angle)
        * Rotation3::from_axis_angle(&Vector3::y_axis(), -swing.angle);
    rotation * (swing.acceleration + raw.unwrap_or(resting)) + shake.acceleration
}
