//! Gesture synthesis for the emulated motion extension.
//!
//! Three independent generators turn normalized host inputs into plausible
//! inertial-sensor state, each with its own decay and intensity rules:
//!
//! - **Tilt**: a sustained orientation angle that slews toward the input at
//!   a bounded rate.
//! - **Swing**: a transient impulse fired on an input edge, decaying
//!   geometrically back to rest over a bounded number of ticks.
//! - **Shake**: a sine oscillation held as long as its input is held, cut
//!   to zero on release.
//!
//! The [`compose`] module folds the three states plus an optional raw
//! accelerometer sample into the single sensor-frame acceleration vector
//! the register codec quantizes.
//!
//! All update functions are pure over `&mut` state, allocation-free, and
//! clamp out-of-range input instead of rejecting it. They are driven at a
//! fixed polling period; `dt` is the period, not a wall-clock delta.
//!
//! # Example
//!
//! ```
//! use openmotion_gesture::{TiltConfig, TiltState, emulate_tilt};
//!
//! let mut tilt = TiltState::default();
//! let config = TiltConfig::default();
//!
//! // Hold the tilt input fully forward for a few ticks:
//! for _ in 0..10 {
//!     emulate_tilt(&mut tilt, (0.0, 1.0), &config, 1.0 / 200.0);
//! }
//! assert!(tilt.angle > 0.0);
//! assert!(tilt.angle <= config.max_angle);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod compose;
pub mod shake;
pub mod state;
pub mod swing;
pub mod tilt;

pub use compose::compose_acceleration;
pub use shake::{ShakeConfig, emulate_shake};
pub use state::{GestureState, ShakeState, SwingState, TiltState};
pub use swing::{
    SWING_DECAY_WINDOW_TICKS, SWING_REST_EPSILON, SWING_START_THRESHOLD, SwingConfig,
    emulate_swing,
};
pub use tilt::{AxisBinding, TiltConfig, emulate_tilt};
