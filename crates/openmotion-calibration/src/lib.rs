//! Calibration data for the emulated motion extension peripheral.
//!
//! Consumers of the register image scale raw stick and accelerometer bytes
//! against a fixed 16-byte calibration table. This crate builds that table
//! from device reference constants and maintains its trailing checksum.
//!
//! The block is rebuilt once per peripheral reset and is immutable between
//! resets; nothing here runs in the per-tick path.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod block;
pub mod constants;

pub use block::{CALIBRATION_LEN, CHECKSUM_LEN, CalibrationBlock, offsets, write_checksum};
pub use constants::{
    ACCEL_ONE_G, ACCEL_ZERO_G, CalibrationConstants, GRAVITY_M_S2, STICK_CENTER,
    STICK_GATE_RADIUS, STICK_RADIUS,
};
