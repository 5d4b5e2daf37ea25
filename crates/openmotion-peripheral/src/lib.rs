//! The emulated motion extension peripheral.
//!
//! This crate wires the gesture generators, motion composer, calibration
//! block, and register codec into the single object a peripheral-bus
//! collaborator owns: [`PeripheralState`]. The collaborator calls
//! [`PeripheralState::update`] once per fixed polling period and may read
//! the register views any number of times in between without triggering
//! recomputation.
//!
//! Everything here is single-threaded and synchronous; one tick is one
//! bounded, terminating computation. Snapshot/restore captures exactly the
//! tick-derived gesture state, so save/rewind replays deterministically
//! while calibration and configuration are rebuilt from constants.
//!
//! # Example
//!
//! ```
//! use openmotion_peripheral::{PeripheralConfig, PeripheralState, RawInputs};
//!
//! let mut peripheral = PeripheralState::new(PeripheralConfig::default());
//!
//! let inputs = RawInputs::new().with_stick(0.5, 0.0).with_buttons(true, false);
//! peripheral.update(&inputs);
//!
//! let image = peripheral.register_image();
//! assert_ne!(image.stick_x(), 0x80);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![warn(missing_docs)]

pub mod config;
pub mod inputs;
pub mod peripheral;
pub mod snapshot;

pub use config::{
    GroupConfigRef, InputGroup, POLL_PERIOD_S, POLL_RATE_HZ, PeripheralConfig, RawAccelConfig,
    StickConfig,
};
pub use inputs::RawInputs;
pub use peripheral::PeripheralState;
pub use snapshot::{GestureSnapshot, SnapshotError};
