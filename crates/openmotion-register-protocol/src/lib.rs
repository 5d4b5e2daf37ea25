//! Motion extension register protocol: layout constants and encoding.
//!
//! This crate is intentionally I/O-free and allocation-free. It provides the
//! pure functions and types that turn composed motion state into the
//! byte-exact register image a bus consumer polls, without any transport or
//! scheduling plumbing.
//!
//! ## Register map
//!
//! The polled data image is 6 bytes:
//!
//! | Offset | Contents                                   |
//! |--------|--------------------------------------------|
//! | 0      | Stick X                                    |
//! | 1      | Stick Y                                    |
//! | 2      | Accel X, high 8 of 10 bits                 |
//! | 3      | Accel Y, high 8 of 10 bits                 |
//! | 4      | Accel Z, high 8 of 10 bits                 |
//! | 5      | Button flags (active-low) + accel low bits |
//!
//! Byte 5 packs the Z flag in bit 0, the C flag in bit 1, and the low 2 bits
//! of each 10-bit accel sample in bits 2–3 (X), 4–5 (Y), 6–7 (Z).
//!
//! Stick and accelerometer scaling are anchored on the calibration block
//! (`openmotion-calibration`); consumers read that block to undo the
//! quantization.

#![deny(static_mut_refs)]
#![warn(missing_docs)]

pub mod codec;
pub mod ids;
pub mod types;

pub use codec::{RegisterImage, encode_register};
pub use ids::{EXTENSION_ID, REGISTER_LEN, accel_lsb_shift, button_bits, register_offsets};
pub use types::{ButtonState, StickState};
