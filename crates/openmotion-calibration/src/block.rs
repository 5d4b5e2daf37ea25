//! The 16-byte calibration table and its checksum.

use crate::constants::CalibrationConstants;

/// Total size of the calibration block in bytes.
pub const CALIBRATION_LEN: usize = 16;

/// Number of trailing checksum bytes.
pub const CHECKSUM_LEN: usize = 2;

/// Byte offsets of the calibration block fields.
pub mod offsets {
    /// Accelerometer zero-g references, X/Y/Z.
    pub const ACCEL_ZERO_G: usize = 0;
    /// Reserved byte trailing the zero-g references (LSB slot, always 0).
    pub const ACCEL_ZERO_G_LSB: usize = 3;
    /// Accelerometer one-g references, X/Y/Z.
    pub const ACCEL_ONE_G: usize = 4;
    /// Reserved byte trailing the one-g references (LSB slot, always 0).
    pub const ACCEL_ONE_G_LSB: usize = 7;
    /// Stick X (max, min, center) triple.
    pub const STICK_X: usize = 8;
    /// Stick Y (max, min, center) triple.
    pub const STICK_Y: usize = 11;
    /// Two checksum bytes covering offsets 0..14.
    pub const CHECKSUM: usize = 14;
}

/// Recompute and store the trailing checksum over the preceding bytes.
///
/// Byte 14 is `0x55` plus the wrapping sum of bytes 0..14; byte 15 is
/// byte 14 plus `0xAA`. The scheme is deterministic and idempotent; it is
/// written here and validated nowhere — checking it is the consumer's
/// business. Must be called after any calibration byte changes so the stored
/// value is never stale.
pub fn write_checksum(block: &mut [u8; CALIBRATION_LEN]) {
    let sum = block[..offsets::CHECKSUM]
        .iter()
        .fold(0x55u8, |acc, b| acc.wrapping_add(*b));
    block[offsets::CHECKSUM] = sum;
    block[offsets::CHECKSUM + 1] = sum.wrapping_add(0xaa);
}

/// The calibration table exposed read-only to the register consumer.
///
/// Built once per reset from [`CalibrationConstants`] and immutable until
/// the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationBlock {
    bytes: [u8; CALIBRATION_LEN],
}

impl CalibrationBlock {
    /// Build a calibration block from device reference constants.
    ///
    /// Deterministic: identical constants produce byte-identical blocks,
    /// checksum included.
    pub fn build(constants: CalibrationConstants) -> Self {
        let CalibrationConstants {
            accel_zero_g,
            accel_one_g,
            stick_center,
            stick_gate_radius,
        } = constants;

        let stick_max = stick_center.saturating_add(stick_gate_radius);
        let stick_min = stick_center.saturating_sub(stick_gate_radius);

        let mut bytes = [
            // Accel zero-g X/Y/Z plus LSB slot:
            accel_zero_g,
            accel_zero_g,
            accel_zero_g,
            0x00,
            // Accel one-g X/Y/Z plus LSB slot:
            accel_one_g,
            accel_one_g,
            accel_one_g,
            0x00,
            // Stick X max/min/center:
            stick_max,
            stick_min,
            stick_center,
            // Stick Y max/min/center:
            stick_max,
            stick_min,
            stick_center,
            // Checksum, written below:
            0x00,
            0x00,
        ];
        write_checksum(&mut bytes);

        Self { bytes }
    }

    /// The raw block bytes, checksum included.
    pub fn as_bytes(&self) -> &[u8; CALIBRATION_LEN] {
        &self.bytes
    }

    /// Zero-g reference for an accelerometer axis (0 = X, 1 = Y, 2 = Z),
    /// 8-bit scale.
    pub fn accel_zero_g(&self, axis: usize) -> u8 {
        self.bytes[offsets::ACCEL_ZERO_G + axis.min(2)]
    }

    /// One-g reference for an accelerometer axis (0 = X, 1 = Y, 2 = Z),
    /// 8-bit scale.
    pub fn accel_one_g(&self, axis: usize) -> u8 {
        self.bytes[offsets::ACCEL_ONE_G + axis.min(2)]
    }

    /// Stick maximum byte for an axis (0 = X, 1 = Y).
    pub fn stick_max(&self, axis: usize) -> u8 {
        self.bytes[Self::stick_offset(axis)]
    }

    /// Stick minimum byte for an axis (0 = X, 1 = Y).
    pub fn stick_min(&self, axis: usize) -> u8 {
        self.bytes[Self::stick_offset(axis) + 1]
    }

    /// Stick center byte for an axis (0 = X, 1 = Y).
    pub fn stick_center(&self, axis: usize) -> u8 {
        self.bytes[Self::stick_offset(axis) + 2]
    }

    /// The two stored checksum bytes.
    pub fn checksum(&self) -> [u8; CHECKSUM_LEN] {
        [
            self.bytes[offsets::CHECKSUM],
            self.bytes[offsets::CHECKSUM + 1],
        ]
    }

    fn stick_offset(axis: usize) -> usize {
        if axis == 0 {
            offsets::STICK_X
        } else {
            offsets::STICK_Y
        }
    }
}

impl Default for CalibrationBlock {
    fn default() -> Self {
        Self::build(CalibrationConstants::default())
    }
}
