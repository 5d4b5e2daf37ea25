//! The peripheral orchestrator: reset, per-tick update, snapshot.

use tracing::{debug, trace};

use openmotion_calibration::{CALIBRATION_LEN, CalibrationBlock, CalibrationConstants};
use openmotion_gesture::{
    GestureState, ShakeState, SwingState, TiltState, compose_acceleration, emulate_shake,
    emulate_swing, emulate_tilt,
};
use openmotion_register_protocol::{EXTENSION_ID, RegisterImage, encode_register};

use crate::config::{GroupConfigRef, InputGroup, POLL_PERIOD_S, PeripheralConfig};
use crate::inputs::RawInputs;
use crate::snapshot::{GestureSnapshot, SnapshotError};

/// The emulated motion extension.
///
/// Owns the calibration block, register image, and gesture state; the bus
/// collaborator drives [`update`](Self::update) once per polling period and
/// reads the register views in between. Single ownership, no interior
/// mutability — callers serialize reset/update/snapshot externally, and
/// every operation runs to completion within one tick.
#[derive(Debug, Clone)]
pub struct PeripheralState {
    config: PeripheralConfig,
    calibration: CalibrationBlock,
    register: RegisterImage,
    identifier: [u8; 6],
    tilt: TiltState,
    swing: SwingState,
    shake: ShakeState,
}

impl PeripheralState {
    /// Attach a peripheral with the given configuration.
    ///
    /// The returned value has already been reset: calibration built,
    /// identifier installed, register image neutral. It is ready to poll.
    pub fn new(config: PeripheralConfig) -> Self {
        let calibration = CalibrationBlock::build(CalibrationConstants::default());
        let mut state = Self {
            config,
            calibration,
            register: RegisterImage::neutral(&calibration),
            identifier: EXTENSION_ID,
            tilt: TiltState::default(),
            swing: SwingState::default(),
            shake: ShakeState::default(),
        };
        state.reset();
        state
    }

    /// Rebuild the calibration block from device constants, install the
    /// extension identifier, zero all gesture state, and return the
    /// register image to the all-neutral encoding.
    pub fn reset(&mut self) {
        self.calibration = CalibrationBlock::build(CalibrationConstants::default());
        self.identifier = EXTENSION_ID;
        self.tilt.reset();
        self.swing.reset();
        self.shake.reset();
        self.register = RegisterImage::neutral(&self.calibration);
        debug!(checksum = ?self.calibration.checksum(), "peripheral reset");
    }

    /// Advance one polling tick.
    ///
    /// Runs the gesture generators, composes the acceleration, and replaces
    /// the register image wholesale; nothing else mutates between ticks.
    pub fn update(&mut self, inputs: &RawInputs) {
        emulate_tilt(&mut self.tilt, inputs.tilt, &self.config.tilt, POLL_PERIOD_S);
        emulate_swing(&mut self.swing, inputs.swing, &self.config.swing, POLL_PERIOD_S);
        emulate_shake(&mut self.shake, inputs.shake, &self.config.shake, POLL_PERIOD_S);

        let acceleration = compose_acceleration(
            &self.tilt,
            &self.swing,
            &self.shake,
            inputs.accelerometer,
            self.config.raw_accel.resting,
        );

        let stick = inputs.stick.clamped(self.config.stick.gate_radius);
        self.register = encode_register(
            stick,
            acceleration.into(),
            inputs.buttons,
            &self.calibration,
        );
        trace!(
            stick_x = self.register.stick_x(),
            stick_y = self.register.stick_y(),
            buttons = self.register.button_byte(),
            "tick encoded"
        );
    }

    /// The current 6-byte data register image.
    pub fn register_image(&self) -> &RegisterImage {
        &self.register
    }

    /// The 16-byte calibration block consumers scale register data against.
    pub fn calibration(&self) -> &[u8; CALIBRATION_LEN] {
        self.calibration.as_bytes()
    }

    /// The extension identifier bytes.
    pub fn identifier(&self) -> &[u8; 6] {
        &self.identifier
    }

    /// The configuration this peripheral was attached with.
    pub fn config(&self) -> &PeripheralConfig {
        &self.config
    }

    /// Borrow one input group's configuration through the closed group set.
    pub fn group_config(&self, group: InputGroup) -> GroupConfigRef<'_> {
        self.config.group(group)
    }

    /// Capture the tick-derived gesture state as an opaque byte sequence.
    ///
    /// # Errors
    /// Returns [`SnapshotError::Encode`] if serialization fails.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        GestureSnapshot {
            tilt: self.tilt,
            swing: self.swing,
            shake: self.shake,
        }
        .to_bytes()
    }

    /// Replay a snapshot produced by [`snapshot`](Self::snapshot).
    ///
    /// # Errors
    /// Returns [`SnapshotError::CorruptSnapshot`] for malformed bytes; the
    /// current state is left untouched in that case.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), SnapshotError> {
        let snapshot = GestureSnapshot::from_bytes(bytes)?;
        self.tilt = snapshot.tilt;
        self.swing = snapshot.swing;
        self.shake = snapshot.shake;
        Ok(())
    }
}

impl Default for PeripheralState {
    fn default() -> Self {
        Self::new(PeripheralConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use openmotion_register_protocol::button_bits;

    #[test]
    fn test_new_is_reset_and_neutral() {
        let peripheral = PeripheralState::default();
        let neutral = RegisterImage::neutral(&CalibrationBlock::default());
        assert_eq!(peripheral.register_image(), &neutral);
        assert_eq!(peripheral.identifier(), &EXTENSION_ID);
    }

    #[test]
    fn test_reset_is_deterministic() {
        let mut a = PeripheralState::default();
        let mut b = PeripheralState::default();

        // Disturb one of them, then reset both.
        a.update(&RawInputs::new().with_stick(1.0, 1.0).with_swing(0.0, 1.0));
        a.reset();
        b.reset();

        assert_eq!(a.calibration(), b.calibration());
        assert_eq!(a.register_image(), b.register_image());
        assert_eq!(a.snapshot().unwrap(), b.snapshot().unwrap());
    }

    #[test]
    fn test_neutral_tick_keeps_the_neutral_image() {
        let mut peripheral = PeripheralState::default();
        peripheral.update(&RawInputs::new());
        let neutral = RegisterImage::neutral(&CalibrationBlock::default());
        assert_eq!(peripheral.register_image(), &neutral);
    }

    #[test]
    fn test_stick_input_flows_through_with_the_nudge() {
        let mut peripheral = PeripheralState::default();
        peripheral.update(&RawInputs::new().with_stick(0.5, 0.0));
        assert_eq!(peripheral.register_image().stick_x(), 176);
        assert_eq!(peripheral.register_image().stick_y(), 129);
    }

    #[test]
    fn test_buttons_flow_through_active_low() {
        let mut peripheral = PeripheralState::default();
        peripheral.update(&RawInputs::new().with_buttons(true, true));
        assert!(peripheral.register_image().pressed(button_bits::C));
        assert!(peripheral.register_image().pressed(button_bits::Z));
    }

    #[test]
    fn test_raw_accelerometer_overrides_resting_gravity() {
        let mut peripheral = PeripheralState::default();
        peripheral.update(&RawInputs::new().with_accelerometer(Vector3::zeros()));
        // Free fall: every axis reads its zero-g reference.
        let bytes = peripheral.register_image().as_bytes();
        assert_eq!(&bytes[2..5], &[0x80, 0x80, 0x80]);
    }

    #[test]
    fn test_snapshot_restore_resumes_the_gesture_state() {
        let mut peripheral = PeripheralState::default();
        for _ in 0..5 {
            peripheral.update(&RawInputs::new().with_tilt(0.0, 1.0).with_swing(0.0, 1.0));
        }
        let saved = peripheral.snapshot().unwrap();

        for _ in 0..20 {
            peripheral.update(&RawInputs::new().with_shake([true; 3]));
        }
        assert_ne!(peripheral.snapshot().unwrap(), saved);

        peripheral.restore(&saved).unwrap();
        assert_eq!(peripheral.snapshot().unwrap(), saved);
    }

    #[test]
    fn test_corrupt_restore_leaves_state_untouched() {
        let mut peripheral = PeripheralState::default();
        peripheral.update(&RawInputs::new().with_tilt(0.0, 1.0));
        let before = peripheral.snapshot().unwrap();

        let err = peripheral.restore(&[0xde, 0xad, 0xbe]).unwrap_err();
        assert!(matches!(err, SnapshotError::CorruptSnapshot(_)));
        assert_eq!(peripheral.snapshot().unwrap(), before);
    }

    #[test]
    fn test_update_is_deterministic_for_identical_histories() {
        let mut a = PeripheralState::default();
        let mut b = PeripheralState::default();
        let script = [
            RawInputs::new().with_stick(0.25, -0.75),
            RawInputs::new().with_swing(1.0, 0.0).with_buttons(false, true),
            RawInputs::new().with_shake([true, false, true]),
            RawInputs::new(),
        ];
        for inputs in &script {
            a.update(inputs);
            b.update(inputs);
        }
        assert_eq!(a.register_image(), b.register_image());
        assert_eq!(a.snapshot().unwrap(), b.snapshot().unwrap());
    }

    #[test]
    fn test_reads_between_ticks_do_not_recompute() {
        let mut peripheral = PeripheralState::default();
        peripheral.update(&RawInputs::new().with_stick(0.5, 0.5));
        let first = *peripheral.register_image();
        let second = *peripheral.register_image();
        assert_eq!(first, second);
    }
}
