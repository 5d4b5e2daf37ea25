//! Property-based tests for the register encoding.
//!
//! Uses proptest with 500 cases to verify the single-axis nudge policy,
//! 10-bit accelerometer bounds, and button-byte packing invariants.

use openmotion_calibration::{CalibrationBlock, CalibrationConstants, GRAVITY_M_S2};
use openmotion_register_protocol::{
    ButtonState, StickState, button_bits, encode_register, register_offsets,
};
use proptest::prelude::*;

const STICK_CENTER: u8 = 0x80;
const STICK_EXTENT: f32 = 96.0;

fn default_block() -> CalibrationBlock {
    CalibrationBlock::build(CalibrationConstants::default())
}

fn rest() -> [f32; 3] {
    [0.0, 0.0, GRAVITY_M_S2]
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// X-only deflection must nudge the Y byte to exactly center+1.
    #[test]
    fn prop_x_only_deflection_nudges_y(x in prop_oneof![0.05f32..=1.0, -1.0f32..=-0.05]) {
        let image = encode_register(
            StickState::new(x, 0.0),
            rest(),
            ButtonState::default(),
            &default_block(),
        );
        prop_assert_ne!(image.stick_x(), STICK_CENTER, "x = {} must leave center", x);
        prop_assert_eq!(image.stick_y(), STICK_CENTER + 1);
    }

    /// Y-only deflection must nudge the X byte to exactly center+1.
    #[test]
    fn prop_y_only_deflection_nudges_x(y in prop_oneof![0.05f32..=1.0, -1.0f32..=-0.05]) {
        let image = encode_register(
            StickState::new(0.0, y),
            rest(),
            ButtonState::default(),
            &default_block(),
        );
        prop_assert_ne!(image.stick_y(), STICK_CENTER, "y = {} must leave center", y);
        prop_assert_eq!(image.stick_x(), STICK_CENTER + 1);
    }

    /// With both axes deflected, the encoded bytes are the plain scaled
    /// values; the nudge must not fire.
    #[test]
    fn prop_both_axes_deflected_encode_unmodified(
        x in prop_oneof![0.1f32..=1.0, -1.0f32..=-0.1],
        y in prop_oneof![0.1f32..=1.0, -1.0f32..=-0.1],
    ) {
        let image = encode_register(
            StickState::new(x, y),
            rest(),
            ButtonState::default(),
            &default_block(),
        );
        let expected_x = (f32::from(STICK_CENTER) + x * STICK_EXTENT).round() as u8;
        let expected_y = (f32::from(STICK_CENTER) + y * STICK_EXTENT).round() as u8;
        prop_assert_eq!(image.stick_x(), expected_x);
        prop_assert_eq!(image.stick_y(), expected_y);
    }

    /// A neutral stick must encode to the stored centers with no nudge,
    /// whatever the acceleration.
    #[test]
    fn prop_neutral_stick_stays_centered(
        ax in -100.0f32..=100.0,
        ay in -100.0f32..=100.0,
        az in -100.0f32..=100.0,
    ) {
        let image = encode_register(
            StickState::default(),
            [ax, ay, az],
            ButtonState::default(),
            &default_block(),
        );
        prop_assert_eq!(image.stick_x(), STICK_CENTER);
        prop_assert_eq!(image.stick_y(), STICK_CENTER);
    }

    /// The nudge policy holds across arbitrary stored gate radii.
    #[test]
    fn prop_nudge_holds_for_any_gate_radius(radius in 1u8..=0x7f) {
        let block = CalibrationBlock::build(CalibrationConstants {
            stick_gate_radius: radius,
            ..CalibrationConstants::default()
        });
        let image = encode_register(
            StickState::new(1.0, 0.0),
            rest(),
            ButtonState::default(),
            &block,
        );
        prop_assert_eq!(image.stick_x(), STICK_CENTER + radius);
        prop_assert_eq!(image.stick_y(), STICK_CENTER + 1);
    }

    /// Reassembled accelerometer samples must stay within 10 bits for any
    /// finite input.
    #[test]
    fn prop_accel_samples_stay_within_10_bits(
        ax in -500.0f32..=500.0,
        ay in -500.0f32..=500.0,
        az in -500.0f32..=500.0,
    ) {
        let image = encode_register(
            StickState::default(),
            [ax, ay, az],
            ButtonState::default(),
            &default_block(),
        );
        for axis in 0..3 {
            prop_assert!(image.accel(axis) <= 0x3ff, "axis {} sample out of range", axis);
        }
    }

    /// The per-axis high byte must always equal the sample's top 8 bits.
    #[test]
    fn prop_accel_high_bytes_match_samples(
        ax in -50.0f32..=50.0,
        ay in -50.0f32..=50.0,
        az in -50.0f32..=50.0,
    ) {
        let image = encode_register(
            StickState::default(),
            [ax, ay, az],
            ButtonState::default(),
            &default_block(),
        );
        let bytes = image.as_bytes();
        prop_assert_eq!(u16::from(bytes[register_offsets::ACCEL_X_HI]), image.accel(0) >> 2);
        prop_assert_eq!(u16::from(bytes[register_offsets::ACCEL_Y_HI]), image.accel(1) >> 2);
        prop_assert_eq!(u16::from(bytes[register_offsets::ACCEL_Z_HI]), image.accel(2) >> 2);
    }

    /// Button flags are active-low for every combination, independent of the
    /// accel low bits sharing the byte.
    #[test]
    fn prop_button_flags_are_active_low(
        c in any::<bool>(),
        z in any::<bool>(),
        az in -100.0f32..=100.0,
    ) {
        let image = encode_register(
            StickState::default(),
            [0.0, 0.0, az],
            ButtonState::new(c, z),
            &default_block(),
        );
        prop_assert_eq!(image.pressed(button_bits::C), c);
        prop_assert_eq!(image.pressed(button_bits::Z), z);
    }

    /// Encoding is a pure function: identical arguments, identical bytes.
    #[test]
    fn prop_encode_is_deterministic(
        x in -1.0f32..=1.0,
        y in -1.0f32..=1.0,
        az in -100.0f32..=100.0,
        c in any::<bool>(),
        z in any::<bool>(),
    ) {
        let block = default_block();
        let stick = StickState::new(x, y);
        let accel = [0.0, 0.0, az];
        let buttons = ButtonState::new(c, z);
        let a = encode_register(stick, accel, buttons, &block);
        let b = encode_register(stick, accel, buttons, &block);
        prop_assert_eq!(a.as_bytes(), b.as_bytes());
    }
}
