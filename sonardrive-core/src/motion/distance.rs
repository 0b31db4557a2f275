//! Distance to step conversion
//!
//! One wheel revolution covers `2 * π * r` centimetres and takes
//! `steps_per_revolution` full steps, so
//! `steps = floor(d * steps_per_revolution / (2 * π * r))`.
//!
//! The result is floored, never rounded to nearest. Any fractional step is
//! dropped, so the rover always stops slightly short of the measured
//! distance. Calibration assumes this bias; do not change the rounding
//! without re-measuring.

use core::f64::consts::PI;

use crate::config::ValidatedConfig;

/// Calibration table granularity (cm)
pub const CALIBRATION_STEP_CM: u32 = 10;

/// Number of rows in the calibration table (10 cm .. 100 cm)
pub const CALIBRATION_ROWS: usize = 10;

/// A single ultrasonic range measurement in centimetres
///
/// Raw readings are not validated. A degenerate value (zero, negative,
/// NaN) converts to zero steps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Distance(f32);

impl Distance {
    /// Zero distance
    pub const ZERO: Self = Self(0.0);

    /// Create a distance from centimetres
    pub const fn from_cm(cm: f32) -> Self {
        Self(cm)
    }

    /// Get the distance in centimetres
    pub fn cm(self) -> f32 {
        self.0
    }
}

/// Number of raw motor steps needed to cover a distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepCount(u32);

impl StepCount {
    /// Zero steps
    pub const ZERO: Self = Self(0);

    /// Create a step count
    pub const fn new(steps: u32) -> Self {
        Self(steps)
    }

    /// Get the raw step count
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Floor a fractional step count
///
/// Negative and NaN inputs give zero; values past `u32::MAX` saturate.
pub fn floor_to_steps(raw: f64) -> StepCount {
    let floored = libm::floor(raw);
    if floored.is_nan() || floored <= 0.0 {
        StepCount::ZERO
    } else if floored >= u32::MAX as f64 {
        StepCount(u32::MAX)
    } else {
        StepCount(floored as u32)
    }
}

/// Convert a distance into raw motor steps
///
/// Callers must pass a positive radius and step count; use
/// [`ValidatedConfig::steps_for`] to get that guarantee from the type.
pub fn steps_for(distance: Distance, tire_radius_cm: f32, steps_per_revolution: u16) -> StepCount {
    let circumference_cm = 2.0 * PI * tire_radius_cm as f64;
    let raw = distance.cm() as f64 * steps_per_revolution as f64 / circumference_cm;
    floor_to_steps(raw)
}

/// Number of drive units for a step count
///
/// A drive unit moves each motor `steps_per_unit` raw steps. A trailing
/// partial unit is discarded.
pub fn drive_units(steps: StepCount, steps_per_unit: u8) -> u32 {
    steps.get() / steps_per_unit.max(1) as u32
}

/// Step counts for 10, 20, .. 100 cm
///
/// Logged at boot so the conversion can be checked against a tape measure.
pub fn calibration_table(config: &ValidatedConfig) -> [(u32, StepCount); CALIBRATION_ROWS] {
    core::array::from_fn(|i| {
        let cm = (i as u32 + 1) * CALIBRATION_STEP_CM;
        (cm, config.steps_for(Distance::from_cm(cm as f32)))
    })
}

impl ValidatedConfig {
    /// Convert a distance using this configuration's wheel geometry
    pub fn steps_for(&self, distance: Distance) -> StepCount {
        steps_for(distance, self.tire_radius_cm, self.steps_per_revolution)
    }

    /// Number of drive units for a step count under this configuration
    pub fn drive_units(&self, steps: StepCount) -> u32 {
        drive_units(steps, self.steps_per_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RobotConfig;
    use proptest::prelude::*;

    #[test]
    fn test_thirty_centimetres() {
        let steps = steps_for(Distance::from_cm(30.0), 3.0, 200);
        assert_eq!(steps, StepCount::new(318));
        assert_eq!(drive_units(steps, 2), 159);
    }

    #[test]
    fn test_zero_distance() {
        let steps = steps_for(Distance::ZERO, 3.0, 200);
        assert_eq!(steps, StepCount::ZERO);
        assert_eq!(drive_units(steps, 2), 0);
    }

    #[test]
    fn test_floor_not_round() {
        // 318.31 -> 318, 0.99 -> 0, 1.0 -> 1
        assert_eq!(floor_to_steps(318.31), StepCount::new(318));
        assert_eq!(floor_to_steps(318.99), StepCount::new(318));
        assert_eq!(floor_to_steps(0.99), StepCount::ZERO);
        assert_eq!(floor_to_steps(1.0), StepCount::new(1));
    }

    #[test]
    fn test_degenerate_readings() {
        assert_eq!(floor_to_steps(-5.0), StepCount::ZERO);
        assert_eq!(floor_to_steps(f64::NAN), StepCount::ZERO);
        assert_eq!(floor_to_steps(f64::INFINITY), StepCount::new(u32::MAX));
        assert_eq!(steps_for(Distance::from_cm(-12.0), 3.0, 200), StepCount::ZERO);
        assert_eq!(steps_for(Distance::from_cm(f32::NAN), 3.0, 200), StepCount::ZERO);
    }

    #[test]
    fn test_drive_units_drops_half_unit() {
        assert_eq!(drive_units(StepCount::new(319), 2), 159);
        assert_eq!(drive_units(StepCount::new(1), 2), 0);
        assert_eq!(drive_units(StepCount::new(7), 1), 7);
    }

    #[test]
    fn test_calibration_table() {
        let config = RobotConfig::DEFAULT.validate().unwrap();
        let table = calibration_table(&config);
        let expected = [106, 212, 318, 424, 530, 636, 742, 848, 954, 1061];

        for (i, (cm, steps)) in table.iter().enumerate() {
            assert_eq!(*cm, (i as u32 + 1) * 10);
            assert_eq!(steps.get(), expected[i]);
        }
    }

    #[test]
    fn test_config_helpers_match_free_functions() {
        let config = RobotConfig::DEFAULT.validate().unwrap();
        let distance = Distance::from_cm(47.5);
        assert_eq!(config.steps_for(distance), steps_for(distance, 3.0, 200));
        assert_eq!(config.drive_units(StepCount::new(318)), 159);
    }

    proptest! {
        #[test]
        fn prop_steps_monotonic(a in 0.0f32..10_000.0, b in 0.0f32..10_000.0) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            let near_steps = steps_for(Distance::from_cm(near), 3.0, 200);
            let far_steps = steps_for(Distance::from_cm(far), 3.0, 200);
            prop_assert!(near_steps <= far_steps);
        }

        #[test]
        fn prop_zero_distance_is_zero_steps(radius in 0.1f32..50.0, steps_per_rev in 1u16..=u16::MAX) {
            prop_assert_eq!(steps_for(Distance::ZERO, radius, steps_per_rev), StepCount::ZERO);
        }

        #[test]
        fn prop_deterministic(d in 0.0f32..10_000.0, radius in 0.1f32..50.0, steps_per_rev in 1u16..=u16::MAX) {
            let first = steps_for(Distance::from_cm(d), radius, steps_per_rev);
            let second = steps_for(Distance::from_cm(d), radius, steps_per_rev);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_never_overshoots(d in 0.0f32..10_000.0) {
            let steps = steps_for(Distance::from_cm(d), 3.0, 200);
            let covered_cm = steps.get() as f64 * 2.0 * PI * 3.0 / 200.0;
            prop_assert!(covered_cm <= d as f64 + 1e-9);
        }
    }
}
