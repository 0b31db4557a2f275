//! Robot configuration
//!
//! Every mechanical and timing constant the rover uses lives here. The
//! values are fixed at compile time; [`RobotConfig::validate`] is called
//! once during boot and the firmware refuses to start on failure.

use core::ops::Deref;

/// Wheel radius in centimetres
pub const TIRE_RADIUS_CM: f32 = 3.0;

/// Full steps per motor revolution (1.8° motors)
pub const STEPS_PER_REVOLUTION: u16 = 200;

/// Raw motor steps covered by one drive unit
pub const STEPS_PER_UNIT: u8 = 2;

/// Absolute raw accelerometer reading above which a run is aborted
pub const TILT_THRESHOLD: u16 = 12_000;

/// Gap between the buzzer pulses of the tilted signal
pub const BEEP_SPACING_MS: u32 = 500;

/// Length of a single buzzer pulse
pub const BEEP_DURATION_MS: u32 = 100;

/// Pause after a session before the next prompt
pub const COOLDOWN_MS: u32 = 5_000;

/// Time between consecutive step pulses on a motor
pub const STEP_INTERVAL_MS: u32 = 10;

/// Start button polling period
pub const BUTTON_POLL_MS: u32 = 50;

/// Configuration errors
///
/// These are fatal: the firmware halts before any actuator is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tire radius is zero, negative or not a finite number
    InvalidTireRadius,
    /// Steps per revolution is zero
    ZeroStepsPerRevolution,
    /// Steps per drive unit is zero
    ZeroStepsPerUnit,
    /// Tilt threshold is zero (every sample would abort)
    ZeroTiltThreshold,
    /// Tilt threshold at or above the largest positive sample, so a
    /// saturated reading would no longer abort
    TiltThresholdUnreachable,
}

/// Complete robot configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RobotConfig {
    /// Wheel radius (cm)
    pub tire_radius_cm: f32,
    /// Full steps per motor revolution
    pub steps_per_revolution: u16,
    /// Raw steps per drive unit
    pub steps_per_unit: u8,
    /// Tilt abort threshold (absolute raw units)
    pub tilt_threshold: u16,
    /// Spacing between tilted-signal beeps (ms)
    pub beep_spacing_ms: u32,
    /// Single beep length (ms)
    pub beep_duration_ms: u32,
    /// Post-session cooldown (ms)
    pub cooldown_ms: u32,
    /// Step pulse interval (ms)
    pub step_interval_ms: u32,
    /// Button polling period (ms)
    pub button_poll_ms: u32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RobotConfig {
    /// The rover as built
    pub const DEFAULT: Self = Self {
        tire_radius_cm: TIRE_RADIUS_CM,
        steps_per_revolution: STEPS_PER_REVOLUTION,
        steps_per_unit: STEPS_PER_UNIT,
        tilt_threshold: TILT_THRESHOLD,
        beep_spacing_ms: BEEP_SPACING_MS,
        beep_duration_ms: BEEP_DURATION_MS,
        cooldown_ms: COOLDOWN_MS,
        step_interval_ms: STEP_INTERVAL_MS,
        button_poll_ms: BUTTON_POLL_MS,
    };

    /// Check the mechanical constants
    ///
    /// Returns the first problem found.
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if !self.tire_radius_cm.is_finite() || self.tire_radius_cm <= 0.0 {
            return Err(ConfigError::InvalidTireRadius);
        }
        if self.steps_per_revolution == 0 {
            return Err(ConfigError::ZeroStepsPerRevolution);
        }
        if self.steps_per_unit == 0 {
            return Err(ConfigError::ZeroStepsPerUnit);
        }
        if self.tilt_threshold == 0 {
            return Err(ConfigError::ZeroTiltThreshold);
        }
        if self.tilt_threshold >= i16::MAX as u16 {
            return Err(ConfigError::TiltThresholdUnreachable);
        }
        Ok(ValidatedConfig(self))
    }
}

/// A [`RobotConfig`] that passed [`RobotConfig::validate`]
///
/// Only obtainable through validation, so holders never need to re-check
/// the divisor constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValidatedConfig(RobotConfig);

impl Deref for ValidatedConfig {
    type Target = RobotConfig;

    fn deref(&self) -> &RobotConfig {
        &self.0
    }
}
