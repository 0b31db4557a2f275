//! Tilt samples

/// One raw reading of the monitored accelerometer axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TiltSample(pub i16);

impl TiltSample {
    /// Reading reported when the accelerometer cannot be read
    ///
    /// Exceeds any threshold `RobotConfig::validate` accepts, so a dead
    /// sensor aborts the run.
    pub const SATURATED: Self = Self(i16::MAX);

    /// Absolute value of the reading
    ///
    /// `i16::MIN` maps to 32768 instead of overflowing.
    pub fn magnitude(self) -> u16 {
        self.0.unsigned_abs()
    }

    /// Check whether this sample is past the abort threshold
    ///
    /// The comparison is strict: a reading exactly at the threshold is
    /// still considered level.
    pub fn exceeds(self, threshold: u16) -> bool {
        self.magnitude() > threshold
    }
}
