//! Paired STEP/DIR stepper drivers
//!
//! Two step-pulse drivers (A4988, DRV8825 or similar) with their DIR pins
//! strapped for forward motion. Each call to [`StepperPair::advance_unit`]
//! pulses both STEP pins `steps_per_unit` times, interleaved so the wheels
//! stay in lockstep.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

/// Minimum STEP high time for common drivers
pub const STEP_PULSE_US: u32 = 2;

/// Which motor failed to step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepError {
    Left,
    Right,
    Both,
}

impl StepError {
    fn from_results<A, B>(left: &Result<(), A>, right: &Result<(), B>) -> Option<Self> {
        match (left.is_err(), right.is_err()) {
            (false, false) => None,
            (true, false) => Some(Self::Left),
            (false, true) => Some(Self::Right),
            (true, true) => Some(Self::Both),
        }
    }

    fn merge(self, other: Self) -> Self {
        if self == other {
            self
        } else {
            Self::Both
        }
    }
}

/// Left and right wheel steppers
pub struct StepperPair<L, R, D> {
    left: L,
    right: R,
    delay: D,
    steps_per_unit: u8,
    step_interval_ms: u32,
}

impl<L, R, D> StepperPair<L, R, D>
where
    L: OutputPin,
    R: OutputPin,
    D: DelayNs,
{
    pub fn new(left: L, right: R, delay: D, steps_per_unit: u8, step_interval_ms: u32) -> Self {
        let mut pair = Self {
            left,
            right,
            delay,
            steps_per_unit,
            step_interval_ms,
        };
        let _ = pair.set_both(false);
        pair
    }

    fn set_both(&mut self, high: bool) -> Option<StepError> {
        // Always drive both pins, whatever the first one returned
        let (left, right) = if high {
            (self.left.set_high(), self.right.set_high())
        } else {
            (self.left.set_low(), self.right.set_low())
        };
        StepError::from_results(&left, &right)
    }

    /// Issue one STEP pulse on each motor
    pub async fn step_once(&mut self) -> Result<(), StepError> {
        let rise = self.set_both(true);
        self.delay.delay_us(STEP_PULSE_US).await;
        let fall = self.set_both(false);

        match (rise, fall) {
            (None, None) => Ok(()),
            (Some(e), None) | (None, Some(e)) => Err(e),
            (Some(a), Some(b)) => Err(a.merge(b)),
        }
    }

    /// Advance both wheels by one drive unit
    ///
    /// Every pulse is issued even if an earlier one failed.
    pub async fn advance_unit(&mut self) -> Result<(), StepError> {
        let mut failed: Option<StepError> = None;

        for _ in 0..self.steps_per_unit {
            if let Err(e) = self.step_once().await {
                failed = Some(failed.map_or(e, |f| f.merge(e)));
            }
            self.delay.delay_ms(self.step_interval_ms).await;
        }

        match failed {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
