//! Session outcomes

use crate::motion::{Distance, StepCount, TiltSample};

/// How the drive phase ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionOutcome {
    /// Every planned drive unit was issued
    Reached,
    /// A tilt sample crossed the threshold
    Aborted,
}

/// Result of the step loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveResult {
    /// Drive units actually issued
    pub units_issued: u32,
    /// How the loop ended
    pub outcome: MotionOutcome,
    /// The sample that caused an abort
    pub abort_sample: Option<TiltSample>,
}

/// Summary of one completed session
///
/// Produced for logging only; nothing is kept across sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionReport {
    /// Range reading taken at the start of the session
    pub distance: Distance,
    /// Raw steps computed from the distance
    pub steps: StepCount,
    /// Drive units the loop was allowed to issue
    pub units_planned: u32,
    /// Drive units actually issued
    pub units_issued: u32,
    /// Final outcome
    pub outcome: MotionOutcome,
    /// The sample that caused an abort
    pub abort_sample: Option<TiltSample>,
}

impl SessionReport {
    /// Check if the rover covered the full distance
    pub fn reached(&self) -> bool {
        self.outcome == MotionOutcome::Reached
    }
}
