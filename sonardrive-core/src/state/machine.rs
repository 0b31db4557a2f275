//! State machine definition
//!
//! Sessions move strictly forward through the states below and return to
//! `Idle` after the cooldown. There is no way back into an earlier phase
//! and no abort path from the outside once the start button has been
//! pressed: the only early exit, a tilt, is still reported through
//! `Driving -> Reporting`. A shutdown request can only cancel the wait for
//! the start button.

use super::events::Event;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Between sessions
    #[default]
    Idle,
    /// Prompt shown, blocked on the start button
    WaitingForStart,
    /// Taking the single range reading
    Measuring,
    /// Step loop running
    Driving,
    /// Outcome being signalled
    Reporting,
    /// Fixed pause before the next prompt
    Cooldown,
}

impl State {
    /// Check if the motors may be stepped in this state
    pub fn motion_allowed(&self) -> bool {
        matches!(self, State::Driving)
    }

    /// Process an event and return the next state
    ///
    /// Events that do not apply to the current state are ignored.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Idle, StartRequested) => WaitingForStart,
            (WaitingForStart, StartConfirmed) => Measuring,
            (WaitingForStart, StartCancelled) => Idle,
            (Measuring, DistanceMeasured) => Driving,
            (Driving, DriveFinished) => Reporting,
            (Reporting, OutcomeReported) => Cooldown,
            (Cooldown, CooldownElapsed) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}
