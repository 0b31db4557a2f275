//! Motion controller
//!
//! Owns the session state machine and runs the measure, drive and report
//! phases against the gateway traits.

use embedded_hal_async::delay::DelayNs;

use super::report::{DriveResult, MotionOutcome, SessionReport};
use crate::config::ValidatedConfig;
use crate::screen::StatusScreen;
use crate::state::{Event, State};
use crate::traits::{ActuatorGateway, SensorGateway};

/// Session errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError {
    /// `run_session` called before the start was confirmed
    NotStarted(State),
    /// `drive` called outside the `Driving` state
    MotionLocked(State),
}

/// Runs one session at a time
pub struct MotionController {
    config: ValidatedConfig,
    state: State,
}

impl MotionController {
    /// Create a controller in the idle state
    pub fn new(config: ValidatedConfig) -> Self {
        Self {
            config,
            state: State::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get the configuration
    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    fn handle(&mut self, event: Event) {
        self.state = self.state.transition(event);
    }

    /// Prompt shown, start waiting for the operator
    pub fn request_start(&mut self) {
        self.handle(Event::StartRequested);
    }

    /// Operator pressed start
    pub fn confirm_start(&mut self) {
        self.handle(Event::StartConfirmed);
    }

    /// Shutdown won the race against the start button
    pub fn cancel_start(&mut self) {
        self.handle(Event::StartCancelled);
    }

    /// Cooldown delay has elapsed
    pub fn finish_cooldown(&mut self) {
        self.handle(Event::CooldownElapsed);
    }

    /// Issue up to `units` drive units, sampling tilt after each one
    ///
    /// Stops immediately after the first sample whose magnitude exceeds
    /// the threshold. That unit has already been issued and counts.
    /// Refuses to step the motors unless the controller is `Driving`.
    pub async fn drive<S, A>(
        &self,
        units: u32,
        sensors: &mut S,
        actuators: &mut A,
    ) -> Result<DriveResult, SessionError>
    where
        S: SensorGateway,
        A: ActuatorGateway,
    {
        if !self.state.motion_allowed() {
            return Err(SessionError::MotionLocked(self.state));
        }

        let mut issued = 0;

        while issued < units {
            actuators.advance_one_unit().await;
            issued += 1;

            let sample = sensors.read_tilt_axis().await;
            if sample.exceeds(self.config.tilt_threshold) {
                return Ok(DriveResult {
                    units_issued: issued,
                    outcome: MotionOutcome::Aborted,
                    abort_sample: Some(sample),
                });
            }
        }

        Ok(DriveResult {
            units_issued: issued,
            outcome: MotionOutcome::Reached,
            abort_sample: None,
        })
    }

    /// Measure, drive and report
    ///
    /// Must be called in `Measuring`; leaves the controller in `Cooldown`.
    /// The range reading is taken exactly once.
    pub async fn run_session<S, A, D>(
        &mut self,
        sensors: &mut S,
        actuators: &mut A,
        delay: &mut D,
    ) -> Result<SessionReport, SessionError>
    where
        S: SensorGateway,
        A: ActuatorGateway,
        D: DelayNs,
    {
        if self.state != State::Measuring {
            return Err(SessionError::NotStarted(self.state));
        }

        let distance = sensors.read_distance().await;
        let steps = self.config.steps_for(distance);
        let units_planned = self.config.drive_units(steps);
        actuators
            .render(&StatusScreen::measurement(distance, steps))
            .await;
        self.handle(Event::DistanceMeasured);

        let result = self.drive(units_planned, sensors, actuators).await?;
        self.handle(Event::DriveFinished);

        match result.outcome {
            MotionOutcome::Reached => actuators.signal_reached().await,
            MotionOutcome::Aborted => {
                actuators
                    .signal_tilted(delay, self.config.beep_spacing_ms)
                    .await
            }
        }
        self.handle(Event::OutcomeReported);

        Ok(SessionReport {
            distance,
            steps,
            units_planned,
            units_issued: result.units_issued,
            outcome: result.outcome,
            abort_sample: result.abort_sample,
        })
    }
}
