//! Session loop
//!
//! Wraps the controller with the parts of the lifecycle that happen
//! outside a session: clearing the LED, showing the prompt, waiting for the
//! start button and sitting out the cooldown.

use embassy_futures::select::{select, Either};
use embedded_hal_async::delay::DelayNs;

use super::controller::{MotionController, SessionError};
use super::report::SessionReport;
use crate::screen::StatusScreen;
use crate::traits::{ActuatorGateway, InputGateway, SensorGateway, ShutdownSignal};

/// Result of waiting for the start button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartWait {
    /// Operator pressed start
    Started,
    /// Shutdown requested first
    Shutdown,
}

/// Runs sessions back-to-back
pub struct SessionLoop<I, S, A, D> {
    controller: MotionController,
    input: I,
    sensors: S,
    actuators: A,
    delay: D,
}

impl<I, S, A, D> SessionLoop<I, S, A, D>
where
    I: InputGateway,
    S: SensorGateway,
    A: ActuatorGateway,
    D: DelayNs,
{
    pub fn new(controller: MotionController, input: I, sensors: S, actuators: A, delay: D) -> Self {
        Self {
            controller,
            input,
            sensors,
            actuators,
            delay,
        }
    }

    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    /// Block until start is pressed or shutdown is requested
    pub async fn wait_for_start<X: ShutdownSignal>(&mut self, shutdown: &mut X) -> StartWait {
        match select(self.input.wait_for_start(), shutdown.wait()).await {
            Either::First(()) => StartWait::Started,
            Either::Second(()) => StartWait::Shutdown,
        }
    }

    /// Run one full lifecycle from idle back to idle
    ///
    /// Returns `Ok(None)` if shutdown was requested before the start
    /// button.
    pub async fn run_once<X: ShutdownSignal>(
        &mut self,
        shutdown: &mut X,
    ) -> Result<Option<SessionReport>, SessionError> {
        self.actuators.set_indicator_led(false);
        self.actuators.render(&StatusScreen::idle_prompt()).await;
        self.controller.request_start();

        if self.wait_for_start(shutdown).await == StartWait::Shutdown {
            self.controller.cancel_start();
            return Ok(None);
        }
        self.controller.confirm_start();
        self.actuators.beep().await;

        let report = self
            .controller
            .run_session(&mut self.sensors, &mut self.actuators, &mut self.delay)
            .await?;

        self.delay.delay_ms(self.controller.config().cooldown_ms).await;
        self.controller.finish_cooldown();

        Ok(Some(report))
    }

    /// Run sessions until shutdown is requested
    ///
    /// `on_report` is called after every completed session. A controller
    /// that refuses to run a session stops the loop with its error.
    pub async fn run<X, F>(
        &mut self,
        shutdown: &mut X,
        mut on_report: F,
    ) -> Result<(), SessionError>
    where
        X: ShutdownSignal,
        F: FnMut(&SessionReport),
    {
        while let Some(report) = self.run_once(shutdown).await? {
            on_report(&report);
        }
        Ok(())
    }
}
