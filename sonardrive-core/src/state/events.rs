//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Session loop is ready for the next run
    StartRequested,
    /// Operator pressed the start button
    StartConfirmed,
    /// Shutdown requested while waiting for start
    StartCancelled,
    /// Range reading taken and converted to steps
    DistanceMeasured,
    /// Step loop ended (all units issued, or tilt abort)
    DriveFinished,
    /// Outcome display, LED and buzzer done
    OutcomeReported,
    /// Cooldown delay elapsed
    CooldownElapsed,
}
