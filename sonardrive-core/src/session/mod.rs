//! Session execution
//!
//! [`MotionController`] runs the measure / drive / report phases of one
//! session. [`SessionLoop`] owns the hardware gateways and runs sessions
//! back-to-back, handling the prompt, start wait and cooldown around them.

pub mod controller;
pub mod report;
pub mod runner;

#[cfg(test)]
mod mock;

pub use controller::{MotionController, SessionError};
pub use report::{DriveResult, MotionOutcome, SessionReport};
pub use runner::{SessionLoop, StartWait};
