//! Board-agnostic core logic for the SonarDrive rover
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware capability traits (sensors, actuators, operator input)
//! - Distance to step conversion
//! - Session state machine and the motion controller that drives it
//! - The session loop that runs sessions back-to-back
//! - Status screen layout
//! - Configuration constants and their validation

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod motion;
pub mod screen;
pub mod session;
pub mod state;
pub mod traits;
