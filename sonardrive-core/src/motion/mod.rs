//! Motion math
//!
//! Distance to step conversion and tilt evaluation. Everything here is
//! pure and allocation-free.

pub mod distance;
pub mod tilt;

pub use distance::{calibration_table, drive_units, floor_to_steps, steps_for, Distance, StepCount};
pub use tilt::TiltSample;
