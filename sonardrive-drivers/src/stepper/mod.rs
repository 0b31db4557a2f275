//! Stepper driver implementations

pub mod pair;

pub use pair::{StepError, StepperPair};
