//! Hardware driver implementations
//!
//! Concrete drivers for the rover's peripherals, written against the
//! `embedded-hal` 1.0 traits so they run on any HAL:
//!
//! - Sensors (HC-SR04 ultrasonic ranger, MPU-6050 accelerometer)
//! - Paired step-pulse stepper drivers
//! - GPIO outputs (buzzer, indicator LED)
//! - SSD1306 OLED text display
//! - Start button
//!
//! The rigs bundle them into the gateway traits from `sonardrive-core`.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod display;
pub mod input;
pub mod output;
pub mod rig;
pub mod sensor;
pub mod stepper;

#[cfg(test)]
mod mock;

pub use rig::{ActuatorRig, SensorRig};
