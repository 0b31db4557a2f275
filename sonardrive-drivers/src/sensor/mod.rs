//! Sensor implementations

pub mod hcsr04;
pub mod mpu6050;

pub use hcsr04::{echo_to_distance, HcSr04, MicrosClock, RangerError};
pub use mpu6050::{Mpu6050, MPU6050_ADDR};
