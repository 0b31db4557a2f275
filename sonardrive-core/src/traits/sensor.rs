//! Sensor gateway trait

use crate::motion::{Distance, TiltSample};

/// Range and tilt readings
///
/// Both calls return exactly one reading. Implementations must not retry
/// or filter; the controller treats every reading as ground truth.
#[allow(async_fn_in_trait)]
pub trait SensorGateway {
    /// Take one ultrasonic range measurement
    async fn read_distance(&mut self) -> Distance;

    /// Sample the monitored accelerometer axis once
    async fn read_tilt_axis(&mut self) -> TiltSample;
}
