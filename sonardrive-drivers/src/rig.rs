//! Gateway implementations over the concrete drivers
//!
//! The rigs are where driver errors stop. The controller sees plain
//! readings: a failed range measurement reads as zero distance, a failed
//! accelerometer read as a saturated sample, which aborts the drive.
//! Actuator errors are logged and dropped.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::I2c;
use sonardrive_core::motion::{Distance, TiltSample};
use sonardrive_core::screen::StatusScreen;
use sonardrive_core::traits::{ActuatorGateway, SensorGateway};

use crate::display::Ssd1306;
use crate::output::{Buzzer, IndicatorLed};
use crate::sensor::{HcSr04, MicrosClock, Mpu6050};
use crate::stepper::StepperPair;

/// Ranger and accelerometer
pub struct SensorRig<T, E, C, D, I2C> {
    ranger: HcSr04<T, E, C, D>,
    imu: Mpu6050<I2C>,
}

impl<T, E, C, D, I2C> SensorRig<T, E, C, D, I2C> {
    pub fn new(ranger: HcSr04<T, E, C, D>, imu: Mpu6050<I2C>) -> Self {
        Self { ranger, imu }
    }
}

impl<T, E, C, D, I2C> SensorGateway for SensorRig<T, E, C, D, I2C>
where
    T: OutputPin,
    E: Wait,
    C: MicrosClock,
    D: DelayNs,
    I2C: I2c,
{
    async fn read_distance(&mut self) -> Distance {
        match self.ranger.measure().await {
            Ok(distance) => distance,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Range measurement failed: {}", _e);
                Distance::ZERO
            }
        }
    }

    async fn read_tilt_axis(&mut self) -> TiltSample {
        match self.imu.accel_y().await {
            Ok(raw) => TiltSample(raw),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Accelerometer read failed");
                TiltSample::SATURATED
            }
        }
    }
}

/// Steppers, buzzer, LED and display
pub struct ActuatorRig<L, R, SD, B, BD, P, I2C> {
    steppers: StepperPair<L, R, SD>,
    buzzer: Buzzer<B, BD>,
    led: IndicatorLed<P>,
    display: Ssd1306<I2C>,
}

impl<L, R, SD, B, BD, P, I2C> ActuatorRig<L, R, SD, B, BD, P, I2C> {
    pub fn new(
        steppers: StepperPair<L, R, SD>,
        buzzer: Buzzer<B, BD>,
        led: IndicatorLed<P>,
        display: Ssd1306<I2C>,
    ) -> Self {
        Self {
            steppers,
            buzzer,
            led,
            display,
        }
    }

    pub fn display(&self) -> &Ssd1306<I2C> {
        &self.display
    }
}

impl<L, R, SD, B, BD, P, I2C> ActuatorGateway for ActuatorRig<L, R, SD, B, BD, P, I2C>
where
    L: OutputPin,
    R: OutputPin,
    SD: DelayNs,
    B: OutputPin,
    BD: DelayNs,
    P: OutputPin,
    I2C: I2c,
{
    async fn advance_one_unit(&mut self) {
        if let Err(_e) = self.steppers.advance_unit().await {
            #[cfg(feature = "defmt")]
            defmt::warn!("Step pulse failed: {}", _e);
        }
    }

    async fn beep(&mut self) {
        if self.buzzer.beep().await.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Buzzer pulse failed");
        }
    }

    async fn render(&mut self, screen: &StatusScreen) {
        if self.display.show(screen).await.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display update failed");
        }
    }

    fn set_indicator_led(&mut self, on: bool) {
        if self.led.set_on(on).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Indicator LED update failed");
        }
    }
}
