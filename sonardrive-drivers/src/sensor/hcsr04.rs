//! HC-SR04 ultrasonic ranger
//!
//! A 10 µs pulse on TRIG starts a measurement; ECHO is then held high for
//! the round-trip time of the sound burst. Sound covers 1 cm in about
//! 29.1 µs, so `cm = echo_us / 2 / 29.1`.

use embassy_futures::select::{select, Either};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;
use sonardrive_core::motion::Distance;

/// Length of the trigger pulse
pub const TRIGGER_PULSE_US: u32 = 10;

/// Give up on an echo after this long (about 5 m of range)
pub const ECHO_TIMEOUT_US: u32 = 30_000;

/// Microseconds per centimetre of sound travel
const US_PER_CM: f32 = 29.1;

/// Free-running microsecond time source
pub trait MicrosClock {
    fn now_micros(&self) -> u64;
}

/// Ranger errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangerError {
    /// No echo edge within the timeout
    Timeout,
    /// Trigger or echo pin failed
    Pin,
}

/// Convert an echo pulse width to a distance
pub fn echo_to_distance(echo_us: u32) -> Distance {
    Distance::from_cm(echo_us as f32 / 2.0 / US_PER_CM)
}

/// HC-SR04 driver
pub struct HcSr04<T, E, C, D> {
    trigger: T,
    echo: E,
    clock: C,
    delay: D,
    timeout_us: u32,
}

impl<T, E, C, D> HcSr04<T, E, C, D>
where
    T: OutputPin,
    E: Wait,
    C: MicrosClock,
    D: DelayNs,
{
    pub fn new(trigger: T, echo: E, clock: C, delay: D) -> Self {
        Self {
            trigger,
            echo,
            clock,
            delay,
            timeout_us: ECHO_TIMEOUT_US,
        }
    }

    /// Fire one burst and time the echo pulse
    pub async fn echo_micros(&mut self) -> Result<u32, RangerError> {
        self.trigger.set_low().map_err(|_| RangerError::Pin)?;
        self.delay.delay_us(2).await;
        self.trigger.set_high().map_err(|_| RangerError::Pin)?;
        self.delay.delay_us(TRIGGER_PULSE_US).await;
        self.trigger.set_low().map_err(|_| RangerError::Pin)?;

        match select(self.echo.wait_for_high(), self.delay.delay_us(self.timeout_us)).await {
            Either::First(Ok(())) => {}
            Either::First(Err(_)) => return Err(RangerError::Pin),
            Either::Second(()) => return Err(RangerError::Timeout),
        }
        let start = self.clock.now_micros();

        match select(self.echo.wait_for_low(), self.delay.delay_us(self.timeout_us)).await {
            Either::First(Ok(())) => {}
            Either::First(Err(_)) => return Err(RangerError::Pin),
            Either::Second(()) => return Err(RangerError::Timeout),
        }
        let width = self.clock.now_micros().saturating_sub(start);

        Ok(width.min(u32::MAX as u64) as u32)
    }

    /// Take one range measurement
    pub async fn measure(&mut self) -> Result<Distance, RangerError> {
        self.echo_micros().await.map(echo_to_distance)
    }
}
