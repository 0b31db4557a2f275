//! Active buzzer
//!
//! The buzzer has its own oscillator, so a pulse is just the pin held
//! high for the beep duration.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

pub struct Buzzer<P, D> {
    pin: P,
    delay: D,
    duration_ms: u32,
}

impl<P: OutputPin, D: DelayNs> Buzzer<P, D> {
    pub fn new(pin: P, delay: D, duration_ms: u32) -> Self {
        let mut buzzer = Self {
            pin,
            delay,
            duration_ms,
        };
        let _ = buzzer.pin.set_low();
        buzzer
    }

    /// Sound one pulse
    ///
    /// The pin is released even if switching it on failed.
    pub async fn beep(&mut self) -> Result<(), P::Error> {
        let on = self.pin.set_high();
        self.delay.delay_ms(self.duration_ms).await;
        let off = self.pin.set_low();
        on.and(off)
    }
}
