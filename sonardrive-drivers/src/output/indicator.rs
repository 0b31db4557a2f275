//! Indicator LED
//!
//! A single LED on a GPIO pin, wired either to ground (active-high) or to
//! the supply rail (active-low).

use embedded_hal::digital::OutputPin;

pub struct IndicatorLed<P> {
    pin: P,
    /// If true, LED on = pin low
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> IndicatorLed<P> {
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        let _ = led.set_on(false);
        led
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    pub fn set_on(&mut self, on: bool) -> Result<(), P::Error> {
        self.on = on;
        if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPin;

    #[test]
    fn test_active_high() {
        let pin = MockPin::new();
        let mut led = IndicatorLed::new_active_high(pin.clone());

        assert!(!led.is_on());
        assert!(!pin.is_high());

        led.set_on(true).unwrap();
        assert!(led.is_on());
        assert!(pin.is_high());

        led.set_on(false).unwrap();
        assert!(!pin.is_high());
    }

    #[test]
    fn test_active_low() {
        let pin = MockPin::new();
        let mut led = IndicatorLed::new_active_low(pin.clone());

        // Off means pin high
        assert!(pin.is_high());

        led.set_on(true).unwrap();
        assert!(led.is_on());
        assert!(!pin.is_high());
    }
}
