//! Start button
//!
//! Momentary push button to ground with the internal pull-up enabled, so
//! the pin reads low while pressed. The pin is polled at a fixed interval,
//! which also debounces it.

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;
use sonardrive_core::traits::InputGateway;

pub struct StartButton<P, D> {
    pin: P,
    delay: D,
    poll_interval_ms: u32,
}

impl<P: InputPin, D: DelayNs> StartButton<P, D> {
    pub fn new(pin: P, delay: D, poll_interval_ms: u32) -> Self {
        Self {
            pin,
            delay,
            poll_interval_ms,
        }
    }

    /// Check the pin once
    ///
    /// A read error counts as released.
    pub fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }

    /// Poll until the button reads pressed
    pub async fn wait_for_press(&mut self) {
        while !self.is_pressed() {
            self.delay.delay_ms(self.poll_interval_ms).await;
        }
    }
}

impl<P: InputPin, D: DelayNs> InputGateway for StartButton<P, D> {
    async fn wait_for_start(&mut self) {
        self.wait_for_press().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockButton, MockDelay};
    use embassy_futures::block_on;

    #[test]
    fn test_waits_while_released() {
        let pin = MockButton::released_for(4);
        let reads = pin.reads.clone();
        let delay = MockDelay::new();
        let mut button = StartButton::new(pin, delay.clone(), 50);

        block_on(button.wait_for_start());

        assert_eq!(reads.get(), 5);
        assert_eq!(delay.total_ms(), 4 * 50);
    }

    #[test]
    fn test_already_pressed_returns_at_once() {
        let delay = MockDelay::new();
        let mut button = StartButton::new(MockButton::released_for(0), delay.clone(), 50);

        block_on(button.wait_for_press());
        assert_eq!(delay.total_ms(), 0);
    }
}
