//! Actuator gateway trait
//!
//! Abstracts the two steppers, buzzer, indicator LED and display. The
//! outcome signals are provided methods built on the primitives, so a
//! driver only has to implement the hardware calls.

use embedded_hal_async::delay::DelayNs;

use crate::screen::StatusScreen;

/// Number of buzzer pulses in the tilted signal
pub const TILTED_BEEPS: u8 = 3;

/// Steppers, buzzer, LED and display
#[allow(async_fn_in_trait)]
pub trait ActuatorGateway {
    /// Advance both motors by one drive unit
    ///
    /// Both motors must always be commanded, even if one of them reports an
    /// error, so a single failure cannot turn the rover. Nothing is
    /// returned; actuation is assumed to succeed.
    async fn advance_one_unit(&mut self);

    /// Sound one buzzer pulse
    async fn beep(&mut self);

    /// Replace the display contents with a status screen
    async fn render(&mut self, screen: &StatusScreen);

    /// Switch the indicator LED
    fn set_indicator_led(&mut self, on: bool);

    /// Goal reached: show "REACHED" and beep once
    async fn signal_reached(&mut self) {
        self.render(&StatusScreen::reached()).await;
        self.beep().await;
    }

    /// Aborted by tilt: LED on, show "TILTED", beep three times
    ///
    /// Blocks through the gaps between beeps.
    async fn signal_tilted<D: DelayNs>(&mut self, delay: &mut D, spacing_ms: u32) {
        self.set_indicator_led(true);
        self.render(&StatusScreen::tilted()).await;
        for pulse in 0..TILTED_BEEPS {
            if pulse > 0 {
                delay.delay_ms(spacing_ms).await;
            }
            self.beep().await;
        }
    }
}
