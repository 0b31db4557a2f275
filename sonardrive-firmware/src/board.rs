//! Board pin assignment
//!
//! | Function          | Pin    | Notes                              |
//! |-------------------|--------|------------------------------------|
//! | Indicator LED     | GPIO12 | active-high                        |
//! | Start button      | GPIO27 | to GND, internal pull-up           |
//! | Buzzer            | GPIO15 | active buzzer                      |
//! | Left STEP         | GPIO13 |                                    |
//! | Right STEP        | GPIO19 |                                    |
//! | HC-SR04 TRIG      | GPIO5  |                                    |
//! | HC-SR04 ECHO      | GPIO18 | via divider, the sensor is 5 V     |
//! | I2C0 SDA          | GPIO20 | MPU-6050 (0x68) and SSD1306 (0x3C) |
//! | I2C0 SCL          | GPIO21 |                                    |

use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, InterruptHandler};
use embassy_rp::peripherals::I2C0;
use embassy_rp::Peripherals;
use embassy_time::Instant;
use sonardrive_drivers::sensor::MicrosClock;

bind_interrupts!(pub struct Irqs {
    I2C0_IRQ => InterruptHandler<I2C0>;
});

/// I2C bus speed, shared by the accelerometer and display
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Microsecond clock backed by the embassy time driver
#[derive(Clone, Copy, Default)]
pub struct UptimeClock;

impl MicrosClock for UptimeClock {
    fn now_micros(&self) -> u64 {
        Instant::now().as_micros()
    }
}

/// Peripherals used by the rover, configured for their role
pub struct Board {
    pub led: Output<'static>,
    pub button: Input<'static>,
    pub buzzer: Output<'static>,
    pub left_step: Output<'static>,
    pub right_step: Output<'static>,
    pub trigger: Output<'static>,
    pub echo: Input<'static>,
    pub i2c: i2c::I2c<'static, I2C0, i2c::Async>,
}

impl Board {
    pub fn new(p: Peripherals) -> Self {
        let mut i2c_config = i2c::Config::default();
        i2c_config.frequency = I2C_FREQUENCY_HZ;

        Self {
            led: Output::new(p.PIN_12, Level::Low),
            button: Input::new(p.PIN_27, Pull::Up),
            buzzer: Output::new(p.PIN_15, Level::Low),
            left_step: Output::new(p.PIN_13, Level::Low),
            right_step: Output::new(p.PIN_19, Level::Low),
            trigger: Output::new(p.PIN_5, Level::Low),
            echo: Input::new(p.PIN_18, Pull::Down),
            i2c: i2c::I2c::new_async(p.I2C0, p.PIN_21, p.PIN_20, Irqs, i2c_config),
        }
    }
}
