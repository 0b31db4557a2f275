//! Recording mocks for the gateway traits
//!
//! All mocks push into one shared call log so tests can check the
//! interleaving of sensor and actuator calls.

use core::cell::{Cell, RefCell};
use core::future::poll_fn;
use core::task::Poll;
use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;

use crate::motion::{Distance, TiltSample};
use crate::screen::StatusScreen;
use crate::traits::{ActuatorGateway, InputGateway, SensorGateway, ShutdownSignal};

/// Everything a gateway can be asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ReadDistance,
    ReadTilt(i16),
    Advance,
    Beep,
    Render(StatusScreen),
    Led(bool),
    DelayMs(u32),
    StartPressed,
}

pub type CallLog = RefCell<Vec<Call>>;

pub fn new_log() -> CallLog {
    RefCell::new(Vec::new())
}

/// Count calls matching a predicate
pub fn count(log: &CallLog, f: impl Fn(&Call) -> bool) -> usize {
    log.borrow().iter().filter(|c| f(c)).count()
}

pub struct MockSensors<'a> {
    log: &'a CallLog,
    distance: Distance,
    tilt: Vec<i16>,
    next_tilt: usize,
}

impl<'a> MockSensors<'a> {
    /// Sensors returning `distance_cm` and then `tilt` in order (0 once exhausted)
    pub fn new(log: &'a CallLog, distance_cm: f32, tilt: &[i16]) -> Self {
        Self {
            log,
            distance: Distance::from_cm(distance_cm),
            tilt: tilt.to_vec(),
            next_tilt: 0,
        }
    }
}

impl SensorGateway for MockSensors<'_> {
    async fn read_distance(&mut self) -> Distance {
        self.log.borrow_mut().push(Call::ReadDistance);
        self.distance
    }

    async fn read_tilt_axis(&mut self) -> TiltSample {
        let value = self.tilt.get(self.next_tilt).copied().unwrap_or(0);
        self.next_tilt += 1;
        self.log.borrow_mut().push(Call::ReadTilt(value));
        TiltSample(value)
    }
}

pub struct MockActuators<'a> {
    log: &'a CallLog,
}

impl<'a> MockActuators<'a> {
    pub fn new(log: &'a CallLog) -> Self {
        Self { log }
    }
}

impl ActuatorGateway for MockActuators<'_> {
    async fn advance_one_unit(&mut self) {
        self.log.borrow_mut().push(Call::Advance);
    }

    async fn beep(&mut self) {
        self.log.borrow_mut().push(Call::Beep);
    }

    async fn render(&mut self, screen: &StatusScreen) {
        self.log.borrow_mut().push(Call::Render(screen.clone()));
    }

    fn set_indicator_led(&mut self, on: bool) {
        self.log.borrow_mut().push(Call::Led(on));
    }
}

pub struct MockDelay<'a> {
    log: &'a CallLog,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &'a CallLog) -> Self {
        Self { log }
    }
}

impl DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Call::DelayMs(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Call::DelayMs(ms));
    }
}

/// Start button pressed a fixed number of times, then never again
pub struct MockInput<'a> {
    log: &'a CallLog,
    presses: &'a Cell<usize>,
}

impl<'a> MockInput<'a> {
    pub fn new(log: &'a CallLog, presses: &'a Cell<usize>) -> Self {
        Self { log, presses }
    }
}

impl InputGateway for MockInput<'_> {
    async fn wait_for_start(&mut self) {
        let left = self.presses.get();
        if left == 0 {
            core::future::pending::<()>().await;
        }
        self.presses.set(left - 1);
        self.log.borrow_mut().push(Call::StartPressed);
    }
}

/// Fires once the mock button has no presses left
pub struct ShutdownWhenDrained<'a> {
    presses: &'a Cell<usize>,
}

impl<'a> ShutdownWhenDrained<'a> {
    pub fn new(presses: &'a Cell<usize>) -> Self {
        Self { presses }
    }
}

impl ShutdownSignal for ShutdownWhenDrained<'_> {
    async fn wait(&mut self) {
        poll_fn(|_| {
            if self.presses.get() == 0 {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        })
        .await
    }
}
