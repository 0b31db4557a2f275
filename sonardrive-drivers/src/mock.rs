//! Mock pins, bus and delay for host tests

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use embedded_hal::i2c::{ErrorKind as I2cErrorKind, Operation, SevenBitAddress};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{ErrorType as I2cErrorType, I2c};

/// Output pin that records every level it is driven to
#[derive(Clone, Default)]
pub struct MockPin {
    pub levels: Rc<RefCell<Vec<bool>>>,
    pub fail: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn is_high(&self) -> bool {
        self.levels.borrow().last().copied().unwrap_or(false)
    }

    /// Number of low-to-high transitions
    pub fn rising_edges(&self) -> usize {
        let levels = self.levels.borrow();
        let mut last = false;
        let mut edges = 0;
        for &level in levels.iter() {
            if level && !last {
                edges += 1;
            }
            last = level;
        }
        edges
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.levels.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.levels.borrow_mut().push(true);
        Ok(())
    }
}

/// Input pin that reads low after a number of high polls
pub struct MockButton {
    pub high_polls: Cell<usize>,
    pub reads: Rc<Cell<usize>>,
}

impl MockButton {
    pub fn released_for(polls: usize) -> Self {
        Self {
            high_polls: Cell::new(polls),
            reads: Rc::new(Cell::new(0)),
        }
    }
}

impl ErrorType for MockButton {
    type Error = Infallible;
}

impl InputPin for MockButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads.set(self.reads.get() + 1);
        let left = self.high_polls.get();
        if left == 0 {
            Ok(false)
        } else {
            self.high_polls.set(left - 1);
            Ok(true)
        }
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Delay that returns at once and records the requested durations
#[derive(Clone, Default)]
pub struct MockDelay {
    pub calls_ns: Rc<RefCell<Vec<u64>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.calls_ns.borrow().iter().sum::<u64>() / 1_000_000
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls_ns.borrow_mut().push(ns as u64);
    }

    async fn delay_us(&mut self, us: u32) {
        self.calls_ns.borrow_mut().push(us as u64 * 1_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.calls_ns.borrow_mut().push(ms as u64 * 1_000_000);
    }
}

/// I2C bus with a per-device register file
#[derive(Clone, Default)]
pub struct MockI2c {
    pub writes: Rc<RefCell<Vec<(u8, Vec<u8>)>>>,
    pub registers: Rc<RefCell<BTreeMap<(u8, u8), u8>>>,
    pub fail: Rc<Cell<bool>>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_register(&self, addr: u8, reg: u8, value: u8) {
        self.registers.borrow_mut().insert((addr, reg), value);
    }

    pub fn writes_to(&self, addr: u8) -> Vec<Vec<u8>> {
        self.writes
            .borrow()
            .iter()
            .filter(|(a, _)| *a == addr)
            .map(|(_, bytes)| bytes.clone())
            .collect()
    }
}

impl I2cErrorType for MockI2c {
    type Error = I2cErrorKind;
}

impl I2c<SevenBitAddress> for MockI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail.get() {
            return Err(I2cErrorKind::Other);
        }

        // Register pointer set by the last write, auto-incremented on read
        let mut pointer = 0u8;
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    if let Some(&first) = bytes.first() {
                        pointer = first;
                    }
                    self.writes.borrow_mut().push((address, bytes.to_vec()));
                }
                Operation::Read(buf) => {
                    let registers = self.registers.borrow();
                    for byte in buf.iter_mut() {
                        *byte = registers.get(&(address, pointer)).copied().unwrap_or(0);
                        pointer = pointer.wrapping_add(1);
                    }
                }
            }
        }
        Ok(())
    }
}
