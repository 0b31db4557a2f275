//! MPU-6050 accelerometer
//!
//! Only the accelerometer is used. The chip powers up asleep; clearing
//! PWR_MGMT_1 wakes it with the internal oscillator and the default
//! ±2 g range (16384 LSB/g).

use embedded_hal_async::i2c::I2c;

/// Default I2C address (AD0 low)
pub const MPU6050_ADDR: u8 = 0x68;

/// Register addresses
pub mod reg {
    pub const ACCEL_YOUT_H: u8 = 0x3D;
    pub const PWR_MGMT_1: u8 = 0x6B;
}

pub struct Mpu6050<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C, E> Mpu6050<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self::new_with_address(i2c, MPU6050_ADDR)
    }

    pub fn new_with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Wake the chip from sleep
    pub async fn init(&mut self) -> Result<(), E> {
        self.i2c.write(self.address, &[reg::PWR_MGMT_1, 0]).await
    }

    /// Read the Y axis, big-endian
    pub async fn accel_y(&mut self) -> Result<i16, E> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[reg::ACCEL_YOUT_H], &mut buf)
            .await?;
        Ok(i16::from_be_bytes(buf))
    }
}
