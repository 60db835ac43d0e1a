//! MPU-6050 6-axis IMU Driver
//!
//! Driver for the InvenSense MPU-6050 (3-axis gyroscope + 3-axis
//! accelerometer) on a two-wire bus.
//!
//! ## Features
//!
//! - WHO_AM_I identity check
//! - Clock source and full-scale range configuration with readback
//! - Burst (auto-increment) or per-register data reads
//! - Raw counts or physical units (°/s, g, °C)
//!
//! ## Usage
//!
//! ```ignore
//! use mpu_attitude::devices::imu::mpu6050::{Mpu6050, Mpu6050Config};
//! use mpu_attitude::platform::TransactionEngine;
//!
//! let engine = TransactionEngine::new(controller, ticks, I2cConfig::default());
//! let mut imu = Mpu6050::new(engine, Mpu6050Config::default());
//! imu.identity_check()?;
//! imu.init()?;
//! let accel = imu.read_accel()?;
//! ```

mod config;
mod driver;
pub mod registers;

pub use config::{
    AccelRange, ClockSource, GyroRange, Mpu6050Config, ReadMode, SensorConfiguration,
};
pub use driver::Mpu6050;
