//! IMU Drivers
//!
//! This module contains IMU sensor drivers implementing the `ImuSensor` trait.
//!
//! ## Available Drivers
//!
//! - `mpu6050`: MPU-6050 6-axis IMU driver over any `RegisterAccess` bus
//! - `mock`: Mock IMU for testing (requires `mock` feature or tests)
//!
//! ## Usage
//!
//! ```ignore
//! use mpu_attitude::devices::imu::{Mpu6050, Mpu6050Config};
//! use mpu_attitude::devices::traits::ImuSensor;
//!
//! let mut imu = Mpu6050::new(engine, Mpu6050Config::default());
//! imu.init()?;
//! let gyro = imu.read_gyro()?;
//! ```

#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod mpu6050;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockImu;
pub use mpu6050::{Mpu6050, Mpu6050Config};
