//! Device drivers
//!
//! This module contains device drivers that use platform abstraction traits,
//! so they run unchanged against real hardware or the mock bus.
//!
//! ## Modules
//!
//! - `imu`: IMU sensor drivers (MPU-6050, mock)
//! - `traits`: Device trait definitions (ImuSensor, etc.)

pub mod imu;
pub mod traits;
