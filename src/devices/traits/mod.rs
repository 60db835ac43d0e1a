//! Device traits
//!
//! This module contains hardware-independent trait definitions for device drivers.
//! These traits enable:
//! - Unit testing with mock implementations
//! - Sensor independence for the attitude loop

pub mod imu;

pub use imu::{ImuError, ImuSensor};
