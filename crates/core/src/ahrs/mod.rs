//! Attitude estimation math
//!
//! This module provides the platform-agnostic complementary filter.
//! Sensor access and the sampling loop live in the `mpu_attitude` crate.

pub mod complementary;

pub use complementary::{
    accel_tilt_deg, Attitude, ComplementaryFilter, ACCEL_WEIGHT, GYRO_WEIGHT,
};
