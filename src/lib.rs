#![cfg_attr(not(test), no_std)]

//! mpu_attitude - MPU-6050 attitude estimation for small vehicles
//!
//! This library provides the I2C transaction engine, the MPU-6050 register
//! driver built on it, and the complementary-filter attitude loop that turns
//! gyro and accelerometer samples into pitch/roll.

// Platform abstraction layer: bus/timer collaborator traits, transaction engine
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Core systems (logging)
pub mod core;

// Subsystems (attitude estimation loop)
pub mod subsystems;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging
