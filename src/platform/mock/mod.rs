//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use mpu_attitude::platform::mock::MockI2cController;
//! use mpu_attitude::platform::traits::I2cConfig;
//! use mpu_attitude::platform::{RegisterAccess, TransactionEngine};
//! use mpu_attitude_core::traits::MockTicks;
//!
//! let mut bus = MockI2cController::new(0x68);
//! bus.set_register(0x75, 0x68);
//! let mut engine = TransactionEngine::new(bus, MockTicks::auto_advance(1), I2cConfig::default());
//! assert_eq!(engine.read_register(0x68, 0x75)?, 0x68);
//! ```

mod i2c;
mod timer;

pub use i2c::{BusEvent, MockI2cController, EVENT_CAPACITY, WRITE_CAPACITY};
pub use timer::MockTrigger;
pub use mpu_attitude_core::traits::MockTicks;
