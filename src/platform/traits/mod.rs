//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod i2c;
pub mod timer;

// Re-export trait interfaces
pub use i2c::{EndMode, I2cConfig, I2cController, I2cStatus, RegisterAccess, StartMode};
pub use timer::SampleTrigger;

// Tick source for wait-phase deadlines lives in the core crate
pub use mpu_attitude_core::traits::TickSource;
