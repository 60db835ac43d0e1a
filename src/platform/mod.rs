//! Platform abstraction layer
//!
//! Hardware collaborators (I2C controller, sampling timer, tick counter) are
//! reached only through the traits in [`traits`]. [`i2c`] turns the
//! flag-level controller into register-level transactions.

pub mod error;
pub mod i2c;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{I2cError, Result};
pub use i2c::TransactionEngine;
pub use traits::{I2cController, RegisterAccess, SampleTrigger, TickSource};
