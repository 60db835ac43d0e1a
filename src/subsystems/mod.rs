//! Subsystems
//!
//! Higher-level components built on device traits.
//!
//! ## Modules
//!
//! - `ahrs`: Pitch/roll estimation from a 6-axis IMU

pub mod ahrs;
