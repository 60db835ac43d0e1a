//! Core firmware infrastructure
//!
//! Target-independent plumbing shared by every layer. Today that is the
//! logging facade; the pure algorithms live in the `mpu_attitude_core` crate.

pub mod logging;
