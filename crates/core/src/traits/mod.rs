//! Core traits for platform-agnostic timing.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Hardware implementations live with the board support code

pub mod time;

pub use time::{MockTicks, TickSource};
