//! mpu_attitude_core - Pure no_std logic for the mpu_attitude firmware
//!
//! This crate contains platform-agnostic algorithms and types
//! that can be tested on host without any feature flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Platform services injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TickSource)
//! - [`ahrs`]: Complementary filter and attitude angle types

#![no_std]

pub mod ahrs;
pub mod traits;
