//! AHRS (Attitude and Heading Reference System)
//!
//! Pitch/roll estimation with a fixed-weight complementary filter, driven
//! by a periodic sampling trigger.
//!
//! ## Architecture
//!
//! ```text
//!  SampleTrigger ──► AttitudeLoop ──► SharedAttitudeState ──► consumers
//!                        │      └───► telemetry sink (fmt::Write)
//!                        ▼
//!                    ImuSensor (Mpu6050 over TransactionEngine)
//! ```
//!
//! The filter math lives in `mpu_attitude_core::ahrs` so it stays free of
//! platform dependencies.
//!
//! ## Usage
//!
//! ```ignore
//! use mpu_attitude::subsystems::ahrs::{AttitudeConfig, AttitudeLoop, SharedAttitudeState};
//!
//! static ATTITUDE: SharedAttitudeState = SharedAttitudeState::new();
//!
//! let mut attitude = AttitudeLoop::new(imu, timer, AttitudeConfig::default())
//!     .with_shared_state(&ATTITUDE);
//! attitude.run(&mut uart);
//! ```

pub mod state;
pub mod task;

pub use mpu_attitude_core::ahrs::Attitude;
pub use state::{AttitudeState, SharedAttitudeState};
pub use task::{telemetry_line, AttitudeConfig, AttitudeLoop, LoopStats};
