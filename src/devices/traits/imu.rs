//! IMU Sensor Trait and Error Types
//!
//! Device-independent interface for 6-axis IMU sensors consumed by the
//! attitude loop.
//!
//! ## Usage
//!
//! ```ignore
//! use mpu_attitude::devices::traits::ImuSensor;
//!
//! fn sample<I: ImuSensor>(imu: &mut I) -> Result<(), ImuError> {
//!     let gyro = imu.read_gyro()?;   // °/s
//!     let accel = imu.read_accel()?; // g
//!     Ok(())
//! }
//! ```

use crate::platform::I2cError;
use core::fmt;
use nalgebra::Vector3;

/// IMU error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuError {
    /// Bus transaction failed
    Bus(I2cError),

    /// WHO_AM_I returned an unexpected value
    IdentityMismatch {
        /// Value read from the identity register
        found: u8,
    },

    /// Driver not initialized
    NotInitialized,

    /// Configuration register holds an undecodable range field
    InvalidRange(u8),
}

impl From<I2cError> for ImuError {
    fn from(error: I2cError) -> Self {
        ImuError::Bus(error)
    }
}

impl fmt::Display for ImuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImuError::Bus(e) => write!(f, "IMU bus error: {}", e),
            ImuError::IdentityMismatch { found } => {
                write!(f, "IMU identity mismatch: found {:#x}", found)
            }
            ImuError::NotInitialized => write!(f, "IMU not initialized"),
            ImuError::InvalidRange(raw) => write!(f, "Invalid IMU range field: {:#x}", raw),
        }
    }
}

/// Device-independent 6-axis IMU interface
///
/// Implementations return physical units in the sensor frame. Any failure
/// aborts the whole read; partial samples are never returned.
pub trait ImuSensor {
    /// Read gyroscope rates (°/s)
    fn read_gyro(&mut self) -> Result<Vector3<f32>, ImuError>;

    /// Read accelerations (g)
    fn read_accel(&mut self) -> Result<Vector3<f32>, ImuError>;

    /// Read die temperature (°C)
    fn read_temperature(&mut self) -> Result<f32, ImuError>;
}

impl<T: ImuSensor + ?Sized> ImuSensor for &mut T {
    fn read_gyro(&mut self) -> Result<Vector3<f32>, ImuError> {
        (**self).read_gyro()
    }

    fn read_accel(&mut self) -> Result<Vector3<f32>, ImuError> {
        (**self).read_accel()
    }

    fn read_temperature(&mut self) -> Result<f32, ImuError> {
        (**self).read_temperature()
    }
}
