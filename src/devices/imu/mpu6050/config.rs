//! MPU-6050 Configuration
//!
//! Configuration enums and structs for clock, gyroscope and accelerometer settings.

use super::registers;
use crate::devices::traits::ImuError;

/// Gyroscope full scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// ±250 °/s (default, finest resolution)
    #[default]
    Dps250,
    /// ±500 °/s
    Dps500,
    /// ±1000 °/s
    Dps1000,
    /// ±2000 °/s
    Dps2000,
}

impl GyroRange {
    /// Get the GYRO_CONFIG value for this range
    pub fn register_value(self) -> u8 {
        match self {
            GyroRange::Dps250 => registers::GYRO_FS_SEL_250DPS,
            GyroRange::Dps500 => registers::GYRO_FS_SEL_500DPS,
            GyroRange::Dps1000 => registers::GYRO_FS_SEL_1000DPS,
            GyroRange::Dps2000 => registers::GYRO_FS_SEL_2000DPS,
        }
    }

    /// Decode a GYRO_CONFIG value, ignoring the self-test bits
    pub fn from_register_value(raw: u8) -> Result<Self, ImuError> {
        match raw & registers::FS_SEL_MASK {
            registers::GYRO_FS_SEL_250DPS => Ok(GyroRange::Dps250),
            registers::GYRO_FS_SEL_500DPS => Ok(GyroRange::Dps500),
            registers::GYRO_FS_SEL_1000DPS => Ok(GyroRange::Dps1000),
            registers::GYRO_FS_SEL_2000DPS => Ok(GyroRange::Dps2000),
            _ => Err(ImuError::InvalidRange(raw)),
        }
    }

    /// Get the sensitivity (LSB per °/s) for this range
    pub fn sensitivity(self) -> f32 {
        match self {
            GyroRange::Dps250 => registers::GYRO_SENSITIVITY_250DPS,
            GyroRange::Dps500 => registers::GYRO_SENSITIVITY_500DPS,
            GyroRange::Dps1000 => registers::GYRO_SENSITIVITY_1000DPS,
            GyroRange::Dps2000 => registers::GYRO_SENSITIVITY_2000DPS,
        }
    }

    /// Get scale factor to convert a raw count to °/s
    pub fn scale_to_dps(self) -> f32 {
        1.0 / self.sensitivity()
    }
}

/// Accelerometer full scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2 g (default, finest resolution)
    #[default]
    G2,
    /// ±4 g
    G4,
    /// ±8 g
    G8,
    /// ±16 g
    G16,
}

impl AccelRange {
    /// Get the ACCEL_CONFIG value for this range
    pub fn register_value(self) -> u8 {
        match self {
            AccelRange::G2 => registers::ACCEL_FS_SEL_2G,
            AccelRange::G4 => registers::ACCEL_FS_SEL_4G,
            AccelRange::G8 => registers::ACCEL_FS_SEL_8G,
            AccelRange::G16 => registers::ACCEL_FS_SEL_16G,
        }
    }

    /// Decode an ACCEL_CONFIG value, ignoring the self-test and high-pass bits
    pub fn from_register_value(raw: u8) -> Result<Self, ImuError> {
        match raw & registers::FS_SEL_MASK {
            registers::ACCEL_FS_SEL_2G => Ok(AccelRange::G2),
            registers::ACCEL_FS_SEL_4G => Ok(AccelRange::G4),
            registers::ACCEL_FS_SEL_8G => Ok(AccelRange::G8),
            registers::ACCEL_FS_SEL_16G => Ok(AccelRange::G16),
            _ => Err(ImuError::InvalidRange(raw)),
        }
    }

    /// Get the sensitivity (LSB per g) for this range
    pub fn sensitivity(self) -> f32 {
        match self {
            AccelRange::G2 => registers::ACCEL_SENSITIVITY_2G,
            AccelRange::G4 => registers::ACCEL_SENSITIVITY_4G,
            AccelRange::G8 => registers::ACCEL_SENSITIVITY_8G,
            AccelRange::G16 => registers::ACCEL_SENSITIVITY_16G,
        }
    }

    /// Get scale factor to convert a raw count to g
    pub fn scale_to_g(self) -> f32 {
        1.0 / self.sensitivity()
    }
}

/// Clock source (PWR_MGMT_1 CLKSEL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Internal 8 MHz oscillator
    Internal8MHz,
    /// PLL with X axis gyroscope reference (default, recommended)
    #[default]
    PllXGyro,
    /// PLL with Y axis gyroscope reference
    PllYGyro,
    /// PLL with Z axis gyroscope reference
    PllZGyro,
    /// PLL with external 32.768 kHz reference
    External32kHz,
    /// PLL with external 19.2 MHz reference
    External19MHz,
    /// Stops the clock and keeps the timing generator in reset
    Stop,
}

impl ClockSource {
    /// Get the PWR_MGMT_1 value selecting this clock
    ///
    /// Sleep and reset bits are left clear, so this also wakes the device.
    pub fn register_value(self) -> u8 {
        match self {
            ClockSource::Internal8MHz => 0,
            ClockSource::PllXGyro => 1,
            ClockSource::PllYGyro => 2,
            ClockSource::PllZGyro => 3,
            ClockSource::External32kHz => 4,
            ClockSource::External19MHz => 5,
            ClockSource::Stop => 7,
        }
    }
}

/// How data registers are fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadMode {
    /// One auto-increment read per register block (default)
    #[default]
    Burst,
    /// One single-byte read per data register, low byte before high byte
    PerRegister,
}

/// Currently selected full-scale ranges
///
/// Only updated after the matching configuration register write succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfiguration {
    /// Gyroscope full scale range
    pub gyro_range: GyroRange,

    /// Accelerometer full scale range
    pub accel_range: AccelRange,
}

/// MPU-6050 driver configuration
#[derive(Debug, Clone, Copy)]
pub struct Mpu6050Config {
    /// Clock source selected during init
    pub clock_source: ClockSource,

    /// Gyroscope full scale range applied during init
    pub gyro_range: GyroRange,

    /// Accelerometer full scale range applied during init
    pub accel_range: AccelRange,

    /// I2C address (0x68 or 0x69 depending on AD0 pin)
    pub i2c_address: u8,

    /// Data register access pattern
    pub read_mode: ReadMode,
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Self {
            clock_source: ClockSource::PllXGyro,
            gyro_range: GyroRange::Dps250,
            accel_range: AccelRange::G2,
            i2c_address: registers::MPU6050_ADDR,
            read_mode: ReadMode::Burst,
        }
    }
}
