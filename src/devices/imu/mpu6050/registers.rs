//! MPU-6050 Register Definitions
//!
//! Based on MPU-6000/MPU-6050 Register Map and Descriptions (RM-MPU-6000A-00 v4.2).

#![allow(dead_code)]

// ============================================================================
// I2C Address
// ============================================================================

/// MPU-6050 I2C address when AD0 pin is low
pub const MPU6050_ADDR: u8 = 0x68;

/// MPU-6050 I2C address when AD0 pin is high
pub const MPU6050_ADDR_ALT: u8 = 0x69;

// ============================================================================
// Registers
// ============================================================================

/// Sample rate divider: SAMPLE_RATE = Gyro_Output_Rate / (1 + SMPLRT_DIV)
pub const SMPLRT_DIV: u8 = 0x19;

/// Configuration register (DLPF, FSYNC)
pub const CONFIG: u8 = 0x1A;

/// Gyroscope configuration (self-test, full-scale range)
pub const GYRO_CONFIG: u8 = 0x1B;

/// Accelerometer configuration (self-test, full-scale range)
pub const ACCEL_CONFIG: u8 = 0x1C;

/// Accelerometer measurements
pub const ACCEL_XOUT_H: u8 = 0x3B;
pub const ACCEL_XOUT_L: u8 = 0x3C;
pub const ACCEL_YOUT_H: u8 = 0x3D;
pub const ACCEL_YOUT_L: u8 = 0x3E;
pub const ACCEL_ZOUT_H: u8 = 0x3F;
pub const ACCEL_ZOUT_L: u8 = 0x40;

/// Temperature measurement
pub const TEMP_OUT_H: u8 = 0x41;
pub const TEMP_OUT_L: u8 = 0x42;

/// Gyroscope measurements
pub const GYRO_XOUT_H: u8 = 0x43;
pub const GYRO_XOUT_L: u8 = 0x44;
pub const GYRO_YOUT_H: u8 = 0x45;
pub const GYRO_YOUT_L: u8 = 0x46;
pub const GYRO_ZOUT_H: u8 = 0x47;
pub const GYRO_ZOUT_L: u8 = 0x48;

/// Power management 1 (reset, sleep, clock select)
pub const PWR_MGMT_1: u8 = 0x6B;

/// Power management 2
pub const PWR_MGMT_2: u8 = 0x6C;

/// Device identity
pub const WHO_AM_I: u8 = 0x75;

// ============================================================================
// Register Values
// ============================================================================

/// WHO_AM_I expected value
pub const MPU6050_WHO_AM_I_VALUE: u8 = 0x68;

/// PWR_MGMT_1 bits
pub const PWR_MGMT_1_DEVICE_RESET: u8 = 0x80;
pub const PWR_MGMT_1_SLEEP: u8 = 0x40;
pub const PWR_MGMT_1_CLKSEL_MASK: u8 = 0x07;

/// Full-scale select field of GYRO_CONFIG / ACCEL_CONFIG (bits 4:3)
pub const FS_SEL_SHIFT: u8 = 3;
pub const FS_SEL_MASK: u8 = 0x18;

// ============================================================================
// Gyroscope Full Scale Range (GYRO_CONFIG bits 4:3)
// ============================================================================

pub const GYRO_FS_SEL_250DPS: u8 = 0x00;
pub const GYRO_FS_SEL_500DPS: u8 = 0x08;
pub const GYRO_FS_SEL_1000DPS: u8 = 0x10;
pub const GYRO_FS_SEL_2000DPS: u8 = 0x18;

// ============================================================================
// Accelerometer Full Scale Range (ACCEL_CONFIG bits 4:3)
// ============================================================================

pub const ACCEL_FS_SEL_2G: u8 = 0x00;
pub const ACCEL_FS_SEL_4G: u8 = 0x08;
pub const ACCEL_FS_SEL_8G: u8 = 0x10;
pub const ACCEL_FS_SEL_16G: u8 = 0x18;

// ============================================================================
// Conversion Constants
// ============================================================================

/// Gyroscope sensitivity (LSB per °/s)
pub const GYRO_SENSITIVITY_250DPS: f32 = 131.0;
pub const GYRO_SENSITIVITY_500DPS: f32 = 65.5;
pub const GYRO_SENSITIVITY_1000DPS: f32 = 32.8;
pub const GYRO_SENSITIVITY_2000DPS: f32 = 16.4;

/// Accelerometer sensitivity (LSB per g)
pub const ACCEL_SENSITIVITY_2G: f32 = 16384.0;
pub const ACCEL_SENSITIVITY_4G: f32 = 8192.0;
pub const ACCEL_SENSITIVITY_8G: f32 = 4096.0;
pub const ACCEL_SENSITIVITY_16G: f32 = 2048.0;

/// Temperature sensitivity (LSB per °C)
pub const TEMP_SENSITIVITY: f32 = 340.0;

/// Temperature offset (°C at raw 0)
pub const TEMP_OFFSET: f32 = 36.53;
