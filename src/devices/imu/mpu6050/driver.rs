//! MPU-6050 Driver Implementation
//!
//! Register-level driver for reading IMU data over any [`RegisterAccess`] bus.

use super::config::{
    AccelRange, ClockSource, GyroRange, Mpu6050Config, ReadMode, SensorConfiguration,
};
use super::registers;
use crate::devices::traits::{ImuError, ImuSensor};
use crate::platform::RegisterAccess;
use nalgebra::Vector3;

/// Largest register block read at once (three axes)
const MAX_WORDS: usize = 3;

/// MPU-6050 6-axis IMU driver
///
/// Owns the bus handle and the currently selected ranges. The stored ranges
/// always match the last successful configuration write, so raw counts are
/// scaled with what the sensor is actually using.
pub struct Mpu6050<B> {
    /// Register bus handle
    bus: B,

    /// Driver configuration
    config: Mpu6050Config,

    /// Ranges last written to the sensor
    sensor: SensorConfiguration,

    /// Initialization complete flag
    initialized: bool,
}

impl<B: RegisterAccess> Mpu6050<B> {
    /// Create a driver; no bus traffic until [`Mpu6050::init`]
    ///
    /// Stored ranges start at the power-on values (±250 °/s, ±2 g).
    pub fn new(bus: B, config: Mpu6050Config) -> Self {
        Self {
            bus,
            config,
            sensor: SensorConfiguration::default(),
            initialized: false,
        }
    }

    /// Configure clock source, gyro range and accel range, in that order
    ///
    /// Stops at the first failing write. Data reads are rejected until this
    /// succeeds.
    pub fn init(&mut self) -> Result<(), ImuError> {
        self.set_clock_source(self.config.clock_source)?;
        self.set_gyro_range(self.config.gyro_range)?;
        self.set_accel_range(self.config.accel_range)?;

        self.initialized = true;
        crate::log_info!(
            "MPU-6050 initialized: gyro {:?}, accel {:?}",
            self.sensor.gyro_range,
            self.sensor.accel_range
        );
        Ok(())
    }

    /// Verify WHO_AM_I reads back the MPU-6050 identity
    pub fn identity_check(&mut self) -> Result<(), ImuError> {
        let found = self.read_register(registers::WHO_AM_I)?;
        if found != registers::MPU6050_WHO_AM_I_VALUE {
            crate::log_error!(
                "MPU-6050 WHO_AM_I mismatch: expected {:#x}, got {:#x}",
                registers::MPU6050_WHO_AM_I_VALUE,
                found
            );
            return Err(ImuError::IdentityMismatch { found });
        }
        Ok(())
    }

    /// Select the clock source (also clears sleep)
    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), ImuError> {
        self.write_register(registers::PWR_MGMT_1, source.register_value())
    }

    /// Set the gyroscope range; the stored range changes only on success
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), ImuError> {
        self.write_register(registers::GYRO_CONFIG, range.register_value())?;
        self.sensor.gyro_range = range;
        Ok(())
    }

    /// Set the accelerometer range; the stored range changes only on success
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), ImuError> {
        self.write_register(registers::ACCEL_CONFIG, range.register_value())?;
        self.sensor.accel_range = range;
        Ok(())
    }

    /// Read back the gyroscope range from GYRO_CONFIG
    pub fn read_gyro_range(&mut self) -> Result<GyroRange, ImuError> {
        let raw = self.read_register(registers::GYRO_CONFIG)?;
        GyroRange::from_register_value(raw)
    }

    /// Read back the accelerometer range from ACCEL_CONFIG
    pub fn read_accel_range(&mut self) -> Result<AccelRange, ImuError> {
        let raw = self.read_register(registers::ACCEL_CONFIG)?;
        AccelRange::from_register_value(raw)
    }

    /// Raw gyroscope counts (X, Y, Z)
    pub fn read_gyro_raw(&mut self) -> Result<[i16; 3], ImuError> {
        self.ensure_initialized()?;
        self.read_words(registers::GYRO_XOUT_H)
    }

    /// Raw accelerometer counts (X, Y, Z)
    pub fn read_accel_raw(&mut self) -> Result<[i16; 3], ImuError> {
        self.ensure_initialized()?;
        self.read_words(registers::ACCEL_XOUT_H)
    }

    /// Currently stored ranges
    pub fn sensor_config(&self) -> SensorConfiguration {
        self.sensor
    }

    /// Driver configuration
    pub fn config(&self) -> &Mpu6050Config {
        &self.config
    }

    /// Whether [`Mpu6050::init`] has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Bus handle, for recovery by the caller
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Release the bus handle
    pub fn release(self) -> B {
        self.bus
    }

    fn ensure_initialized(&self) -> Result<(), ImuError> {
        if self.initialized {
            Ok(())
        } else {
            Err(ImuError::NotInitialized)
        }
    }

    /// Read `N` consecutive big-endian words starting at a `_H` register
    fn read_words<const N: usize>(&mut self, high_register: u8) -> Result<[i16; N], ImuError> {
        debug_assert!(N <= MAX_WORDS);
        let mut bytes = [0u8; MAX_WORDS * 2];
        let bytes = &mut bytes[..N * 2];

        match self.config.read_mode {
            ReadMode::Burst => {
                self.bus
                    .read_registers(self.config.i2c_address, high_register, bytes)?;
            }
            ReadMode::PerRegister => {
                for (i, pair) in bytes.chunks_exact_mut(2).enumerate() {
                    let high = high_register + (i as u8) * 2;
                    pair[1] = self.read_register(high + 1)?;
                    pair[0] = self.read_register(high)?;
                }
            }
        }

        let mut words = [0i16; N];
        for (word, pair) in words.iter_mut().zip(bytes.chunks_exact(2)) {
            *word = i16::from_be_bytes([pair[0], pair[1]]);
        }
        Ok(words)
    }

    fn read_register(&mut self, register: u8) -> Result<u8, ImuError> {
        Ok(self.bus.read_register(self.config.i2c_address, register)?)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), ImuError> {
        Ok(self
            .bus
            .write_register(self.config.i2c_address, register, value)?)
    }
}

impl<B: RegisterAccess> ImuSensor for Mpu6050<B> {
    fn read_gyro(&mut self) -> Result<Vector3<f32>, ImuError> {
        let [x, y, z] = self.read_gyro_raw()?;
        let scale = self.sensor.gyro_range.scale_to_dps();
        Ok(Vector3::new(x as f32, y as f32, z as f32) * scale)
    }

    fn read_accel(&mut self) -> Result<Vector3<f32>, ImuError> {
        let [x, y, z] = self.read_accel_raw()?;
        let scale = self.sensor.accel_range.scale_to_g();
        Ok(Vector3::new(x as f32, y as f32, z as f32) * scale)
    }

    fn read_temperature(&mut self) -> Result<f32, ImuError> {
        self.ensure_initialized()?;
        let [raw] = self.read_words::<1>(registers::TEMP_OUT_H)?;
        Ok(raw as f32 / registers::TEMP_SENSITIVITY + registers::TEMP_OFFSET)
    }
}
