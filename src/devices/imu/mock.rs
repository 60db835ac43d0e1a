//! Mock IMU implementation for testing
//!
//! Provides a configurable mock IMU that implements the `ImuSensor` trait.
//! Useful for unit testing the attitude loop without a bus.
//!
//! ## Usage
//!
//! ```ignore
//! use mpu_attitude::devices::imu::mock::{MockImu, MockSample};
//!
//! let mut imu = MockImu::with_samples(&[MockSample::level()]);
//! imu.fail_next(1, ImuError::NotInitialized);
//! ```

use crate::devices::traits::{ImuError, ImuSensor};
use nalgebra::Vector3;

const QUEUE_CAPACITY: usize = 64;

/// One scripted sensor sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockSample {
    /// Gyroscope: °/s
    pub gyro: Vector3<f32>,

    /// Accelerometer: g
    pub accel: Vector3<f32>,

    /// Temperature: °C
    pub temperature: f32,
}

impl MockSample {
    /// Stationary and level: no rotation, 1 g on Z
    pub fn level() -> Self {
        Self {
            gyro: Vector3::zeros(),
            accel: Vector3::new(0.0, 0.0, 1.0),
            temperature: 25.0,
        }
    }
}

impl Default for MockSample {
    fn default() -> Self {
        Self::level()
    }
}

/// Mock IMU for testing
///
/// Each gyro read pops the next queued sample; the following accel and
/// temperature reads return fields of that same sample. An empty queue
/// yields the default sample.
pub struct MockImu {
    samples: heapless::Deque<MockSample, QUEUE_CAPACITY>,
    default_sample: MockSample,
    current: MockSample,
    passes: u32,
    failures: u32,
    failure: ImuError,
    reads: u32,
}

impl MockImu {
    /// Create a mock IMU returning the level sample
    pub fn with_default_sample() -> Self {
        Self {
            samples: heapless::Deque::new(),
            default_sample: MockSample::level(),
            current: MockSample::level(),
            passes: 0,
            failures: 0,
            failure: ImuError::NotInitialized,
            reads: 0,
        }
    }

    /// Create a mock IMU with a sequence of samples
    pub fn with_samples(samples: &[MockSample]) -> Self {
        let mut imu = Self::with_default_sample();
        for sample in samples.iter().take(QUEUE_CAPACITY) {
            let _ = imu.samples.push_back(*sample);
        }
        imu
    }

    /// Set the sample returned when the queue is empty
    pub fn set_default_sample(&mut self, sample: MockSample) {
        self.default_sample = sample;
    }

    /// Push a new sample onto the queue
    pub fn push_sample(&mut self, sample: MockSample) -> Result<(), MockSample> {
        self.samples.push_back(sample)
    }

    /// Make the next `count` reads fail with `error`
    pub fn fail_next(&mut self, count: u32, error: ImuError) {
        self.fail_after(0, count, error);
    }

    /// Let `passes` reads succeed, then fail the next `count` with `error`
    pub fn fail_after(&mut self, passes: u32, count: u32, error: ImuError) {
        self.passes = passes;
        self.failures = count;
        self.failure = error;
    }

    /// Total read calls, failed ones included
    pub fn read_count(&self) -> u32 {
        self.reads
    }

    fn check(&mut self) -> Result<(), ImuError> {
        self.reads += 1;
        if self.passes > 0 {
            self.passes -= 1;
            return Ok(());
        }
        if self.failures > 0 {
            self.failures -= 1;
            return Err(self.failure);
        }
        Ok(())
    }
}

impl ImuSensor for MockImu {
    fn read_gyro(&mut self) -> Result<Vector3<f32>, ImuError> {
        self.check()?;
        self.current = self.samples.pop_front().unwrap_or(self.default_sample);
        Ok(self.current.gyro)
    }

    fn read_accel(&mut self) -> Result<Vector3<f32>, ImuError> {
        self.check()?;
        Ok(self.current.accel)
    }

    fn read_temperature(&mut self) -> Result<f32, ImuError> {
        self.check()?;
        Ok(self.current.temperature)
    }
}
