//! Attitude loop
//!
//! Runs once per sampling trigger to update the pitch/roll estimate from
//! IMU data. Publishes results to shared state and a telemetry sink.

use super::SharedAttitudeState;
use crate::devices::traits::{ImuError, ImuSensor};
use crate::platform::traits::SampleTrigger;
use core::fmt::Write;
use mpu_attitude_core::ahrs::{Attitude, ComplementaryFilter};

/// Capacity of one formatted telemetry line
pub const TELEMETRY_LINE_CAPACITY: usize = 64;

/// Attitude loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttitudeConfig {
    /// Sampling trigger rate in Hz (default: 100)
    ///
    /// Must match the real trigger period; the filter integrates with
    /// `dt = 1 / sample_rate_hz`.
    pub sample_rate_hz: u32,
}

impl Default for AttitudeConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 100,
        }
    }
}

/// Cycle counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopStats {
    /// Cycles that updated the estimate
    pub completed: u32,

    /// Cycles dropped because a sensor read failed
    pub skipped: u32,
}

/// Format one telemetry line: `"<pitch>,<roll>\n"` with 6 decimals
pub fn telemetry_line(
    attitude: Attitude,
) -> Result<heapless::String<TELEMETRY_LINE_CAPACITY>, core::fmt::Error> {
    let mut line = heapless::String::new();
    writeln!(line, "{:.6},{:.6}", attitude.pitch, attitude.roll)?;
    Ok(line)
}

/// Trigger-gated complementary filter loop
///
/// # Type Parameters
///
/// * `S` - IMU providing gyro (°/s) and accel (g)
/// * `G` - Sampling trigger
pub struct AttitudeLoop<S, G> {
    sensor: S,
    trigger: G,
    filter: ComplementaryFilter,
    stats: LoopStats,
    shared: Option<&'static SharedAttitudeState>,
}

impl<S: ImuSensor, G: SampleTrigger> AttitudeLoop<S, G> {
    /// Create a loop at zero attitude
    pub fn new(sensor: S, trigger: G, config: AttitudeConfig) -> Self {
        Self {
            sensor,
            trigger,
            filter: ComplementaryFilter::from_rate_hz(config.sample_rate_hz.max(1)),
            stats: LoopStats::default(),
            shared: None,
        }
    }

    /// Publish every completed cycle to `shared`
    pub fn with_shared_state(mut self, shared: &'static SharedAttitudeState) -> Self {
        self.shared = Some(shared);
        self
    }

    /// Current estimate
    pub fn attitude(&self) -> Attitude {
        self.filter.attitude()
    }

    /// Cycle counters
    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Filter sample period in seconds
    pub fn dt(&self) -> f32 {
        self.filter.dt()
    }

    /// Sensor, for configuration changes between cycles
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Sampling trigger
    pub fn trigger_mut(&mut self) -> &mut G {
        &mut self.trigger
    }

    /// Run one cycle if the trigger is pending
    ///
    /// The trigger is acknowledged before the sensor is read, so a slow or
    /// failing read never hides the next period. Returns the new estimate,
    /// or `None` when idle or when the cycle was skipped.
    pub fn poll(&mut self) -> Option<Attitude> {
        if !self.trigger.is_pending() {
            return None;
        }
        self.trigger.clear();

        match self.sample() {
            Ok(attitude) => {
                self.stats.completed = self.stats.completed.wrapping_add(1);
                if let Some(shared) = self.shared {
                    shared.update_attitude(attitude, self.stats.completed);
                }
                Some(attitude)
            }
            Err(e) => {
                self.stats.skipped = self.stats.skipped.wrapping_add(1);
                crate::log_warn!("Attitude cycle skipped: {:?}", e);
                None
            }
        }
    }

    /// Poll once and write a telemetry line for a completed cycle
    pub fn step<W: Write>(&mut self, sink: &mut W) -> Option<Attitude> {
        let attitude = self.poll()?;
        match telemetry_line(attitude) {
            Ok(line) => {
                if sink.write_str(&line).is_err() {
                    crate::log_warn!("Telemetry write failed");
                }
            }
            Err(_) => crate::log_warn!("Telemetry line overflow"),
        }
        Some(attitude)
    }

    /// Run forever, one cycle per trigger
    pub fn run<W: Write>(&mut self, sink: &mut W) -> ! {
        crate::log_info!("Attitude loop started (dt = {} s)", self.filter.dt());
        loop {
            self.step(sink);
        }
    }

    fn sample(&mut self) -> Result<Attitude, ImuError> {
        let gyro = self.sensor.read_gyro()?;
        let accel = self.sensor.read_accel()?;
        Ok(self.filter.update(&gyro, &accel))
    }
}
