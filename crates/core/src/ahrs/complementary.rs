//! Fixed-weight complementary filter for pitch and roll.
//!
//! Gyro integration tracks fast motion but drifts with bias; the
//! accelerometer tilt angle is noisy but drift-free. Each update integrates
//! the gyro rate over one sample period and then pulls the result toward the
//! accelerometer angle with a small fixed weight.
//!
//! All angles are in degrees and rates in degrees per second.

use nalgebra::Vector3;

/// Weight applied to the gyro-propagated angle.
pub const GYRO_WEIGHT: f32 = 0.97;

/// Weight applied to the accelerometer-derived angle.
pub const ACCEL_WEIGHT: f32 = 0.03;

/// Pitch and roll estimate in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Attitude {
    /// Pitch angle in degrees (rotation integrated from gyro X)
    pub pitch: f32,

    /// Roll angle in degrees (rotation integrated from gyro Y)
    pub roll: f32,
}

impl Attitude {
    /// Create an attitude from angles in degrees
    pub const fn new(pitch: f32, roll: f32) -> Self {
        Self { pitch, roll }
    }
}

/// Tilt angles seen by the accelerometer, in degrees.
///
/// Pitch projects X against Z and roll projects Y against Z, each through
/// `atan2` so the full ±180° range is covered.
pub fn accel_tilt_deg(accel: &Vector3<f32>) -> Attitude {
    Attitude {
        pitch: libm::atan2f(accel.x, accel.z).to_degrees(),
        roll: libm::atan2f(accel.y, accel.z).to_degrees(),
    }
}

/// Complementary filter state.
///
/// `dt` must equal the real sampling period, otherwise the integrated
/// gyro contribution is off by a constant factor.
#[derive(Debug, Clone, Copy)]
pub struct ComplementaryFilter {
    attitude: Attitude,
    dt: f32,
}

impl ComplementaryFilter {
    /// Create a filter at zero attitude for a fixed sample period in seconds.
    pub const fn new(dt: f32) -> Self {
        Self {
            attitude: Attitude::new(0.0, 0.0),
            dt,
        }
    }

    /// Create a filter for a sample rate in Hz.
    pub fn from_rate_hz(rate_hz: u32) -> Self {
        Self::new(1.0 / rate_hz as f32)
    }

    /// Sample period in seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Current estimate.
    pub fn attitude(&self) -> Attitude {
        self.attitude
    }

    /// Run one filter step.
    ///
    /// * `gyro_dps` - angular rate in °/s (X drives pitch, Y drives roll)
    /// * `accel_g` - acceleration in g (any consistent unit works)
    pub fn update(&mut self, gyro_dps: &Vector3<f32>, accel_g: &Vector3<f32>) -> Attitude {
        let mut pitch = self.attitude.pitch + gyro_dps.x * self.dt;
        let mut roll = self.attitude.roll + gyro_dps.y * self.dt;

        let tilt = accel_tilt_deg(accel_g);
        pitch = pitch * GYRO_WEIGHT + tilt.pitch * ACCEL_WEIGHT;
        roll = roll * GYRO_WEIGHT + tilt.roll * ACCEL_WEIGHT;

        self.attitude = Attitude { pitch, roll };
        self.attitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.01;

    fn level() -> Vector3<f32> {
        Vector3::new(0.0, 0.0, 1.0)
    }

    #[test]
    fn starts_at_zero() {
        let filter = ComplementaryFilter::new(DT);
        assert_eq!(filter.attitude(), Attitude::default());
    }

    #[test]
    fn from_rate_hz_sets_period() {
        let filter = ComplementaryFilter::from_rate_hz(100);
        assert!((filter.dt() - 0.01).abs() < 1e-7);
    }

    #[test]
    fn accel_tilt_level_is_zero() {
        let tilt = accel_tilt_deg(&level());
        assert!(tilt.pitch.abs() < 1e-6);
        assert!(tilt.roll.abs() < 1e-6);
    }

    #[test]
    fn accel_tilt_45_degrees() {
        let tilt = accel_tilt_deg(&Vector3::new(1.0, -1.0, 1.0));
        assert!((tilt.pitch - 45.0).abs() < 1e-4);
        assert!((tilt.roll + 45.0).abs() < 1e-4);
    }

    #[test]
    fn single_step_with_level_accel() {
        let mut filter = ComplementaryFilter::new(DT);
        let out = filter.update(&Vector3::new(50.0, -20.0, 0.0), &level());

        assert!((out.pitch - 50.0 * DT * GYRO_WEIGHT).abs() < 1e-6);
        assert!((out.roll - (-20.0 * DT * GYRO_WEIGHT)).abs() < 1e-6);
    }

    #[test]
    fn converges_monotonically_to_accel_angle_without_rotation() {
        let mut filter = ComplementaryFilter::new(DT);
        let accel = Vector3::new(1.0, 0.0, 1.0); // 45° pitch
        let mut previous_error = f32::MAX;

        for n in 1..=200 {
            let out = filter.update(&Vector3::zeros(), &accel);
            let error = 45.0 - out.pitch;
            assert!(error >= 0.0);
            assert!(error < previous_error);

            // Closed form: 45 * (1 - 0.97^n)
            let expected = 45.0 * (1.0 - libm::powf(GYRO_WEIGHT, n as f32));
            assert!((out.pitch - expected).abs() < 1e-2);
            previous_error = error;
        }

        for _ in 0..400 {
            filter.update(&Vector3::zeros(), &accel);
        }
        assert!((filter.attitude().pitch - 45.0).abs() < 1e-3);
        assert!(filter.attitude().roll.abs() < 1e-6);
    }

    #[test]
    fn constant_rate_settles_at_fixed_point() {
        let mut filter = ComplementaryFilter::new(DT);
        let rate = 3.0;

        for _ in 0..1000 {
            filter.update(&Vector3::new(rate, 0.0, 0.0), &level());
        }

        // p = 0.97 * (p + r*dt) + 0.03 * 0  =>  p = 0.97 * r * dt / 0.03
        let fixed_point = GYRO_WEIGHT * rate * DT / ACCEL_WEIGHT;
        assert!((filter.attitude().pitch - fixed_point).abs() < 1e-3);
    }
}
