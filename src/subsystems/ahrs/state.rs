//! Shared attitude state for inter-context communication
//!
//! Provides interrupt-safe access to the latest attitude estimate.
//! Other contexts (telemetry, control) can read this state without blocking
//! the attitude loop.

use mpu_attitude_core::ahrs::Attitude;

/// Latest published attitude estimate
///
/// Angles are in degrees.
///
/// # Coordinate System
///
/// - Pitch: from the X/Z accelerometer plane (positive = X axis up)
/// - Roll: from the Y/Z accelerometer plane (positive = Y axis up)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttitudeState {
    /// Pitch angle in degrees
    pub pitch: f32,

    /// Roll angle in degrees
    pub roll: f32,

    /// Number of completed filter cycles behind this estimate
    pub cycles: u32,
}

impl AttitudeState {
    /// Create new attitude state with given angles
    pub const fn new(pitch: f32, roll: f32, cycles: u32) -> Self {
        Self {
            pitch,
            roll,
            cycles,
        }
    }

    /// Whether at least one cycle has been published
    pub fn is_valid(&self) -> bool {
        self.cycles > 0
    }

    /// Angles as an [`Attitude`]
    pub fn attitude(&self) -> Attitude {
        Attitude::new(self.pitch, self.roll)
    }
}

/// Interrupt-safe wrapper for attitude state
///
/// Uses critical sections for atomic read/write operations.
/// Since reads/writes just copy a small struct, this is
/// cheaper than a mutex for this use case.
pub struct SharedAttitudeState {
    state: core::cell::UnsafeCell<AttitudeState>,
}

// Safety: AttitudeState is plain data with no internal mutability.
// Every access goes through a critical section in the methods below.
unsafe impl Sync for SharedAttitudeState {}
unsafe impl Send for SharedAttitudeState {}

impl SharedAttitudeState {
    /// Create new shared attitude state, usable in a `static`
    pub const fn new() -> Self {
        Self {
            state: core::cell::UnsafeCell::new(AttitudeState::new(0.0, 0.0, 0)),
        }
    }

    /// Read current attitude state
    pub fn read(&self) -> AttitudeState {
        critical_section::with(|_cs| unsafe { *self.state.get() })
    }

    /// Write new attitude state
    pub fn write(&self, state: AttitudeState) {
        critical_section::with(|_cs| unsafe {
            *self.state.get() = state;
        });
    }

    /// Update angles and cycle count
    pub fn update_attitude(&self, attitude: Attitude, cycles: u32) {
        critical_section::with(|_cs| unsafe {
            let state = &mut *self.state.get();
            state.pitch = attitude.pitch;
            state.roll = attitude.roll;
            state.cycles = cycles;
        });
    }

    /// Get pitch angle
    pub fn get_pitch(&self) -> f32 {
        critical_section::with(|_cs| unsafe { (*self.state.get()).pitch })
    }

    /// Get roll angle
    pub fn get_roll(&self) -> f32 {
        critical_section::with(|_cs| unsafe { (*self.state.get()).roll })
    }
}

impl Default for SharedAttitudeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attitude_state_default() {
        let state = AttitudeState::default();
        assert_eq!(state.pitch, 0.0);
        assert_eq!(state.roll, 0.0);
        assert!(!state.is_valid());
    }

    #[test]
    fn test_shared_attitude_state() {
        let shared = SharedAttitudeState::new();

        // Initial state should be default
        assert_eq!(shared.read(), AttitudeState::default());

        shared.write(AttitudeState::new(1.5, -2.5, 7));

        let state = shared.read();
        assert_eq!(state.attitude(), Attitude::new(1.5, -2.5));
        assert_eq!(state.cycles, 7);
        assert!(state.is_valid());
    }

    #[test]
    fn test_shared_attitude_getters() {
        static SHARED: SharedAttitudeState = SharedAttitudeState::new();

        SHARED.update_attitude(Attitude::new(10.0, 20.0), 1);

        assert_eq!(SHARED.get_pitch(), 10.0);
        assert_eq!(SHARED.get_roll(), 20.0);
        assert_eq!(SHARED.read().cycles, 1);
    }
}
