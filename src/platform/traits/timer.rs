//! Sampling trigger trait
//!
//! The attitude loop runs once per period of a hardware timer. This module
//! defines the view of that timer the loop needs: an update flag it can poll
//! and clear.

/// Periodic sampling trigger
///
/// # Safety Invariants
///
/// - Timer must be configured and running before the loop polls it
/// - The flag must stay set until [`SampleTrigger::clear`] is called
pub trait SampleTrigger {
    /// Whether a sampling period has elapsed since the last clear
    fn is_pending(&self) -> bool;

    /// Acknowledge the pending period
    fn clear(&mut self);
}

impl<T: SampleTrigger + ?Sized> SampleTrigger for &mut T {
    fn is_pending(&self) -> bool {
        (**self).is_pending()
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
