//! Tick source abstraction used to bound bus wait phases.
//!
//! This module provides the `TickSource` trait that abstracts over the
//! free-running counter a board exposes (SysTick, a timer CNT register, a
//! poll counter) so that timeout logic can be tested on host.

use core::cell::Cell;

/// Monotonic, wrapping tick counter.
///
/// The unit of a tick is left to the implementation. Timeout budgets are
/// expressed in the same unit, so a board that counts polls and a board that
/// counts microseconds both work as long as the budget is chosen to match.
///
/// # Example
///
/// ```
/// use mpu_attitude_core::traits::{MockTicks, TickSource};
///
/// fn expired<T: TickSource>(ticks: &T, start: u32, budget: u32) -> bool {
///     ticks.elapsed_since(start) >= budget
/// }
///
/// let ticks = MockTicks::new();
/// let start = ticks.now_ticks();
/// ticks.advance(10);
/// assert!(expired(&ticks, start, 10));
/// ```
pub trait TickSource {
    /// Returns the current counter value.
    fn now_ticks(&self) -> u32;

    /// Returns ticks elapsed since `start`.
    ///
    /// Uses wrapping subtraction so a counter rollover between `start` and
    /// now still yields the correct distance.
    fn elapsed_since(&self, start: u32) -> u32 {
        self.now_ticks().wrapping_sub(start)
    }
}

impl<T: TickSource + ?Sized> TickSource for &T {
    fn now_ticks(&self) -> u32 {
        (**self).now_ticks()
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock tick source with controllable time advancement.
///
/// Every call to [`TickSource::now_ticks`] advances the counter by `step`
/// after reading it, which models a counter that keeps running while code
/// polls. With `step == 0` time only moves through [`MockTicks::advance`].
///
/// # Example
///
/// ```
/// use mpu_attitude_core::traits::{MockTicks, TickSource};
///
/// let ticks = MockTicks::new();
/// assert_eq!(ticks.now_ticks(), 0);
/// ticks.advance(5);
/// assert_eq!(ticks.now_ticks(), 5);
///
/// let polled = MockTicks::auto_advance(1);
/// assert_eq!(polled.now_ticks(), 0);
/// assert_eq!(polled.now_ticks(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockTicks {
    current: Cell<u32>,
    step: u32,
    reads: Cell<u32>,
}

impl MockTicks {
    /// Creates a stopped counter at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter at tick 0 that advances `step` ticks per read.
    pub fn auto_advance(step: u32) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    /// Creates a stopped counter starting at `ticks`.
    pub fn with_initial(ticks: u32) -> Self {
        Self {
            current: Cell::new(ticks),
            ..Self::default()
        }
    }

    /// Sets the counter to an absolute value.
    pub fn set(&self, ticks: u32) {
        self.current.set(ticks);
    }

    /// Advances the counter, wrapping on overflow.
    pub fn advance(&self, ticks: u32) {
        self.current.set(self.current.get().wrapping_add(ticks));
    }

    /// Number of times the counter has been read.
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl TickSource for MockTicks {
    fn now_ticks(&self) -> u32 {
        let now = self.current.get();
        self.current.set(now.wrapping_add(self.step));
        self.reads.set(self.reads.get() + 1);
        now
    }
}
