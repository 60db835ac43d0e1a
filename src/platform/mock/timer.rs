//! Mock sampling trigger for testing

use crate::platform::traits::SampleTrigger;

/// Mock sampling trigger
///
/// Tests call [`MockTrigger::fire`] to simulate a timer update event and
/// inspect how often the loop acknowledged it.
#[derive(Debug, Default)]
pub struct MockTrigger {
    pending: bool,
    fired: u32,
    cleared: u32,
}

impl MockTrigger {
    /// Create an idle trigger
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the update flag
    pub fn fire(&mut self) {
        self.pending = true;
        self.fired += 1;
    }

    /// Number of times the flag was raised
    pub fn fired_count(&self) -> u32 {
        self.fired
    }

    /// Number of times the flag was cleared
    pub fn cleared_count(&self) -> u32 {
        self.cleared
    }
}

impl SampleTrigger for MockTrigger {
    fn is_pending(&self) -> bool {
        self.pending
    }

    fn clear(&mut self) {
        self.pending = false;
        self.cleared += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_trigger_fire_and_clear() {
        let mut trigger = MockTrigger::new();
        assert!(!trigger.is_pending());

        trigger.fire();
        assert!(trigger.is_pending());
        assert_eq!(trigger.fired_count(), 1);

        trigger.clear();
        assert!(!trigger.is_pending());
        assert_eq!(trigger.cleared_count(), 1);
    }
}
