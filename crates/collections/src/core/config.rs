//! Tracked allocator configuration

/// Configuration for [`TrackedAllocator`](crate::memory::TrackedAllocator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingConfig {
    /// Keep an ordered log of every construct / destroy / failure
    pub record_events: bool,

    /// Fail the construction attempt with this zero-based index
    ///
    /// Counted over every `construct` call the tracker sees, successful or
    /// not. `None` disables fault injection.
    pub fail_at: Option<usize>,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            record_events: cfg!(debug_assertions),
            fail_at: None,
        }
    }
}

impl TrackingConfig {
    /// Counters only, no event log and no fault injection
    #[must_use]
    pub fn counting() -> Self {
        Self {
            record_events: false,
            fail_at: None,
        }
    }

    /// Counters plus the full event log
    #[must_use]
    pub fn recording() -> Self {
        Self {
            record_events: true,
            fail_at: None,
        }
    }

    /// Event log plus a failure injected at construction attempt `index`
    #[must_use]
    pub fn failing_at(index: usize) -> Self {
        Self {
            record_events: true,
            fail_at: Some(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(TrackingConfig::counting().fail_at, None);
        assert!(!TrackingConfig::counting().record_events);
        assert!(TrackingConfig::recording().record_events);

        let failing = TrackingConfig::failing_at(2);
        assert_eq!(failing.fail_at, Some(2));
        assert!(failing.record_events);
    }

    #[test]
    fn default_follows_build_profile() {
        let config = TrackingConfig::default();
        assert_eq!(config.record_events, cfg!(debug_assertions));
        assert_eq!(config.fail_at, None);
    }
}
