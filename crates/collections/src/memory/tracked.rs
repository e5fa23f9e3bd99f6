//! Tracked object allocator
//!
//! Wraps another [`ObjectAllocator`] and records what happens to the slots
//! it touches: construction and destruction counts, an optional ordered
//! event log, and an optional injected failure at a chosen construction
//! attempt. Used to observe rollback behaviour of the construction
//! algorithms.
//!
//! # Safety
//!
//! - Every construct/destroy is forwarded to the inner allocator with the
//!   caller's contract unchanged
//! - An injected failure returns before the inner allocator is called, so
//!   the slot stays untouched as the construct contract requires

use core::ptr::NonNull;

use super::allocator::ObjectAllocator;
use crate::core::config::TrackingConfig;
use crate::error::ConstructError;

/// Counters kept by a [`TrackedAllocator`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackingStats {
    /// Successful constructions
    pub constructed: usize,
    /// Destructions
    pub destroyed: usize,
    /// Failed construction attempts (injected or reported by the inner allocator)
    pub failed: usize,
}

impl TrackingStats {
    /// Objects constructed and not yet destroyed
    pub fn live(&self) -> usize {
        self.constructed.saturating_sub(self.destroyed)
    }

    /// Total construction attempts, successful or not
    pub fn attempts(&self) -> usize {
        self.constructed + self.failed
    }
}

/// One recorded allocator operation, with the slot address it targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocatorEvent {
    /// An object was constructed at `slot`
    Constructed { slot: usize },
    /// The object at `slot` was destroyed
    Destroyed { slot: usize },
    /// Construction attempt number `attempt` at `slot` failed
    Failed { slot: usize, attempt: usize },
}

impl AllocatorEvent {
    /// Address of the slot the event refers to
    pub fn slot(&self) -> usize {
        match *self {
            Self::Constructed { slot } | Self::Destroyed { slot } | Self::Failed { slot, .. } => {
                slot
            }
        }
    }
}

/// Allocator wrapper collecting [`TrackingStats`] and [`AllocatorEvent`]s
///
/// # Examples
///
/// ```rust
/// use core::mem::MaybeUninit;
/// use nebula_collections::core::TrackingConfig;
/// use nebula_collections::memory::{DefaultAllocator, TrackedAllocator, uninitialized_copy_slice};
/// use nebula_collections::ConstructError;
///
/// let source = [1, 2, 3, 4, 5];
/// let mut slots = [MaybeUninit::<i32>::uninit(); 5];
/// let mut alloc = TrackedAllocator::with_config(DefaultAllocator, TrackingConfig::failing_at(2));
///
/// let err = uninitialized_copy_slice(&mut alloc, &source, &mut slots).unwrap_err();
/// assert_eq!(err, ConstructError::Injected { index: 2 });
/// assert_eq!(alloc.stats().constructed, 2);
/// assert_eq!(alloc.live(), 0);
/// ```
#[derive(Debug)]
pub struct TrackedAllocator<A> {
    inner: A,
    config: TrackingConfig,
    stats: TrackingStats,
    events: Vec<AllocatorEvent>,
}

impl<A> TrackedAllocator<A> {
    /// Wraps `inner` with the default tracking configuration
    pub fn new(inner: A) -> Self {
        Self::with_config(inner, TrackingConfig::default())
    }

    /// Wraps `inner` with an explicit configuration
    pub fn with_config(inner: A, config: TrackingConfig) -> Self {
        Self {
            inner,
            config,
            stats: TrackingStats::default(),
            events: Vec::new(),
        }
    }

    /// Gets a reference to the underlying allocator
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Gets a mutable reference to the underlying allocator
    pub fn inner_mut(&mut self) -> &mut A {
        &mut self.inner
    }

    /// Consumes the tracker and returns the underlying allocator
    pub fn into_inner(self) -> A {
        self.inner
    }

    /// Active configuration
    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> TrackingStats {
        self.stats
    }

    /// Objects constructed through this tracker and not yet destroyed
    pub fn live(&self) -> usize {
        self.stats.live()
    }

    /// Recorded events, oldest first (empty unless `record_events` is set)
    pub fn events(&self) -> &[AllocatorEvent] {
        &self.events
    }

    /// Drains the recorded events
    pub fn take_events(&mut self) -> Vec<AllocatorEvent> {
        core::mem::take(&mut self.events)
    }

    /// Clears counters and events; the attempt count restarts at zero
    pub fn reset(&mut self) {
        self.stats = TrackingStats::default();
        self.events.clear();
    }

    fn record(&mut self, event: AllocatorEvent) {
        if self.config.record_events {
            self.events.push(event);
        }
    }
}

// SAFETY: Forwards to the inner allocator under the caller's contract. An
// injected failure returns before anything is written to the slot.
unsafe impl<T, A: ObjectAllocator<T>> ObjectAllocator<T> for TrackedAllocator<A> {
    type Error = A::Error;

    unsafe fn construct(&mut self, slot: NonNull<T>, value: &T) -> Result<(), Self::Error> {
        let attempt = self.stats.attempts();
        let address = slot.addr().get();

        if self.config.fail_at == Some(attempt) {
            self.stats.failed += 1;
            self.record(AllocatorEvent::Failed {
                slot: address,
                attempt,
            });
            return Err(ConstructError::injected(attempt).into());
        }

        // SAFETY: slot contract forwarded from the caller
        match unsafe { self.inner.construct(slot, value) } {
            Ok(()) => {
                self.stats.constructed += 1;
                self.record(AllocatorEvent::Constructed { slot: address });
                Ok(())
            }
            Err(err) => {
                self.stats.failed += 1;
                self.record(AllocatorEvent::Failed {
                    slot: address,
                    attempt,
                });
                Err(err)
            }
        }
    }

    unsafe fn destroy(&mut self, slot: NonNull<T>) {
        // SAFETY: slot contract forwarded from the caller
        unsafe { self.inner.destroy(slot) };
        self.stats.destroyed += 1;
        self.record(AllocatorEvent::Destroyed {
            slot: slot.addr().get(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{DefaultAllocator, slots_address, uninitialized_copy_slice};
    use core::mem::MaybeUninit;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_constructs_and_destroys() {
        let mut slots = [const { MaybeUninit::<String>::uninit() }; 2];
        let mut alloc = TrackedAllocator::with_config(DefaultAllocator, TrackingConfig::counting());
        let source = [String::from("x"), String::from("y")];

        let built = uninitialized_copy_slice(&mut alloc, &source, &mut slots).unwrap();
        let first = NonNull::from(built).cast::<String>();
        assert_eq!(alloc.live(), 2);

        unsafe { crate::memory::destroy_n(&mut alloc, first, 2) };
        assert_eq!(
            alloc.stats(),
            TrackingStats {
                constructed: 2,
                destroyed: 2,
                failed: 0
            }
        );
        assert!(alloc.events().is_empty());
    }

    #[test]
    fn injected_failure_rolls_back_in_order() {
        let source = [10_u64, 20, 30, 40, 50];
        let mut slots = [MaybeUninit::<u64>::uninit(); 5];
        let base = slots_address(&mut slots).addr().get();
        let mut alloc =
            TrackedAllocator::with_config(DefaultAllocator, TrackingConfig::failing_at(2));

        let err = uninitialized_copy_slice(&mut alloc, &source, &mut slots).unwrap_err();
        assert_eq!(err, ConstructError::Injected { index: 2 });

        let size = size_of::<u64>();
        assert_eq!(
            alloc.events(),
            &[
                AllocatorEvent::Constructed { slot: base },
                AllocatorEvent::Constructed { slot: base + size },
                AllocatorEvent::Failed {
                    slot: base + 2 * size,
                    attempt: 2
                },
                AllocatorEvent::Destroyed { slot: base },
                AllocatorEvent::Destroyed { slot: base + size },
            ]
        );
        assert_eq!(alloc.live(), 0);
        assert_eq!(alloc.stats().failed, 1);
    }

    #[test]
    fn failure_is_injected_once() {
        let source = [1_u8, 2];
        let mut slots = [MaybeUninit::<u8>::uninit(); 2];
        let mut alloc =
            TrackedAllocator::with_config(DefaultAllocator, TrackingConfig::failing_at(0));

        assert!(uninitialized_copy_slice(&mut alloc, &source, &mut slots).is_err());
        let built = uninitialized_copy_slice(&mut alloc, &source, &mut slots).unwrap();
        assert_eq!(built, &[1, 2]);
        assert_eq!(alloc.stats().attempts(), 3);
    }

    #[test]
    fn reset_and_take_events() {
        let mut slots = [MaybeUninit::<i32>::uninit(); 1];
        let mut alloc = TrackedAllocator::with_config(DefaultAllocator, TrackingConfig::recording());

        uninitialized_copy_slice(&mut alloc, &[7], &mut slots).unwrap();
        let events = alloc.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].slot(), slots_address(&mut slots).addr().get());
        assert!(alloc.events().is_empty());

        alloc.reset();
        assert_eq!(alloc.stats(), TrackingStats::default());
        let _inner: DefaultAllocator = alloc.into_inner();
    }

    #[test]
    fn inner_allocator_and_config_are_reachable() {
        let mut outer = TrackedAllocator::with_config(
            TrackedAllocator::with_config(DefaultAllocator, TrackingConfig::counting()),
            TrackingConfig::failing_at(4),
        );
        assert_eq!(outer.config().fail_at, Some(4));
        assert!(outer.config().record_events);

        let mut slots = [MaybeUninit::<u16>::uninit(); 2];
        uninitialized_copy_slice(outer.inner_mut(), &[1, 2], &mut slots).unwrap();
        assert_eq!(outer.inner().live(), 2);
        assert_eq!(outer.live(), 0);
    }
}
