//! End-to-end rollback behaviour of the construction algorithms

use std::cell::Cell;
use std::mem::MaybeUninit;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use nebula_collections::ConstructError;
use nebula_collections::core::TrackingConfig;
use nebula_collections::iter::begin;
use nebula_collections::memory::{
    AllocatorEvent, DefaultAllocator, RawStorage, TrackedAllocator, TrackingStats, destroy_n,
    slots_address, uninitialized_copy_n, uninitialized_copy_slice, uninitialized_fill,
    uninitialized_fill_n,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Element whose clones fail once a shared budget runs out
#[derive(Debug)]
struct Widget {
    id: u32,
    budget: Rc<Cell<usize>>,
    alive: Rc<Cell<usize>>,
}

impl Widget {
    fn new(id: u32, budget: &Rc<Cell<usize>>, alive: &Rc<Cell<usize>>) -> Self {
        alive.set(alive.get() + 1);
        Self {
            id,
            budget: Rc::clone(budget),
            alive: Rc::clone(alive),
        }
    }
}

impl Clone for Widget {
    fn clone(&self) -> Self {
        let left = self.budget.get();
        assert!(left > 0, "copy of widget {} refused", self.id);
        self.budget.set(left - 1);
        Self::new(self.id, &self.budget, &self.alive)
    }
}

impl Drop for Widget {
    fn drop(&mut self) {
        self.alive.set(self.alive.get() - 1);
    }
}

#[test]
fn third_copy_panics_and_first_two_are_destroyed() {
    let budget = Rc::new(Cell::new(usize::MAX));
    let alive = Rc::new(Cell::new(0));
    let source: Vec<Widget> = (0..5).map(|id| Widget::new(id, &budget, &alive)).collect();
    let mut slots: [MaybeUninit<Widget>; 5] = [const { MaybeUninit::uninit() }; 5];

    budget.set(2);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        uninitialized_copy_slice(&mut DefaultAllocator, &source, &mut slots).map(|built| built.len())
    }));

    assert!(outcome.is_err(), "the panic must reach the caller");
    assert_eq!(alive.get(), 5, "only the source widgets may remain");
    assert_eq!(budget.get(), 0);
}

#[test]
fn third_copy_fails_and_rollback_runs_front_to_back() {
    let source = [1_u32, 2, 3, 4, 5];
    let mut slots = [MaybeUninit::<u32>::uninit(); 5];
    let base = slots_address(&mut slots).addr().get();
    let mut alloc = TrackedAllocator::with_config(DefaultAllocator, TrackingConfig::failing_at(2));

    let err = uninitialized_copy_slice(&mut alloc, &source, &mut slots).unwrap_err();
    assert_eq!(err, ConstructError::Injected { index: 2 });
    assert_eq!(err.code(), "COLL:CONSTRUCT:INJECTED");

    let slot = |i: usize| base + i * size_of::<u32>();
    assert_eq!(
        alloc.take_events(),
        vec![
            AllocatorEvent::Constructed { slot: slot(0) },
            AllocatorEvent::Constructed { slot: slot(1) },
            AllocatorEvent::Failed {
                slot: slot(2),
                attempt: 2
            },
            AllocatorEvent::Destroyed { slot: slot(0) },
            AllocatorEvent::Destroyed { slot: slot(1) },
        ]
    );
    assert_eq!(alloc.live(), 0);
}

#[test]
fn short_destination_constructs_nothing() {
    let source = [String::from("a"), String::from("b")];
    let mut slots = [const { MaybeUninit::<String>::uninit() }; 1];
    let mut alloc = TrackedAllocator::with_config(DefaultAllocator, TrackingConfig::recording());

    let err = uninitialized_copy_slice(&mut alloc, &source, &mut slots).unwrap_err();
    assert_eq!(err, ConstructError::insufficient_capacity(2, 1));
    assert!(alloc.events().is_empty());
}

#[test]
fn fill_into_raw_storage_and_release() {
    let shared = Rc::new(String::from("shared"));
    let storage = RawStorage::<Rc<String>>::with_capacity(8).unwrap();
    let mut alloc = TrackedAllocator::with_config(DefaultAllocator, TrackingConfig::counting());

    let end = unsafe { uninitialized_fill_n(&mut alloc, storage.as_ptr(), 8, &shared).unwrap() };
    assert_eq!(end, storage.end_ptr());
    assert_eq!(Rc::strong_count(&shared), 9);

    unsafe { destroy_n(&mut alloc, storage.as_ptr(), 8) };
    drop(storage);
    assert_eq!(Rc::strong_count(&shared), 1);
    assert_eq!(alloc.stats().constructed, alloc.stats().destroyed);
}

#[test]
fn copy_n_failure_destroys_the_built_prefix() {
    let source: Vec<String> = (0..6).map(|i| format!("s{i}")).collect();
    let mut slots = [const { MaybeUninit::<String>::uninit() }; 6];
    let dest = slots_address(&mut slots);
    let mut alloc = TrackedAllocator::with_config(DefaultAllocator, TrackingConfig::failing_at(3));

    let err = unsafe { uninitialized_copy_n(&mut alloc, begin(&source), 5, dest) }.unwrap_err();
    assert_eq!(err, ConstructError::Injected { index: 3 });
    assert_eq!(
        alloc.stats(),
        TrackingStats {
            constructed: 3,
            destroyed: 3,
            failed: 1
        }
    );
}

#[test]
fn range_fill_failure_destroys_the_built_prefix() {
    let shared = Rc::new(String::from("shared"));
    let storage = RawStorage::<Rc<String>>::with_capacity(4).unwrap();
    let mut alloc = TrackedAllocator::with_config(DefaultAllocator, TrackingConfig::failing_at(1));

    let result =
        unsafe { uninitialized_fill(&mut alloc, storage.as_ptr(), storage.end_ptr(), &shared) };
    assert_eq!(result, Err(ConstructError::Injected { index: 1 }));
    assert_eq!(alloc.stats().constructed, 1);
    assert_eq!(alloc.stats().destroyed, 1);
    assert_eq!(Rc::strong_count(&shared), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A failure at attempt k leaves no live objects and destroys exactly
    /// the k built before it, in construction order.
    #[test]
    fn rollback_is_all_or_nothing(len in 1_usize..24, fail_seed in any::<usize>()) {
        let fail_at = fail_seed % len;
        let source: Vec<u64> = (0..len as u64).collect();
        let mut slots = vec![MaybeUninit::<u64>::uninit(); len];
        let mut alloc = TrackedAllocator::with_config(
            DefaultAllocator,
            TrackingConfig::failing_at(fail_at),
        );

        let err = uninitialized_copy_slice(&mut alloc, &source, &mut slots).unwrap_err();
        prop_assert_eq!(err, ConstructError::Injected { index: fail_at });
        prop_assert_eq!(alloc.live(), 0);

        let events = alloc.take_events();
        let built: Vec<usize> = events
            .iter()
            .filter(|e| matches!(e, AllocatorEvent::Constructed { .. }))
            .map(AllocatorEvent::slot)
            .collect();
        let destroyed: Vec<usize> = events
            .iter()
            .filter(|e| matches!(e, AllocatorEvent::Destroyed { .. }))
            .map(AllocatorEvent::slot)
            .collect();
        prop_assert_eq!(built.len(), fail_at);
        prop_assert_eq!(built, destroyed);
    }

    /// Without failures every element is copied in order.
    #[test]
    fn success_copies_everything(source in proptest::collection::vec(any::<i32>(), 0..32), spare in 0_usize..4) {
        let mut slots = vec![MaybeUninit::<i32>::uninit(); source.len() + spare];
        let mut alloc = TrackedAllocator::with_config(DefaultAllocator, TrackingConfig::counting());

        let built = uninitialized_copy_slice(&mut alloc, &source, &mut slots).unwrap();
        prop_assert_eq!(&*built, source.as_slice());
        prop_assert_eq!(alloc.live(), source.len());
    }
}
