//! Object construction over caller-owned storage
//!
//! - [`address`]: turning references and uninitialized slots into destinations
//! - [`allocator`]: the construct/destroy capability and its default
//! - [`uninit`]: batch construction with rollback, and batch destruction
//! - [`guard`]: the rollback guard the algorithms are built on
//! - [`tracked`]: an allocator wrapper that counts, logs, and injects failures
//! - [`storage`]: raw fixed-capacity slot buffers

pub mod address;
pub mod allocator;
pub mod guard;
pub mod storage;
pub mod tracked;
pub mod uninit;

pub use address::{address_of, address_of_mut, slot_address, slots_address};
pub use allocator::{DefaultAllocator, ObjectAllocator};
pub use guard::ConstructGuard;
pub use storage::RawStorage;
pub use tracked::{AllocatorEvent, TrackedAllocator, TrackingStats};
pub use uninit::{
    destroy_n, destroy_one, destroy_range, uninitialized_copy, uninitialized_copy_n,
    uninitialized_copy_slice, uninitialized_fill, uninitialized_fill_n, uninitialized_fill_slice,
};
