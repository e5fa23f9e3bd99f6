//! # nebula-collections
//!
//! Low-level building blocks for Nebula's container types.
//!
//! This crate provides:
//! - Allocator-mediated construction into uninitialized storage with
//!   all-or-nothing rollback
//! - A cursor model with compile-time category dispatch
//! - Reverse and insertion cursor adaptors
//! - Instrumented allocators and raw slot storage for testing containers
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_collections::prelude::*;
//!
//! // Build copies into raw storage; a failure part-way destroys the prefix
//! let source = [String::from("a"), String::from("b"), String::from("c")];
//! let mut storage = RawStorage::<String>::with_capacity(4)?;
//! let mut alloc = DefaultAllocator;
//! let built = uninitialized_copy_slice(&mut alloc, &source, storage.as_uninit_mut())?;
//! assert_eq!(built.len(), 3);
//! unsafe { destroy_n(&mut alloc, storage.as_ptr(), 3) };
//!
//! // Walk a slice backwards into a vector
//! let mut reversed = Vec::new();
//! copy(rbegin(&source), rend(&source), back_inserter(&mut reversed));
//! assert_eq!(reversed, [&source[2], &source[1], &source[0]]);
//! # Ok::<(), ConstructError>(())
//! ```
//!
//! ## Features
//!
//! - `logging` (default): `tracing` events on rollback, fault injection and
//!   raw storage allocation
//!
//! ## Architecture
//!
//! - [`memory`]: address resolution, the object allocator capability, and the
//!   construction algorithms
//! - [`iter`]: cursor categories, traversal, adaptors, and algorithms
//! - [`core`]: configuration
//! - [`error`]: standalone error handling

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
// Casts between isize positions and usize lengths are checked per-site
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]

// Error types
pub mod error;

// Core modules
pub mod core;
pub mod iter;
pub mod memory;

// Re-export core types for convenience
pub use crate::core::TrackingConfig;
pub use crate::error::{ConstructError, ConstructResult};

// Public API exports
pub mod prelude {
    //! Convenient re-exports of commonly used types and traits.

    // Core types
    pub use crate::core::TrackingConfig;

    // Error types
    pub use crate::error::{ConstructError, ConstructResult};

    // Construction
    pub use crate::memory::{
        ConstructGuard, DefaultAllocator, ObjectAllocator, RawStorage, TrackedAllocator,
        destroy_n, destroy_one, destroy_range, uninitialized_copy, uninitialized_copy_n,
        uninitialized_copy_slice, uninitialized_fill, uninitialized_fill_n,
        uninitialized_fill_slice,
    };

    // Cursors
    pub use crate::iter::{
        BidirectionalCursor, Cursor, IteratorTraits, OutputCursor, RandomAccessCursor,
        ReadCursor, ReverseCursor, advance, back_inserter, begin, copy, copy_n, distance, end,
        front_inserter, inserter, range, rbegin, rend,
    };
}
