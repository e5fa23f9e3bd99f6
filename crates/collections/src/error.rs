//! Standalone error types for nebula-collections
//!
//! Uses thiserror for clean, idiomatic Rust error definitions. The
//! construction algorithms never produce these on their own account except
//! for the capacity checks of the slice entry points; every other failure is
//! the allocator's error, passed through unchanged.

use thiserror::Error;

#[cfg(feature = "logging")]
use tracing::debug;

// ============================================================================
// Main Error Types
// ============================================================================

/// Errors raised while constructing objects into caller-owned storage
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// Destination storage is shorter than the source range
    #[error("Insufficient capacity: {required} slots required, {available} available")]
    InsufficientCapacity { required: usize, available: usize },

    /// Failure injected by a [`TrackedAllocator`](crate::memory::TrackedAllocator)
    #[error("Construction of element {index} failed (injected)")]
    Injected { index: usize },

    /// Requested slot count does not fit in a single allocation
    #[error("Capacity overflow: {capacity} slots of {elem_size} bytes")]
    CapacityOverflow { capacity: usize, elem_size: usize },

    /// The global allocator returned null
    #[error("Storage allocation failed: {size} bytes with {align} byte alignment")]
    AllocationFailed { size: usize, align: usize },
}

impl ConstructError {
    /// Get error code for categorization
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InsufficientCapacity { .. } => "COLL:CONSTRUCT:CAPACITY",
            Self::Injected { .. } => "COLL:CONSTRUCT:INJECTED",
            Self::CapacityOverflow { .. } => "COLL:STORAGE:OVERFLOW",
            Self::AllocationFailed { .. } => "COLL:STORAGE:ALLOC",
        }
    }

    /// Create insufficient capacity error
    pub fn insufficient_capacity(required: usize, available: usize) -> Self {
        Self::InsufficientCapacity {
            required,
            available,
        }
    }

    /// Create injected failure error
    pub fn injected(index: usize) -> Self {
        #[cfg(feature = "logging")]
        debug!(index, "injecting construction failure");

        Self::Injected { index }
    }

    /// Create capacity overflow error
    pub fn capacity_overflow(capacity: usize, elem_size: usize) -> Self {
        Self::CapacityOverflow {
            capacity,
            elem_size,
        }
    }

    /// Create allocation failed error
    pub fn allocation_failed(size: usize, align: usize) -> Self {
        Self::AllocationFailed { size, align }
    }

    /// Check if this error came from fault injection
    #[must_use]
    pub fn is_injected(&self) -> bool {
        matches!(self, Self::Injected { .. })
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Result type for construction operations
pub type ConstructResult<T> = Result<T, ConstructError>;

// ============================================================================
// Tests
// ============================================================================
