//! Core functionality for nebula-collections
//!
//! This module contains the pieces shared by the memory and cursor layers:
//! - Configuration structures
//! - Error types and result handling (re-exported)

pub mod config;

// Re-export commonly used items
pub use crate::error::{ConstructError, ConstructResult};
pub use config::TrackingConfig;
