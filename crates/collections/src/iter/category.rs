//! Cursor category tags
//!
//! Every cursor names one of five zero-sized tags as its category. The tags
//! form a refinement chain, expressed by marker traits:
//!
//! ```text
//! InputCategory  ⊂  ForwardCategory  ⊂  BidirectionalCategory  ⊂  RandomAccessCategory
//! ```
//!
//! `OutputTag` stands apart: it refines nothing and nothing refines it.
//! [`CategoryTag`] is sealed, so the set of categories is closed; the
//! capability traits in [`traits`](super::traits) are open to user cursors.

use core::fmt::Debug;

// ============================================================================
// Sealing Mechanism
// ============================================================================

mod private {
    /// Private sealing trait; only the five tags below implement it
    pub trait Sealed {}

    impl Sealed for super::InputTag {}
    impl Sealed for super::OutputTag {}
    impl Sealed for super::ForwardTag {}
    impl Sealed for super::BidirectionalTag {}
    impl Sealed for super::RandomAccessTag {}
}

/// A cursor category
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait CategoryTag: private::Sealed + Copy + Default + Debug + Eq + 'static {
    /// Human-readable category name
    const NAME: &'static str;
}

/// Categories whose cursors can be read from (input and every refinement)
pub trait InputCategory: CategoryTag {}

/// Multi-pass categories
pub trait ForwardCategory: InputCategory {}

/// Categories that can step backwards
pub trait BidirectionalCategory: ForwardCategory {}

/// Categories with constant-time jumps and differences
pub trait RandomAccessCategory: BidirectionalCategory {}

// ============================================================================
// Tags
// ============================================================================

/// Single-pass, read-only traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InputTag;

/// Single-pass, write-only traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OutputTag;

/// Multi-pass forward traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ForwardTag;

/// Forward traversal plus stepping back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BidirectionalTag;

/// Bidirectional traversal plus O(1) jumps and differences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccessTag;

impl CategoryTag for InputTag {
    const NAME: &'static str = "input";
}
impl CategoryTag for OutputTag {
    const NAME: &'static str = "output";
}
impl CategoryTag for ForwardTag {
    const NAME: &'static str = "forward";
}
impl CategoryTag for BidirectionalTag {
    const NAME: &'static str = "bidirectional";
}
impl CategoryTag for RandomAccessTag {
    const NAME: &'static str = "random_access";
}

impl InputCategory for InputTag {}
impl InputCategory for ForwardTag {}
impl InputCategory for BidirectionalTag {}
impl InputCategory for RandomAccessTag {}

impl ForwardCategory for ForwardTag {}
impl ForwardCategory for BidirectionalTag {}
impl ForwardCategory for RandomAccessTag {}

impl BidirectionalCategory for BidirectionalTag {}
impl BidirectionalCategory for RandomAccessTag {}

impl RandomAccessCategory for RandomAccessTag {}

/// Name of a category, for diagnostics
pub fn category_name<C: CategoryTag>() -> &'static str {
    C::NAME
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requires_forward<C: ForwardCategory>() -> &'static str {
        C::NAME
    }

    fn requires_input<C: InputCategory>() -> &'static str {
        C::NAME
    }

    #[test]
    fn refinements_are_accepted_where_the_base_is_required() {
        assert_eq!(requires_input::<InputTag>(), "input");
        assert_eq!(requires_input::<RandomAccessTag>(), "random_access");
        assert_eq!(requires_forward::<BidirectionalTag>(), "bidirectional");
        assert_eq!(requires_forward::<ForwardTag>(), "forward");
    }

    #[test]
    fn names() {
        assert_eq!(category_name::<OutputTag>(), "output");
        assert_eq!(size_of::<RandomAccessTag>(), 0);
    }
}
