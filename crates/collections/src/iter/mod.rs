//! Cursor model
//!
//! Position-based traversal in the style of classic container libraries,
//! expressed with traits:
//!
//! - [`category`]: the five category tags and their refinement lattice
//! - [`traits`]: the associated-type record and capability traits
//! - [`ops`]: category-dispatched [`advance`] and [`distance`]
//! - [`cursor`]: slice read and write cursors
//! - [`reverse`]: the reversing adaptor
//! - [`insert`]: back, front, and positional insertion adaptors
//! - [`algorithm`]: generic copy and the bridge to [`Iterator`]

pub mod algorithm;
pub mod category;
pub mod cursor;
pub mod insert;
pub mod ops;
pub mod reverse;
pub mod traits;

pub use algorithm::{CursorRange, copy, copy_n, range};
pub use category::{
    BidirectionalCategory, BidirectionalTag, CategoryTag, ForwardCategory, ForwardTag,
    InputCategory, InputTag, OutputTag, RandomAccessCategory, RandomAccessTag, category_name,
};
pub use cursor::{SliceCursor, SliceWriter, begin, end};
pub use insert::{
    BackInsert, BackInserter, FrontInsert, FrontInserter, Inserter, PositionalInsert,
    back_inserter, front_inserter, inserter,
};
pub use ops::{Traverse, advance, distance, next, prev};
pub use reverse::{ReverseCursor, rbegin, rend};
pub use traits::{
    BidirectionalCursor, Cursor, DifferenceType, IteratorTraits, OutputCursor,
    RandomAccessCursor, ReadCursor,
};
