//! Insertion adaptors
//!
//! Output cursors that turn each assignment into one container insertion:
//!
//! - [`BackInserter`] appends (`[v1, v2, v3]` stays in order)
//! - [`FrontInserter`] prepends (`[v1, v2, v3]` comes out as `[v3, v2, v1]`)
//! - [`Inserter`] inserts before a tracked position and then moves past
//!   the new element, so consecutive values keep their order
//!
//! The containers they drive only need the matching capability trait.

use std::collections::{LinkedList, VecDeque};

use super::category::OutputTag;
use super::traits::{IteratorTraits, OutputCursor};

// ============================================================================
// Container capabilities
// ============================================================================

/// Containers that can append one element
pub trait BackInsert<T> {
    /// Appends `value`
    fn push_back(&mut self, value: T);
}

/// Containers that can prepend one element
pub trait FrontInsert<T> {
    /// Prepends `value`
    fn push_front(&mut self, value: T);
}

/// Containers that can insert before a position
pub trait PositionalInsert<T> {
    /// A position in the container
    type Position: Clone;

    /// Inserts `value` before `pos`; returns the position of the new element
    fn insert_before(&mut self, pos: Self::Position, value: T) -> Self::Position;

    /// Position immediately after the element at `pos`
    fn position_after(&self, pos: &Self::Position) -> Self::Position;
}

impl<T> BackInsert<T> for Vec<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        self.push(value);
    }
}

impl<T> PositionalInsert<T> for Vec<T> {
    type Position = usize;

    #[inline]
    fn insert_before(&mut self, pos: usize, value: T) -> usize {
        self.insert(pos, value);
        pos
    }

    #[inline]
    fn position_after(&self, pos: &usize) -> usize {
        pos + 1
    }
}

impl<T> BackInsert<T> for VecDeque<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        Self::push_back(self, value);
    }
}

impl<T> FrontInsert<T> for VecDeque<T> {
    #[inline]
    fn push_front(&mut self, value: T) {
        Self::push_front(self, value);
    }
}

impl<T> PositionalInsert<T> for VecDeque<T> {
    type Position = usize;

    #[inline]
    fn insert_before(&mut self, pos: usize, value: T) -> usize {
        self.insert(pos, value);
        pos
    }

    #[inline]
    fn position_after(&self, pos: &usize) -> usize {
        pos + 1
    }
}

impl<T> BackInsert<T> for LinkedList<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        Self::push_back(self, value);
    }
}

impl<T> FrontInsert<T> for LinkedList<T> {
    #[inline]
    fn push_front(&mut self, value: T) {
        Self::push_front(self, value);
    }
}

impl BackInsert<char> for String {
    #[inline]
    fn push_back(&mut self, value: char) {
        self.push(value);
    }
}

/// Positions are byte offsets on char boundaries
impl PositionalInsert<char> for String {
    type Position = usize;

    #[inline]
    fn insert_before(&mut self, pos: usize, value: char) -> usize {
        self.insert(pos, value);
        pos
    }

    #[inline]
    fn position_after(&self, pos: &usize) -> usize {
        self[*pos..]
            .chars()
            .next()
            .map_or(*pos, |ch| pos + ch.len_utf8())
    }
}

// ============================================================================
// Adaptors
// ============================================================================

/// Output cursor appending to a container
#[derive(Debug)]
pub struct BackInserter<'a, C> {
    container: &'a mut C,
}

/// Output cursor prepending to a container
#[derive(Debug)]
pub struct FrontInserter<'a, C> {
    container: &'a mut C,
}

/// Output cursor inserting before a tracked position
#[derive(Debug)]
pub struct Inserter<'a, C, P> {
    container: &'a mut C,
    pos: P,
}

/// Back-inserting cursor over `container`
///
/// # Examples
///
/// ```rust
/// use nebula_collections::iter::{OutputCursor, back_inserter};
///
/// let mut log = vec!["boot"];
/// let mut out = back_inserter(&mut log);
/// out.put("ready");
/// out.extend(["serve"]);
/// assert_eq!(log, ["boot", "ready", "serve"]);
/// ```
#[inline]
pub fn back_inserter<C>(container: &mut C) -> BackInserter<'_, C> {
    BackInserter { container }
}

/// Front-inserting cursor over `container`
#[inline]
pub fn front_inserter<C>(container: &mut C) -> FrontInserter<'_, C> {
    FrontInserter { container }
}

/// Cursor inserting into `container` starting before `pos`
#[inline]
pub fn inserter<C, P>(container: &mut C, pos: P) -> Inserter<'_, C, P> {
    Inserter { container, pos }
}

impl<C> BackInserter<'_, C> {
    /// The driven container
    pub fn container(&self) -> &C {
        self.container
    }
}

impl<C> FrontInserter<'_, C> {
    /// The driven container
    pub fn container(&self) -> &C {
        self.container
    }
}

impl<C, P> Inserter<'_, C, P> {
    /// The driven container
    pub fn container(&self) -> &C {
        self.container
    }

    /// Position the next value will be inserted before
    pub fn position(&self) -> &P {
        &self.pos
    }
}

macro_rules! output_only_traits {
    ($($adaptor:ident<$($param:ident),*>),* $(,)?) => {$(
        impl<$($param),*> IteratorTraits for $adaptor<'_, $($param),*> {
            type Value = ();
            type Difference = ();
            type Pointer = ();
            type Reference = ();
            type Category = OutputTag;
        }
    )*};
}

output_only_traits!(BackInserter<C>, FrontInserter<C>, Inserter<C, P>);

impl<C: BackInsert<T>, T> OutputCursor<T> for BackInserter<'_, C> {
    #[inline]
    fn output(&mut self) -> &mut Self {
        self
    }

    #[inline]
    fn assign(&mut self, value: T) {
        self.container.push_back(value);
    }

    #[inline]
    fn increment(&mut self) -> &mut Self {
        self
    }
}

impl<C: FrontInsert<T>, T> OutputCursor<T> for FrontInserter<'_, C> {
    #[inline]
    fn output(&mut self) -> &mut Self {
        self
    }

    #[inline]
    fn assign(&mut self, value: T) {
        self.container.push_front(value);
    }

    #[inline]
    fn increment(&mut self) -> &mut Self {
        self
    }
}

impl<C, P, T> OutputCursor<T> for Inserter<'_, C, P>
where
    C: PositionalInsert<T, Position = P>,
    P: Clone,
{
    #[inline]
    fn output(&mut self) -> &mut Self {
        self
    }

    #[inline]
    fn assign(&mut self, value: T) {
        let inserted = self.container.insert_before(self.pos.clone(), value);
        self.pos = self.container.position_after(&inserted);
    }

    #[inline]
    fn increment(&mut self) -> &mut Self {
        self
    }
}

impl<C: BackInsert<T>, T> Extend<T> for BackInserter<'_, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.container.push_back(value);
        }
    }
}

impl<C: FrontInsert<T>, T> Extend<T> for FrontInserter<'_, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.container.push_front(value);
        }
    }
}

impl<C, P, T> Extend<T> for Inserter<'_, C, P>
where
    C: PositionalInsert<T, Position = P>,
    P: Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.assign(value);
        }
    }
}
