//! Category-dispatched traversal
//!
//! [`advance`] and [`distance`] pick their strategy from the cursor's
//! category at compile time through [`Traverse`], implemented once per tag:
//!
//! | Category        | `advance(it, n)`                        | `distance(a, b)`  |
//! |-----------------|-----------------------------------------|-------------------|
//! | input, forward  | `n` increments; `n <= 0` does nothing   | count increments  |
//! | bidirectional   | increments or decrements by sign of `n` | count increments  |
//! | random access   | one `offset(n)`                         | one `difference`  |
//!
//! A cursor that declares a category it cannot honour (say, a
//! [`BidirectionalTag`] cursor without [`BidirectionalCursor`]) fails to
//! satisfy `I::Category: Traverse<I>` and is rejected at the call site.
//! [`OutputTag`](super::category::OutputTag) has no traversal at all.

use super::category::{
    BidirectionalCategory, BidirectionalTag, CategoryTag, ForwardTag, InputTag, RandomAccessTag,
};
use super::traits::{BidirectionalCursor, Cursor, DifferenceType, RandomAccessCursor};

/// Traversal strategy of a category for cursor type `I`
pub trait Traverse<I: Cursor>: CategoryTag {
    /// Moves `it` by `n` positions
    fn advance(it: &mut I, n: I::Difference);

    /// Number of increments from `first` to `last`
    fn distance(first: I, last: &I) -> I::Difference;
}

fn step_forward<I: Cursor>(it: &mut I, mut n: I::Difference) {
    let zero = I::Difference::default();
    while n > zero {
        it.increment();
        n -= I::Difference::one();
    }
}

fn count_forward<I: Cursor>(mut first: I, last: &I) -> I::Difference {
    let mut count = I::Difference::default();
    while first != *last {
        first.increment();
        count += I::Difference::one();
    }
    count
}

impl<I: Cursor> Traverse<I> for InputTag {
    #[inline]
    fn advance(it: &mut I, n: I::Difference) {
        step_forward(it, n);
    }

    #[inline]
    fn distance(first: I, last: &I) -> I::Difference {
        count_forward(first, last)
    }
}

impl<I: Cursor> Traverse<I> for ForwardTag {
    #[inline]
    fn advance(it: &mut I, n: I::Difference) {
        step_forward(it, n);
    }

    #[inline]
    fn distance(first: I, last: &I) -> I::Difference {
        count_forward(first, last)
    }
}

impl<I: BidirectionalCursor> Traverse<I> for BidirectionalTag {
    fn advance(it: &mut I, mut n: I::Difference) {
        if n.is_negative() {
            let zero = I::Difference::default();
            while n < zero {
                it.decrement();
                n += I::Difference::one();
            }
        } else {
            step_forward(it, n);
        }
    }

    #[inline]
    fn distance(first: I, last: &I) -> I::Difference {
        count_forward(first, last)
    }
}

impl<I: RandomAccessCursor> Traverse<I> for RandomAccessTag {
    #[inline]
    fn advance(it: &mut I, n: I::Difference) {
        it.offset(n);
    }

    #[inline]
    fn distance(first: I, last: &I) -> I::Difference {
        last.difference(&first)
    }
}

/// Moves `it` by `n` positions using the strategy of its category
///
/// For input and forward cursors a negative `n` leaves `it` unchanged.
///
/// # Examples
///
/// ```rust
/// use nebula_collections::iter::{advance, begin};
///
/// let data = [1, 2, 3, 4];
/// let mut it = begin(&data);
/// advance(&mut it, 3);
/// assert_eq!(*it.get(), 4);
/// ```
#[inline]
pub fn advance<I>(it: &mut I, n: I::Difference)
where
    I: Cursor,
    I::Category: Traverse<I>,
{
    <I::Category as Traverse<I>>::advance(it, n);
}

/// Number of increments needed to go from `first` to `last`
///
/// `last` must be reachable from `first`; for random-access cursors the
/// result may be negative when it is not.
#[inline]
pub fn distance<I>(first: I, last: I) -> I::Difference
where
    I: Cursor,
    I::Category: Traverse<I>,
{
    <I::Category as Traverse<I>>::distance(first, &last)
}

/// Copy of `it` moved forward by `n`
#[inline]
#[must_use]
pub fn next<I>(it: &I, n: I::Difference) -> I
where
    I: Cursor,
    I::Category: Traverse<I>,
{
    let mut moved = it.clone();
    advance(&mut moved, n);
    moved
}

/// Copy of `it` moved backward by `n`
#[inline]
#[must_use]
pub fn prev<I>(it: &I, n: I::Difference) -> I
where
    I: BidirectionalCursor,
    I::Category: BidirectionalCategory + Traverse<I>,
{
    let mut moved = it.clone();
    advance(&mut moved, -n);
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::traits::IteratorTraits;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Forward-only cursor over the integers that counts its increments
    #[derive(Clone, Debug)]
    struct Counting {
        pos: i32,
        steps: Rc<Cell<usize>>,
    }

    impl PartialEq for Counting {
        fn eq(&self, other: &Self) -> bool {
            self.pos == other.pos
        }
    }

    impl IteratorTraits for Counting {
        type Value = i32;
        type Difference = i32;
        type Pointer = ();
        type Reference = i32;
        type Category = ForwardTag;
    }

    impl Cursor for Counting {
        fn increment(&mut self) {
            self.pos += 1;
            self.steps.set(self.steps.get() + 1);
        }
    }

    fn counting(pos: i32, steps: &Rc<Cell<usize>>) -> Counting {
        Counting {
            pos,
            steps: Rc::clone(steps),
        }
    }

    #[test]
    fn forward_advance_steps_one_at_a_time() {
        let steps = Rc::new(Cell::new(0));
        let mut it = counting(0, &steps);

        advance(&mut it, 5);
        assert_eq!(it.pos, 5);
        assert_eq!(steps.get(), 5);
    }

    #[test]
    fn forward_ignores_negative_and_zero() {
        let steps = Rc::new(Cell::new(0));
        let mut it = counting(3, &steps);

        advance(&mut it, -2);
        advance(&mut it, 0);
        assert_eq!(it.pos, 3);
        assert_eq!(steps.get(), 0);
    }

    #[test]
    fn forward_distance_counts() {
        let steps = Rc::new(Cell::new(0));
        assert_eq!(distance(counting(2, &steps), counting(9, &steps)), 7);
        assert_eq!(steps.get(), 7);
        assert_eq!(distance(counting(4, &steps), counting(4, &steps)), 0);
    }

    #[test]
    fn pointers_take_the_constant_time_path() {
        let data = [0_u8; 16];
        let first = data.as_ptr();
        let last = first.wrapping_add(16);

        assert_eq!(distance(first, last), 16);
        assert_eq!(distance(last, first), -16);

        let mut it = first;
        advance(&mut it, 10);
        advance(&mut it, -4);
        assert_eq!(it, first.wrapping_add(6));

        assert_eq!(next(&first, 3), first.wrapping_add(3));
        assert_eq!(prev(&last, 1), first.wrapping_add(15));
    }
}
