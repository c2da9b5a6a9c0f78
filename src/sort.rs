//! The recursive divide step.
//!
//! Each call splits its input at the midpoint, sorts both halves, and
//! hands them to [`crate::merge`] to combine. Sequences of length zero or
//! one are the recursion floor. Every entry point borrows its input and
//! returns a new vector; the caller's slice is never touched.

use std::cmp::Ordering;

use crate::merge;
use crate::trace::Event;

/// Sort into non-decreasing order under the natural order.
pub fn sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    sort_by(input, T::cmp)
}

/// Sort under an explicit comparator.
///
/// `compare` must be a total preorder. A comparator that contradicts
/// itself still terminates and still returns some permutation of the
/// input, just not a sorted one.
pub fn sort_by<T, F>(input: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    recurse(input, &mut compare, &mut |_: Event<'_, T>| {})
}

/// Sort by a key extracted from each element.
pub fn sort_by_key<T, K, F>(input: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(input, |a, b| key(a).cmp(&key(b)))
}

/// [`sort_by`], reporting each step of the algorithm to `observe`.
///
/// The observer sees an [`Event::Divide`] for every split, an
/// [`Event::Merge`] for every fusion and an [`Event::BaseCase`] for every
/// recursion floor, in execution order. The result is identical to
/// [`sort_by`] with the same comparator.
pub fn sort_with<T, F, O>(input: &[T], mut compare: F, mut observe: O) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    O: FnMut(Event<'_, T>),
{
    recurse(input, &mut compare, &mut observe)
}

/// Sort with a comparator that can fail.
///
/// The first comparator error unwinds the whole sort and is handed back
/// unchanged; there is no partial result.
pub fn try_sort_by<T, E, F>(input: &[T], mut compare: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    try_recurse(input, &mut compare)
}

fn recurse<T, F, O>(seq: &[T], compare: &mut F, observe: &mut O) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    O: FnMut(Event<'_, T>),
{
    if seq.len() <= 1 {
        observe(Event::BaseCase { seq });
        return seq.to_vec();
    }

    let middle = seq.len() / 2;
    let (left, right) = seq.split_at(middle);
    observe(Event::Divide { left, right });

    let left = recurse(left, compare, observe);
    let right = recurse(right, compare, observe);

    let merged = merge::merge_by(&left, &right, &mut *compare);
    observe(Event::Merge {
        left: &left,
        right: &right,
        merged: &merged,
    });

    merged
}

fn try_recurse<T, E, F>(seq: &[T], compare: &mut F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if seq.len() <= 1 {
        return Ok(seq.to_vec());
    }

    let (left, right) = seq.split_at(seq.len() / 2);

    let left = try_recurse(left, compare)?;
    let right = try_recurse(right, compare)?;

    merge::try_merge_by(&left, &right, &mut *compare)
}
