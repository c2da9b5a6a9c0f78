//! Watching a sort as it runs.
//!
//! The sort is a pure function by default. The `*_with` entry points accept
//! any `FnMut(Event)` and report each step of the algorithm to it, so
//! callers can opt into progress output instead of getting it
//! unconditionally. [`emit`] is a ready-made observer that forwards every
//! step to the `tracing` facade.

use std::fmt::Debug;

/// One step of the algorithm, borrowing the sort's working state.
#[derive(Debug)]
pub enum Event<'a, T> {
    /// A sequence of length zero or one came back unchanged.
    BaseCase { seq: &'a [T] },
    /// A sequence was split ahead of the recursive calls. Concatenating
    /// `left` and `right` reproduces the undivided sequence.
    Divide { left: &'a [T], right: &'a [T] },
    /// Two sorted halves were fused into one.
    Merge {
        left: &'a [T],
        right: &'a [T],
        merged: &'a [T],
    },
}

/// Observer that logs every event through [`tracing`] at TRACE level.
///
/// No subscriber is installed by this crate, so with none configured the
/// events go nowhere and the sort stays effectively pure.
pub fn emit<T: Debug>(event: Event<'_, T>) {
    match event {
        Event::BaseCase { seq } => tracing::trace!(?seq, "base case"),
        Event::Divide { left, right } => tracing::trace!(?left, ?right, "divide"),
        Event::Merge {
            left,
            right,
            merged,
        } => tracing::trace!(?left, ?right, ?merged, "merge"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_accepts_every_event_shape() {
        emit(Event::BaseCase { seq: &[1] });
        emit(Event::Divide {
            left: &[1],
            right: &[2],
        });
        emit(Event::Merge {
            left: &[1],
            right: &[2],
            merged: &[1, 2],
        });
    }

    #[test]
    fn usable_as_a_sort_observer() {
        let sorted = crate::sort::sort_with(&[3, 1, 2], i32::cmp, emit);
        assert_eq!(sorted, vec![1, 2, 3]);
    }
}
