//! Threaded form of the sort.
//!
//! The two halves of a divide share no data, so nothing stops them from
//! being sorted on separate threads; the only synchronization point is the
//! join ahead of each merge. Output is identical to [`crate::sort`],
//! tie-break and all. At or below [`SEQUENTIAL_CUTOFF`] elements a thread
//! costs more than it saves and the sequential sort runs instead.

use std::cmp::Ordering;
use std::panic;
use std::thread;

use crate::merge;

/// Inputs at or below this length are sorted on the calling thread.
pub const SEQUENTIAL_CUTOFF: usize = 8 * 1024;

/// Parallel sort under the natural order.
pub fn sort<T>(input: &[T]) -> Vec<T>
where
    T: Ord + Clone + Send + Sync,
{
    sort_by(input, T::cmp)
}

/// Parallel sort under an explicit comparator.
///
/// The comparator is shared across threads, so it must be `Fn + Sync`
/// rather than the `FnMut` the sequential entry points take.
pub fn sort_by<T, F>(input: &[T], compare: F) -> Vec<T>
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    recurse(input, &compare)
}

fn recurse<T, F>(seq: &[T], compare: &F) -> Vec<T>
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if seq.len() <= SEQUENTIAL_CUTOFF {
        return crate::sort::sort_by(seq, compare);
    }

    let (left, right) = seq.split_at(seq.len() / 2);

    let (left, right) = thread::scope(|scope| {
        let worker = scope.spawn(move || recurse(left, compare));
        let right = recurse(right, compare);

        let left = match worker.join() {
            Ok(sorted) => sorted,
            // A panicking comparator surfaces on the calling thread.
            Err(payload) => panic::resume_unwind(payload),
        };

        (left, right)
    });

    merge::merge_by(&left, &right, compare)
}
