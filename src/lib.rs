//! Stable merge sorting for arbitrary element types.
//!
//! The crate mirrors the two halves of the algorithm itself: the
//! [`merge`](mod@merge) module fuses sorted sequences in linear time, and
//! the [`sort`](mod@sort) module is the recursive divide step that drives
//! it. Sorting is non-destructive:
//! every entry point borrows its input and returns a freshly allocated
//! result, so the caller's data is never reordered in place.
//!
//! Equal elements keep their input order (the merge gives ties to the left
//! half), the comparator is injectable, and the [`trace`] module lets
//! callers watch each divide and merge without giving up the pure-function
//! default. For large inputs, [`parallel`] sorts the two halves on
//! separate threads.

pub mod merge;
pub mod parallel;
pub mod sort;
pub mod trace;

pub use merge::{merge, merge_by, merge_runs, merge_runs_by, try_merge_by};
pub use sort::{sort, sort_by, sort_by_key, sort_with, try_sort_by};
pub use trace::Event;
