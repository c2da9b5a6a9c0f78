//! Linear-time fusion of sorted sequences.
//!
//! Splitting a sequence is index arithmetic; all of the real work in a
//! merge sort happens here. [`merge_by`] walks two sorted slices front to
//! front and always takes the smaller head. Ties take the left element,
//! which is what makes the whole sort stable.

use std::cmp::Ordering;

/// Merge two sorted slices under the natural order.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    merge_by(left, right, T::cmp)
}

/// Merge two sorted slices under `compare`.
///
/// Both inputs must already be sorted under the same comparator. That is
/// the caller's responsibility; feeding unsorted slices in produces an
/// unsorted result rather than an error. Neither input is mutated.
pub fn merge_by<T, F>(left: &[T], right: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut lhs = 0;
    let mut rhs = 0;

    while lhs < left.len() && rhs < right.len() {
        // Only a strictly smaller right head may overtake. On a tie the
        // left element goes first, so equal elements keep their input
        // order.
        if compare(&right[rhs], &left[lhs]) == Ordering::Less {
            merged.push(right[rhs].clone());
            rhs += 1;
        } else {
            merged.push(left[lhs].clone());
            lhs += 1;
        }
    }

    // One side is exhausted; the other's tail is already in order.
    merged.extend_from_slice(&left[lhs..]);
    merged.extend_from_slice(&right[rhs..]);

    debug_assert_eq!(merged.len(), left.len() + right.len());
    merged
}

/// [`merge_by`] with a comparator that can fail.
///
/// The first comparator error aborts the merge and is returned unchanged.
pub fn try_merge_by<T, E, F>(left: &[T], right: &[T], mut compare: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut lhs = 0;
    let mut rhs = 0;

    while lhs < left.len() && rhs < right.len() {
        if compare(&right[rhs], &left[lhs])? == Ordering::Less {
            merged.push(right[rhs].clone());
            rhs += 1;
        } else {
            merged.push(left[lhs].clone());
            lhs += 1;
        }
    }

    merged.extend_from_slice(&left[lhs..]);
    merged.extend_from_slice(&right[rhs..]);

    Ok(merged)
}

/// Merge any number of individually sorted runs into one sorted sequence.
///
/// Runs are merged pairwise, divide-and-conquer style, so the total work
/// is O(n log k) for k runs. Earlier runs win ties against later ones,
/// which preserves the relative order of equal elements across runs.
pub fn merge_runs<T: Ord + Clone>(runs: Vec<Vec<T>>) -> Vec<T> {
    merge_runs_by(runs, T::cmp)
}

/// [`merge_runs`] under an explicit comparator.
pub fn merge_runs_by<T, F>(runs: Vec<Vec<T>>, mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    run_merge(runs, &mut compare)
}

fn run_merge<T, F>(mut runs: Vec<Vec<T>>, compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if runs.is_empty() {
        return Vec::new();
    }

    if runs.len() == 1 {
        return runs.pop().unwrap();
    }

    let tail = runs.split_off(runs.len() / 2);

    assert!(!runs.is_empty());
    assert!(!tail.is_empty());

    let head = run_merge(runs, compare);
    let tail = run_merge(tail, compare);

    merge_by(&head, &tail, &mut *compare)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_interleaves() {
        assert_eq!(merge(&[1, 3, 5], &[2, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn merge_empty_sides() {
        assert_eq!(merge::<i64>(&[], &[]), Vec::<i64>::new());
        assert_eq!(merge(&[], &[1, 2]), vec![1, 2]);
        assert_eq!(merge(&[1, 2], &[]), vec![1, 2]);
    }

    #[test]
    fn ties_take_the_left_element() {
        // Equal keys tagged by origin, compared on the key alone.
        let left = [(1, 'l'), (2, 'l')];
        let right = [(1, 'r'), (3, 'r')];

        let merged = merge_by(&left, &right, |a, b| a.0.cmp(&b.0));
        assert_eq!(merged, vec![(1, 'l'), (1, 'r'), (2, 'l'), (3, 'r')]);
    }

    #[test]
    fn try_merge_succeeds_like_merge() {
        let merged = try_merge_by(&[1, 3], &[2], |a: &i64, b: &i64| Ok::<_, ()>(a.cmp(b)));
        assert_eq!(merged, Ok(vec![1, 2, 3]));
    }

    #[test]
    fn try_merge_reports_the_first_comparator_error() {
        let result = try_merge_by(&[-1, 3], &[2], |a: &i64, b: &i64| {
            if *a < 0 || *b < 0 {
                Err("incomparable")
            } else {
                Ok(a.cmp(b))
            }
        });
        assert_eq!(result, Err("incomparable"));
    }

    #[test]
    fn merge_runs_of_uneven_lengths() {
        let runs = vec![vec![4, 9], vec![], vec![1, 5, 7], vec![2]];
        assert_eq!(merge_runs(runs), vec![1, 2, 4, 5, 7, 9]);
    }

    quickcheck::quickcheck! {
        fn qc_merge_sorted(left: Vec<i64>, right: Vec<i64>) -> bool {
            // Make sure that each input is sorted
            let mut left = left;
            let mut right = right;
            left.sort();
            right.sort();

            let merged = merge(&left, &right);
            merged.len() == left.len() + right.len()
                && merged.windows(2).all(|pair| pair[0] <= pair[1])
        }

        fn qc_merge_runs_matches_flat_sort(runs: Vec<Vec<i64>>) -> bool {
            let mut runs = runs;
            runs.iter_mut().for_each(|run| run.sort());

            let mut expected = runs.concat();
            expected.sort();

            merge_runs(runs) == expected
        }
    }
}
