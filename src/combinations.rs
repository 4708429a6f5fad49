//! k-combinations of a slice.

use alloc::vec::Vec;

/// Returns every `k`-element combination of `items`, preserving input order
/// within each combination and listing combinations in lexicographic index
/// order.
///
/// `k == 0` yields a single empty combination; `k > items.len()` yields none.
///
/// # Example
///
/// ```
/// use pkrs::combinations;
///
/// assert_eq!(
///     combinations(&[1, 2, 3], 2),
///     vec![vec![1, 2], vec![1, 3], vec![2, 3]],
/// );
/// assert_eq!(combinations(&[1, 2], 3), Vec::<Vec<i32>>::new());
/// ```
#[must_use]
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut results = Vec::new();
    if k > items.len() {
        return results;
    }

    let mut current = Vec::with_capacity(k);
    backtrack(items, k, 0, &mut current, &mut results);
    results
}

fn backtrack<T: Clone>(
    items: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    results: &mut Vec<Vec<T>>,
) {
    if current.len() == k {
        results.push(current.clone());
        return;
    }

    // Stop once too few items remain to fill the combination.
    let last = items.len() - (k - current.len());
    for (i, item) in items.iter().enumerate().take(last + 1).skip(start) {
        current.push(item.clone());
        backtrack(items, k, i + 1, current, results);
        current.pop();
    }
}
