//! Checks used by the self-test driver and the test suites.

use crate::Order;

/// True when every adjacent pair of `data` respects `order`.
pub fn is_sorted_by(data: &[i32], order: Order) -> bool {
    data.windows(2).all(|w| order.admits(w[0], w[1]))
}

pub fn is_descending(data: &[i32]) -> bool {
    is_sorted_by(data, Order::Descending)
}

/// True when `a` and `b` hold the same multiset of values.
pub fn is_permutation_of(a: &[i32], b: &[i32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// True when `q` splits `data[p..=r]` the way a partition in `order` leaves it.
pub fn check_partition(data: &[i32], p: usize, r: usize, q: usize, order: Order) -> bool {
    if p > q || q > r || r >= data.len() {
        return false;
    }
    let pivot = data[q];
    data[p..q].iter().all(|&x| order.admits(x, pivot))
        && data[q + 1..=r].iter().all(|&x| order.admits(pivot, x))
}

/// Index of the first position where `actual` and `expected` differ,
/// including a length difference.
pub fn first_mismatch(actual: &[i32], expected: &[i32]) -> Option<usize> {
    actual
        .iter()
        .zip(expected)
        .position(|(a, e)| a != e)
        .or_else(|| (actual.len() != expected.len()).then(|| actual.len().min(expected.len())))
}
