use crate::{Order, SortError, partition_by};

/*
--------------------------------------------------------------------------------
   QUICK_SORT - Recursive quick sort of data[p..=r] into descending order
--------------------------------------------------------------------------------
*/

/// Sort `data[p..=r]` into descending order in place.
///
/// A range with fewer than two elements (`p >= r`) is left as is. The pivot
/// is always the last element of the range, so input that is already sorted
/// in either direction takes quadratic time and recurses `n` deep; use
/// [`quick_sort_bounded`] when the stack depth matters.
///
/// # Panics
///
/// Panics if `p < r` and `r >= data.len()`.
pub fn quick_sort(data: &mut [i32], p: usize, r: usize) {
    quick_sort_by(data, p, r, Order::Descending);
}

pub fn quick_sort_by(data: &mut [i32], p: usize, r: usize, order: Order) {
    if p >= r {
        return;
    }

    let q = partition_by(data, p, r, order);
    if q > p {
        quick_sort_by(data, p, q - 1, order);
    }
    quick_sort_by(data, q + 1, r, order);
}

/// Sort the whole slice into descending order.
pub fn sort_descending(data: &mut [i32]) {
    if let Some(last) = data.len().checked_sub(1) {
        quick_sort(data, 0, last);
    }
}

/// Checked form of [`quick_sort`]. An empty range is accepted and does nothing.
pub fn try_quick_sort(data: &mut [i32], p: usize, r: usize) -> Result<(), SortError> {
    try_quick_sort_by(data, p, r, Order::Descending)
}

pub fn try_quick_sort_by(
    data: &mut [i32],
    p: usize,
    r: usize,
    order: Order,
) -> Result<(), SortError> {
    if p <= r && r >= data.len() {
        return Err(SortError::OutOfBounds { r, len: data.len() });
    }
    quick_sort_by(data, p, r, order);
    Ok(())
}

/*
--------------------------------------------------------------------------------
   QUICK_SORT_BOUNDED - Same partitions, O(log n) stack
--------------------------------------------------------------------------------
*/

/// Sort `data[p..=r]` into descending order, recursing only into the smaller
/// side of each partition and looping on the larger one.
///
/// Produces exactly the same result as [`quick_sort`].
///
/// # Panics
///
/// Panics if `p < r` and `r >= data.len()`.
pub fn quick_sort_bounded(data: &mut [i32], p: usize, r: usize) {
    quick_sort_bounded_by(data, p, r, Order::Descending);
}

pub fn quick_sort_bounded_by(data: &mut [i32], p: usize, r: usize, order: Order) {
    let mut first = p;
    let mut last = r;

    while first < last {
        let q = partition_by(data, first, last, order);

        if q - first < last - q {
            if q > first {
                quick_sort_bounded_by(data, first, q - 1, order);
            }
            first = q + 1;
        } else {
            // Left side is the larger one, so q > first here.
            quick_sort_bounded_by(data, q + 1, last, order);
            last = q - 1;
        }
    }
}
