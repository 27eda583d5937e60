use crate::{Order, partition_by, quick_sort_bounded_by};

/*
--------------------------------------------------------------------------------
   PAR_QUICK_SORT - Sort independent partitions on the rayon pool
--------------------------------------------------------------------------------
*/

/// Parallel descending sort of `data[p..=r]`.
///
/// Ranges longer than `threshold` are partitioned on the calling thread and
/// their two sides are sorted with `rayon::join`. Shorter ranges fall back to
/// [`quick_sort_bounded`](crate::quick_sort_bounded). The result is the same
/// as [`quick_sort`](crate::quick_sort) for every input.
///
/// # Panics
///
/// Panics if `p < r` and `r >= data.len()`.
pub fn par_quick_sort(data: &mut [i32], p: usize, r: usize, threshold: usize) {
    par_quick_sort_by(data, p, r, Order::Descending, threshold);
}

pub fn par_quick_sort_by(data: &mut [i32], p: usize, r: usize, order: Order, threshold: usize) {
    if p >= r {
        return;
    }
    par_sort_slice(&mut data[p..=r], order, threshold);
}

fn par_sort_slice(data: &mut [i32], order: Order, threshold: usize) {
    let len = data.len();
    if len < 2 {
        return;
    }
    if len <= threshold {
        quick_sort_bounded_by(data, 0, len - 1, order);
        return;
    }

    let q = partition_by(data, 0, len - 1, order);
    let (left, right) = data.split_at_mut(q);
    let right = &mut right[1..];
    tracing::trace!(left = left.len(), right = right.len(), "parallel split");

    rayon::join(
        || par_sort_slice(left, order, threshold),
        || par_sort_slice(right, order, threshold),
    );
}
