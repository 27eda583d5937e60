use crate::{Order, SortError};

/*
--------------------------------------------------------------------------------
   PARTITION - Lomuto partition of data[p..=r] around the last element
--------------------------------------------------------------------------------
*/

/// Partition `data[p..=r]` for a descending sort and return the pivot's
/// final index `q`.
///
/// The pivot is `data[r]`. On return every element in `[p, q-1]` is `>=`
/// the pivot, every element in `[q+1, r]` is `<=` it, and `data[q]` holds
/// the pivot. Elements outside `[p, r]` are not touched.
///
/// # Panics
///
/// Panics unless `p <= r < data.len()`.
pub fn partition(data: &mut [i32], p: usize, r: usize) -> usize {
    partition_by(data, p, r, Order::Descending)
}

/// [`partition`] with the comparison chosen by `order`.
///
/// # Panics
///
/// Panics unless `p <= r < data.len()`.
pub fn partition_by(data: &mut [i32], p: usize, r: usize, order: Order) -> usize {
    assert!(
        p <= r && r < data.len(),
        "partition range [{}, {}] is invalid for a sequence of length {}",
        p,
        r,
        data.len()
    );

    let pivot = data[r];
    // `store` is one past the last element known to belong left of the pivot.
    let mut store = p;

    for j in p..r {
        if order.admits(data[j], pivot) {
            data.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, r);
    store
}

/// Checked form of [`partition`].
pub fn try_partition(data: &mut [i32], p: usize, r: usize) -> Result<usize, SortError> {
    try_partition_by(data, p, r, Order::Descending)
}

pub fn try_partition_by(
    data: &mut [i32],
    p: usize,
    r: usize,
    order: Order,
) -> Result<usize, SortError> {
    if p > r {
        return Err(SortError::EmptyRange { p, r });
    }
    if r >= data.len() {
        return Err(SortError::OutOfBounds { r, len: data.len() });
    }
    Ok(partition_by(data, p, r, order))
}
