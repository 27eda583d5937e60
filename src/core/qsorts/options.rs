use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::{ParseOrderError, ParseStrategyError};
use crate::{par_quick_sort_by, quick_sort_bounded_by, quick_sort_by};

/// Direction of the sort.
///
/// `Descending` is the canonical order of this crate: elements equal to the
/// pivot are kept on the "larger" side, which is the left of the pivot.
/// `Ascending` mirrors every comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Descending,
    Ascending,
}

impl Order {
    /// True when `value` belongs on the pivot's left side.
    #[inline]
    pub fn admits(self, value: i32, pivot: i32) -> bool {
        match self {
            Order::Descending => value >= pivot,
            Order::Ascending => value <= pivot,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Descending => write!(f, "descending"),
            Order::Ascending => write!(f, "ascending"),
        }
    }
}

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "descending" | "desc" => Ok(Order::Descending),
            "ascending" | "asc" => Ok(Order::Ascending),
            other => Err(ParseOrderError(other.to_string())),
        }
    }
}

/// How the two sides of a partition are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Two recursive calls per partition. Stack depth is O(n) in the worst case.
    #[default]
    Recursive,
    /// Recurse into the smaller side, loop on the larger one.
    Bounded,
    /// Sort independent sides on the rayon pool above a size threshold.
    Parallel,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => write!(f, "recursive"),
            Strategy::Bounded => write!(f, "bounded"),
            Strategy::Parallel => write!(f, "parallel"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(Strategy::Recursive),
            "bounded" => Ok(Strategy::Bounded),
            "parallel" => Ok(Strategy::Parallel),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOptions {
    pub order: Order,
    pub strategy: Strategy,
    /// Ranges at or below this length are sorted sequentially by the
    /// parallel strategy. Ignored by the other strategies.
    pub parallel_threshold: usize,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            order: Order::default(),
            strategy: Strategy::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Sort the whole slice in place according to `options`.
pub fn sort_with(data: &mut [i32], options: &SortOptions) {
    tracing::debug!(
        len = data.len(),
        order = %options.order,
        strategy = %options.strategy,
        "sorting"
    );

    if data.len() < 2 {
        return;
    }
    let last = data.len() - 1;

    match options.strategy {
        Strategy::Recursive => quick_sort_by(data, 0, last, options.order),
        Strategy::Bounded => quick_sort_bounded_by(data, 0, last, options.order),
        Strategy::Parallel => {
            par_quick_sort_by(data, 0, last, options.order, options.parallel_threshold)
        }
    }
}
