use thiserror::Error;

/// Range errors reported by the checked entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("partition range [{p}, {r}] is empty")]
    EmptyRange { p: usize, r: usize },

    #[error("index {r} is out of bounds for a sequence of length {len}")]
    OutOfBounds { r: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order `{0}` (expected `descending` or `ascending`)")]
pub struct ParseOrderError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort strategy `{0}` (expected `recursive`, `bounded` or `parallel`)")]
pub struct ParseStrategyError(pub String);
