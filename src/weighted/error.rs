use std::fmt;

/// Errors raised by [`WeightedRandom`](super::WeightedRandom) operations.
///
/// All of these are local and synchronous; nothing is retried internally, and
/// a failed operation leaves the container untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightedRandomError {
    /// A negative (or NaN) weight was supplied to an insert.
    InvalidWeight(f64),
    /// Batch insert was given item and weight sequences of different lengths.
    LengthMismatch { items: usize, weights: usize },
    /// A removal or percentage query named an item/weight pair that is not
    /// stored.
    NotFound,
    /// A sample was requested from a container holding no items.
    Empty,
}

impl fmt::Display for WeightedRandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightedRandomError::InvalidWeight(weight) => {
                write!(f, "weights cannot be negative (got {})", weight)
            }
            WeightedRandomError::LengthMismatch { items, weights } => {
                write!(
                    f,
                    "items and weights must be equal lengths ({} items, {} weights)",
                    items, weights
                )
            }
            WeightedRandomError::NotFound => {
                write!(f, "the specified item could not be found")
            }
            WeightedRandomError::Empty => {
                write!(f, "there are no items to sample from")
            }
        }
    }
}

impl std::error::Error for WeightedRandomError {}
