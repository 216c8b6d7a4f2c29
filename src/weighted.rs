//! Weighted random selection over weight-bucketed storage.

pub mod error;
pub mod sampler;

pub use error::WeightedRandomError;
pub use sampler::WeightedRandom;
