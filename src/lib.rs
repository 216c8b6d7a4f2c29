pub mod weighted;

pub use weighted::{WeightedRandom, WeightedRandomError};
