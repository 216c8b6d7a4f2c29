use super::error::WeightedRandomError;
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, VecDeque};

/// Stores a collection of items with integer weights and draws one at random,
/// with each item selected at the probability of its weight divided by the
/// total weight of all stored items.
///
/// Items sharing a weight are kept in a single bucket, so a draw scans the
/// distinct weights rather than the individual items.
pub struct WeightedRandom<T, R = StdRng> {
    /// Weight to the ordered group of items carrying that weight. No key ever
    /// maps to an empty group.
    groups: BTreeMap<u64, VecDeque<T>>,
    /// Sum of `weight * group length` over all groups.
    total_weight: u64,
    rng: R,
}

impl<T> WeightedRandom<T, StdRng> {
    /// Creates an empty container with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an empty container whose draws are reproducible from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<T> Default for WeightedRandom<T, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Rng> WeightedRandom<T, R> {
    /// Creates an empty container drawing from the supplied generator.
    pub fn with_rng(rng: R) -> Self {
        WeightedRandom {
            groups: BTreeMap::new(),
            total_weight: 0,
            rng,
        }
    }

    /// Adds a weighted item to be randomly selected from.
    ///
    /// Weights cannot be negative; a negative weight leaves the container
    /// unchanged.
    pub fn insert(&mut self, item: T, weight: i64) -> Result<(), WeightedRandomError> {
        let weight =
            u64::try_from(weight).map_err(|_| WeightedRandomError::InvalidWeight(weight as f64))?;
        self.groups.entry(weight).or_default().push_front(item);
        self.total_weight += weight;
        Ok(())
    }

    /// Adds a weighted item, truncating the weight toward negative infinity to
    /// an integer before storage. NaN and negative weights are rejected.
    pub fn insert_f64(&mut self, item: T, weight: f64) -> Result<(), WeightedRandomError> {
        if weight.is_nan() || weight < 0.0 {
            return Err(WeightedRandomError::InvalidWeight(weight));
        }
        self.insert(item, weight.floor() as i64)
    }

    /// Adds the items with their correlating weights. The sequences must be
    /// equal lengths and every weight non-negative; both are validated before
    /// anything is stored, so a failed call inserts nothing.
    pub fn insert_batch(
        &mut self,
        items: Vec<T>,
        weights: &[i64],
    ) -> Result<(), WeightedRandomError> {
        if items.len() != weights.len() {
            return Err(WeightedRandomError::LengthMismatch {
                items: items.len(),
                weights: weights.len(),
            });
        }
        if let Some(bad) = weights.iter().find(|weight| **weight < 0) {
            return Err(WeightedRandomError::InvalidWeight(*bad as f64));
        }
        for (item, weight) in items.into_iter().zip(weights) {
            self.insert(item, *weight)?;
        }
        Ok(())
    }

    /// Removes one occurrence of the item that has the specified weight.
    ///
    /// Fails if no group for that weight exists, or the group does not contain
    /// the item.
    pub fn remove(&mut self, item: &T, weight: i64) -> Result<(), WeightedRandomError>
    where
        T: PartialEq,
    {
        let weight = u64::try_from(weight).map_err(|_| WeightedRandomError::NotFound)?;
        let group = self
            .groups
            .get_mut(&weight)
            .ok_or(WeightedRandomError::NotFound)?;
        let position = group
            .iter()
            .position(|candidate| candidate == item)
            .ok_or(WeightedRandomError::NotFound)?;
        group.remove(position);
        if group.is_empty() {
            self.groups.remove(&weight);
        }
        self.total_weight -= weight;
        Ok(())
    }

    /// Removes every occurrence of the item from every weight group. Absent
    /// items are a no-op.
    pub fn remove_all(&mut self, item: &T)
    where
        T: PartialEq,
    {
        let mut removed = 0;
        self.groups.retain(|weight, group| {
            let before = group.len();
            group.retain(|candidate| candidate != item);
            removed += weight * (before - group.len()) as u64;
            !group.is_empty()
        });
        self.total_weight -= removed;
    }

    /// Removes all items with the given weight. Removing a weight that is not
    /// present is a no-op, not an error.
    pub fn remove_weight_group(&mut self, weight: i64) {
        let Ok(weight) = u64::try_from(weight) else {
            return;
        };
        if let Some(group) = self.groups.remove(&weight) {
            self.total_weight -= weight * group.len() as u64;
        }
    }

    /// Returns the fraction of draws, in `[0, 1]`, that will statistically
    /// return the given item: its weight over the total weight, taken from the
    /// first group (in ascending weight order) containing it.
    ///
    /// When every stored item carries weight zero the draw is uniform, so the
    /// uniform share `1 / item count` is reported instead.
    pub fn percentage_of(&self, item: &T) -> Result<f64, WeightedRandomError>
    where
        T: PartialEq,
    {
        for (weight, group) in &self.groups {
            if group.iter().any(|candidate| candidate == item) {
                if self.total_weight == 0 {
                    return Ok(1.0 / self.len() as f64);
                }
                return Ok(*weight as f64 / self.total_weight as f64);
            }
        }
        Err(WeightedRandomError::NotFound)
    }

    /// Draws a random item from the container.
    ///
    /// The draw lands in a weight group with probability proportional to
    /// `weight * group length`, then ties within the group are broken by a
    /// second uniform draw, so each item's probability is its own weight over
    /// the total. Cost is linear in the number of distinct weights, not the
    /// number of items.
    pub fn sample(&mut self) -> Result<&T, WeightedRandomError> {
        let mut remaining = if self.total_weight > 0 {
            self.rng.gen_range(0..self.total_weight)
        } else {
            0
        };
        for (weight, group) in self.groups.iter().rev() {
            let share = weight * group.len() as u64;
            if remaining < share {
                trace!("draw landed in weight group {}", weight);
                return Ok(pick_within(&mut self.rng, group));
            }
            remaining -= share;
        }
        // Positive total weight always resolves inside the scan; only the
        // all-zero-weight population reaches the smallest (and then only)
        // group here, making its draw uniform.
        match self.groups.iter().next() {
            Some((_, group)) => Ok(pick_within(&mut self.rng, group)),
            None => Err(WeightedRandomError::Empty),
        }
    }

    /// Number of stored items, counting duplicates.
    pub fn len(&self) -> usize {
        self.groups.values().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of the weights of every stored item.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Iterates `(weight, item)` pairs in ascending weight order, preserving
    /// each group's insertion order. Diagnostic; order has no bearing on draw
    /// probabilities.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &T)> {
        self.groups
            .iter()
            .flat_map(|(weight, group)| group.iter().map(move |item| (*weight, item)))
    }
}

fn pick_within<'a, T, R: Rng>(rng: &mut R, group: &'a VecDeque<T>) -> &'a T {
    if group.len() > 1 {
        &group[rng.gen_range(0..group.len())]
    } else {
        &group[0]
    }
}
