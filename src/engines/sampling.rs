//! Rank weights and weighted selection.
//!
//! Top-three preferences are weighted 100 / 70 / 40. Any other pairing
//! weighs 10 when scoring rotation offsets.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Weight for rank 1, 2 and 3.
pub const RANK_WEIGHTS: [u64; 3] = [100, 70, 40];

/// Weight for a pairing outside the top three.
pub const UNRANKED_WEIGHT: u64 = 10;

/// Weight of a preference rank (0 = not preferred).
#[inline]
pub fn rank_weight(rank: u8) -> u64 {
    match rank {
        1..=3 => RANK_WEIGHTS[(rank - 1) as usize],
        _ => UNRANKED_WEIGHT,
    }
}

/// Draws an index with probability proportional to its weight.
///
/// Falls back to a uniform draw when every weight is zero.
/// Returns `None` for an empty slice.
pub fn weighted_index<R: Rng>(weights: &[u64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    match WeightedIndex::<u64>::new(weights) {
        Ok(dist) => Some(dist.sample(rng)),
        Err(_) => Some(rng.random_range(0..weights.len())),
    }
}
