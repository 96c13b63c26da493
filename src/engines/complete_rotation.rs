//! M002: complete capacity, cyclic rotation.
//!
//! All available resources form one ring in random order; participants
//! sit on fixed rows and one global offset decides every pairing. With
//! fewer resources than participants the ring is padded with empty
//! positions, so no resource is seen by two rows in the same round.

use rand::seq::SliceRandom;
use rand::Rng;

use super::rotation::rotate;
use super::{EngineInput, MatchingEngine};
use crate::config::ShapeCode;
use crate::models::{MatchingResult, Resource};

/// Rotation matching where every participant sees a resource each round.
///
/// Reports `conflict = true` with no assignments when every offset
/// contains a forbidden pairing under the exclude policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompleteRotationEngine;

impl MatchingEngine for CompleteRotationEngine {
    fn code(&self) -> ShapeCode {
        ShapeCode::M002
    }

    fn assign<R: Rng>(&self, input: &EngineInput<'_>, rng: &mut R) -> MatchingResult {
        let mut ring: Vec<Option<&Resource>> = input.resources.iter().map(|r| Some(*r)).collect();
        // Scarce resources: empty positions make the surplus rows sit a round out.
        ring.resize(input.participants.len().max(ring.len()), None);
        ring.shuffle(rng);
        rotate(input, &ring, input.participants.len(), self.code(), rng)
    }
}
