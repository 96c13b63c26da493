//! M004: vacant slots, cyclic rotation.
//!
//! The ring is as long as the seat count. When there are fewer resources
//! than seats, the remaining ring positions are empty and a participant
//! facing one simply sits out that round; surplus resources beyond the
//! seat count stay idle. Vacant rows are rotated past but never scored.

use rand::seq::SliceRandom;
use rand::Rng;

use super::rotation::rotate;
use super::{EngineInput, MatchingEngine};
use crate::config::ShapeCode;
use crate::models::{MatchingResult, Resource};

/// Rotation matching over a fixed seat count.
#[derive(Debug, Clone, Copy)]
pub struct VacantRotationEngine {
    /// Total seats; raised to the participant count if smaller.
    pub slot_count: usize,
}

impl VacantRotationEngine {
    /// Creates the engine.
    pub fn new(slot_count: usize) -> Self {
        Self { slot_count }
    }
}

impl MatchingEngine for VacantRotationEngine {
    fn code(&self) -> ShapeCode {
        ShapeCode::M004
    }

    fn assign<R: Rng>(&self, input: &EngineInput<'_>, rng: &mut R) -> MatchingResult {
        let slot_count = self.slot_count.max(input.participants.len());

        let mut pool: Vec<&Resource> = input.resources.clone();
        pool.shuffle(rng);
        pool.truncate(slot_count);

        let mut ring: Vec<Option<&Resource>> = pool.into_iter().map(Some).collect();
        ring.resize(slot_count, None);
        ring.shuffle(rng);

        rotate(input, &ring, slot_count, self.code(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JudgmentMode, MatchingPolicy};
    use crate::engines::test_support;
    use crate::models::{NgEntry, Participant};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_slots_include_vacant_rows() {
        let participants = test_support::participants(3);
        let resources = test_support::resources(5);
        let input = EngineInput::new(&participants, &resources, 3, MatchingPolicy::default());
        let mut rng = SmallRng::seed_from_u64(42);

        let result = VacantRotationEngine::new(5).assign(&input, &mut rng);
        let slots = result.slots.as_ref().unwrap();
        assert_eq!(slots.len(), 5);
        assert_eq!(result.vacant_slot_count(), 2);
        assert!(slots[3..].iter().all(|s| s.is_vacant() && s.history.is_empty()));
        for history in result.assignments.values() {
            assert_eq!(history.len(), 3);
            let distinct: HashSet<&str> = history.iter().map(|a| a.resource.as_str()).collect();
            assert_eq!(distinct.len(), 3);
        }
    }

    #[test]
    fn test_empty_positions_when_resources_scarce() {
        let participants = test_support::participants(2);
        let resources = test_support::resources(2);
        let input = EngineInput::new(&participants, &resources, 4, MatchingPolicy::default());
        let mut rng = SmallRng::seed_from_u64(9);

        // Ring of 4 seats holds 2 resources: each row meets each resource
        // once and sits out twice.
        let result = VacantRotationEngine::new(4).assign(&input, &mut rng);
        for history in result.assignments.values() {
            assert_eq!(history.len(), 2);
        }
    }

    #[test]
    fn test_conflict_reported() {
        let participants = vec![Participant::new("@a", "A"), Participant::new("@b", "B")];
        let resources = vec![
            Resource::new("R0").with_ng(NgEntry::id("a")),
            Resource::new("R1").with_ng(NgEntry::id("a")),
            Resource::new("R2").with_ng(NgEntry::id("a")),
        ];
        let input = EngineInput::new(
            &participants,
            &resources,
            3,
            MatchingPolicy::exclude(JudgmentMode::IdentifierOnly),
        );
        let mut rng = SmallRng::seed_from_u64(42);

        let result = VacantRotationEngine::new(3).assign(&input, &mut rng);
        assert!(result.conflict);
        assert!(result.is_empty());
    }

    #[test]
    fn test_vacant_row_absorbs_forbidden_resource() {
        // One participant, two seats, two resources, one round: the offset
        // that puts the forbidden resource on the vacant row is valid.
        let participants = vec![Participant::new("@a", "A")];
        let resources = vec![Resource::new("R0").with_ng(NgEntry::name("a")), Resource::new("R1")];
        let input = EngineInput::new(
            &participants,
            &resources,
            1,
            MatchingPolicy::exclude(JudgmentMode::NameOnly),
        );

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = VacantRotationEngine::new(2).assign(&input, &mut rng);
            assert!(!result.conflict);
            assert_eq!(result.assignments_for("@a")[0].resource, "R1");
        }
    }
}
