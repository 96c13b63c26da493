//! M001: complete capacity, independent draw per round.
//!
//! Every participant receives one resource per round as long as the pool
//! holds at least as many resources as participants.

use rand::Rng;
use tracing::debug;

use super::draft::draft_rounds;
use super::{collect_histories, EngineInput, MatchingEngine};
use crate::config::ShapeCode;
use crate::models::MatchingResult;

/// Per-round weighted random matching without vacant seats.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_matching::config::MatchingPolicy;
/// use u_matching::engines::{CompleteRandomEngine, EngineInput, MatchingEngine};
/// use u_matching::models::{Participant, Resource};
///
/// let participants = vec![Participant::new("@a", "A").with_preference("Rin")];
/// let resources = vec![Resource::new("Rin"), Resource::new("Mio")];
/// let input = EngineInput::new(&participants, &resources, 2, MatchingPolicy::default());
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let result = CompleteRandomEngine.assign(&input, &mut rng);
/// assert_eq!(result.assignments_for("@a").len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CompleteRandomEngine;

impl MatchingEngine for CompleteRandomEngine {
    fn code(&self) -> ShapeCode {
        ShapeCode::M001
    }

    fn assign<R: Rng>(&self, input: &EngineInput<'_>, rng: &mut R) -> MatchingResult {
        if input.is_empty() {
            return MatchingResult::new();
        }
        debug!(
            participants = input.participants.len(),
            resources = input.resources.len(),
            rounds = input.rounds,
            "M001 draft"
        );

        let histories = draft_rounds(input, 0, rng);
        MatchingResult {
            assignments: collect_histories(input.participants, &histories),
            slots: None,
            conflict: false,
        }
    }
}
