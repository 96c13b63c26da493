//! M003: vacant slots, independent draw per round.
//!
//! Seats outnumber participants. Each round, one resource per empty seat
//! is withheld at random before the remaining pool is drafted exactly as
//! in M001.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::draft::draft_rounds;
use super::{collect_histories, EngineInput, MatchingEngine};
use crate::config::ShapeCode;
use crate::models::{MatchingResult, Slot};

/// Per-round weighted random matching over a fixed seat count.
#[derive(Debug, Clone, Copy)]
pub struct VacantRandomEngine {
    /// Total seats; raised to the participant count if smaller.
    pub slot_count: usize,
}

impl VacantRandomEngine {
    /// Creates the engine.
    pub fn new(slot_count: usize) -> Self {
        Self { slot_count }
    }
}

impl MatchingEngine for VacantRandomEngine {
    fn code(&self) -> ShapeCode {
        ShapeCode::M003
    }

    fn assign<R: Rng>(&self, input: &EngineInput<'_>, rng: &mut R) -> MatchingResult {
        if input.is_empty() {
            return MatchingResult::new();
        }
        let participant_count = input.participants.len();
        let slot_count = self.slot_count.max(participant_count);
        let vacant = slot_count - participant_count;
        debug!(
            participants = participant_count,
            resources = input.resources.len(),
            slot_count,
            vacant,
            rounds = input.rounds,
            "M003 draft"
        );

        let histories = draft_rounds(input, vacant, rng);

        let mut seating: Vec<usize> = (0..participant_count).collect();
        seating.shuffle(rng);

        let mut slots: Vec<Slot> = seating
            .iter()
            .enumerate()
            .map(|(seat, &idx)| {
                Slot::occupied(
                    seat + 1,
                    input.participants[idx].id.clone(),
                    histories[idx].clone(),
                )
            })
            .collect();
        slots.extend((participant_count..slot_count).map(|seat| Slot::vacant(seat + 1, Vec::new())));

        MatchingResult {
            assignments: collect_histories(input.participants, &histories),
            slots: Some(slots),
            conflict: false,
        }
    }
}
