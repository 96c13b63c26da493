//! Cyclic offset search shared by the rotation shapes.
//!
//! Resources are laid out once on a ring. The row seated at position
//! `row` sees, in round `r`, the ring position
//! `(offset + row - r) mod len`. A single global `offset` is chosen for
//! the whole run, so every row sees a different position each round.
//!
//! # Algorithm
//! 1. For each offset in `0..len`, simulate every seated row for every
//!    round and sum the rank weights of the pairings.
//! 2. Under the exclude policy, an offset is discarded as soon as one
//!    simulated pairing is forbidden.
//! 3. Draw one surviving offset with probability proportional to its score.
//!
//! Empty ring positions score nothing and are never forbidden.
//!
//! # Complexity
//! O(len × rows × rounds).

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use super::sampling::{rank_weight, weighted_index};
use super::EngineInput;
use crate::config::ShapeCode;
use crate::models::{Assignment, MatchingResult, Participant, Resource, Slot};

/// A scored, exclusion-safe offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OffsetCandidate {
    pub offset: usize,
    pub score: u64,
}

/// Ring position seen by `row` in `round` under `offset`.
#[inline]
pub(crate) fn ring_index(len: usize, offset: usize, row: usize, round: usize) -> usize {
    (offset + row % len + len - round % len) % len
}

/// Scores every offset, dropping the ones with a forbidden pairing.
pub(crate) fn score_offsets(
    input: &EngineInput<'_>,
    ring: &[Option<&Resource>],
    seated: &[&Participant],
) -> Vec<OffsetCandidate> {
    let len = ring.len();
    (0..len)
        .filter_map(|offset| score_offset(input, ring, seated, offset))
        .collect()
}

fn score_offset(
    input: &EngineInput<'_>,
    ring: &[Option<&Resource>],
    seated: &[&Participant],
    offset: usize,
) -> Option<OffsetCandidate> {
    let len = ring.len();
    let mut score = 0u64;
    for (row, participant) in seated.iter().enumerate() {
        for round in 0..input.rounds {
            let Some(resource) = ring[ring_index(len, offset, row, round)] else {
                continue;
            };
            if input.is_blocked(participant, resource) {
                return None;
            }
            score += rank_weight(participant.preference_rank(&resource.name));
        }
    }
    Some(OffsetCandidate { offset, score })
}

/// Draws one offset weighted by score.
pub(crate) fn choose_offset<R: Rng>(candidates: &[OffsetCandidate], rng: &mut R) -> Option<usize> {
    let weights: Vec<u64> = candidates.iter().map(|c| c.score).collect();
    weighted_index(&weights, rng).map(|i| candidates[i].offset)
}

/// Per-round assignments for one row under the chosen offset.
pub(crate) fn row_history(
    ring: &[Option<&Resource>],
    participant: &Participant,
    row: usize,
    offset: usize,
    rounds: usize,
) -> Vec<Assignment> {
    let len = ring.len();
    (0..rounds)
        .filter_map(|round| {
            ring[ring_index(len, offset, row, round)].map(|resource| {
                let rank = participant.preference_rank(&resource.name);
                Assignment::new(round, resource.name.clone(), rank)
            })
        })
        .collect()
}

/// Runs a full rotation over `ring`, seating shuffled participants on the
/// first rows and leaving rows up to `slot_count` vacant.
///
/// Returns a conflict result when no offset survives the exclusion check.
pub(crate) fn rotate<R: Rng>(
    input: &EngineInput<'_>,
    ring: &[Option<&Resource>],
    slot_count: usize,
    code: ShapeCode,
    rng: &mut R,
) -> MatchingResult {
    if input.is_empty() || ring.is_empty() {
        return MatchingResult::new();
    }

    let mut seated: Vec<&Participant> = input.participants.iter().collect();
    seated.shuffle(rng);

    let candidates = score_offsets(input, ring, &seated);
    let Some(offset) = choose_offset(&candidates, rng) else {
        warn!(
            shape = %code,
            offsets = ring.len(),
            "every offset contains a forbidden pairing; change resource availability or redraw participants"
        );
        return MatchingResult::conflict();
    };
    debug!(
        shape = %code,
        offset,
        valid_offsets = candidates.len(),
        ring_len = ring.len(),
        "offset chosen"
    );

    let mut result = MatchingResult::new();
    let mut slots = Vec::with_capacity(slot_count.max(seated.len()));
    for (row, participant) in seated.iter().enumerate() {
        let history = row_history(ring, participant, row, offset, input.rounds);
        slots.push(Slot::occupied(row + 1, participant.id.clone(), history.clone()));
        result.assignments.insert(participant.id.clone(), history);
    }
    slots.extend((seated.len()..slot_count).map(|row| Slot::vacant(row + 1, Vec::new())));

    result.with_slots(slots)
}
