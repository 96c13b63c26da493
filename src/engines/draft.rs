//! Per-round weighted draft shared by the random shapes.
//!
//! # Algorithm (per round)
//!
//! 1. Shuffle the resource pool; withhold the first `withheld` resources
//!    when the pool is larger than that (vacant seats).
//! 2. Shuffle participants, then move those who have not yet received a
//!    top-three preference to the front.
//! 3. For each participant, draw among preferred resources still in the
//!    pool (not blocked, not seen before) with rank weights.
//! 4. Otherwise pick uniformly among the remaining eligible resources,
//!    preferring ones the participant has not seen; repeats are a last
//!    resort.
//! 5. Remove the chosen resource from the pool.
//!
//! A participant left without an eligible resource gets no assignment
//! for that round.
//!
//! # Complexity
//! O(rounds × participants × resources).

use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rand::Rng;

use super::sampling::{rank_weight, weighted_index};
use super::EngineInput;
use crate::models::{Assignment, Participant, Resource};

/// Runs every round and returns histories indexed like `input.participants`.
pub(crate) fn draft_rounds<R: Rng>(
    input: &EngineInput<'_>,
    withheld: usize,
    rng: &mut R,
) -> Vec<Vec<Assignment>> {
    let mut histories: Vec<Vec<Assignment>> = vec![Vec::new(); input.participants.len()];
    if input.is_empty() {
        return histories;
    }

    for round in 0..input.rounds {
        let mut pool: Vec<&Resource> = input.resources.clone();
        pool.shuffle(rng);
        if withheld > 0 && pool.len() > withheld {
            pool.drain(..withheld);
        }

        for idx in round_order(&histories, rng) {
            let participant = &input.participants[idx];
            let history = &histories[idx];

            let picked = pick_preferred(input, participant, history, &pool, rng)
                .or_else(|| pick_fallback(input, participant, history, &pool, rng));

            if let Some(pos) = picked {
                let resource = pool.remove(pos);
                let rank = participant.preference_rank(&resource.name);
                histories[idx].push(Assignment::new(round, resource.name.clone(), rank));
            }
        }
    }

    histories
}

/// Shuffled participant indices, those still without a preferred
/// resource first.
fn round_order<R: Rng>(histories: &[Vec<Assignment>], rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..histories.len()).collect();
    order.shuffle(rng);
    // Stable sort keeps the shuffle within each group.
    order.sort_by_key(|&i| histories[i].iter().any(Assignment::is_preferred));
    order
}

fn seen(history: &[Assignment], resource: &Resource) -> bool {
    history.iter().any(|a| a.resource == resource.name)
}

/// Weighted draw among top-three preferences; returns a pool position.
fn pick_preferred<R: Rng>(
    input: &EngineInput<'_>,
    participant: &Participant,
    history: &[Assignment],
    pool: &[&Resource],
    rng: &mut R,
) -> Option<usize> {
    let mut positions = Vec::new();
    let mut weights = Vec::new();

    for (rank, wanted) in participant.ranked_preferences() {
        let found = pool.iter().position(|r| {
            r.name.trim() == wanted && !input.is_blocked(participant, r) && !seen(history, r)
        });
        if let Some(pos) = found {
            positions.push(pos);
            weights.push(rank_weight(rank));
        }
    }

    weighted_index(&weights, rng).map(|i| positions[i])
}

/// Uniform draw among eligible resources; returns a pool position.
fn pick_fallback<R: Rng>(
    input: &EngineInput<'_>,
    participant: &Participant,
    history: &[Assignment],
    pool: &[&Resource],
    rng: &mut R,
) -> Option<usize> {
    let eligible: Vec<usize> = (0..pool.len())
        .filter(|&i| !input.is_blocked(participant, pool[i]))
        .collect();
    let fresh: Vec<usize> = eligible
        .iter()
        .copied()
        .filter(|&i| !seen(history, pool[i]))
        .collect();

    if fresh.is_empty() {
        eligible.choose(rng).copied()
    } else {
        fresh.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JudgmentMode, MatchingPolicy};
    use crate::engines::test_support;
    use crate::models::NgEntry;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_every_participant_each_round() {
        let participants = test_support::participants(5);
        let resources = test_support::resources(5);
        let input = EngineInput::new(&participants, &resources, 3, MatchingPolicy::default());
        let mut rng = SmallRng::seed_from_u64(42);

        let histories = draft_rounds(&input, 0, &mut rng);
        for history in &histories {
            assert_eq!(history.len(), 3);
            let rounds: Vec<usize> = history.iter().map(|a| a.round).collect();
            assert_eq!(rounds, vec![0, 1, 2]);
        }
        for round in 0..3 {
            let used: HashSet<&str> = histories
                .iter()
                .flat_map(|h| h.iter().filter(|a| a.round == round))
                .map(|a| a.resource.as_str())
                .collect();
            assert_eq!(used.len(), 5, "a resource serves one participant per round");
        }
    }

    #[test]
    fn test_history_avoids_repeats() {
        let participants = test_support::participants(1);
        let resources = test_support::resources(5);
        let input = EngineInput::new(&participants, &resources, 4, MatchingPolicy::default());
        let mut rng = SmallRng::seed_from_u64(8);

        let histories = draft_rounds(&input, 0, &mut rng);
        let distinct: HashSet<&str> = histories[0].iter().map(|a| a.resource.as_str()).collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn test_repeats_allowed_when_unavoidable() {
        let participants = test_support::participants(1);
        let resources = test_support::resources(2);
        let input = EngineInput::new(&participants, &resources, 4, MatchingPolicy::default());
        let mut rng = SmallRng::seed_from_u64(1);

        let histories = draft_rounds(&input, 0, &mut rng);
        assert_eq!(histories[0].len(), 4);
    }

    #[test]
    fn test_scarcity_leaves_participant_unassigned() {
        let participants = test_support::participants(3);
        let resources = test_support::resources(2);
        let input = EngineInput::new(&participants, &resources, 1, MatchingPolicy::default());
        let mut rng = SmallRng::seed_from_u64(3);

        let histories = draft_rounds(&input, 0, &mut rng);
        let assigned = histories.iter().filter(|h| !h.is_empty()).count();
        assert_eq!(assigned, 2);
    }

    #[test]
    fn test_blocked_resource_never_drawn() {
        let participants = vec![Participant::new("@bob", "Bob").with_preference("R0")];
        let resources = vec![
            Resource::new("R0").with_ng(NgEntry::id("bob")),
            Resource::new("R1"),
        ];
        let policy = MatchingPolicy::exclude(JudgmentMode::Either);
        let input = EngineInput::new(&participants, &resources, 3, policy);
        let mut rng = SmallRng::seed_from_u64(9);

        let histories = draft_rounds(&input, 0, &mut rng);
        assert!(histories[0].iter().all(|a| a.resource == "R1"));
        assert_eq!(histories[0].len(), 3);
    }

    #[test]
    fn test_preferred_resource_drawn_first() {
        let participants = vec![Participant::new("@a", "A").with_preference("R3")];
        let resources = test_support::resources(6);
        let input = EngineInput::new(&participants, &resources, 1, MatchingPolicy::default());
        let mut rng = SmallRng::seed_from_u64(11);

        let histories = draft_rounds(&input, 0, &mut rng);
        assert_eq!(histories[0][0].resource, "R3");
        assert_eq!(histories[0][0].rank, 1);
    }

    #[test]
    fn test_unpreferred_participants_go_first() {
        let mut histories = vec![Vec::new(), Vec::new()];
        histories[0].push(Assignment::new(0, "R0", 1));
        histories[1].push(Assignment::new(0, "R1", 0));
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(round_order(&histories, &mut rng), vec![1, 0]);
        }
    }

    #[test]
    fn test_withheld_resources() {
        let participants = test_support::participants(2);
        let resources = test_support::resources(5);
        let input = EngineInput::new(&participants, &resources, 1, MatchingPolicy::default());
        let mut rng = SmallRng::seed_from_u64(2);

        // Pool of 5 minus 3 withheld leaves exactly enough for 2.
        let histories = draft_rounds(&input, 3, &mut rng);
        assert!(histories.iter().all(|h| h.len() == 1));
    }
}
