//! NG warning pass.
//!
//! Runs after an engine under the warn policy. Every assignment and slot
//! entry is re-judged against the *original* resource list (including
//! resources that were filtered out as unavailable) and flagged.

use std::collections::HashMap;

use crate::config::MatchingPolicy;
use crate::exclusion::{exclusion_reason, is_excluded};
use crate::models::{Assignment, MatchingResult, Participant, Resource};

/// Flags forbidden pairings in `result` when the policy is warn.
///
/// Under the exclude policy the result is returned unchanged, since the
/// engines already avoided every forbidden pairing.
pub fn attach_warnings(
    mut result: MatchingResult,
    participants: &[Participant],
    resources: &[Resource],
    policy: MatchingPolicy,
) -> MatchingResult {
    if policy.excludes() {
        return result;
    }

    let by_id: HashMap<&str, &Participant> =
        participants.iter().map(|p| (p.id.as_str(), p)).collect();
    // Duplicate names: the first available resource wins, else the first listed.
    let mut by_name: HashMap<&str, &Resource> = HashMap::new();
    for r in resources {
        by_name
            .entry(r.name.as_str())
            .and_modify(|kept| {
                if !kept.available && r.available {
                    *kept = r;
                }
            })
            .or_insert(r);
    }

    let flag = |participant: Option<&Participant>, assignment: &mut Assignment| {
        let excluded = match (participant, by_name.get(assignment.resource.as_str())) {
            (Some(p), Some(r)) => is_excluded(p, r, policy.judgment),
            _ => false,
        };
        assignment.ng_warning = excluded;
        assignment.ng_reason = excluded.then(|| exclusion_reason(&assignment.resource));
    };

    for (id, history) in result.assignments.iter_mut() {
        let participant = by_id.get(id.as_str()).copied();
        for assignment in history.iter_mut() {
            flag(participant, assignment);
        }
    }

    if let Some(slots) = result.slots.as_mut() {
        for slot in slots.iter_mut() {
            let participant = slot
                .participant
                .as_deref()
                .and_then(|id| by_id.get(id).copied());
            for assignment in slot.history.iter_mut() {
                flag(participant, assignment);
            }
        }
    }

    result
}
