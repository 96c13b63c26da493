//! Matching result model.
//!
//! A result maps each participant to one assignment per round. Slot-based
//! shapes also expose the full ordered seat list, including vacant seats.
//! A structural conflict (no exclusion-safe arrangement) is reported as a
//! flag on the result, never as an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A participant-resource pairing for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Round index (0-based).
    pub round: usize,
    /// Name of the assigned resource.
    pub resource: String,
    /// Preference rank (1..=3), or 0 when not a top-three preference.
    pub rank: u8,
    /// Set by the warning pass when the pairing is on the NG list.
    pub ng_warning: bool,
    /// Human-readable warning reason (warning pass only).
    pub ng_reason: Option<String>,
}

/// A numbered seat, occupied by a participant or vacant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Seat number (1-based).
    pub number: usize,
    /// Seated participant identifier; `None` = vacant.
    pub participant: Option<String>,
    /// Per-round assignments seen from this seat.
    pub history: Vec<Assignment>,
}

/// Output of one matching run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingResult {
    /// Participant identifier → assignments in round order.
    pub assignments: HashMap<String, Vec<Assignment>>,
    /// Full ordered slot list (slot-based shapes only).
    pub slots: Option<Vec<Slot>>,
    /// No arrangement satisfies the exclusion policy.
    pub conflict: bool,
}

impl Assignment {
    /// Creates an assignment without warning data.
    pub fn new(round: usize, resource: impl Into<String>, rank: u8) -> Self {
        Self {
            round,
            resource: resource.into(),
            rank,
            ng_warning: false,
            ng_reason: None,
        }
    }

    /// Whether the resource was one of the participant's top three.
    #[inline]
    pub fn is_preferred(&self) -> bool {
        (1..=3).contains(&self.rank)
    }
}

impl Slot {
    /// Creates a seat holding a participant.
    pub fn occupied(number: usize, participant: impl Into<String>, history: Vec<Assignment>) -> Self {
        Self {
            number,
            participant: Some(participant.into()),
            history,
        }
    }

    /// Creates a vacant seat.
    pub fn vacant(number: usize, history: Vec<Assignment>) -> Self {
        Self {
            number,
            participant: None,
            history,
        }
    }

    /// Whether nobody sits here.
    #[inline]
    pub fn is_vacant(&self) -> bool {
        self.participant.is_none()
    }
}

impl MatchingResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty result flagged as a structural conflict.
    pub fn conflict() -> Self {
        Self {
            conflict: true,
            ..Self::default()
        }
    }

    /// Attaches the slot list.
    pub fn with_slots(mut self, slots: Vec<Slot>) -> Self {
        self.slots = Some(slots);
        self
    }

    /// Whether no assignment was produced.
    pub fn is_empty(&self) -> bool {
        self.assignments.values().all(Vec::is_empty)
    }

    /// Assignments for a participant.
    pub fn assignments_for(&self, participant_id: &str) -> &[Assignment] {
        self.assignments
            .get(participant_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All (participant id, assignment) pairs for a given round.
    pub fn round(&self, round: usize) -> Vec<(&str, &Assignment)> {
        self.assignments
            .iter()
            .flat_map(|(id, list)| {
                list.iter()
                    .filter(move |a| a.round == round)
                    .map(move |a| (id.as_str(), a))
            })
            .collect()
    }

    /// Number of assignments carrying an NG warning.
    pub fn warning_count(&self) -> usize {
        self.assignments
            .values()
            .flatten()
            .filter(|a| a.ng_warning)
            .count()
    }

    /// Number of vacant slots (0 when no slot list is present).
    pub fn vacant_slot_count(&self) -> usize {
        self.slots
            .as_ref()
            .map(|s| s.iter().filter(|slot| slot.is_vacant()).count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> MatchingResult {
        let mut result = MatchingResult::new();
        result.assignments.insert(
            "a".into(),
            vec![Assignment::new(0, "Rin", 1), Assignment::new(1, "Mio", 0)],
        );
        result
            .assignments
            .insert("b".into(), vec![Assignment::new(0, "Mio", 2)]);
        result.with_slots(vec![
            Slot::occupied(1, "a", Vec::new()),
            Slot::occupied(2, "b", Vec::new()),
            Slot::vacant(3, Vec::new()),
        ])
    }

    #[test]
    fn test_assignment_preferred() {
        assert!(Assignment::new(0, "Rin", 1).is_preferred());
        assert!(Assignment::new(0, "Rin", 3).is_preferred());
        assert!(!Assignment::new(0, "Rin", 0).is_preferred());
    }

    #[test]
    fn test_result_queries() {
        let result = sample_result();
        assert_eq!(result.assignments_for("a").len(), 2);
        assert!(result.assignments_for("zzz").is_empty());
        assert_eq!(result.round(0).len(), 2);
        assert_eq!(result.round(1).len(), 1);
        assert_eq!(result.vacant_slot_count(), 1);
        assert_eq!(result.warning_count(), 0);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_conflict_result() {
        let result = MatchingResult::conflict();
        assert!(result.conflict);
        assert!(result.is_empty());
        assert!(result.slots.is_none());
    }
}
