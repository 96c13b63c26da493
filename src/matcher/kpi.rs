//! Matching quality metrics.
//!
//! Summarizes a finished run for display next to the result.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Rank counts | Assignments per preference rank (0..=3) |
//! | Preferred rate | Share of assignments at rank 1..=3 |
//! | Satisfied rate | Share of participants with at least one preferred assignment |
//! | Coverage | Share of expected participant-rounds actually assigned |
//! | Warnings | Assignments flagged by the warning pass |

use crate::models::{MatchingResult, Participant};

/// Matching performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingKpi {
    /// Assignments per rank; index 0 = not preferred.
    pub rank_counts: [usize; 4],
    /// Total assignments.
    pub assignment_count: usize,
    /// Fraction of assignments at rank 1..=3 (0.0..1.0).
    pub preferred_rate: f64,
    /// Fraction of participants who got at least one preference (0.0..1.0).
    pub satisfied_rate: f64,
    /// Assigned participant-rounds over `participants × rounds` (0.0..1.0).
    pub coverage: f64,
    /// Assignments carrying an NG warning.
    pub warning_count: usize,
    /// Vacant slots in the slot list.
    pub vacant_slots: usize,
    /// Whether the run ended in a structural conflict.
    pub conflict: bool,
}

impl MatchingKpi {
    /// Computes KPIs from a result and its participants.
    ///
    /// # Arguments
    /// * `result` - The finished matching.
    /// * `participants` - Run participants (for satisfaction and coverage).
    /// * `rounds` - Round count the run was configured with.
    pub fn calculate(result: &MatchingResult, participants: &[Participant], rounds: usize) -> Self {
        let mut rank_counts = [0usize; 4];
        for assignment in result.assignments.values().flatten() {
            rank_counts[(assignment.rank as usize).min(3)] += 1;
        }
        let assignment_count: usize = rank_counts.iter().sum();
        let preferred: usize = rank_counts[1..].iter().sum();

        let satisfied = participants
            .iter()
            .filter(|p| {
                result
                    .assignments_for(&p.id)
                    .iter()
                    .any(|a| a.is_preferred())
            })
            .count();

        let expected = participants.len() * rounds.max(1);

        Self {
            rank_counts,
            assignment_count,
            preferred_rate: ratio(preferred, assignment_count),
            satisfied_rate: ratio(satisfied, participants.len()),
            coverage: ratio(assignment_count, expected),
            warning_count: result.warning_count(),
            vacant_slots: result.vacant_slot_count(),
            conflict: result.conflict,
        }
    }

    /// Whether every expected participant-round received a resource.
    pub fn is_complete(&self) -> bool {
        !self.conflict && (self.coverage - 1.0).abs() < 1e-10
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Slot};

    #[test]
    fn test_kpi_basic() {
        let participants = vec![
            Participant::new("@a", "A"),
            Participant::new("@b", "B"),
        ];
        let mut result = MatchingResult::new();
        result.assignments.insert(
            "@a".into(),
            vec![Assignment::new(0, "R0", 1), Assignment::new(1, "R1", 0)],
        );
        let mut flagged = Assignment::new(0, "R1", 0);
        flagged.ng_warning = true;
        result
            .assignments
            .insert("@b".into(), vec![flagged, Assignment::new(1, "R0", 3)]);
        let result = result.with_slots(vec![
            Slot::occupied(1, "@a", Vec::new()),
            Slot::occupied(2, "@b", Vec::new()),
            Slot::vacant(3, Vec::new()),
        ]);

        let kpi = MatchingKpi::calculate(&result, &participants, 2);
        assert_eq!(kpi.rank_counts, [2, 1, 0, 1]);
        assert_eq!(kpi.assignment_count, 4);
        assert!((kpi.preferred_rate - 0.5).abs() < 1e-10);
        assert!((kpi.satisfied_rate - 1.0).abs() < 1e-10);
        assert!((kpi.coverage - 1.0).abs() < 1e-10);
        assert_eq!(kpi.warning_count, 1);
        assert_eq!(kpi.vacant_slots, 1);
        assert!(kpi.is_complete());
    }

    #[test]
    fn test_kpi_conflict() {
        let participants = vec![Participant::new("@a", "A")];
        let kpi = MatchingKpi::calculate(&MatchingResult::conflict(), &participants, 3);
        assert_eq!(kpi.assignment_count, 0);
        assert!((kpi.coverage - 0.0).abs() < 1e-10);
        assert!(kpi.conflict);
        assert!(!kpi.is_complete());
    }

    #[test]
    fn test_kpi_empty_inputs() {
        let kpi = MatchingKpi::calculate(&MatchingResult::new(), &[], 1);
        assert!((kpi.satisfied_rate - 0.0).abs() < 1e-10);
        assert!((kpi.preferred_rate - 0.0).abs() < 1e-10);
    }
}
