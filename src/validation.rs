//! Input validation for matching requests.
//!
//! Engines never fail: they clamp round and slot counts and degrade to
//! partial results. These checks let a caller catch input mistakes
//! before a run instead. Detects:
//! - Duplicate participant identifiers or resource names
//! - More than three preferences, or preferences naming unknown resources
//! - Zero rounds, no available resources
//! - Slot counts below the participant count
//! - Group and table parameters that do not fit the participant count

use std::collections::HashSet;
use thiserror::Error;

use crate::config::{MatchingConfig, Shape};
use crate::models::{Participant, Resource, MAX_PREFERENCES};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two participants share an identifier, or two resources a name.
    DuplicateId,
    /// A participant lists more than three preferences.
    TooManyPreferences,
    /// A preference names a resource that does not exist.
    UnknownPreference,
    /// Round count is zero.
    InvalidRoundCount,
    /// Slot count is smaller than the participant count.
    InsufficientSlots,
    /// No resource is available.
    NoAvailableResources,
    /// Group/table parameters do not match the participant count.
    ShapeMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a matching request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(
    participants: &[Participant],
    resources: &[Resource],
    config: &MatchingConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut resource_names = HashSet::new();
    for r in resources {
        if !resource_names.insert(r.name.trim()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource name: {}", r.name),
            ));
        }
    }

    let mut participant_ids = HashSet::new();
    for p in participants {
        if !participant_ids.insert(p.id.trim()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate participant ID: {}", p.id),
            ));
        }

        if p.preferences.len() > MAX_PREFERENCES {
            errors.push(ValidationError::new(
                ValidationErrorKind::TooManyPreferences,
                format!(
                    "Participant '{}' lists {} preferences (max {MAX_PREFERENCES})",
                    p.id,
                    p.preferences.len()
                ),
            ));
        }

        for (_, wanted) in p.ranked_preferences() {
            if !resource_names.contains(wanted) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPreference,
                    format!("Participant '{}' prefers unknown resource '{wanted}'", p.id),
                ));
            }
        }
    }

    if config.round_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRoundCount,
            "Round count must be at least 1",
        ));
    }

    if !resources.iter().any(|r| r.available) {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoAvailableResources,
            "No resource is available",
        ));
    }

    if let Some(err) = check_shape(&config.shape, participants.len()) {
        errors.push(err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_shape(shape: &Shape, participant_count: usize) -> Option<ValidationError> {
    match *shape {
        Shape::VacantRandom { slot_count } | Shape::VacantRotation { slot_count }
            if slot_count < participant_count =>
        {
            Some(ValidationError::new(
                ValidationErrorKind::InsufficientSlots,
                format!("Slot count {slot_count} is below participant count {participant_count}"),
            ))
        }
        Shape::Group {
            group_count,
            participants_per_group,
        } if group_count.checked_mul(participants_per_group) != Some(participant_count) => {
            Some(ValidationError::new(
                ValidationErrorKind::ShapeMismatch,
                format!(
                    "{group_count} groups of {participants_per_group} do not seat {participant_count} participants"
                ),
            ))
        }
        Shape::Table {
            participants_per_table,
            resources_per_rotation,
        } if participants_per_table == 0 || resources_per_rotation == 0 => {
            Some(ValidationError::new(
                ValidationErrorKind::ShapeMismatch,
                "Table size and resources per rotation must be at least 1",
            ))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participant;

    fn sample_participants() -> Vec<Participant> {
        vec![
            Participant::new("@a", "A").with_preferences(["R1", "R2"]),
            Participant::new("@b", "B").with_preference("R3"),
        ]
    }

    fn sample_resources() -> Vec<Resource> {
        vec![Resource::new("R1"), Resource::new("R2"), Resource::new("R3")]
    }

    #[test]
    fn test_valid_input() {
        let config = MatchingConfig::new(Shape::CompleteRotation, 2);
        assert!(validate_request(&sample_participants(), &sample_resources(), &config).is_ok());
    }

    #[test]
    fn test_duplicate_participant_id() {
        let participants = vec![Participant::new("@a", "A"), Participant::new(" @a", "A2")];
        let config = MatchingConfig::new(Shape::CompleteRandom, 1);

        let errors = validate_request(&participants, &sample_resources(), &config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("participant")));
    }

    #[test]
    fn test_duplicate_resource_name() {
        let resources = vec![Resource::new("R1"), Resource::new("R1")];
        let config = MatchingConfig::new(Shape::CompleteRandom, 1);

        let errors = validate_request(&[], &resources, &config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("resource")));
    }

    #[test]
    fn test_preference_checks() {
        let participants = vec![
            Participant::new("@a", "A").with_preferences(["R1", "R2", "R3", "R1"]),
            Participant::new("@b", "B").with_preferences(["", "Nobody"]),
        ];
        let config = MatchingConfig::new(Shape::CompleteRandom, 1);

        let errors = validate_request(&participants, &sample_resources(), &config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TooManyPreferences));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownPreference && e.message.contains("Nobody")));
    }

    #[test]
    fn test_zero_rounds_and_no_resources() {
        let resources = vec![Resource::new("R1").absent()];
        let config = MatchingConfig::new(Shape::CompleteRandom, 0);

        let errors = validate_request(&[], &resources, &config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidRoundCount));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoAvailableResources));
    }

    #[test]
    fn test_insufficient_slots() {
        let config = MatchingConfig::new(Shape::VacantRandom { slot_count: 1 }, 1);
        let errors =
            validate_request(&sample_participants(), &sample_resources(), &config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InsufficientSlots);
        assert_eq!(errors[0].to_string(), errors[0].message);
    }

    #[test]
    fn test_group_shape_mismatch() {
        let config = MatchingConfig::new(
            Shape::Group {
                group_count: 3,
                participants_per_group: 2,
            },
            1,
        );
        let errors =
            validate_request(&sample_participants(), &sample_resources(), &config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ShapeMismatch));
    }

    #[test]
    fn test_group_shape_overflow_rejected() {
        let config = MatchingConfig::new(
            Shape::Group {
                group_count: usize::MAX,
                participants_per_group: 2,
            },
            1,
        );
        let errors =
            validate_request(&sample_participants(), &sample_resources(), &config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_multiple_errors() {
        let participants = vec![Participant::new("@a", "A"), Participant::new("@a", "A")];
        let config = MatchingConfig::new(Shape::VacantRotation { slot_count: 0 }, 0);

        let errors = validate_request(&participants, &[], &config).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
