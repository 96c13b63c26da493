//! Shapes declared in the configuration surface but not implemented yet.
//!
//! Both engines accept the same inputs as the implemented shapes and
//! always return an empty, non-conflicting result. A real implementation
//! replaces the body of `assign` without touching the dispatcher.

use rand::Rng;
use tracing::warn;

use super::{EngineInput, MatchingEngine};
use crate::config::ShapeCode;
use crate::models::MatchingResult;

/// M005: several participants share one resource unit per round.
#[derive(Debug, Clone, Copy)]
pub struct GroupEngine {
    /// Number of groups.
    pub group_count: usize,
    /// Participants per group.
    pub participants_per_group: usize,
}

/// M006: tables of several participants share a rotating unit of resources.
#[derive(Debug, Clone, Copy)]
pub struct TableEngine {
    /// Seats per table.
    pub participants_per_table: usize,
    /// Resources moving together as one unit.
    pub resources_per_rotation: usize,
}

impl MatchingEngine for GroupEngine {
    fn code(&self) -> ShapeCode {
        ShapeCode::M005
    }

    fn assign<R: Rng>(&self, input: &EngineInput<'_>, _rng: &mut R) -> MatchingResult {
        warn!(
            shape = %self.code(),
            participants = input.participants.len(),
            group_count = self.group_count,
            participants_per_group = self.participants_per_group,
            "group matching is not implemented; returning an empty result"
        );
        MatchingResult::new()
    }
}

impl MatchingEngine for TableEngine {
    fn code(&self) -> ShapeCode {
        ShapeCode::M006
    }

    fn assign<R: Rng>(&self, input: &EngineInput<'_>, _rng: &mut R) -> MatchingResult {
        warn!(
            shape = %self.code(),
            participants = input.participants.len(),
            participants_per_table = self.participants_per_table,
            resources_per_rotation = self.resources_per_rotation,
            "table matching is not implemented; returning an empty result"
        );
        MatchingResult::new()
    }
}
