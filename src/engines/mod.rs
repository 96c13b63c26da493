//! Matching engines, one per shape.
//!
//! Each engine receives the participants, the *available* resources, the
//! round count and the NG policy, and returns a complete
//! [`MatchingResult`]. Engines are synchronous and stateless; all pools
//! are local copies of the inputs.
//!
//! # Engines
//!
//! | Engine | Code | Strategy |
//! |--------|------|----------|
//! | [`CompleteRandomEngine`] | M001 | Per-round weighted draw |
//! | [`CompleteRotationEngine`] | M002 | Global cyclic offset search |
//! | [`VacantRandomEngine`] | M003 | Per-round draw with withheld seats |
//! | [`VacantRotationEngine`] | M004 | Offset search over all seats |
//! | [`GroupEngine`] | M005 | Not yet implemented |
//! | [`TableEngine`] | M006 | Not yet implemented |
//!
//! # Randomness
//! Engines take any [`Rng`]; pass a seeded generator for reproducible runs.

mod complete_random;
mod complete_rotation;
mod draft;
mod placeholder;
mod rotation;
pub mod sampling;
mod vacant_random;
mod vacant_rotation;

pub use complete_random::CompleteRandomEngine;
pub use complete_rotation::CompleteRotationEngine;
pub use placeholder::{GroupEngine, TableEngine};
pub use vacant_random::VacantRandomEngine;
pub use vacant_rotation::VacantRotationEngine;

use rand::Rng;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::config::{MatchingPolicy, ShapeCode};
use crate::exclusion::is_excluded;
use crate::models::{Assignment, MatchingResult, Participant, Resource};

/// Inputs shared by every engine.
#[derive(Debug, Clone)]
pub struct EngineInput<'a> {
    /// Participants in caller order.
    pub participants: &'a [Participant],
    /// Available resources only.
    pub resources: Vec<&'a Resource>,
    /// Round count (at least 1).
    pub rounds: usize,
    /// NG settings.
    pub policy: MatchingPolicy,
}

impl<'a> EngineInput<'a> {
    /// Builds engine input, keeping only available resources.
    pub fn new(
        participants: &'a [Participant],
        resources: &'a [Resource],
        rounds: usize,
        policy: MatchingPolicy,
    ) -> Self {
        Self {
            participants,
            resources: resources.iter().filter(|r| r.available).collect(),
            rounds: rounds.max(1),
            policy,
        }
    }

    /// Whether the pairing must be avoided by the engine.
    ///
    /// Always `false` under the warn policy.
    #[inline]
    pub fn is_blocked(&self, participant: &Participant, resource: &Resource) -> bool {
        self.policy.excludes() && is_excluded(participant, resource, self.policy.judgment)
    }

    /// Whether there is nothing to match.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty() || self.resources.is_empty()
    }
}

/// A matching strategy for one shape.
pub trait MatchingEngine: Debug {
    /// Shape code served by this engine.
    fn code(&self) -> ShapeCode;

    /// Produces assignments for every participant.
    fn assign<R: Rng>(&self, input: &EngineInput<'_>, rng: &mut R) -> MatchingResult;
}

/// Collects per-participant histories into the result map.
fn collect_histories(
    participants: &[Participant],
    histories: &[Vec<Assignment>],
) -> HashMap<String, Vec<Assignment>> {
    participants
        .iter()
        .zip(histories)
        .map(|(p, h)| (p.id.clone(), h.clone()))
        .collect()
}
