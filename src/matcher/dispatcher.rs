//! Shape dispatcher.
//!
//! # Algorithm
//!
//! 1. Keep only available resources.
//! 2. Run exactly one engine, selected by the configured [`Shape`].
//! 3. Under the warn policy, flag forbidden pairings against the original
//!    resource list ([`attach_warnings`]).
//!
//! Steps 2 and 3 are separate pure functions ([`Matcher::compute`] and
//! [`attach_warnings`]); [`Matcher::run`] composes them.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::warnings::attach_warnings;
use crate::config::{MatchingConfig, Shape};
use crate::engines::{
    CompleteRandomEngine, CompleteRotationEngine, EngineInput, GroupEngine, MatchingEngine,
    TableEngine, VacantRandomEngine, VacantRotationEngine,
};
use crate::models::{MatchingResult, Participant, Resource};

/// Input container for a matching run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingRequest {
    /// Participants (lottery winners).
    pub participants: Vec<Participant>,
    /// All resources, available or not.
    pub resources: Vec<Resource>,
    /// Shape, rounds and policy.
    pub config: MatchingConfig,
}

impl MatchingRequest {
    /// Creates a new request.
    pub fn new(
        participants: Vec<Participant>,
        resources: Vec<Resource>,
        config: MatchingConfig,
    ) -> Self {
        Self {
            participants,
            resources,
            config,
        }
    }
}

/// Runs the engine selected by a [`MatchingConfig`].
///
/// # Example
///
/// ```
/// use u_matching::config::{MatchingConfig, Shape};
/// use u_matching::matcher::Matcher;
/// use u_matching::models::{Participant, Resource};
///
/// let participants = vec![
///     Participant::new("@a", "A").with_preference("Rin"),
///     Participant::new("@b", "B"),
/// ];
/// let resources = vec![Resource::new("Rin"), Resource::new("Mio")];
///
/// let matcher = Matcher::new(MatchingConfig::new(Shape::CompleteRotation, 2));
/// let result = matcher.run(&participants, &resources);
/// assert_eq!(result.assignments_for("@a").len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    config: MatchingConfig,
}

impl Matcher {
    /// Creates a matcher.
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Runs with an unseeded thread-local generator.
    pub fn run(&self, participants: &[Participant], resources: &[Resource]) -> MatchingResult {
        self.run_with_rng(participants, resources, &mut rand::rng())
    }

    /// Runs with a caller-supplied generator.
    pub fn run_with_rng<R: Rng>(
        &self,
        participants: &[Participant],
        resources: &[Resource],
        rng: &mut R,
    ) -> MatchingResult {
        let result = self.compute(participants, resources, rng);
        let result = attach_warnings(result, participants, resources, self.config.policy);
        info!(
            shape = %self.config.shape.code(),
            participants = participants.len(),
            assigned = result.assignments.values().filter(|a| !a.is_empty()).count(),
            warnings = result.warning_count(),
            conflict = result.conflict,
            "matching finished"
        );
        result
    }

    /// Runs a request, using the request's own configuration.
    pub fn run_request(request: &MatchingRequest) -> MatchingResult {
        Self::new(request.config).run(&request.participants, &request.resources)
    }

    /// Engine step only: no warning pass.
    pub fn compute<R: Rng>(
        &self,
        participants: &[Participant],
        resources: &[Resource],
        rng: &mut R,
    ) -> MatchingResult {
        let input = EngineInput::new(
            participants,
            resources,
            self.config.rounds(),
            self.config.policy,
        );
        debug!(
            shape = %self.config.shape.code(),
            participants = participants.len(),
            available = input.resources.len(),
            total = resources.len(),
            rounds = input.rounds,
            judgment = %self.config.policy.judgment,
            conflict_policy = %self.config.policy.conflict,
            "dispatching"
        );
        if input.is_empty() {
            return MatchingResult::new();
        }

        match self.config.shape {
            Shape::CompleteRandom => CompleteRandomEngine.assign(&input, rng),
            Shape::CompleteRotation => CompleteRotationEngine.assign(&input, rng),
            Shape::VacantRandom { slot_count } => {
                VacantRandomEngine::new(slot_count).assign(&input, rng)
            }
            Shape::VacantRotation { slot_count } => {
                VacantRotationEngine::new(slot_count).assign(&input, rng)
            }
            Shape::Group {
                group_count,
                participants_per_group,
            } => GroupEngine {
                group_count,
                participants_per_group,
            }
            .assign(&input, rng),
            Shape::Table {
                participants_per_table,
                resources_per_rotation,
            } => TableEngine {
                participants_per_table,
                resources_per_rotation,
            }
            .assign(&input, rng),
        }
    }
}
