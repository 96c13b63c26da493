//! Run and policy configuration.
//!
//! A run is described by a [`Shape`] (which engine, with its parameters),
//! a round count, and a [`MatchingPolicy`] (how NG lists are judged and
//! what to do with a forbidden pairing).
//!
//! # Shape codes
//!
//! | Code | Shape | Capacity |
//! |------|-------|----------|
//! | M001 | Per-round random | Complete |
//! | M002 | Cyclic rotation | Complete |
//! | M003 | Per-round random | Vacant slots |
//! | M004 | Cyclic rotation | Vacant slots |
//! | M005 | Groups sharing a resource | Placeholder |
//! | M006 | Multi-occupant tables | Placeholder |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Configuration parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Shape code outside M001..M006.
    #[error("unknown shape code: {0}")]
    UnknownShape(String),
    /// Judgment mode string not recognized.
    #[error("unknown judgment mode: {0} (expected name-only, identifier-only or either)")]
    UnknownJudgmentMode(String),
    /// Conflict policy string not recognized.
    #[error("unknown conflict policy: {0} (expected exclude or warn)")]
    UnknownConflictPolicy(String),
}

/// Which NG entry fields are compared against a participant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JudgmentMode {
    /// Display name only.
    NameOnly,
    /// External identifier only.
    IdentifierOnly,
    /// Either field matching is enough.
    #[default]
    Either,
}

/// What happens to a forbidden pairing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Engines never produce forbidden pairings.
    #[default]
    Exclude,
    /// Engines ignore NG lists; pairings are flagged afterwards.
    Warn,
}

/// NG judgment settings shared by every engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingPolicy {
    /// Field comparison mode.
    #[serde(default)]
    pub judgment: JudgmentMode,
    /// Exclude or warn.
    #[serde(default)]
    pub conflict: ConflictPolicy,
}

/// Matching shape with its shape-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Shape {
    /// Every participant gets a resource each round, drawn independently.
    CompleteRandom,
    /// Every participant gets a resource each round via one global offset.
    CompleteRotation,
    /// Fixed slot count; vacant seats withhold resources each round.
    VacantRandom {
        /// Total seats (raised to the participant count if smaller).
        slot_count: usize,
    },
    /// Fixed slot count; resources rotate past every seat.
    VacantRotation {
        /// Total seats (raised to the participant count if smaller).
        slot_count: usize,
    },
    /// Not yet implemented: participants grouped under one shared resource.
    ///
    /// Always yields an empty result.
    Group {
        /// Number of groups.
        group_count: usize,
        /// Participants per group.
        participants_per_group: usize,
    },
    /// Not yet implemented: tables sharing a rotating unit of resources.
    ///
    /// Always yields an empty result.
    Table {
        /// Seats per table.
        participants_per_table: usize,
        /// Resources that move together as one unit.
        resources_per_rotation: usize,
    },
}

/// Bare shape code, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeCode {
    /// Per-round random, complete capacity.
    M001,
    /// Cyclic rotation, complete capacity.
    M002,
    /// Per-round random, vacant slots.
    M003,
    /// Cyclic rotation, vacant slots.
    M004,
    /// Groups sharing a resource (placeholder).
    M005,
    /// Multi-occupant tables (placeholder).
    M006,
}

/// Complete run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Engine selection.
    pub shape: Shape,
    /// Number of rounds (0 is treated as 1).
    #[serde(default = "default_round_count")]
    pub round_count: usize,
    /// NG settings.
    #[serde(default)]
    pub policy: MatchingPolicy,
}

fn default_round_count() -> usize {
    1
}

impl JudgmentMode {
    /// Configuration string.
    pub fn as_str(&self) -> &'static str {
        match self {
            JudgmentMode::NameOnly => "name-only",
            JudgmentMode::IdentifierOnly => "identifier-only",
            JudgmentMode::Either => "either",
        }
    }
}

impl FromStr for JudgmentMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name-only" | "name" | "username" => Ok(JudgmentMode::NameOnly),
            "identifier-only" | "identifier" | "id" | "accountid" => {
                Ok(JudgmentMode::IdentifierOnly)
            }
            "either" => Ok(JudgmentMode::Either),
            _ => Err(ConfigError::UnknownJudgmentMode(s.to_string())),
        }
    }
}

impl fmt::Display for JudgmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConflictPolicy {
    /// Configuration string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictPolicy::Exclude => "exclude",
            ConflictPolicy::Warn => "warn",
        }
    }
}

impl FromStr for ConflictPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclude" => Ok(ConflictPolicy::Exclude),
            "warn" => Ok(ConflictPolicy::Warn),
            _ => Err(ConfigError::UnknownConflictPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MatchingPolicy {
    /// Creates a policy.
    pub fn new(judgment: JudgmentMode, conflict: ConflictPolicy) -> Self {
        Self { judgment, conflict }
    }

    /// Exclude policy with the given judgment mode.
    pub fn exclude(judgment: JudgmentMode) -> Self {
        Self::new(judgment, ConflictPolicy::Exclude)
    }

    /// Warn policy with the given judgment mode.
    pub fn warn(judgment: JudgmentMode) -> Self {
        Self::new(judgment, ConflictPolicy::Warn)
    }

    /// Whether engines must avoid forbidden pairings.
    #[inline]
    pub fn excludes(&self) -> bool {
        self.conflict == ConflictPolicy::Exclude
    }
}

impl Shape {
    /// Shape code.
    pub fn code(&self) -> ShapeCode {
        match self {
            Shape::CompleteRandom => ShapeCode::M001,
            Shape::CompleteRotation => ShapeCode::M002,
            Shape::VacantRandom { .. } => ShapeCode::M003,
            Shape::VacantRotation { .. } => ShapeCode::M004,
            Shape::Group { .. } => ShapeCode::M005,
            Shape::Table { .. } => ShapeCode::M006,
        }
    }

    /// Slot count for vacant shapes.
    pub fn slot_count(&self) -> Option<usize> {
        match self {
            Shape::VacantRandom { slot_count } | Shape::VacantRotation { slot_count } => {
                Some(*slot_count)
            }
            _ => None,
        }
    }

    /// Whether the shape has an engine behind it.
    pub fn is_implemented(&self) -> bool {
        !matches!(self, Shape::Group { .. } | Shape::Table { .. })
    }
}

impl ShapeCode {
    /// All codes in order.
    pub const ALL: [ShapeCode; 6] = [
        ShapeCode::M001,
        ShapeCode::M002,
        ShapeCode::M003,
        ShapeCode::M004,
        ShapeCode::M005,
        ShapeCode::M006,
    ];

    /// Code string (e.g. "M002").
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeCode::M001 => "M001",
            ShapeCode::M002 => "M002",
            ShapeCode::M003 => "M003",
            ShapeCode::M004 => "M004",
            ShapeCode::M005 => "M005",
            ShapeCode::M006 => "M006",
        }
    }

    /// Short label.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeCode::M001 => "Random (complete)",
            ShapeCode::M002 => "Rotation (complete)",
            ShapeCode::M003 => "Random (vacant slots)",
            ShapeCode::M004 => "Rotation (vacant slots)",
            ShapeCode::M005 => "Group",
            ShapeCode::M006 => "Multi-occupant table",
        }
    }

    /// Builds a shape for this code.
    ///
    /// `slot_count` is used by the vacant shapes; the placeholder shapes
    /// get zeroed parameters.
    pub fn into_shape(self, slot_count: usize) -> Shape {
        match self {
            ShapeCode::M001 => Shape::CompleteRandom,
            ShapeCode::M002 => Shape::CompleteRotation,
            ShapeCode::M003 => Shape::VacantRandom { slot_count },
            ShapeCode::M004 => Shape::VacantRotation { slot_count },
            ShapeCode::M005 => Shape::Group {
                group_count: 0,
                participants_per_group: 0,
            },
            ShapeCode::M006 => Shape::Table {
                participants_per_table: 0,
                resources_per_rotation: 0,
            },
        }
    }
}

impl FromStr for ShapeCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownShape(s.to_string()))
    }
}

impl fmt::Display for ShapeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MatchingConfig {
    /// Creates a configuration with the default policy.
    pub fn new(shape: Shape, round_count: usize) -> Self {
        Self {
            shape,
            round_count,
            policy: MatchingPolicy::default(),
        }
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: MatchingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Round count with 0 clamped to 1.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.round_count.max(1)
    }
}
