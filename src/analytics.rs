//! Aggregate NG analytics.
//!
//! Detects participants that many resources have placed on their NG
//! lists ("caution" participants) and answers list lookups used to
//! suppress or raise warnings before a lottery.
//!
//! Counting follows the configured judgment mode. Caution and exception
//! lookups are strict: name *and* identifier must both match after
//! normalization (trim, lowercase, leading `@` removed).

use serde::{Deserialize, Serialize};

use crate::config::JudgmentMode;
use crate::exclusion::is_excluded;
use crate::models::{Participant, Resource};

/// Default NG count at which a participant is auto-registered.
pub const DEFAULT_CAUTION_THRESHOLD: usize = 2;

/// How a caution entry got onto the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Registration {
    /// Registered by [`frequently_excluded`].
    Auto,
    /// Entered by an operator.
    Manual,
}

/// A participant flagged for attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CautionEntry {
    /// Display name.
    pub name: String,
    /// External identifier.
    pub id: String,
    /// Registration source.
    pub registration: Registration,
    /// Resources listing this participant as NG (auto entries only).
    pub excluded_by: Option<usize>,
}

/// A participant whose NG warnings are suppressed on the applicant list.
///
/// Does not affect resource NG judgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgException {
    /// Display name.
    pub name: String,
    /// External identifier.
    pub id: String,
    /// Operator note.
    #[serde(default)]
    pub note: Option<String>,
}

impl CautionEntry {
    /// Manually registered entry.
    pub fn manual(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            registration: Registration::Manual,
            excluded_by: None,
        }
    }
}

impl NgException {
    /// Creates an exception.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            note: None,
        }
    }

    /// Sets the note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

fn normalize(s: &str) -> String {
    let n = s.trim().to_lowercase();
    n.strip_prefix('@').map(str::to_string).unwrap_or(n)
}

fn same_person(participant: &Participant, name: &str, id: &str) -> bool {
    normalize(&participant.name) == normalize(name) && normalize(&participant.id) == normalize(id)
}

/// Number of resources whose NG list matches the participant.
pub fn exclusion_count(participant: &Participant, resources: &[Resource], mode: JudgmentMode) -> usize {
    resources
        .iter()
        .filter(|r| is_excluded(participant, r, mode))
        .count()
}

/// Participants excluded by at least `threshold` resources.
///
/// Participants missing a name or identifier are skipped, since strict
/// lookups could never match them again.
pub fn frequently_excluded(
    resources: &[Resource],
    participants: &[Participant],
    mode: JudgmentMode,
    threshold: usize,
) -> Vec<CautionEntry> {
    participants
        .iter()
        .filter(|p| !normalize(&p.name).is_empty() && !normalize(&p.id).is_empty())
        .filter_map(|p| {
            let count = exclusion_count(p, resources, mode);
            (count >= threshold.max(1)).then(|| CautionEntry {
                name: p.name.trim().to_string(),
                id: p.id.trim().to_string(),
                registration: Registration::Auto,
                excluded_by: Some(count),
            })
        })
        .collect()
}

/// Whether the participant is on the caution list.
pub fn is_caution(participant: &Participant, entries: &[CautionEntry]) -> bool {
    entries
        .iter()
        .any(|e| same_person(participant, &e.name, &e.id))
}

/// Whether the participant's warnings are suppressed.
pub fn is_exception(participant: &Participant, exceptions: &[NgException]) -> bool {
    exceptions
        .iter()
        .any(|e| same_person(participant, &e.name, &e.id))
}
