//! Participant model.
//!
//! A participant is a winning entrant who is seated against resources
//! over several rounds. Participants carry up to three ranked
//! preferences; anything past the third is ignored when ranking.

use serde::{Deserialize, Serialize};

/// Number of preference ranks that carry weight.
pub const MAX_PREFERENCES: usize = 3;

/// A participant to be matched with resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable external identifier (account handle).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Preferred resource names, most preferred first.
    ///
    /// Blank entries mean "no preference at that rank".
    #[serde(default)]
    pub preferences: Vec<String>,
}

impl Participant {
    /// Creates a participant with no preferences.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            preferences: Vec::new(),
        }
    }

    /// Appends a preference at the next rank.
    pub fn with_preference(mut self, resource_name: impl Into<String>) -> Self {
        self.preferences.push(resource_name.into());
        self
    }

    /// Replaces all preferences.
    pub fn with_preferences<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences = names.into_iter().map(Into::into).collect();
        self
    }

    /// Preference rank (1..=3) of a resource, or 0 if not among the top three.
    ///
    /// Names are compared after trimming; blank entries never match.
    pub fn preference_rank(&self, resource_name: &str) -> u8 {
        let wanted = resource_name.trim();
        if wanted.is_empty() {
            return 0;
        }
        self.ranked_preferences()
            .find(|(_, name)| *name == wanted)
            .map(|(rank, _)| rank)
            .unwrap_or(0)
    }

    /// Non-blank top-three preferences with their 1-based rank.
    pub fn ranked_preferences(&self) -> impl Iterator<Item = (u8, &str)> {
        self.preferences
            .iter()
            .take(MAX_PREFERENCES)
            .enumerate()
            .map(|(i, name)| ((i + 1) as u8, name.trim()))
            .filter(|(_, name)| !name.is_empty())
    }

    /// Whether the participant stated any usable preference.
    pub fn has_preferences(&self) -> bool {
        self.ranked_preferences().next().is_some()
    }
}
