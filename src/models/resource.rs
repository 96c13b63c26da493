//! Resource model.
//!
//! Resources are the attendants rotated past participants. Each carries
//! an availability flag and an NG list naming participants it must not
//! be paired with. Only available resources take part in a run.

use serde::{Deserialize, Serialize};

/// A resource (attendant) that participants are matched with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource name.
    pub name: String,
    /// Whether the resource takes part in the current run.
    pub available: bool,
    /// Structured NG entries (name and/or identifier).
    #[serde(default)]
    pub ng_entries: Vec<NgEntry>,
    /// Legacy flat NG list, compared per judgment mode.
    ///
    /// Consulted only when `ng_entries` is empty.
    #[serde(default)]
    pub ng_legacy: Vec<String>,
}

/// One forbidden participant on a resource's NG list.
///
/// Either field may be blank; a blank field never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgEntry {
    /// Participant display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Participant external identifier.
    #[serde(default)]
    pub id: Option<String>,
}

impl Resource {
    /// Creates an available resource with an empty NG list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available: true,
            ng_entries: Vec::new(),
            ng_legacy: Vec::new(),
        }
    }

    /// Sets availability.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Marks the resource absent for this run.
    pub fn absent(self) -> Self {
        self.with_available(false)
    }

    /// Adds a structured NG entry.
    pub fn with_ng(mut self, entry: NgEntry) -> Self {
        self.ng_entries.push(entry);
        self
    }

    /// Adds a legacy NG string.
    pub fn with_legacy_ng(mut self, value: impl Into<String>) -> Self {
        self.ng_legacy.push(value.into());
        self
    }

    /// Whether the resource has any NG data at all.
    pub fn has_ng(&self) -> bool {
        !self.ng_entries.is_empty() || !self.ng_legacy.is_empty()
    }
}

impl NgEntry {
    /// Entry matching by display name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: None,
        }
    }

    /// Entry matching by external identifier.
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            name: None,
            id: Some(id.into()),
        }
    }

    /// Entry carrying both name and identifier.
    pub fn both(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: Some(id.into()),
        }
    }
}
