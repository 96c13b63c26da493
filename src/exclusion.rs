//! NG judgment.
//!
//! Decides whether a participant is forbidden for a resource. Structured
//! NG entries are consulted first; the legacy flat list is used only when
//! a resource has no structured entries. Comparison trims whitespace and
//! ignores case, and identifiers also ignore one leading `@`.

use crate::config::JudgmentMode;
use crate::models::{NgEntry, Participant, Resource};

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn normalize_id(s: &str) -> String {
    let n = normalize(s);
    match n.strip_prefix('@') {
        Some(rest) => rest.to_string(),
        None => n,
    }
}

fn name_matches(participant: &Participant, candidate: &str) -> bool {
    !candidate.trim().is_empty() && normalize(&participant.name) == normalize(candidate)
}

fn id_matches(participant: &Participant, candidate: &str) -> bool {
    !candidate.trim().is_empty() && normalize_id(&participant.id) == normalize_id(candidate)
}

fn matches_entry(participant: &Participant, entry: &NgEntry, mode: JudgmentMode) -> bool {
    let by_name = entry
        .name
        .as_deref()
        .is_some_and(|n| name_matches(participant, n));
    let by_id = entry
        .id
        .as_deref()
        .is_some_and(|i| id_matches(participant, i));

    match mode {
        JudgmentMode::NameOnly => by_name,
        JudgmentMode::IdentifierOnly => by_id,
        JudgmentMode::Either => by_name || by_id,
    }
}

fn matches_legacy(participant: &Participant, value: &str, mode: JudgmentMode) -> bool {
    match mode {
        JudgmentMode::NameOnly => name_matches(participant, value),
        JudgmentMode::IdentifierOnly => id_matches(participant, value),
        JudgmentMode::Either => name_matches(participant, value) || id_matches(participant, value),
    }
}

/// Whether pairing `participant` with `resource` is forbidden.
///
/// Pure; called by every engine and by the warning pass.
pub fn is_excluded(participant: &Participant, resource: &Resource, mode: JudgmentMode) -> bool {
    if !resource.ng_entries.is_empty() {
        return resource
            .ng_entries
            .iter()
            .any(|entry| matches_entry(participant, entry, mode));
    }
    resource
        .ng_legacy
        .iter()
        .any(|value| matches_legacy(participant, value, mode))
}

/// Warning text attached to a flagged assignment.
pub fn exclusion_reason(resource_name: &str) -> String {
    format!("participant is on the NG list of resource '{resource_name}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Participant {
        Participant::new("@Alice_01", "Alice")
    }

    #[test]
    fn test_name_only() {
        let r = Resource::new("Rin").with_ng(NgEntry::name("  alice "));
        assert!(is_excluded(&alice(), &r, JudgmentMode::NameOnly));
        assert!(!is_excluded(&alice(), &r, JudgmentMode::IdentifierOnly));
        assert!(is_excluded(&alice(), &r, JudgmentMode::Either));
    }

    #[test]
    fn test_identifier_only_ignores_at_prefix() {
        let r = Resource::new("Rin").with_ng(NgEntry::id("alice_01"));
        assert!(is_excluded(&alice(), &r, JudgmentMode::IdentifierOnly));
        assert!(!is_excluded(&alice(), &r, JudgmentMode::NameOnly));
        assert!(is_excluded(&alice(), &r, JudgmentMode::Either));
    }

    #[test]
    fn test_either_needs_one_field() {
        let r = Resource::new("Rin").with_ng(NgEntry::both("Someone Else", "@ALICE_01"));
        assert!(!is_excluded(&alice(), &r, JudgmentMode::NameOnly));
        assert!(is_excluded(&alice(), &r, JudgmentMode::IdentifierOnly));
        assert!(is_excluded(&alice(), &r, JudgmentMode::Either));
    }

    #[test]
    fn test_blank_entry_never_matches() {
        let blank = Participant::new("", "");
        let r = Resource::new("Rin").with_ng(NgEntry::both("  ", ""));
        assert!(!is_excluded(&blank, &r, JudgmentMode::Either));
        assert!(!is_excluded(&alice(), &r, JudgmentMode::Either));
    }

    #[test]
    fn test_legacy_list_fallback() {
        let r = Resource::new("Rin").with_legacy_ng("ALICE");
        assert!(is_excluded(&alice(), &r, JudgmentMode::NameOnly));
        assert!(!is_excluded(&alice(), &r, JudgmentMode::IdentifierOnly));

        let r = Resource::new("Rin").with_legacy_ng("@alice_01");
        assert!(is_excluded(&alice(), &r, JudgmentMode::IdentifierOnly));
        assert!(is_excluded(&alice(), &r, JudgmentMode::Either));
    }

    #[test]
    fn test_structured_entries_shadow_legacy_list() {
        let r = Resource::new("Rin")
            .with_ng(NgEntry::name("Bob"))
            .with_legacy_ng("Alice");
        assert!(!is_excluded(&alice(), &r, JudgmentMode::Either));
    }

    #[test]
    fn test_no_ng_data() {
        assert!(!is_excluded(&alice(), &Resource::new("Rin"), JudgmentMode::Either));
    }

    #[test]
    fn test_reason_names_resource() {
        assert!(exclusion_reason("Rin").contains("'Rin'"));
    }
}
