//! Human-readable log lines produced by the host's log renderer.
//!
//! The engine never builds these; it only reads them to decide grouping
//! boundaries and where HP deltas are displayed.

use std::collections::BTreeMap;

use crate::config::ReplayConfig;
use crate::log::Turn;
use crate::participant::ParticipantId;

/// Type tag of a rendered log line.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntryType {
    Action,
    Guard,
    Damage,
    Heal,
    Miss,
    Defeat,
    Victory,
    Retreat,
    System,
    Status,
}

/// Role an entry plays when building display groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryClass {
    /// Opens a group (an actor announcing an action or guard).
    Declaration,
    /// Resolved effect belonging to the preceding declaration.
    Result,
    /// Always shown on its own.
    Standalone,
    /// Attached to whatever group is open, without actor checks.
    Other,
}

impl EntryType {
    pub const fn class(&self) -> EntryClass {
        match self {
            Self::Action | Self::Guard => EntryClass::Declaration,
            Self::Damage | Self::Heal | Self::Miss | Self::Defeat => EntryClass::Result,
            Self::Victory | Self::Retreat | Self::System => EntryClass::Standalone,
            Self::Status => EntryClass::Other,
        }
    }
}

/// One rendered log line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedLogEntry {
    pub turn: Turn,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub entry_type: EntryType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actor_id: Option<ParticipantId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_id: Option<ParticipantId>,
    pub message: String,
}

impl RenderedLogEntry {
    pub fn new(turn: Turn, entry_type: EntryType, message: impl Into<String>) -> Self {
        Self {
            turn,
            entry_type,
            actor_id: None,
            target_id: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_actor(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    #[must_use]
    pub fn with_target(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    pub fn class(&self) -> EntryClass {
        self.entry_type.class()
    }
}

/// Drops entries that must not take part in display grouping.
///
/// Removed: turn-0 entries, entries with an empty message, and system noise
/// (separator rules, the battle-start banner, "X appeared!" banners).
#[derive(Clone, Debug)]
pub struct EntryFilter<'a> {
    config: &'a ReplayConfig,
}

impl<'a> EntryFilter<'a> {
    pub fn new(config: &'a ReplayConfig) -> Self {
        Self { config }
    }

    pub fn keeps(&self, entry: &RenderedLogEntry) -> bool {
        if entry.turn == 0 {
            return false;
        }
        if entry.message.is_empty() {
            return false;
        }
        if entry.entry_type == EntryType::System && self.is_system_noise(entry.message.trim()) {
            return false;
        }
        true
    }

    fn is_system_noise(&self, message: &str) -> bool {
        self.is_separator(message)
            || self
                .config
                .start_banners
                .iter()
                .any(|banner| message == banner.as_str())
            || self
                .config
                .appearance_suffixes
                .iter()
                .any(|suffix| message.len() > suffix.len() && message.ends_with(suffix.as_str()))
    }

    fn is_separator(&self, message: &str) -> bool {
        message.chars().count() >= self.config.min_separator_len
            && message
                .chars()
                .all(|c| self.config.separator_chars.contains(&c))
    }

    /// Entries that survive the filter, bucketed by turn in input order.
    pub fn by_turn<'e>(
        &self,
        entries: &'e [RenderedLogEntry],
    ) -> BTreeMap<Turn, Vec<&'e RenderedLogEntry>> {
        let mut turns: BTreeMap<Turn, Vec<&'e RenderedLogEntry>> = BTreeMap::new();
        for entry in entries.iter().filter(|entry| self.keeps(entry)) {
            turns.entry(entry.turn).or_default().push(entry);
        }
        turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(turn: Turn, message: &str) -> RenderedLogEntry {
        RenderedLogEntry::new(turn, EntryType::System, message)
    }

    #[test]
    fn entry_types_classify() {
        assert_eq!(EntryType::Guard.class(), EntryClass::Declaration);
        assert_eq!(EntryType::Miss.class(), EntryClass::Result);
        assert_eq!(EntryType::Defeat.class(), EntryClass::Result);
        assert_eq!(EntryType::Retreat.class(), EntryClass::Standalone);
        assert_eq!(EntryType::Status.class(), EntryClass::Other);
    }

    #[test]
    fn filter_drops_turn_zero_and_empty_messages() {
        let config = ReplayConfig::default();
        let filter = EntryFilter::new(&config);

        assert!(!filter.keeps(&RenderedLogEntry::new(0, EntryType::Action, "Aria attacks")));
        assert!(!filter.keeps(&RenderedLogEntry::new(1, EntryType::Defeat, "")));
        assert!(filter.keeps(&RenderedLogEntry::new(1, EntryType::Action, "Aria attacks")));
        // blank but non-empty lines still bound groups
        assert!(filter.keeps(&RenderedLogEntry::new(1, EntryType::Action, " ")));
        assert!(filter.keeps(&system(1, "  ")));
    }

    #[test]
    fn filter_drops_system_noise_only() {
        let config = ReplayConfig::default();
        let filter = EntryFilter::new(&config);

        assert!(!filter.keeps(&system(1, "----------")));
        assert!(!filter.keeps(&system(1, "Battle start!")));
        assert!(!filter.keeps(&system(1, "Slime appeared!")));
        assert!(filter.keeps(&system(1, "The air grows cold.")));
        assert!(filter.keeps(&system(1, "--")));
        assert!(!filter.keeps(&system(1, "  ----------  ")));
        // noise text on a non-system entry is kept
        assert!(filter.keeps(&RenderedLogEntry::new(1, EntryType::Status, "Slime appeared!")));
    }

    #[test]
    fn by_turn_buckets_in_input_order() {
        let config = ReplayConfig::default();
        let filter = EntryFilter::new(&config);
        let entries = vec![
            RenderedLogEntry::new(1, EntryType::Action, "a"),
            system(1, "Battle start!"),
            RenderedLogEntry::new(2, EntryType::Action, "b"),
            RenderedLogEntry::new(1, EntryType::Damage, "c"),
        ];

        let turns = filter.by_turn(&entries);

        let messages = |turn: Turn| -> Vec<&str> {
            turns[&turn].iter().map(|e| e.message.as_str()).collect()
        };
        assert_eq!(turns.len(), 2);
        assert_eq!(messages(1), vec!["a", "c"]);
        assert_eq!(messages(2), vec!["b"]);
    }
}
