//! Grouping of rendered entries into "declaration + results" display units.

use std::collections::BTreeMap;

use crate::rendered::{EntryClass, EntryType, RenderedLogEntry};
use crate::replay::ActionHpChange;

/// One display row: a primary entry and the results that followed it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupedAction {
    /// The declaration, or a lone result/standalone entry shown on its own.
    pub primary: RenderedLogEntry,
    pub results: Vec<RenderedLogEntry>,
    /// HP change shown beside each result; parallel to `results`.
    pub hp_changes: Vec<Option<ActionHpChange>>,
}

impl GroupedAction {
    fn single(primary: RenderedLogEntry) -> Self {
        Self {
            primary,
            results: Vec::new(),
            hp_changes: Vec::new(),
        }
    }
}

/// Single-pass grouper over one turn's filtered entries.
#[derive(Debug, Default)]
pub struct ActionGrouper<'e> {
    primary: Option<&'e RenderedLogEntry>,
    results: Vec<&'e RenderedLogEntry>,
    hp_changes: Vec<Option<ActionHpChange>>,
    groups: Vec<GroupedAction>,
}

impl<'e> ActionGrouper<'e> {
    /// Groups `entries`, attaching HP changes keyed by entry index.
    pub fn group(
        entries: &[&'e RenderedLogEntry],
        hp_changes: &BTreeMap<usize, ActionHpChange>,
    ) -> Vec<GroupedAction> {
        let mut grouper = Self::default();

        for (index, &entry) in entries.iter().enumerate() {
            match entry.class() {
                EntryClass::Declaration => {
                    grouper.flush();
                    grouper.primary = Some(entry);
                }
                EntryClass::Result => {
                    // an empty bar already shows a defeat
                    let change = if entry.entry_type == EntryType::Defeat {
                        None
                    } else {
                        hp_changes.get(&index).cloned()
                    };
                    let same_actor = grouper
                        .primary
                        .is_some_and(|primary| primary.actor_id == entry.actor_id);
                    if grouper.primary.is_some() && !same_actor {
                        grouper.flush();
                    }
                    grouper.push(entry, change);
                }
                EntryClass::Standalone => {
                    grouper.flush();
                    grouper.groups.push(GroupedAction::single(entry.clone()));
                }
                EntryClass::Other => grouper.push(entry, None),
            }
        }

        grouper.flush();
        grouper.groups
    }

    fn push(&mut self, entry: &'e RenderedLogEntry, change: Option<ActionHpChange>) {
        self.results.push(entry);
        self.hp_changes.push(change);
    }

    fn flush(&mut self) {
        let results = std::mem::take(&mut self.results);
        let hp_changes = std::mem::take(&mut self.hp_changes);

        match self.primary.take() {
            Some(primary) => self.groups.push(GroupedAction {
                primary: primary.clone(),
                results: results.into_iter().cloned().collect(),
                hp_changes,
            }),
            None => self.groups.extend(
                results
                    .into_iter()
                    .map(|result| GroupedAction::single(result.clone())),
            ),
        }
    }
}
