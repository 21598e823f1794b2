//! Alignment of HP deltas with rendered log lines.
//!
//! The rendered log and the action log are produced independently and at
//! different granularity: a rendered line may be missing for an action that
//! is not worth displaying. Alignment is greedy and forward-only, so each
//! rendered line is matched at most once and matches stay in log order.

use std::collections::BTreeMap;

use crate::rendered::{EntryType, RenderedLogEntry};
use crate::replay::{ActionDelta, ActionHpChange};

/// Forward-only cursor over one turn's rendered entries.
#[derive(Clone, Debug)]
pub struct LogEntryCorrelator<'e> {
    entries: &'e [&'e RenderedLogEntry],
    cursor: usize,
}

impl<'e> LogEntryCorrelator<'e> {
    pub fn new(entries: &'e [&'e RenderedLogEntry]) -> Self {
        Self { entries, cursor: 0 }
    }

    /// Index of the next entry that may still be matched.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Finds the first entry at or after the cursor with the given type and
    /// target, and moves the cursor past it.
    ///
    /// Returns `None` (cursor unchanged) when no remaining entry matches.
    pub fn attach(&mut self, entry_type: EntryType, target_id: &str) -> Option<usize> {
        let offset = self.entries[self.cursor..].iter().position(|entry| {
            entry.entry_type == entry_type && entry.target_id.as_deref() == Some(target_id)
        })?;
        let index = self.cursor + offset;
        self.cursor = index + 1;
        Some(index)
    }

    /// Maps entry indices to the HP change displayed next to them.
    ///
    /// Deltas with no matching entry are left out.
    pub fn correlate(
        entries: &'e [&'e RenderedLogEntry],
        deltas: &[ActionDelta],
    ) -> BTreeMap<usize, ActionHpChange> {
        let mut correlator = Self::new(entries);
        let mut matched = BTreeMap::new();

        for delta in deltas {
            match correlator.attach(delta.entry_type, &delta.change.target_id) {
                Some(index) => {
                    matched.insert(index, delta.change.clone());
                }
                None => {
                    tracing::trace!(
                        action_index = delta.action_index,
                        target = %delta.change.target_id,
                        entry_type = %delta.entry_type,
                        "no rendered entry for hp change"
                    );
                }
            }
        }

        matched
    }
}
