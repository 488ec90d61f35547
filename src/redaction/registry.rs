use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::document::{DocumentError, DocumentStore};

/// One reversible hide: the masked text now in the buffer and what it replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionEntry {
    pub masked_form: String,
    pub original: String,
    pub hidden_at: DateTime<Utc>, // informational only
}

/// Log of live hides, keyed by masked form and kept in hide order.
///
/// At most one entry per masked form: recording a masked form that is already
/// present replaces the older entry.
#[derive(Debug, Clone, Default)]
pub struct RedactionRegistry {
    entries: Vec<RedactionEntry>,
}

impl RedactionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hide. Returns the entry it displaced, if any.
    pub fn record(&mut self, masked_form: String, original: String) -> Option<RedactionEntry> {
        let displaced = self
            .entries
            .iter()
            .position(|e| e.masked_form == masked_form)
            .map(|i| self.entries.remove(i));

        if let Some(old) = &displaced {
            warn!("Masked form {:?} already recorded; the older piece can no longer be restored", old.masked_form);
        }

        self.entries.push(RedactionEntry {
            masked_form,
            original,
            hidden_at: Utc::now(),
        });
        displaced
    }

    pub fn get(&self, masked_form: &str) -> Option<&RedactionEntry> {
        self.entries.iter().find(|e| e.masked_form == masked_form)
    }

    pub fn entries(&self) -> &[RedactionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!("Dropping {} unrestored redactions", self.entries.len());
        }
        self.entries.clear();
    }

    /// Put every original back in place of its masked form.
    ///
    /// Longer masked forms go first so a shorter one never lands inside a
    /// longer mask; equal lengths go newest hide first. Each entry is consumed
    /// exactly once. An entry whose masked form is no longer in the buffer is
    /// skipped. Returns the number of restorations.
    pub fn restore_into(&mut self, store: &mut DocumentStore) -> Result<usize, DocumentError> {
        store.text()?;

        let mut pending = std::mem::take(&mut self.entries);
        pending.reverse();
        pending.sort_by_key(|e| Reverse(e.masked_form.chars().count()));

        let mut restored = 0;
        for entry in pending {
            if store.replace_first(&entry.masked_form, &entry.original)?.is_some() {
                debug!("Restored {:?}", entry.masked_form);
                restored += 1;
            } else {
                warn!("Masked form {:?} not found in text; skipping", entry.masked_form);
            }
        }
        Ok(restored)
    }
}
