use thiserror::Error;
use tracing::debug;

use crate::cache::Cached;
use crate::config::ResumeConfig;
use crate::document::{DocumentError, DocumentStore};
use crate::extract::{find_name_components, find_phones};
use crate::redaction::{mask_digits, mask_text, RedactionEntry, RedactionRegistry};
use crate::types::identifiers::TextVersion;
use crate::types::records::{NameComponents, PhoneRecord};
use crate::types::snapshot::ResumeSnapshot;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("No text has been set")]
    NotInitialized,

    #[error("No {0} found in text")]
    NotFound(&'static str),

    #[error("Text does not contain {0:?}")]
    LiteralNotFound(String),

    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[source] std::string::FromUtf8Error),
}

impl From<DocumentError> for ResumeError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::NotInitialized => ResumeError::NotInitialized,
            DocumentError::InvalidUtf8(e) => ResumeError::InvalidUtf8(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResumeError>;

/// A résumé held in memory: one text buffer, the fields derived from it, and
/// the log of reversible hides applied to it.
///
/// Derived fields are computed on first request and kept until the text
/// changes. Replacing the text (including through [`Resume::update_phone`])
/// forgets every pending hide, because masked spans refer to the old text.
///
/// `Resume` has no interior locking; share it behind a `Mutex` if more than
/// one owner needs it.
#[derive(Debug, Clone)]
pub struct Resume {
    config: ResumeConfig,
    document: DocumentStore,
    names: Cached<NameComponents>,
    phones: Cached<Vec<PhoneRecord>>,
    hidden: RedactionRegistry,
}

impl Resume {
    pub fn new() -> Self {
        Self::with_config(ResumeConfig::v0())
    }

    pub fn with_config(config: ResumeConfig) -> Self {
        Self {
            config,
            document: DocumentStore::new(),
            names: Cached::Unset,
            phones: Cached::Unset,
            hidden: RedactionRegistry::new(),
        }
    }

    pub fn config(&self) -> &ResumeConfig {
        &self.config
    }

    /// Replace the text. Cached fields and pending hides are dropped.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.document.set(text.into());
        self.reset_derived();
        debug!("Text set ({} bytes)", self.document.text().map_or(0, str::len));
    }

    /// Like [`Resume::set_text`] for raw bytes. Invalid UTF-8 leaves the
    /// engine exactly as it was.
    pub fn set_text_bytes(&mut self, raw_content: Vec<u8>) -> Result<()> {
        self.document.ingest(raw_content)?;
        self.reset_derived();
        Ok(())
    }

    /// Forget the text; the engine behaves as if it was never set.
    pub fn clear(&mut self) {
        self.document.clear();
        self.reset_derived();
    }

    pub fn text(&self) -> Result<&str> {
        Ok(self.document.text()?)
    }

    pub fn version(&self) -> Result<&TextVersion> {
        Ok(self.document.version()?)
    }

    /// All name parts, computed together from the leftmost full name.
    pub fn name_components(&mut self) -> Result<&NameComponents> {
        let version = self.document.version()?.clone();
        let text = self.document.text()?;
        let titles = &self.config.title_abbreviations;

        self.names.get_or_try_fill(&version, || {
            let found = find_name_components(text, titles).ok_or(ResumeError::NotFound("full name"));
            if let Ok(parts) = &found {
                debug!("Extracted full name {:?}", parts.full_name);
            }
            found
        })
    }

    pub fn full_name(&mut self) -> Result<&str> {
        Ok(&self.name_components()?.full_name)
    }

    pub fn first_name(&mut self) -> Result<&str> {
        Ok(&self.name_components()?.first_name)
    }

    /// `None` when the full name has only two words.
    pub fn middle_name(&mut self) -> Result<Option<&str>> {
        Ok(self.name_components()?.middle_name.as_deref())
    }

    pub fn last_name(&mut self) -> Result<&str> {
        Ok(&self.name_components()?.last_name)
    }

    /// Phones in the order they appear. Empty when there are none.
    pub fn phones(&mut self) -> Result<&[PhoneRecord]> {
        let version = self.document.version()?.clone();
        let text = self.document.text()?;

        let phones = self
            .phones
            .get_or_try_fill::<ResumeError>(&version, || Ok(find_phones(text)))?;
        Ok(phones.as_slice())
    }

    /// Replace the first occurrence of the current last name with `new_last_name`.
    ///
    /// The cached name follows the rename only when that occurrence is the
    /// last word of the full name; otherwise it is derived again on next read.
    pub fn update_last_name(&mut self, new_last_name: &str) -> Result<()> {
        let current = self.name_components()?.clone();
        let last_word_at = self
            .document
            .text()?
            .find(&current.full_name)
            .map(|start| start + current.full_name.len() - current.last_name.len());

        let Some(replaced_at) = self.document.replace_first(&current.last_name, new_last_name)? else {
            return Err(ResumeError::LiteralNotFound(current.last_name));
        };

        self.phones.invalidate();
        if last_word_at == Some(replaced_at) {
            let version = self.document.version()?.clone();
            self.names.store(version, current.with_last_name(new_last_name));
        } else {
            self.names.invalidate();
        }
        debug!("Last name {:?} -> {:?} at byte {}", current.last_name, new_last_name, replaced_at);
        Ok(())
    }

    /// Replace every occurrence of `old_phone.number` with `new_phone.number`.
    ///
    /// This reloads the text, so pending hides are dropped and cannot be
    /// restored afterwards.
    pub fn update_phone(&mut self, old_phone: &PhoneRecord, new_phone: &PhoneRecord) -> Result<()> {
        if !self.document.contains(&old_phone.number)? {
            return Err(ResumeError::LiteralNotFound(old_phone.number.clone()));
        }

        let replaced = self.document.replace_all(&old_phone.number, &new_phone.number)?;
        self.reset_derived();
        debug!("Phone {:?} -> {:?} ({} occurrences)", old_phone.number, new_phone.number, replaced);
        Ok(())
    }

    /// Mask the first occurrence of `piece`, keeping spaces, periods and `@`
    /// (see [`ResumeConfig::preserved`]).
    pub fn hide(&mut self, piece: &str) -> Result<()> {
        let masked = mask_text(piece, self.config.mask_char, &self.config.preserved);
        self.conceal(piece, masked)
    }

    /// Mask the digits of the first occurrence of `phone`.
    pub fn hide_phone(&mut self, phone: &str) -> Result<()> {
        let masked = mask_digits(phone, self.config.mask_char);
        self.conceal(phone, masked)
    }

    /// Undo every pending hide. Returns how many were put back; hides whose
    /// masked text has since disappeared are dropped silently.
    pub fn unhide_all(&mut self) -> Result<usize> {
        let restored = self.hidden.restore_into(&mut self.document)?;
        self.names.invalidate();
        self.phones.invalidate();
        debug!("Restored {} hidden pieces", restored);
        Ok(restored)
    }

    /// Pending hides, oldest first.
    pub fn hidden(&self) -> &[RedactionEntry] {
        self.hidden.entries()
    }

    pub fn snapshot(&self) -> Result<ResumeSnapshot> {
        Ok(ResumeSnapshot {
            version: self.document.version()?.clone(),
            text: self.document.text()?.to_string(),
            hidden: self.hidden.entries().to_vec(),
        })
    }

    fn conceal(&mut self, piece: &str, masked: String) -> Result<()> {
        if self.document.replace_first(piece, &masked)?.is_none() {
            return Err(ResumeError::LiteralNotFound(piece.to_string()));
        }

        self.names.invalidate();
        self.phones.invalidate();
        self.hidden.record(masked, piece.to_string());
        Ok(())
    }

    fn reset_derived(&mut self) {
        self.names.invalidate();
        self.phones.invalidate();
        self.hidden.clear();
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self::new()
    }
}
