use thiserror::Error;
use tracing::debug;

use crate::types::identifiers::TextVersion;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("No text has been set")]
    NotInitialized,
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone)]
struct Buffer {
    text: String,
    version: TextVersion,
}

impl Buffer {
    fn new(text: String) -> Self {
        let version = TextVersion::from_text(&text);
        Self { text, version }
    }
}

/// Owner of the one mutable text buffer.
///
/// Every edit goes through here so the version always describes the
/// current text. Searches are literal: the needle is never read as a pattern.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    buffer: Option<Buffer>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: String) {
        self.buffer = Some(Buffer::new(text));
    }

    /// Validate raw bytes and make them the new buffer.
    ///
    /// On failure the previous buffer is left as it was.
    pub fn ingest(&mut self, raw_content: Vec<u8>) -> Result<(), DocumentError> {
        let text = String::from_utf8(raw_content)?;
        self.set(text);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.buffer = None;
    }

    pub fn text(&self) -> Result<&str, DocumentError> {
        self.buffer
            .as_ref()
            .map(|b| b.text.as_str())
            .ok_or(DocumentError::NotInitialized)
    }

    pub fn version(&self) -> Result<&TextVersion, DocumentError> {
        self.buffer
            .as_ref()
            .map(|b| &b.version)
            .ok_or(DocumentError::NotInitialized)
    }

    pub fn contains(&self, needle: &str) -> Result<bool, DocumentError> {
        let text = self.text()?;
        Ok(!needle.is_empty() && text.contains(needle))
    }

    /// Replace the first occurrence of `needle`. Returns the byte offset of
    /// the edit, or `None` when `needle` is absent.
    pub fn replace_first(&mut self, needle: &str, replacement: &str) -> Result<Option<usize>, DocumentError> {
        let text = self.text()?;
        if needle.is_empty() {
            return Ok(None);
        }
        let Some(start) = text.find(needle) else {
            return Ok(None);
        };

        let mut edited = String::with_capacity(text.len() - needle.len() + replacement.len());
        edited.push_str(&text[..start]);
        edited.push_str(replacement);
        edited.push_str(&text[start + needle.len()..]);

        debug!("Replaced first occurrence at byte {} ({} -> {} bytes)", start, needle.len(), replacement.len());
        self.set(edited);
        Ok(Some(start))
    }

    /// Replace every occurrence of `needle`. Returns how many were replaced.
    pub fn replace_all(&mut self, needle: &str, replacement: &str) -> Result<usize, DocumentError> {
        let text = self.text()?;
        if needle.is_empty() {
            return Ok(0);
        }
        let count = text.matches(needle).count();
        if count == 0 {
            return Ok(0);
        }

        let edited = text.replace(needle, replacement);
        debug!("Replaced {} occurrences", count);
        self.set(edited);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_store_rejects_reads() {
        let store = DocumentStore::new();
        assert!(matches!(store.text(), Err(DocumentError::NotInitialized)));
        assert!(matches!(store.version(), Err(DocumentError::NotInitialized)));
    }

    #[test]
    fn replace_first_is_literal() {
        let mut store = DocumentStore::new();
        store.set("call (123) 456-7890 or (123) 456-7890".to_string());

        assert_eq!(store.replace_first("(123)", "(999)").unwrap(), Some(5));
        assert_eq!(store.text().unwrap(), "call (999) 456-7890 or (123) 456-7890");

        assert_eq!(store.replace_first("1.3", "x").unwrap(), None);
        assert_eq!(store.replace_first("", "x").unwrap(), None);
    }

    #[test]
    fn replace_all_counts_and_versions() {
        let mut store = DocumentStore::new();
        store.set("a.b a.b".to_string());
        let before = store.version().unwrap().clone();

        assert_eq!(store.replace_all("a.b", "c").unwrap(), 2);
        assert_eq!(store.text().unwrap(), "c c");
        assert_ne!(store.version().unwrap(), &before);

        assert_eq!(store.replace_all("zzz", "c").unwrap(), 0);
    }

    #[test]
    fn failed_ingest_keeps_buffer() {
        let mut store = DocumentStore::new();
        store.set("kept".to_string());
        assert!(store.ingest(vec![0, 159, 146, 150]).is_err());
        assert_eq!(store.text().unwrap(), "kept");
    }
}
