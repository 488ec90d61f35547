use serde::{Deserialize, Serialize};

use crate::redaction::RedactionEntry;
use crate::types::identifiers::TextVersion;

/// Point-in-time view of a [`crate::Resume`]: the text, its version and the
/// hides that can still be undone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSnapshot {
    pub version: TextVersion,
    pub text: String,
    pub hidden: Vec<RedactionEntry>,
}

impl ResumeSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
