use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash of the buffer at a point in time, rendered `sha256:<hex>`.
///
/// Equal text always yields an equal version, so a cache stamped with one can
/// be checked against the live buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextVersion(String);

impl TextVersion {
    pub fn from_text(text: &str) -> Self {
        let digest = Sha256::digest(text.as_bytes());
        TextVersion(format!("sha256:{}", hex::encode(digest)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
