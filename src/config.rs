use serde::{Deserialize, Serialize};

/// Engine settings. Serializable and comparable so a caller can keep them
/// next to the text they were applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeConfig {
    /// Replaces each masked character.
    #[serde(default = "default_mask_char")]
    pub mask_char: char,

    /// Characters `hide` leaves visible.
    #[serde(default = "default_preserved")]
    pub preserved: Vec<char>,

    /// Honorifics that never start a full name.
    #[serde(default = "default_title_abbreviations")]
    pub title_abbreviations: Vec<String>,
}

impl ResumeConfig {
    pub fn v0() -> Self {
        Self {
            mask_char: default_mask_char(),
            preserved: default_preserved(),
            title_abbreviations: default_title_abbreviations(),
        }
    }

    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub fn with_title_abbreviations<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.title_abbreviations = titles.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self::v0()
    }
}

fn default_mask_char() -> char {
    'X'
}

fn default_preserved() -> Vec<char> {
    vec![' ', '.', '@']
}

fn default_title_abbreviations() -> Vec<String> {
    ["Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "Sr.", "Jr."]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
