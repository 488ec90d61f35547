use std::fmt;

use serde::{Deserialize, Serialize};

/// A phone number found in the buffer.
///
/// `region_code` and `extension` hold [`PhoneRecord::ABSENT`] when the
/// corresponding part was not written in the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneRecord {
    /// The phone exactly as it appears in the text.
    pub number: String,
    pub region_code: i64,
    pub extension: i64,
}

impl PhoneRecord {
    pub const ABSENT: i64 = -1;

    pub fn new(number: impl Into<String>, region_code: i64, extension: i64) -> Self {
        Self {
            number: number.into(),
            region_code,
            extension,
        }
    }

    /// A record carrying only the literal number, e.g. a replacement for
    /// [`crate::Resume::update_phone`].
    pub fn from_number(number: impl Into<String>) -> Self {
        Self::new(number, Self::ABSENT, Self::ABSENT)
    }

    pub fn region_code(&self) -> Option<i64> {
        (self.region_code != Self::ABSENT).then_some(self.region_code)
    }

    pub fn extension(&self) -> Option<i64> {
        (self.extension != Self::ABSENT).then_some(self.extension)
    }
}

impl fmt::Display for PhoneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number)
    }
}

/// The full name and its parts. The parts are always derived from
/// `full_name`, never scanned independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameComponents {
    pub full_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
}

impl NameComponents {
    /// Split a two or three word name on single spaces.
    ///
    /// Returns `None` for any other word count.
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        let words: Vec<&str> = full_name.split(' ').collect();
        let (first, middle, last) = match words.as_slice() {
            [first, last] => (*first, None, *last),
            [first, middle, last] => (*first, Some(*middle), *last),
            _ => return None,
        };

        Some(Self {
            full_name: full_name.to_string(),
            first_name: first.to_string(),
            middle_name: middle.map(str::to_string),
            last_name: last.to_string(),
        })
    }

    /// Same person under a new last name; `full_name` is rebuilt from the parts.
    pub fn with_last_name(&self, last_name: &str) -> Self {
        let mut full_name = self.first_name.clone();
        if let Some(middle) = &self.middle_name {
            full_name.push(' ');
            full_name.push_str(middle);
        }
        full_name.push(' ');
        full_name.push_str(last_name);

        Self {
            full_name,
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: last_name.to_string(),
        }
    }
}
