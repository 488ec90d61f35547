use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::types::records::NameComponents;

/// Two or three name words separated by single spaces. A name word is an
/// uppercase latin letter, any lowercase latin letters, and a final lowercase
/// letter or period.
pub const NAME_PATTERN: &str = r"[A-Z][a-z]*[a-z.]( [A-Z][a-z]*[a-z.]){1,2}";

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"));

/// Leftmost full name in `text`.
///
/// Matching is leftmost-first: a two word name that starts earlier wins over a
/// three word name that starts later. A candidate whose first word is one of
/// `titles` ("Mr.", "Dr.", ...) is skipped and the scan resumes after that word.
pub fn find_full_name<'t>(text: &'t str, titles: &[String]) -> Option<&'t str> {
    let mut start = 0;
    loop {
        let found = NAME_REGEX.find_at(text, start)?;
        let candidate = found.as_str();
        let first_word = candidate.split(' ').next().unwrap_or(candidate);

        if titles.iter().any(|title| title == first_word) {
            debug!("Skipping title {:?} at byte {}", first_word, found.start());
            start = found.start() + first_word.len();
            continue;
        }

        return Some(candidate);
    }
}

pub fn find_name_components(text: &str, titles: &[String]) -> Option<NameComponents> {
    find_full_name(text, titles).and_then(NameComponents::from_full_name)
}
