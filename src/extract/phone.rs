use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::types::records::PhoneRecord;

/// Optional region code (group 2), a seven digit core number, and an
/// optional extension (group 7). Whitespace around `ext` is ASCII only.
pub const PHONE_PATTERN: &str = r"(\(?([1-9][0-9]{2})\)?[-. ]*)?([1-9][0-9]{2})[-. ]*([0-9]{2})[-. ]*([0-9]{2})([ \t\n\x0B\f\r]*ext\.?[ \t\n\x0B\f\r]*([0-9]+))?";

const REGION_GROUP: usize = 2;
const EXTENSION_GROUP: usize = 7;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"));

/// All non-overlapping phones in `text`, in order of appearance.
pub fn find_phones(text: &str) -> Vec<PhoneRecord> {
    let phones: Vec<PhoneRecord> = PHONE_REGEX.captures_iter(text).map(|caps| to_record(&caps)).collect();
    debug!("Found {} phones in {} bytes", phones.len(), text.len());
    phones
}

fn to_record(caps: &Captures<'_>) -> PhoneRecord {
    let number = caps.get(0).map_or("", |m| m.as_str());
    PhoneRecord::new(
        number,
        numeric_group(caps, REGION_GROUP),
        numeric_group(caps, EXTENSION_GROUP),
    )
}

fn numeric_group(caps: &Captures<'_>, index: usize) -> i64 {
    let Some(group) = caps.get(index) else {
        return PhoneRecord::ABSENT;
    };
    match group.as_str().parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring unparseable phone group {:?}: {}", group.as_str(), e);
            PhoneRecord::ABSENT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_code_and_extension() {
        let phones = find_phones("Phone: (123) 456-7890 ext. 42");
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].number, "(123) 456-7890 ext. 42");
        assert_eq!(phones[0].region_code, 123);
        assert_eq!(phones[0].extension, 42);
    }

    #[test]
    fn missing_groups_use_sentinel() {
        let phones = find_phones("home 456-7890");
        assert_eq!(phones, vec![PhoneRecord::new("456-7890", -1, -1)]);
    }

    #[test]
    fn keeps_document_order() {
        let phones = find_phones("work 234.567.8901, cell 987 654 3210ext7");
        let numbers: Vec<&str> = phones.iter().map(|p| p.number.as_str()).collect();
        assert_eq!(numbers, vec!["234.567.8901", "987 654 3210ext7"]);
        assert_eq!(phones[0].region_code, 234);
        assert_eq!(phones[1].extension, 7);
    }

    #[test]
    fn extension_needs_ascii_whitespace() {
        let phones = find_phones("456-7890 ext\tor 456-7890\u{00A0}ext 12");
        assert_eq!(phones.len(), 2);
        assert_eq!(phones[1].number, "456-7890");
        assert_eq!(phones[1].extension, PhoneRecord::ABSENT);

        let tabbed = find_phones("456-7890\text\t12");
        assert_eq!(tabbed[0].extension, 12);
    }

    #[test]
    fn no_phones_is_empty() {
        assert!(find_phones("Jo Li, no contact details").is_empty());
    }

    #[test]
    fn huge_extension_is_absent() {
        let phones = find_phones("456-7890 ext 99999999999999999999999");
        assert_eq!(phones[0].extension, PhoneRecord::ABSENT);
    }
}
