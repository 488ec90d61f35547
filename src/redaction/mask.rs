/// Mask every character of `piece` except those in `preserved`.
///
/// `"John A. Smith"` becomes `"XXXX X. XXXXX"` with the default settings.
pub fn mask_text(piece: &str, mask_char: char, preserved: &[char]) -> String {
    piece
        .chars()
        .map(|c| if preserved.contains(&c) { c } else { mask_char })
        .collect()
}

/// Mask only the ASCII digits of `phone`; punctuation and spacing survive.
pub fn mask_digits(phone: &str, mask_char: char) -> String {
    phone
        .chars()
        .map(|c| if c.is_ascii_digit() { mask_char } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESERVED: &[char] = &[' ', '.', '@'];

    #[test]
    fn text_mask_keeps_separators() {
        assert_eq!(mask_text("John A. Smith", 'X', PRESERVED), "XXXX X. XXXXX");
        assert_eq!(mask_text("john@hp.com", 'X', PRESERVED), "XXXX@XX.XXX");
        assert_eq!(mask_text("(123)", 'X', PRESERVED), "XXXXX");
    }

    #[test]
    fn text_mask_counts_chars_not_bytes() {
        assert_eq!(mask_text("Zoë", '*', PRESERVED), "***");
    }

    #[test]
    fn digit_mask_keeps_punctuation() {
        assert_eq!(mask_digits("(123) 456-7890", 'X'), "(XXX) XXX-XXXX");
        assert_eq!(mask_digits("ext. 12", '#'), "ext. ##");
    }
}
