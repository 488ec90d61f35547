use resume_core::{Resume, ResumeError, TextVersion};

#[test]
fn invariant_reads_before_set_fail() {
    let mut cv = Resume::new();

    assert!(matches!(cv.text(), Err(ResumeError::NotInitialized)));
    assert!(matches!(cv.version(), Err(ResumeError::NotInitialized)));
    assert!(matches!(cv.full_name(), Err(ResumeError::NotInitialized)));
    assert!(matches!(cv.last_name(), Err(ResumeError::NotInitialized)));
    assert!(matches!(cv.phones(), Err(ResumeError::NotInitialized)));
    assert!(matches!(cv.hide("x"), Err(ResumeError::NotInitialized)));
    assert!(matches!(cv.hide_phone("1"), Err(ResumeError::NotInitialized)));
    assert!(matches!(cv.update_last_name("Doe"), Err(ResumeError::NotInitialized)));
    assert!(matches!(cv.unhide_all(), Err(ResumeError::NotInitialized)));
    assert!(matches!(cv.snapshot(), Err(ResumeError::NotInitialized)));
}

#[test]
fn invariant_text_round_trips() {
    let mut cv = Resume::new();
    cv.set_text("Jane Roe\nEngineer");
    assert_eq!(cv.text().unwrap(), "Jane Roe\nEngineer");

    cv.set_text(String::new());
    assert_eq!(cv.text().unwrap(), "");
}

#[test]
fn invariant_same_text_same_version() {
    let mut a = Resume::new();
    let mut b = Resume::new();
    a.set_text("Jo Li");
    b.set_text("Jo Li");

    assert_eq!(a.version().unwrap(), b.version().unwrap());
    assert_eq!(a.version().unwrap(), &TextVersion::from_text("Jo Li"));
    assert!(a.version().unwrap().as_str().starts_with("sha256:"));
}

#[test]
fn invariant_no_newline_normalization() {
    let mut unix = Resume::new();
    let mut windows = Resume::new();
    unix.set_text("line\n");
    windows.set_text("line\r\n");

    assert_ne!(unix.version().unwrap(), windows.version().unwrap());
}

#[test]
fn invariant_utf8_rejection_keeps_state() {
    let mut cv = Resume::new();
    cv.set_text("Jo Li 456-7890");
    cv.hide("Jo").unwrap();

    let result = cv.set_text_bytes(vec![0, 159, 146, 150]);
    assert!(matches!(result, Err(ResumeError::InvalidUtf8(_))));
    assert_eq!(cv.text().unwrap(), "XX Li 456-7890");
    assert_eq!(cv.hidden().len(), 1);
}

#[test]
fn invariant_bytes_ingest_like_text() {
    let mut cv = Resume::new();
    cv.set_text_bytes("Zoë Ann Brown".as_bytes().to_vec()).unwrap();
    assert_eq!(cv.text().unwrap(), "Zoë Ann Brown");
    assert_eq!(cv.full_name().unwrap(), "Ann Brown");
}

#[test]
fn invariant_clear_returns_to_unset() {
    let mut cv = Resume::new();
    cv.set_text("Jo Li");
    cv.hide("Li").unwrap();
    cv.clear();

    assert!(matches!(cv.text(), Err(ResumeError::NotInitialized)));
    assert!(cv.hidden().is_empty());

    cv.set_text("Ed Wu");
    assert_eq!(cv.full_name().unwrap(), "Ed Wu");
}
