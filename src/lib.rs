//! Field extraction and reversible redaction for résumé text.
//!
//! `resume-core` holds one mutable text buffer and derives structured fields
//! from it: the leftmost full name (split into first, middle and last name)
//! and every phone number with its optional region code and extension.
//! Derived fields are cached until the text changes.
//!
//! Pieces of the text can be hidden behind a mask and later restored exactly
//! with [`Resume::unhide_all`].
//!
//! ```
//! use resume_core::Resume;
//!
//! let mut cv = Resume::new();
//! cv.set_text("John A. Smith, phone (123) 456-7890");
//! assert_eq!(cv.last_name().unwrap(), "Smith");
//!
//! cv.hide_phone("(123) 456-7890").unwrap();
//! assert_eq!(cv.text().unwrap(), "John A. Smith, phone (XXX) XXX-XXXX");
//! assert_eq!(cv.unhide_all().unwrap(), 1);
//! ```

pub mod cache;
pub mod config;
pub mod document;
pub mod extract;
pub mod redaction;
pub mod resume;
pub mod types;

pub use config::ResumeConfig;
pub use resume::{Resume, ResumeError};
pub use types::{NameComponents, PhoneRecord, ResumeSnapshot, TextVersion};
