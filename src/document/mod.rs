pub mod document;

pub use crate::types::identifiers::TextVersion;
pub use document::{DocumentError, DocumentStore};
