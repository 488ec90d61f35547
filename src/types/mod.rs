pub mod identifiers;
pub mod records;
pub mod snapshot;

pub use identifiers::TextVersion;
pub use records::{NameComponents, PhoneRecord};
pub use snapshot::ResumeSnapshot;
