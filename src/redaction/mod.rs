pub mod mask;
pub mod registry;

pub use mask::{mask_digits, mask_text};
pub use registry::{RedactionEntry, RedactionRegistry};
