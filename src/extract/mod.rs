//! Pattern scanners that derive structured fields from résumé text.
//!
//! Both scanners are pure functions over `&str`; caching lives in the engine.

pub mod name;
pub mod phone;

pub use name::{find_full_name, find_name_components, NAME_PATTERN};
pub use phone::{find_phones, PHONE_PATTERN};
