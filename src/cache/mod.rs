pub mod cache;

pub use cache::Cached;
