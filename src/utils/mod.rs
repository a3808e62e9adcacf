//! Shared helpers

pub mod encoding;
pub mod ordered_map;

pub use encoding::read_text;
pub use ordered_map::OrderedMap;
