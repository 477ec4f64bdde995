// Match domain module
// Contains the match aggregate root and its value objects

#![allow(clippy::module_inception)]

pub mod matches;
pub mod value_objects;

// Re-export main types for convenience
pub use matches::Match;
pub use value_objects::MatchStatus;
