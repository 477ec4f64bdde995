// Team domain module
// Contains the team aggregate root, value objects, derived statistics,
// and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod statistics;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use events::TeamEvent;
pub use statistics::TeamStatistics;
pub use team::Team;
