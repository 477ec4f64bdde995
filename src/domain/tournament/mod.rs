// Tournament domain module
// Contains the tournament aggregate root, value objects, and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod tournament;
pub mod value_objects;

// Re-export main types for convenience
pub use events::TournamentEvent;
pub use tournament::Tournament;
pub use value_objects::TournamentStatus;
