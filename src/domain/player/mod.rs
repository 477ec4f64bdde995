// Player domain module
// Contains the player aggregate root and its value objects

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

// Re-export main types for convenience
pub use player::Player;
