// Infrastructure layer module
// Contains database adapters and the event publisher
// Follows Hexagonal Architecture

pub mod events;
pub mod repositories;
