// Application layer module
// Use cases orchestrating validation, aggregation and repository ports

pub mod matches;
pub mod players;
pub mod teams;
pub mod tournaments;

pub use matches::MatchUseCases;
pub use players::PlayerUseCases;
pub use teams::TeamUseCases;
pub use tournaments::TournamentUseCases;
