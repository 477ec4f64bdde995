// Repository ports (collaborator contracts)
// Implemented by the persistence adapters in the infrastructure layer

pub mod match_repository;
pub mod player_repository;
pub mod team_repository;
pub mod tournament_repository;

pub use match_repository::{MatchFilter, MatchRepository, Page};
pub use player_repository::PlayerRepository;
pub use team_repository::TeamRepository;
pub use tournament_repository::TournamentRepository;
