pub mod health;
pub mod matches;
pub mod players;
pub mod teams;
pub mod tournaments;
