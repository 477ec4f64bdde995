//! Matchday API Library
//!
//! Tournament management API: tournaments, teams, players, and matches
//! with uniqueness validation and derived team statistics. The domain
//! layer is independent of the HTTP and persistence adapters.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
