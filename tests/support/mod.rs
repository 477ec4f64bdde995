//! In-memory repository implementations for use-case tests.
//!
//! They mirror the Postgres adapters' contracts (id assignment on first
//! save, `NotFound` on deleting an absent row) without touching a
//! database. The in-memory stores do not reproduce the unique indexes;
//! uniqueness is exercised through the validation service itself.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use matchday_api::domain::errors::{DomainError, DomainResult};
use matchday_api::domain::events::{DomainEvent, EventPublisher};
use matchday_api::domain::ids::{MatchId, PlayerId, TeamId, TournamentId};
use matchday_api::domain::matches::Match;
use matchday_api::domain::player::Player;
use matchday_api::domain::repositories::{
    MatchFilter, MatchRepository, Page, PlayerRepository, TeamRepository, TournamentRepository,
};
use matchday_api::domain::team::Team;
use matchday_api::domain::tournament::Tournament;
use matchday_api::domain::validation::{UniqueIdentityIndex, UniqueNameIndex};

struct Store<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Store<T> {
    fn assign_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Default)]
pub struct InMemoryTournamentRepository {
    store: Mutex<Store<Tournament>>,
}

#[async_trait]
impl TournamentRepository for InMemoryTournamentRepository {
    async fn save(&self, tournament: &Tournament) -> DomainResult<Tournament> {
        let mut store = self.store.lock().unwrap();
        let id = match tournament.id() {
            Some(id) => id.value(),
            None => store.assign_id(),
        };
        let persisted = Tournament::from_persistence(
            TournamentId::new(id),
            tournament.name().to_string(),
            tournament.description().to_string(),
            tournament.status(),
        );
        store.rows.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn find_by_id(&self, id: TournamentId) -> DomainResult<Option<Tournament>> {
        Ok(self.store.lock().unwrap().rows.get(&id.value()).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Tournament>> {
        Ok(self.store.lock().unwrap().rows.values().cloned().collect())
    }

    async fn delete(&self, id: TournamentId) -> DomainResult<()> {
        self.store
            .lock()
            .unwrap()
            .rows
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("tournament", id.value()))
    }
}

#[async_trait]
impl UniqueNameIndex for InMemoryTournamentRepository {
    async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .rows
            .values()
            .any(|t| t.name() == name))
    }

    async fn exists_by_name_and_id_not(&self, name: &str, excluded_id: i64) -> DomainResult<bool> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .rows
            .iter()
            .any(|(id, t)| t.name() == name && *id != excluded_id))
    }
}

#[derive(Default)]
pub struct InMemoryTeamRepository {
    store: Mutex<Store<Team>>,
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: &Team) -> DomainResult<Team> {
        let mut store = self.store.lock().unwrap();
        let id = match team.id() {
            Some(id) => id.value(),
            None => store.assign_id(),
        };
        let persisted = Team::from_persistence(
            TeamId::new(id),
            team.tournament_id(),
            team.name().to_string(),
            team.coach().to_string(),
        );
        store.rows.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn find_by_id(&self, id: TeamId) -> DomainResult<Option<Team>> {
        Ok(self.store.lock().unwrap().rows.get(&id.value()).cloned())
    }

    async fn find_by_tournament(&self, tournament_id: TournamentId) -> DomainResult<Vec<Team>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|t| t.tournament_id() == tournament_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: TeamId) -> DomainResult<()> {
        self.store
            .lock()
            .unwrap()
            .rows
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("team", id.value()))
    }
}

#[async_trait]
impl UniqueNameIndex for InMemoryTeamRepository {
    async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .rows
            .values()
            .any(|t| t.name() == name))
    }

    async fn exists_by_name_and_id_not(&self, name: &str, excluded_id: i64) -> DomainResult<bool> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .rows
            .iter()
            .any(|(id, t)| t.name() == name && *id != excluded_id))
    }
}

#[derive(Default)]
pub struct InMemoryPlayerRepository {
    store: Mutex<Store<Player>>,
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn save(&self, player: &Player) -> DomainResult<Player> {
        let mut store = self.store.lock().unwrap();
        let id = match player.id() {
            Some(id) => id.value(),
            None => store.assign_id(),
        };
        let persisted = Player::from_persistence(
            PlayerId::new(id),
            player.team_id(),
            player.name().to_string(),
            player.last_name().to_string(),
            player.identification_number().to_string(),
        );
        store.rows.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn find_by_id(&self, id: PlayerId) -> DomainResult<Option<Player>> {
        Ok(self.store.lock().unwrap().rows.get(&id.value()).cloned())
    }

    async fn find_by_team(&self, team_id: TeamId) -> DomainResult<Vec<Player>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|p| p.team_id() == team_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: PlayerId) -> DomainResult<()> {
        self.store
            .lock()
            .unwrap()
            .rows
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("player", id.value()))
    }

    async fn delete_by_team(&self, team_id: TeamId) -> DomainResult<()> {
        self.store
            .lock()
            .unwrap()
            .rows
            .retain(|_, p| p.team_id() != team_id);
        Ok(())
    }
}

#[async_trait]
impl UniqueIdentityIndex for InMemoryPlayerRepository {
    async fn exists_by_identification_number(&self, number: &str) -> DomainResult<bool> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .rows
            .values()
            .any(|p| p.identification_number() == number))
    }

    async fn exists_by_identification_number_and_id_not(
        &self,
        number: &str,
        excluded_id: i64,
    ) -> DomainResult<bool> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .rows
            .iter()
            .any(|(id, p)| p.identification_number() == number && *id != excluded_id))
    }
}

#[derive(Default)]
pub struct InMemoryMatchRepository {
    store: Mutex<Store<Match>>,
}

impl InMemoryMatchRepository {
    fn matches_filter(m: &Match, filter: &MatchFilter) -> bool {
        if let Some(tournament_id) = filter.tournament_id {
            if m.tournament_id() != tournament_id {
                return false;
            }
        }
        if let Some(team_id) = filter.team_id {
            if !m.involves(team_id) {
                return false;
            }
        }
        if let Some(status) = filter.status {
            if m.status() != status {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn save(&self, m: &Match) -> DomainResult<Match> {
        let mut store = self.store.lock().unwrap();
        let id = match m.id() {
            Some(id) => id.value(),
            None => store.assign_id(),
        };
        let persisted = Match::from_persistence(
            MatchId::new(id),
            m.tournament_id(),
            m.home_team_id(),
            m.away_team_id(),
            m.home_score(),
            m.away_score(),
            m.match_date(),
            m.field().to_string(),
            m.status(),
        );
        store.rows.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn find_by_id(&self, id: MatchId) -> DomainResult<Option<Match>> {
        Ok(self.store.lock().unwrap().rows.get(&id.value()).cloned())
    }

    async fn find_all_by_team(&self, team_id: TeamId) -> DomainResult<Vec<Match>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|m| m.involves(team_id))
            .cloned()
            .collect())
    }

    async fn find_all_by_tournament(
        &self,
        tournament_id: TournamentId,
    ) -> DomainResult<Vec<Match>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|m| m.tournament_id() == tournament_id)
            .cloned()
            .collect())
    }

    async fn search(&self, filter: &MatchFilter) -> DomainResult<Page<Match>> {
        let store = self.store.lock().unwrap();
        let filtered: Vec<Match> = store
            .rows
            .values()
            .filter(|m| Self::matches_filter(m, filter))
            .cloned()
            .collect();
        let total_count = filtered.len() as i64;
        let offset = (filter.page_number as usize) * (filter.page_size as usize);
        let items = filtered
            .into_iter()
            .skip(offset)
            .take(filter.page_size as usize)
            .collect();

        Ok(Page {
            items,
            total_count,
            page_number: filter.page_number,
            page_size: filter.page_size,
        })
    }

    async fn delete_by_team(&self, team_id: TeamId) -> DomainResult<()> {
        self.store
            .lock()
            .unwrap()
            .rows
            .retain(|_, m| !m.involves(team_id));
        Ok(())
    }

    async fn delete_by_tournament(&self, tournament_id: TournamentId) -> DomainResult<()> {
        self.store
            .lock()
            .unwrap()
            .rows
            .retain(|_, m| m.tournament_id() != tournament_id);
        Ok(())
    }
}

/// Event publisher that records every published event for assertions.
#[derive(Default)]
pub struct RecordingEventPublisher {
    events: Mutex<Vec<DomainEvent>>,
}

impl RecordingEventPublisher {
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventPublisher for RecordingEventPublisher {
    fn publish(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// The full set of in-memory ports wired for a test.
pub struct TestContext {
    pub tournaments: Arc<InMemoryTournamentRepository>,
    pub teams: Arc<InMemoryTeamRepository>,
    pub players: Arc<InMemoryPlayerRepository>,
    pub matches: Arc<InMemoryMatchRepository>,
    pub publisher: Arc<RecordingEventPublisher>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            tournaments: Arc::new(InMemoryTournamentRepository::default()),
            teams: Arc::new(InMemoryTeamRepository::default()),
            players: Arc::new(InMemoryPlayerRepository::default()),
            matches: Arc::new(InMemoryMatchRepository::default()),
            publisher: Arc::new(RecordingEventPublisher::default()),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
