use crate::domain::team::TeamEvent;
use crate::domain::tournament::TournamentEvent;

/// Envelope over the per-aggregate event enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainEvent {
    Tournament(TournamentEvent),
    Team(TeamEvent),
}

impl From<TournamentEvent> for DomainEvent {
    fn from(event: TournamentEvent) -> Self {
        Self::Tournament(event)
    }
}

impl From<TeamEvent> for DomainEvent {
    fn from(event: TeamEvent) -> Self {
        Self::Team(event)
    }
}

/// Fire-and-forget in-process event dispatch.
///
/// Use cases publish after the corresponding write succeeds; there is
/// no acknowledgement and no delivery guarantee beyond the dispatch
/// itself. Injected explicitly so the event contract stays visible and
/// testable.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: DomainEvent);
}
