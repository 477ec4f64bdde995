use crate::domain::events::{DomainEvent, EventPublisher};

/// In-process event publisher that writes events to the application
/// log. Dispatch happens on the caller's task; there is no queue and
/// no retry.
pub struct LoggingEventPublisher;

impl EventPublisher for LoggingEventPublisher {
    fn publish(&self, event: DomainEvent) {
        tracing::info!(?event, "domain event published");
    }
}
