use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;

use crate::entities::CalendarEventRequest;

#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// Deletes every event in `[time_min, time_max]` whose description
    /// contains `marker`. Returns the number of deleted events.
    async fn delete_tagged_events(
        &self,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
        marker: &str,
    ) -> Result<usize, ServerError>;

    async fn insert_event(&self, event: &CalendarEventRequest) -> Result<(), ServerError>;
}
