use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::BookingRow;

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Inserts or replaces the row with the same `card_id`.
    async fn upsert_booking(&self, row: &BookingRow) -> Result<(), ServerError>;
}
