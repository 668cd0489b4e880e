use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::CardSnapshot;

/// Fetches the current cards of the configured board.
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn fetch_cards(&self) -> Result<Vec<CardSnapshot>, ServerError>;
}
