use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{FailureNotice, RunSummary};

#[async_trait]
pub trait RunLogger: Send + Sync {
    async fn start_run(&self, cards_total: usize) -> Result<(), ServerError>;

    async fn log_failure(&self, notice: &FailureNotice) -> Result<(), ServerError>;

    async fn finish_run(&self, summary: &RunSummary) -> Result<(), ServerError>;
}
