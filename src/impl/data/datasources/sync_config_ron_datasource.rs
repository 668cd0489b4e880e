use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::sync_config_model::SyncConfigModel,
    entities::SyncConfig,
    errors::{InvalidRon, ReadError},
};

#[async_trait]
pub(crate) trait SyncConfigRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<SyncConfig, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<SyncConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct SyncConfigRonDatasourceImpl;

impl SyncConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SyncConfigRonDatasource for SyncConfigRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<SyncConfig, ServerError> {
        let model: SyncConfigModel =
            from_str(s).map_err(|e| InvalidRon::with_debug("SyncConfig", &e))?;
        Ok(model.into())
    }

    async fn from_file<P>(&self, path: P) -> Result<SyncConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(
            &tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ReadError::with_debug(&e))?,
        )
    }
}
