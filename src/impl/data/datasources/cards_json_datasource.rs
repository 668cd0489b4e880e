use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::card_model::CardModel,
    entities::CardSnapshot,
    errors::{InvalidJson, ReadError},
};

#[async_trait]
pub(crate) trait CardsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<CardSnapshot>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<CardSnapshot>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct CardsJsonDatasourceImpl;

impl CardsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CardsJsonDatasource for CardsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<CardSnapshot>, ServerError> {
        let cards: Vec<CardModel> =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("card list", &e))?;
        Ok(cards.into_iter().map(Into::into).collect())
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<CardSnapshot>, ServerError>
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
