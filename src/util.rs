use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        cards_json_datasource::{CardsJsonDatasource as _, CardsJsonDatasourceImpl},
        sync_config_ron_datasource::{SyncConfigRonDatasource as _, SyncConfigRonDatasourceImpl},
    },
    domain::{
        logic::{
            description_parser::parse_description, event_assembler::EventAssembler,
            service_flag_classifier::ServiceFlagClassifier,
        },
        usecases::sync_usecase::SyncUsecaseImpl,
    },
    entities::{
        AssembledCard, BookingRecord, CardLabel, CardSnapshot, RunSummary, ServiceFlagSet,
        SyncConfig,
    },
    errors::{InvalidEventDuration, InvalidSyncWindow},
    presentation::description_printer::DescriptionPrinter,
    repositories::{BookingStore, CalendarGateway, CardSource, RunLogger},
    usecases::SyncUsecase,
};

/// Entry point of the crate. Holds the configuration; every operation is a
/// pure function of its inputs plus that configuration.
pub struct BookingSyncUtil {
    config: SyncConfig,
    printer: DescriptionPrinter,
}

impl BookingSyncUtil {
    /// Rejects configurations the assembler and the sync driver cannot work
    /// with. Every other constructor funnels through here.
    pub fn new(config: SyncConfig) -> Result<Self, ServerError> {
        if config.event_duration_hours <= 0 {
            return Err(InvalidEventDuration::new(config.event_duration_hours));
        }
        if config.sync_window_days <= 0 {
            return Err(InvalidSyncWindow::new(config.sync_window_days));
        }
        Ok(Self {
            config,
            printer: DescriptionPrinter::new(),
        })
    }

    pub fn from_config_string(ron: &str) -> Result<Self, ServerError> {
        Self::new(SyncConfigRonDatasourceImpl::new().from_string(ron)?)
    }

    pub async fn from_config_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        Self::new(SyncConfigRonDatasourceImpl::new().from_file(path).await?)
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn cards_from_json(&self, json: &str) -> Result<Vec<CardSnapshot>, ServerError> {
        CardsJsonDatasourceImpl::new().from_string(json)
    }

    pub async fn cards_from_file<P>(&self, path: P) -> Result<Vec<CardSnapshot>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        CardsJsonDatasourceImpl::new().from_file(path).await
    }

    pub fn parse_description(&self, desc: &str) -> BookingRecord {
        parse_description(desc)
    }

    pub fn reconstruct_description(&self, record: &BookingRecord, reference_url: &str) -> String {
        self.printer.print_description(record, reference_url)
    }

    pub fn classify_labels(&self, labels: &[CardLabel]) -> ServiceFlagSet {
        ServiceFlagClassifier::new(&self.config.service_flags).classify(labels)
    }

    /// `Ok(None)` for cards that produce no event (no due timestamp, or due
    /// before `now`); `Err` when the due value is not a valid instant.
    pub fn assemble_card(
        &self,
        card: &CardSnapshot,
        now: DateTime<Utc>,
    ) -> Result<Option<AssembledCard>, ServerError> {
        EventAssembler::new(&self.config, now).assemble(card)
    }

    /// Runs one full synchronization against the given collaborators.
    pub async fn sync<C, G, B, L>(
        &self,
        card_source: C,
        calendar: G,
        booking_store: B,
        run_logger: L,
        now: DateTime<Utc>,
    ) -> Result<RunSummary, ServerError>
    where
        C: CardSource,
        G: CalendarGateway,
        B: BookingStore,
        L: RunLogger,
    {
        SyncUsecaseImpl::new(
            self.config.clone(),
            card_source,
            calendar,
            booking_store,
            run_logger,
        )
        .run(now)
        .await
    }
}
