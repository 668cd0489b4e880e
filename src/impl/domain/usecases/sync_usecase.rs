use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::{event_assembler::EventAssembler, utils::truncate_chars},
        repositories::{
            booking_store::BookingStore, calendar_gateway::CalendarGateway,
            card_source::CardSource, run_logger::RunLogger,
        },
    },
    entities::{
        AssembledCard, CardSnapshot, FailureNotice, ProcessingStep, RunStatus, RunSummary,
        SyncConfig,
    },
    errors::TimeWindowOverflow,
};

#[async_trait]
pub trait SyncUsecase: Send + Sync {
    /// Replaces every previously synced calendar event with fresh ones built
    /// from the board, and upserts one booking row per synced card.
    async fn run(&self, now: DateTime<Utc>) -> Result<RunSummary, ServerError>;
}

pub(crate) struct SyncUsecaseImpl<C, G, B, L>
where
    C: CardSource,
    G: CalendarGateway,
    B: BookingStore,
    L: RunLogger,
{
    config: SyncConfig,
    card_source: C,
    calendar: G,
    booking_store: B,
    run_logger: L,
}

enum CardOutcome {
    Processed,
    Skipped,
    Failed(ProcessingStep, ServerError),
}

#[derive(Default)]
struct RunCounters {
    processed: usize,
    skipped: usize,
    failed: usize,
}

#[async_trait]
impl<C, G, B, L> SyncUsecase for SyncUsecaseImpl<C, G, B, L>
where
    C: CardSource,
    G: CalendarGateway,
    B: BookingStore,
    L: RunLogger,
{
    async fn run(&self, now: DateTime<Utc>) -> Result<RunSummary, ServerError> {
        let cards = self.card_source.fetch_cards().await?;
        let total = cards.len();
        self.run_logger.start_run(total).await?;
        log::info!("sync run started with {} cards", total);

        let mut counters = RunCounters::default();
        match self.sync_cards(&cards, now, &mut counters).await {
            Ok(()) => {
                let status = if counters.failed == 0 {
                    RunStatus::Success
                } else {
                    RunStatus::Partial
                };
                let summary = counters.summary(total, status, None);
                log::info!(
                    "sync run finished ({:?}): {} processed, {} skipped, {} failed",
                    summary.status,
                    summary.processed,
                    summary.skipped,
                    summary.failed
                );
                self.finish(&summary).await;
                Ok(summary)
            }
            Err(e) => {
                let summary = counters.summary(total, RunStatus::Failed, Some(e.to_string()));
                log::warn!("sync run aborted: {}", e);
                self.finish(&summary).await;
                Err(e)
            }
        }
    }
}

impl<C, G, B, L> SyncUsecaseImpl<C, G, B, L>
where
    C: CardSource,
    G: CalendarGateway,
    B: BookingStore,
    L: RunLogger,
{
    pub(crate) fn new(
        config: SyncConfig,
        card_source: C,
        calendar: G,
        booking_store: B,
        run_logger: L,
    ) -> Self {
        Self {
            config,
            card_source,
            calendar,
            booking_store,
            run_logger,
        }
    }

    async fn sync_cards(
        &self,
        cards: &[CardSnapshot],
        now: DateTime<Utc>,
        counters: &mut RunCounters,
    ) -> Result<(), ServerError> {
        let time_max = Duration::try_days(self.config.sync_window_days)
            .and_then(|d| now.checked_add_signed(d))
            .ok_or_else(|| TimeWindowOverflow::new(&now.to_rfc3339()))?;
        let deleted = self
            .calendar
            .delete_tagged_events(now, time_max, &self.config.sync_marker)
            .await?;
        log::info!("deleted {} previously synced events", deleted);

        let assembler = EventAssembler::new(&self.config, now);
        for card in cards {
            match self.sync_card(&assembler, card).await {
                CardOutcome::Processed => counters.processed += 1,
                CardOutcome::Skipped => counters.skipped += 1,
                CardOutcome::Failed(step, e) => {
                    counters.failed += 1;
                    log::warn!("card '{}' failed at {}: {}", card.id, step, e);
                    let notice = FailureNotice {
                        card_id: card.id.clone(),
                        step,
                        error: truncate_chars(&e.to_string(), FailureNotice::MAX_ERROR_CHARS),
                    };
                    if let Err(log_err) = self.run_logger.log_failure(&notice).await {
                        log::warn!("could not record failure of card '{}': {}", card.id, log_err);
                    }
                }
            }
        }
        Ok(())
    }

    async fn sync_card(&self, assembler: &EventAssembler<'_>, card: &CardSnapshot) -> CardOutcome {
        if card.closed || card.due.is_none() {
            return CardOutcome::Skipped;
        }
        let AssembledCard { event, row, .. } = match assembler.assemble(card) {
            Ok(Some(assembled)) => assembled,
            Ok(None) => return CardOutcome::Skipped,
            Err(e) => return CardOutcome::Failed(ProcessingStep::AssembleCard, e),
        };
        if let Err(e) = self.booking_store.upsert_booking(&row).await {
            return CardOutcome::Failed(ProcessingStep::UpsertBooking, e);
        }
        if let Err(e) = self.calendar.insert_event(&event).await {
            return CardOutcome::Failed(ProcessingStep::InsertEvent, e);
        }
        CardOutcome::Processed
    }

    async fn finish(&self, summary: &RunSummary) {
        if let Err(e) = self.run_logger.finish_run(summary).await {
            log::warn!("could not record end of sync run: {}", e);
        }
    }
}

impl RunCounters {
    fn summary(&self, total: usize, status: RunStatus, error: Option<String>) -> RunSummary {
        RunSummary {
            total,
            processed: self.processed,
            skipped: self.skipped,
            failed: self.failed,
            status,
            error: error.map(|e| truncate_chars(&e, FailureNotice::MAX_ERROR_CHARS)),
        }
    }
}
