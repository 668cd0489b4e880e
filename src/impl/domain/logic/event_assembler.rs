use std::str::FromStr as _;

use chrono::{DateTime, Duration, Utc};
use fractic_server_error::ServerError;

use crate::{
    data::models::iso_instant_model::IsoInstantModel,
    entities::{
        AssembledCard, BookingRecord, BookingRow, CalendarEventRequest, CardSnapshot, EventTime,
        ServiceFlagSet, SyncConfig,
    },
    errors::TimeWindowOverflow,
    presentation::description_printer::DescriptionPrinter,
};

use super::{
    description_parser::parse_description, service_flag_classifier::ServiceFlagClassifier,
    utils::national_id_digits,
};

/// Combines parser, classifier and reconstructor output with card metadata
/// into the calendar and record-store payloads.
///
/// `now` is fixed at construction so that one batch of cards is judged
/// against a single instant.
pub(crate) struct EventAssembler<'a> {
    config: &'a SyncConfig,
    now: DateTime<Utc>,
    printer: DescriptionPrinter,
}

impl<'a> EventAssembler<'a> {
    pub(crate) fn new(config: &'a SyncConfig, now: DateTime<Utc>) -> Self {
        Self {
            config,
            now,
            printer: DescriptionPrinter::new(),
        }
    }

    /// Returns `Ok(None)` for cards that must not produce an event (no due
    /// timestamp, or due strictly before `now`). A due value that is not a
    /// valid instant is an error for this card only.
    pub(crate) fn assemble(&self, card: &CardSnapshot) -> Result<Option<AssembledCard>, ServerError> {
        let Some(due) = card.due.as_deref() else {
            log::debug!("card '{}' has no due timestamp, skipping", card.id);
            return Ok(None);
        };
        let start: DateTime<Utc> = IsoInstantModel::from_str(due)?.into();
        if start < self.now {
            log::debug!("card '{}' is due in the past ({}), skipping", card.id, start);
            return Ok(None);
        }
        let end = Duration::try_hours(self.config.event_duration_hours)
            .and_then(|d| start.checked_add_signed(d))
            .ok_or_else(|| TimeWindowOverflow::new(&start.to_rfc3339()))?;

        let record = parse_description(&card.desc);
        let service_flags =
            ServiceFlagClassifier::new(&self.config.service_flags).classify(&card.labels);
        let canonical = self.printer.print_description(&record, &card.url);

        let event = CalendarEventRequest {
            summary: record.name.clone().unwrap_or_else(|| card.name.clone()),
            description: format!("{}\n{}", self.config.sync_marker, canonical),
            start: EventTime::utc(start),
            end: EventTime::utc(end),
            location: record.location.clone(),
            color_id: self.color_id(card),
        };
        let row = self.booking_row(card, &record, &service_flags);

        Ok(Some(AssembledCard {
            start,
            record,
            service_flags,
            event,
            row,
        }))
    }

    /// Only the first label decides the color; an unmapped color yields none.
    fn color_id(&self, card: &CardSnapshot) -> Option<String> {
        card.labels
            .first()
            .and_then(|label| label.color.as_ref())
            .and_then(|color| self.config.label_colors.get(color))
            .cloned()
    }

    fn booking_row(
        &self,
        card: &CardSnapshot,
        record: &BookingRecord,
        service_flags: &ServiceFlagSet,
    ) -> BookingRow {
        BookingRow {
            card_id: card.id.clone(),
            trello_url: card.url.clone(),
            card_name: card.name.clone(),
            event_date: card.due.clone(),
            name: record.name.clone(),
            sid: record
                .payer_national_id
                .as_deref()
                .and_then(national_id_digits),
            email: record.email.clone(),
            mobile: record.phone.clone(),
            event_date_text: record.event_date.clone(),
            event_time: record.event_time.clone(),
            location: record.location.clone(),
            notes: record.notes.clone(),
            backdrops: record.backdrop.clone(),
            combo: record.package.clone(),
            printer_info: record.printer.clone(),
            extras: record.extras.clone(),
            payment_option: record.payment_method.clone(),
            service_flags: service_flags.clone(),
            updated_on: self.now,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::CardLabel;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
    }

    fn card(desc: &str, due: Option<&str>, colors: &[Option<&str>]) -> CardSnapshot {
        CardSnapshot {
            id: "card-1".into(),
            name: "Brúðkaup".into(),
            desc: desc.into(),
            due: due.map(Into::into),
            url: "https://trello.com/c/card-1".into(),
            closed: false,
            labels: colors
                .iter()
                .map(|c| CardLabel {
                    name: "prentari".into(),
                    color: c.map(Into::into),
                })
                .collect(),
        }
    }

    #[test]
    fn builds_event_and_row() {
        let config = SyncConfig::default();
        let assembler = EventAssembler::new(&config, now());
        let assembled = assembler
            .assemble(&card(
                "Nafn: Jón\nKennitala greiðanda: 010101-2389\nStaðsetning: Harpa",
                Some("2030-06-01T18:00:00.000Z"),
                &[Some("red"), Some("green")],
            ))
            .unwrap()
            .unwrap();

        assert_eq!(assembled.event.summary, "Jón");
        assert_eq!(assembled.event.location.as_deref(), Some("Harpa"));
        assert_eq!(assembled.event.color_id.as_deref(), Some("11"));
        assert_eq!(
            assembled.event.end.date_time - assembled.event.start.date_time,
            Duration::hours(1)
        );
        assert!(assembled.event.description.starts_with("[TRELLO_SYNC]\nNafn: Jón\n"));
        assert!(assembled
            .event
            .description
            .ends_with("Trello card: https://trello.com/c/card-1"));
        assert_eq!(assembled.row.sid.as_deref(), Some("0101012389"));
        assert_eq!(assembled.row.updated_on, now());
        assert!(assembled.service_flags.is_set("has_printer"));
    }

    #[test]
    fn empty_description_still_yields_minimal_event() {
        let config = SyncConfig::default();
        let assembled = EventAssembler::new(&config, now())
            .assemble(&card("bara texti", Some("2030-06-01T18:00:00Z"), &[]))
            .unwrap()
            .unwrap();
        assert_eq!(assembled.event.summary, "Brúðkaup");
        assert!(assembled.event.location.is_none());
        assert!(assembled.event.color_id.is_none());
        assert_eq!(
            assembled.event.description,
            "[TRELLO_SYNC]\nTrello card: https://trello.com/c/card-1"
        );
    }

    #[test]
    fn first_label_with_unmapped_color_gives_no_color() {
        let config = SyncConfig::default();
        let assembled = EventAssembler::new(&config, now())
            .assemble(&card(
                "",
                Some("2030-06-01T18:00:00Z"),
                &[Some("black"), Some("green")],
            ))
            .unwrap()
            .unwrap();
        assert!(assembled.event.color_id.is_none());
    }

    #[test]
    fn excludes_missing_and_past_due() {
        let config = SyncConfig::default();
        let assembler = EventAssembler::new(&config, now());
        assert!(assembler.assemble(&card("Nafn: A", None, &[])).unwrap().is_none());
        assert!(assembler
            .assemble(&card("Nafn: A", Some("2029-12-31T23:59:59Z"), &[]))
            .unwrap()
            .is_none());
        assert!(assembler
            .assemble(&card("Nafn: A", Some("2030-01-01T00:00:00Z"), &[]))
            .unwrap()
            .is_some());
    }

    #[test]
    fn invalid_due_is_an_error() {
        let config = SyncConfig::default();
        assert!(EventAssembler::new(&config, now())
            .assemble(&card("", Some("á morgun"), &[]))
            .is_err());
    }

    #[test]
    fn honours_configured_duration() {
        let config = SyncConfig {
            event_duration_hours: 4,
            ..Default::default()
        };
        let assembled = EventAssembler::new(&config, now())
            .assemble(&card("", Some("2030-06-01T18:00:00Z"), &[]))
            .unwrap()
            .unwrap();
        assert_eq!(
            assembled.event.end.date_time,
            Utc.with_ymd_and_hms(2030, 6, 1, 22, 0, 0).unwrap()
        );
    }
}
