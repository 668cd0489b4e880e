use chrono::{DateTime, Utc};

use super::{
    booking::BookingRecord, booking_row::BookingRow, calendar_event::CalendarEventRequest,
    service_flags::ServiceFlagSet,
};

/// Everything derived from one card, ready for the calendar and record-store
/// collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledCard {
    pub start: DateTime<Utc>,
    pub record: BookingRecord,
    pub service_flags: ServiceFlagSet,
    pub event: CalendarEventRequest,
    pub row: BookingRow,
}
