use chrono::{DateTime, Utc};

use crate::entities::ServiceFlagSet;

use super::calendar_event::serialize_instant;

/// Upsert payload for the record store, keyed by `card_id`.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct BookingRow {
    pub card_id: String,
    pub trello_url: String,
    pub card_name: String,
    pub event_date: Option<String>,

    pub name: Option<String>,
    pub sid: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub event_date_text: Option<String>,
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub backdrops: Option<String>,
    pub combo: Option<String>,
    pub printer_info: Option<String>,
    pub extras: Option<String>,
    pub payment_option: Option<String>,

    #[serde(flatten)]
    pub service_flags: ServiceFlagSet,

    #[serde(serialize_with = "serialize_instant")]
    pub updated_on: DateTime<Utc>,
}
