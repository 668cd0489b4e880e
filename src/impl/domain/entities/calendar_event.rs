use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Start or end of a calendar event, always expressed in UTC.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct EventTime {
    #[serde(rename = "dateTime", serialize_with = "serialize_instant")]
    pub date_time: DateTime<Utc>,
    #[serde(rename = "timeZone")]
    pub time_zone: &'static str,
}

/// Event-creation request handed to the calendar collaborator.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct CalendarEventRequest {
    pub summary: String,
    /// Canonical description, first line is the sync marker.
    pub description: String,
    pub start: EventTime,
    pub end: EventTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "colorId", skip_serializing_if = "Option::is_none")]
    pub color_id: Option<String>,
}

// --

impl EventTime {
    pub fn utc(date_time: DateTime<Utc>) -> Self {
        Self {
            date_time,
            time_zone: "UTC",
        }
    }
}

pub(crate) fn serialize_instant<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
        .serialize(serializer)
}
