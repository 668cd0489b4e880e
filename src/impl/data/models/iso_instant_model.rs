use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use fractic_server_error::ServerError;

use crate::errors::InvalidDueTimestamp;

/// A card due value. Accepts RFC3339 (including the board's trailing 'Z'),
/// and offset-less timestamps which are taken as UTC.
#[derive(Debug)]
pub(crate) struct IsoInstantModel(DateTime<Utc>);

impl FromStr for IsoInstantModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(IsoInstantModel(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| IsoInstantModel(naive.and_utc()))
            .map_err(|e| InvalidDueTimestamp::with_debug(s, &e))
    }
}

impl Into<DateTime<Utc>> for IsoInstantModel {
    fn into(self) -> DateTime<Utc> {
        self.0
    }
}
