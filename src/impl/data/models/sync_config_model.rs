use std::collections::BTreeMap;

use crate::entities::SyncConfig;

/// On-disk (RON) shape of [`SyncConfig`]. Every key is optional; absent keys
/// fall back to the standard tables.
#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SyncConfigModel {
    board_id: Option<String>,
    calendar_id: Option<String>,
    sync_marker: Option<String>,
    event_duration_hours: Option<i64>,
    sync_window_days: Option<i64>,
    label_colors: Option<BTreeMap<String, String>>,
    service_flags: Option<BTreeMap<String, Vec<String>>>,
}

impl Into<SyncConfig> for SyncConfigModel {
    fn into(self) -> SyncConfig {
        let defaults = SyncConfig::default();
        SyncConfig {
            board_id: self.board_id,
            calendar_id: self.calendar_id,
            sync_marker: self.sync_marker.unwrap_or(defaults.sync_marker),
            event_duration_hours: self
                .event_duration_hours
                .unwrap_or(defaults.event_duration_hours),
            sync_window_days: self.sync_window_days.unwrap_or(defaults.sync_window_days),
            label_colors: self.label_colors.unwrap_or(defaults.label_colors),
            service_flags: self.service_flags.unwrap_or(defaults.service_flags),
        }
    }
}
