use std::collections::BTreeMap;

use crate::ext::standard_tables::{
    standard_label_colors, standard_service_flags, DEFAULT_EVENT_DURATION_HOURS,
    DEFAULT_SYNC_MARKER, DEFAULT_SYNC_WINDOW_DAYS,
};

/// Explicit configuration for the assembler and the sync driver. Built once
/// at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub board_id: Option<String>,
    pub calendar_id: Option<String>,
    /// First line of every produced event description.
    pub sync_marker: String,
    pub event_duration_hours: i64,
    pub sync_window_days: i64,
    /// Board label color -> calendar color identifier.
    pub label_colors: BTreeMap<String, String>,
    /// Flag identifier -> category label aliases (matched after trim and
    /// lower-casing).
    pub service_flags: BTreeMap<String, Vec<String>>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            board_id: None,
            calendar_id: None,
            sync_marker: DEFAULT_SYNC_MARKER.to_string(),
            event_duration_hours: DEFAULT_EVENT_DURATION_HOURS,
            sync_window_days: DEFAULT_SYNC_WINDOW_DAYS,
            label_colors: standard_label_colors(),
            service_flags: standard_service_flags(),
        }
    }
}
