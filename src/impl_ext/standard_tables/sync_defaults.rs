pub const DEFAULT_SYNC_MARKER: &str = "[TRELLO_SYNC]";
pub const DEFAULT_EVENT_DURATION_HOURS: i64 = 1;
pub const DEFAULT_SYNC_WINDOW_DAYS: i64 = 365;
