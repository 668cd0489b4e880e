use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(
    InvalidJson,
    "Invalid {payload_type} (invalid JSON format).",
    { payload_type: &str }
);
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(
    InvalidDueTimestamp,
    "Invalid due timestamp: '{due}'. Expected an ISO8601 instant.",
    { due: &str }
);

// Configuration-related.
define_client_error!(
    InvalidEventDuration,
    "Invalid event duration: {hours} hours. Duration must be positive.",
    { hours: i64 }
);
define_client_error!(
    InvalidSyncWindow,
    "Invalid sync window: {days} days. Window must be positive.",
    { days: i64 }
);

// Time-related.
define_internal_error!(
    TimeWindowOverflow,
    "Time window overflows from '{start}'.",
    { start: &str }
);
