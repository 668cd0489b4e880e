/// Pipeline step during which a card failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStep {
    AssembleCard,
    UpsertBooking,
    InsertEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Running,
    Success,
    Partial,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct FailureNotice {
    pub card_id: String,
    pub step: ProcessingStep,
    /// At most [`FailureNotice::MAX_ERROR_CHARS`] characters.
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub status: RunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// --

impl FailureNotice {
    pub const MAX_ERROR_CHARS: usize = 1000;
}

impl std::fmt::Display for ProcessingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProcessingStep::AssembleCard => "assemble_card",
            ProcessingStep::UpsertBooking => "upsert_booking",
            ProcessingStep::InsertEvent => "insert_event",
        };
        write!(f, "{}", s)
    }
}
