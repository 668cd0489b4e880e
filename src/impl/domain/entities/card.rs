/// A category label attached to a card. The color tag is the board's coarse
/// color name (ex. "green"), absent for colorless labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLabel {
    pub name: String,
    pub color: Option<String>,
}

/// One card as fetched from the task board. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSnapshot {
    pub id: String,
    pub name: String,
    pub desc: String,
    /// ISO8601, possibly with a literal 'Z' suffix.
    pub due: Option<String>,
    pub url: String,
    pub closed: bool,
    pub labels: Vec<CardLabel>,
}
