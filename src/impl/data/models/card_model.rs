use crate::entities::{CardLabel, CardSnapshot};

/// Card as returned by the board API
/// (`fields=id,name,desc,due,url,closed,labels`).
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct CardModel {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    due: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    closed: bool,
    #[serde(default)]
    labels: Option<Vec<CardLabelModel>>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct CardLabelModel {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

impl Into<CardSnapshot> for CardModel {
    fn into(self) -> CardSnapshot {
        CardSnapshot {
            id: self.id,
            name: self.name,
            desc: self.desc.unwrap_or_default(),
            due: self.due.filter(|d| !d.trim().is_empty()),
            url: self.url,
            closed: self.closed,
            labels: self
                .labels
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl Into<CardLabel> for CardLabelModel {
    fn into(self) -> CardLabel {
        CardLabel {
            name: self.name.unwrap_or_default(),
            color: self.color.filter(|c| !c.is_empty()),
        }
    }
}
