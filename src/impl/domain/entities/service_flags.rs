use std::collections::BTreeMap;

/// Boolean add-on flags derived from a card's category labels. The key set is
/// fixed by the configured alias table; every flag starts out false.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde_derive::Serialize)]
#[serde(transparent)]
pub struct ServiceFlagSet(pub(crate) BTreeMap<String, bool>);

impl ServiceFlagSet {
    pub fn get(&self, flag: &str) -> Option<bool> {
        self.0.get(flag).copied()
    }

    pub fn is_set(&self, flag: &str) -> bool {
        self.get(flag).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, v)| *v).map(|(k, _)| k)
    }
}
