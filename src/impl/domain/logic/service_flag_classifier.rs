use std::collections::BTreeMap;

use crate::entities::{CardLabel, ServiceFlagSet};

/// Maps category label names onto the configured service flags.
pub(crate) struct ServiceFlagClassifier<'a> {
    aliases: &'a BTreeMap<String, Vec<String>>,
}

impl<'a> ServiceFlagClassifier<'a> {
    pub(crate) fn new(aliases: &'a BTreeMap<String, Vec<String>>) -> Self {
        Self { aliases }
    }

    pub(crate) fn classify(&self, labels: &[CardLabel]) -> ServiceFlagSet {
        let names: Vec<String> = labels
            .iter()
            .map(|l| l.name.trim().to_lowercase())
            .collect();
        ServiceFlagSet(
            self.aliases
                .iter()
                .map(|(flag, aliases)| {
                    let hit = aliases.iter().any(|alias| {
                        let alias = alias.trim().to_lowercase();
                        names.iter().any(|n| *n == alias)
                    });
                    (flag.clone(), hit)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn label(name: &str) -> CardLabel {
        CardLabel {
            name: name.into(),
            color: None,
        }
    }

    fn aliases() -> BTreeMap<String, Vec<String>> {
        BTreeMap::from([
            (
                "printer_flag".to_string(),
                vec!["printer".to_string(), "prentari".to_string()],
            ),
            ("props_flag".to_string(), vec!["Aukahlutir".to_string()]),
        ])
    }

    #[test]
    fn no_labels_means_all_false() {
        let aliases = aliases();
        let flags = ServiceFlagClassifier::new(&aliases).classify(&[]);
        assert_eq!(flags.iter().count(), 2);
        assert_eq!(flags.enabled().count(), 0);
    }

    #[test]
    fn matching_label_sets_exactly_that_flag() {
        let aliases = aliases();
        let flags = ServiceFlagClassifier::new(&aliases).classify(&[label("printer")]);
        assert_eq!(flags.enabled().collect::<Vec<_>>(), vec!["printer_flag"]);
        assert_eq!(flags.get("props_flag"), Some(false));
    }

    #[test]
    fn names_are_trimmed_and_lower_cased() {
        let aliases = aliases();
        let flags = ServiceFlagClassifier::new(&aliases)
            .classify(&[label("  PRENTARI "), label("aukahlutir"), label("ókunnugt")]);
        assert_eq!(
            flags.enabled().collect::<Vec<_>>(),
            vec!["printer_flag", "props_flag"]
        );
    }
}
