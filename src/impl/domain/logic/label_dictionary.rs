use std::{collections::HashMap, sync::LazyLock};

use crate::entities::BookingField;

use super::label_normalizer::normalize_label;

/// What a recognised label line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LabelTarget {
    Field(BookingField),
    /// Trailer line pointing back at the card. Closes the current field but
    /// carries no value.
    Reference,
}

/// Keys are already in normalized form (see [`normalize_label`]).
static LABELS: LazyLock<HashMap<&'static str, LabelTarget>> = LazyLock::new(|| {
    use BookingField::*;
    use LabelTarget::*;
    HashMap::from([
        ("nafn", Field(Name)),
        ("fullt nafn", Field(Name)),
        ("kennitala greidanda", Field(PayerNationalId)),
        ("kennitala", Field(PayerNationalId)),
        ("netfang", Field(Email)),
        ("email", Field(Email)),
        ("e-mail", Field(Email)),
        ("simanumer", Field(Phone)),
        ("simi", Field(Phone)),
        ("farsimi", Field(Phone)),
        ("dagsetning vidburdar", Field(EventDate)),
        ("dagsetning", Field(EventDate)),
        ("timasetning vidburdar", Field(EventTime)),
        ("timasetning", Field(EventTime)),
        ("stadsetning", Field(Location)),
        ("heimilisfang", Field(Location)),
        ("annad", Field(Notes)),
        ("athugasemdir", Field(Notes)),
        ("osk um bakgrunn", Field(Backdrop)),
        ("bakgrunnur", Field(Backdrop)),
        ("pakka tilbod", Field(Package)),
        ("pakki", Field(Package)),
        ("ljosmynda prentari", Field(Printer)),
        ("prentari", Field(Printer)),
        ("greidslumati", Field(PaymentMethod)),
        ("skemmtilegir aukahlutir", Field(Extras)),
        ("aukahlutir", Field(Extras)),
        ("trello card", Reference),
        ("tengill", Reference),
    ])
});

/// Resolves a raw label (text before the first colon) to its target.
pub(crate) fn lookup_label(raw_label: &str) -> Option<LabelTarget> {
    let key = normalize_label(raw_label);
    if key.is_empty() {
        return None;
    }
    LABELS.get(key.as_str()).copied()
}
