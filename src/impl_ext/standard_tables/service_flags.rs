use std::collections::BTreeMap;

pub const FLAG_PRINTER: &str = "has_printer";
pub const FLAG_BACKDROP: &str = "has_backdrop";
pub const FLAG_PROPS: &str = "has_props";
pub const FLAG_GUESTBOOK: &str = "has_guestbook";

/// Default alias table for the photo-booth add-ons. Aliases are matched
/// against trimmed, lower-cased category label names.
pub fn standard_service_flags() -> BTreeMap<String, Vec<String>> {
    [
        (
            FLAG_PRINTER,
            &["printer", "prentari", "ljósmynda prentari"][..],
        ),
        (FLAG_BACKDROP, &["backdrop", "bakgrunnur", "ósk um bakgrunn"][..]),
        (FLAG_PROPS, &["props", "aukahlutir", "skemmtilegir aukahlutir"][..]),
        (FLAG_GUESTBOOK, &["guestbook", "gestabók"][..]),
    ]
    .into_iter()
    .map(|(flag, aliases)| {
        (
            flag.to_string(),
            aliases.iter().map(|a| a.to_string()).collect(),
        )
    })
    .collect()
}
