use std::collections::BTreeMap;

/// Board label color -> Google Calendar event `colorId`.
pub fn standard_label_colors() -> BTreeMap<String, String> {
    [
        ("green", "2"),   // Sage
        ("yellow", "5"),  // Banana
        ("orange", "6"),  // Tangerine
        ("red", "11"),    // Tomato
        ("purple", "3"),  // Grape
        ("blue", "7"),    // Peacock
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
