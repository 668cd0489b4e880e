use crate::{
    domain::logic::label_dictionary::lookup_label,
    entities::{BookingField, BookingRecord},
};

use super::booking_field_fmt::{DESCRIPTION_ORDER, REFERENCE_LABEL};

/// Serializes a [`BookingRecord`] back into canonical description text.
///
/// Output re-parses to the same record: values containing line breaks (and
/// free-text fields) go in block form under their own label line, and the
/// reference trailer is itself a recognised label so it closes any preceding
/// block. A single-line value that starts like a label line stays inline,
/// where it cannot be mistaken for the next label.
pub(crate) struct DescriptionPrinter;

impl DescriptionPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_description(&self, record: &BookingRecord, reference_url: &str) -> String {
        let mut parts: Vec<String> = DESCRIPTION_ORDER
            .iter()
            .filter_map(|field| {
                record.get(*field).map(|value| {
                    if self.uses_block_form(*field, value) {
                        format!("{}:\n{}", field.label(), value)
                    } else {
                        format!("{}: {}", field.label(), value)
                    }
                })
            })
            .collect();
        parts.push(format!("{}: {}", REFERENCE_LABEL, reference_url));
        parts.join("\n\n")
    }

    fn uses_block_form(&self, field: BookingField, value: &str) -> bool {
        if value.contains('\n') {
            return true;
        }
        let looks_like_label = value
            .split_once(':')
            .is_some_and(|(label, _)| lookup_label(label).is_some());
        field.is_multiline() && !looks_like_label
    }
}
