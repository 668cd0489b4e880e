use crate::entities::{BookingField, BookingRecord};

use super::label_dictionary::{lookup_label, LabelTarget};

/// Line boundaries recognised besides "\r\n" (which is folded to "\n" first).
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

enum ParserState {
    Idle,
    Collecting {
        field: BookingField,
        buffer: Vec<String>,
    },
}

/// Line-oriented state machine turning a card description into a
/// [`BookingRecord`].
///
/// Never fails: unknown labels and stray text outside an active field are
/// dropped. A label seen twice keeps its last value.
pub(crate) struct DescriptionParser {
    record: BookingRecord,
    state: ParserState,
}

impl DescriptionParser {
    pub(crate) fn new() -> Self {
        Self {
            record: BookingRecord::default(),
            state: ParserState::Idle,
        }
    }

    pub(crate) fn parse(mut self, desc: &str) -> BookingRecord {
        for raw in desc.replace("\r\n", "\n").split(LINE_BREAKS) {
            self.consume(raw);
        }
        self.flush();
        self.record
    }

    fn consume(&mut self, raw: &str) {
        let line = raw.trim_end();

        if line.is_empty() {
            if let ParserState::Collecting { buffer, .. } = &mut self.state {
                buffer.push(String::new());
            }
            return;
        }

        if let Some((label, value)) = line.split_once(':') {
            if let Some(target) = lookup_label(label) {
                self.flush();
                if let LabelTarget::Field(field) = target {
                    let value = value.trim();
                    if value.is_empty() {
                        self.state = ParserState::Collecting {
                            field,
                            buffer: Vec::new(),
                        };
                    } else {
                        *self.record.slot_mut(field) = Some(value.to_string());
                    }
                }
                return;
            }
        }

        // Continuation line (or unrecognised label).
        match &mut self.state {
            ParserState::Collecting { buffer, .. } => buffer.push(line.to_string()),
            ParserState::Idle => log::trace!("dropping stray description line: {:?}", line),
        }
    }

    /// Moves the accumulated buffer into the record and returns to idle.
    fn flush(&mut self) {
        if let ParserState::Collecting { field, buffer } =
            std::mem::replace(&mut self.state, ParserState::Idle)
        {
            let joined = buffer.join("\n");
            let value = joined.trim();
            if !value.is_empty() {
                *self.record.slot_mut(field) = Some(value.to_string());
            }
        }
    }
}

/// Parses one card description.
pub(crate) fn parse_description(desc: &str) -> BookingRecord {
    DescriptionParser::new().parse(desc)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inline_and_block_values() {
        let record = parse_description("Nafn: Jón\n\nNetfang:\n\njon@example.com\n");
        assert_eq!(
            record,
            BookingRecord {
                name: Some("Jón".into()),
                email: Some("jon@example.com".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn single_inline_label_sets_only_that_field() {
        let record = parse_description("Greiðslumáti: Millifærsla");
        assert_eq!(
            record,
            BookingRecord {
                payment_method: Some("Millifærsla".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn accent_and_case_variants_are_equivalent() {
        let a = parse_description("Kennitala Greiðanda: 010101-2389\nSímanúmer: 5551234");
        let b = parse_description("kennitala greidanda: 010101-2389\nSIMANUMER: 5551234");
        assert_eq!(a, b);
        assert_eq!(a.payer_national_id.as_deref(), Some("010101-2389"));
    }

    #[test]
    fn multi_line_block_keeps_inner_breaks() {
        let desc = "Annað:\n\nFyrsta lína\n  inndregin lína\n\nÞriðja lína\n\nNafn: Anna";
        let record = parse_description(desc);
        assert_eq!(
            record.notes.as_deref(),
            Some("Fyrsta lína\n  inndregin lína\n\nÞriðja lína")
        );
        assert_eq!(record.name.as_deref(), Some("Anna"));
    }

    #[test]
    fn last_occurrence_wins() {
        let record = parse_description("Nafn: Anna\nNafn:\nBjörn\n");
        assert_eq!(record.name.as_deref(), Some("Björn"));
    }

    #[test]
    fn empty_block_does_not_clear_earlier_value() {
        let record = parse_description("Nafn: Anna\nNafn:\n\n\nNetfang: a@b.is");
        assert_eq!(record.name.as_deref(), Some("Anna"));
        assert_eq!(record.email.as_deref(), Some("a@b.is"));
    }

    #[test]
    fn stray_text_outside_fields_is_dropped() {
        assert!(parse_description("Halló!\nKlukkan: 12").is_empty());
        assert!(parse_description("").is_empty());
    }

    #[test]
    fn unknown_label_inside_block_is_continuation() {
        let record = parse_description("Annað:\nAthugið: koma snemma\nNafn: Anna");
        assert_eq!(record.notes.as_deref(), Some("Athugið: koma snemma"));
    }

    #[test]
    fn reference_label_closes_block() {
        let record = parse_description("Annað:\nlína\n\nTrello card: https://trello.com/c/x");
        assert_eq!(record.notes.as_deref(), Some("lína"));
    }

    #[test]
    fn lone_cr_and_unicode_line_separators() {
        let record = parse_description(
            "Nafn: Anna\rNetfang: a@b.is\rAnnað:\rlína eitt\u{2028}lína tvö\u{0c}Sími: 1",
        );
        assert_eq!(record.name.as_deref(), Some("Anna"));
        assert_eq!(record.email.as_deref(), Some("a@b.is"));
        assert_eq!(record.notes.as_deref(), Some("lína eitt\nlína tvö"));
        assert_eq!(record.phone.as_deref(), Some("1"));
    }

    #[test]
    fn crlf_line_endings() {
        let record = parse_description("Nafn: Anna\r\nNetfang:\r\na@b.is\r\n");
        assert_eq!(record.name.as_deref(), Some("Anna"));
        assert_eq!(record.email.as_deref(), Some("a@b.is"));
    }
}
