use crate::entities::BookingField;

impl BookingField {
    /// Display label written by the reconstructor. Must resolve back to the
    /// same field through the label dictionary.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            BookingField::Name => "Nafn",
            BookingField::PayerNationalId => "Kennitala greiðanda",
            BookingField::Email => "Netfang",
            BookingField::Phone => "Símanúmer",
            BookingField::EventDate => "Dagsetning viðburðar",
            BookingField::EventTime => "Tímasetning viðburðar",
            BookingField::Location => "Staðsetning",
            BookingField::Notes => "Annað",
            BookingField::Backdrop => "Ósk um bakgrunn",
            BookingField::Package => "Pakka tilboð",
            BookingField::Printer => "Ljósmynda prentari",
            BookingField::PaymentMethod => "Greiðslumáti",
            BookingField::Extras => "Skemmtilegir aukahlutir",
        }
    }

    /// Free-text fields are always written in block form.
    pub(crate) fn is_multiline(&self) -> bool {
        matches!(self, BookingField::Notes)
    }
}

/// Order in which fields appear in a reconstructed description.
pub(crate) const DESCRIPTION_ORDER: [BookingField; 13] = [
    BookingField::Name,
    BookingField::PayerNationalId,
    BookingField::Email,
    BookingField::Phone,
    BookingField::EventDate,
    BookingField::EventTime,
    BookingField::Location,
    BookingField::Backdrop,
    BookingField::Package,
    BookingField::Printer,
    BookingField::PaymentMethod,
    BookingField::Extras,
    BookingField::Notes,
];

/// Label of the trailer line carrying the card link.
pub(crate) const REFERENCE_LABEL: &str = "Trello card";
