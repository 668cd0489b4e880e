/// Identifies one field of a [`BookingRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BookingField {
    Name,
    PayerNationalId,
    Email,
    Phone,
    EventDate,
    EventTime,
    Location,
    Notes,
    Backdrop,
    Package,
    Printer,
    PaymentMethod,
    Extras,
}

/// Structured booking data extracted from a card description.
///
/// Every field is either absent or a non-empty, trimmed string. Multi-line
/// values keep their internal line breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRecord {
    pub name: Option<String>,
    pub payer_national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub event_date: Option<String>,
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub backdrop: Option<String>,
    pub package: Option<String>,
    pub printer: Option<String>,
    pub payment_method: Option<String>,
    pub extras: Option<String>,
}

// --

impl BookingField {
    pub const ALL: [BookingField; 13] = [
        BookingField::Name,
        BookingField::PayerNationalId,
        BookingField::Email,
        BookingField::Phone,
        BookingField::EventDate,
        BookingField::EventTime,
        BookingField::Location,
        BookingField::Notes,
        BookingField::Backdrop,
        BookingField::Package,
        BookingField::Printer,
        BookingField::PaymentMethod,
        BookingField::Extras,
    ];
}

impl BookingRecord {
    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn is_empty(&self) -> bool {
        BookingField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    fn slot(&self, field: BookingField) -> &Option<String> {
        match field {
            BookingField::Name => &self.name,
            BookingField::PayerNationalId => &self.payer_national_id,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::EventDate => &self.event_date,
            BookingField::EventTime => &self.event_time,
            BookingField::Location => &self.location,
            BookingField::Notes => &self.notes,
            BookingField::Backdrop => &self.backdrop,
            BookingField::Package => &self.package,
            BookingField::Printer => &self.printer,
            BookingField::PaymentMethod => &self.payment_method,
            BookingField::Extras => &self.extras,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: BookingField) -> &mut Option<String> {
        match field {
            BookingField::Name => &mut self.name,
            BookingField::PayerNationalId => &mut self.payer_national_id,
            BookingField::Email => &mut self.email,
            BookingField::Phone => &mut self.phone,
            BookingField::EventDate => &mut self.event_date,
            BookingField::EventTime => &mut self.event_time,
            BookingField::Location => &mut self.location,
            BookingField::Notes => &mut self.notes,
            BookingField::Backdrop => &mut self.backdrop,
            BookingField::Package => &mut self.package,
            BookingField::Printer => &mut self.printer,
            BookingField::PaymentMethod => &mut self.payment_method,
            BookingField::Extras => &mut self.extras,
        }
    }
}
