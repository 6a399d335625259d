//! Form field catalogue.
//!
//! Each field knows its label, its input widget, and its initial value. The
//! widget filters keystrokes the same way a numeric or date input would, so
//! coercion at submit time only fails on overflow or a malformed date.

use crate::api::Gender;

/// The free-standing forms of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Booking,
    Cancellation,
    AddBus,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::Booking, FormKind::Cancellation, FormKind::AddBus];

    pub fn fields(self) -> &'static [FieldId] {
        match self {
            FormKind::Booking => &[
                FieldId::PassengerName,
                FieldId::Age,
                FieldId::Gender,
                FieldId::BusId,
                FieldId::SeatsToBook,
                FieldId::TravelDate,
            ],
            FormKind::Cancellation => &[FieldId::BookingId],
            FormKind::AddBus => &[
                FieldId::BusName,
                FieldId::Source,
                FieldId::Destination,
                FieldId::TotalSeats,
                FieldId::FarePerSeat,
            ],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormKind::Booking => "Book a Ticket",
            FormKind::Cancellation => "Cancel a Booking",
            FormKind::AddBus => "Admin: Add New Bus",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Booking => "Confirm Booking",
            FormKind::Cancellation => "Cancel Booking",
            FormKind::AddBus => "Add Bus",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            FormKind::Booking => "Booking...",
            FormKind::Cancellation => "Cancelling...",
            FormKind::AddBus => "Adding...",
        }
    }
}

/// How a field accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidget {
    Text,
    Integer,
    Decimal,
    Date,
    Choice,
}

const DATE_LEN: usize = "YYYY-MM-DD".len();

impl FieldWidget {
    /// Whether `ch` may be appended to `current`.
    pub fn accepts(self, current: &str, ch: char) -> bool {
        match self {
            FieldWidget::Text => !ch.is_control(),
            FieldWidget::Integer => ch.is_ascii_digit(),
            FieldWidget::Decimal => ch.is_ascii_digit() || (ch == '.' && !current.contains('.')),
            FieldWidget::Date => {
                current.len() < DATE_LEN && (ch.is_ascii_digit() || ch == '-')
            }
            FieldWidget::Choice => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    PassengerName,
    Age,
    Gender,
    BusId,
    SeatsToBook,
    TravelDate,
    BookingId,
    BusName,
    Source,
    Destination,
    TotalSeats,
    FarePerSeat,
}

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            FieldId::PassengerName => "Passenger Name",
            FieldId::Age => "Age",
            FieldId::Gender => "Gender",
            FieldId::BusId => "Bus ID",
            FieldId::SeatsToBook => "Seats",
            FieldId::TravelDate => "Travel Date",
            FieldId::BookingId => "Booking ID",
            FieldId::BusName => "Bus Name",
            FieldId::Source => "Source",
            FieldId::Destination => "Destination",
            FieldId::TotalSeats => "Total Seats",
            FieldId::FarePerSeat => "Fare (₹)",
        }
    }

    pub fn widget(self) -> FieldWidget {
        match self {
            FieldId::PassengerName
            | FieldId::BusName
            | FieldId::Source
            | FieldId::Destination => FieldWidget::Text,
            FieldId::Age
            | FieldId::BusId
            | FieldId::SeatsToBook
            | FieldId::BookingId
            | FieldId::TotalSeats => FieldWidget::Integer,
            FieldId::FarePerSeat => FieldWidget::Decimal,
            FieldId::TravelDate => FieldWidget::Date,
            FieldId::Gender => FieldWidget::Choice,
        }
    }

    /// Placeholder shown while the field is empty.
    pub fn hint(self) -> &'static str {
        match self {
            FieldId::TravelDate => "YYYY-MM-DD",
            FieldId::BookingId => "Enter your booking ID",
            _ => "",
        }
    }

    pub fn initial_value(self) -> &'static str {
        match self {
            FieldId::Gender => Gender::Male.code(),
            FieldId::SeatsToBook => "1",
            _ => "",
        }
    }

    /// Value shown to the user (choice codes are expanded).
    pub fn display_value(self, value: &str) -> String {
        match self {
            FieldId::Gender => Gender::from_code(value)
                .map(|g| g.label().to_string())
                .unwrap_or_else(|| value.to_string()),
            _ => value.to_string(),
        }
    }

    /// Next value of a choice field, `forward` or backward. Non-choice
    /// fields are returned unchanged.
    pub fn cycle(self, value: &str, forward: bool) -> String {
        if self != FieldId::Gender {
            return value.to_string();
        }
        let all = Gender::ALL;
        let index = all.iter().position(|g| g.code() == value).unwrap_or(0);
        let next = if forward {
            (index + 1) % all.len()
        } else {
            (index + all.len() - 1) % all.len()
        };
        all[next].code().to_string()
    }
}

/// Current text of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub id: FieldId,
    pub value: String,
}

impl FieldInput {
    pub fn initial(id: FieldId) -> Self {
        Self {
            id,
            value: id.initial_value().to_string(),
        }
    }
}

/// Fresh inputs for every field of `kind`.
pub fn initial_inputs(kind: FormKind) -> Vec<FieldInput> {
    kind.fields().iter().copied().map(FieldInput::initial).collect()
}
