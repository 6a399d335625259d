//! Turn form inputs into API requests.
//!
//! Required-field presence is checked first, then numeric and date fields are
//! coerced. No range checks are applied: values the server rejects come back
//! as request errors.

use chrono::NaiveDate;

use super::fields::{FieldId, FieldInput, FormKind};
use super::ActionRequest;
use crate::api::{Gender, NewBooking, NewBus};
use crate::error::ValidationError;

/// Validate `inputs` for `kind` and build the request to send.
pub fn build_request(
    kind: FormKind,
    inputs: &[FieldInput],
) -> Result<ActionRequest, ValidationError> {
    let fields = Fields(inputs);
    match kind {
        FormKind::Booking => {
            fields.require_all(kind)?;
            let gender_code = fields.get(FieldId::Gender);
            Ok(ActionRequest::Book(NewBooking {
                passenger_name: fields.get(FieldId::PassengerName).trim().to_string(),
                age: fields.integer(FieldId::Age)?,
                gender: Gender::from_code(gender_code).unwrap_or_default(),
                bus_id: fields.integer(FieldId::BusId)?,
                seats_to_book: fields.integer(FieldId::SeatsToBook)?,
                travel_date: fields.date(FieldId::TravelDate)?,
            }))
        }
        FormKind::Cancellation => {
            if fields.get(FieldId::BookingId).trim().is_empty() {
                return Err(ValidationError::MissingBookingId);
            }
            Ok(ActionRequest::Cancel {
                booking_id: fields.integer(FieldId::BookingId)?,
            })
        }
        FormKind::AddBus => {
            fields.require_all(kind)?;
            Ok(ActionRequest::AddBus(NewBus {
                bus_name: fields.get(FieldId::BusName).trim().to_string(),
                source: fields.get(FieldId::Source).trim().to_string(),
                destination: fields.get(FieldId::Destination).trim().to_string(),
                total_seats: fields.integer(FieldId::TotalSeats)?,
                fare_per_seat: fields.decimal(FieldId::FarePerSeat)?,
            }))
        }
    }
}

struct Fields<'a>(&'a [FieldInput]);

impl Fields<'_> {
    fn get(&self, id: FieldId) -> &str {
        self.0
            .iter()
            .find(|input| input.id == id)
            .map(|input| input.value.as_str())
            .unwrap_or("")
    }

    fn require_all(&self, kind: FormKind) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = kind
            .fields()
            .iter()
            .filter(|id| self.get(**id).trim().is_empty())
            .map(|id| id.label())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields { fields: missing })
        }
    }

    fn integer<T: std::str::FromStr>(&self, id: FieldId) -> Result<T, ValidationError> {
        self.get(id)
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotAnInteger { field: id.label() })
    }

    fn decimal(&self, id: FieldId) -> Result<f64, ValidationError> {
        self.get(id)
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(ValidationError::NotANumber { field: id.label() })
    }

    fn date(&self, id: FieldId) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(self.get(id).trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate { field: id.label() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::fields::initial_inputs;

    fn filled(kind: FormKind, values: &[(FieldId, &str)]) -> Vec<FieldInput> {
        let mut inputs = initial_inputs(kind);
        for (id, value) in values {
            if let Some(input) = inputs.iter_mut().find(|i| i.id == *id) {
                input.value = value.to_string();
            }
        }
        inputs
    }

    fn booking_inputs() -> Vec<FieldInput> {
        filled(
            FormKind::Booking,
            &[
                (FieldId::PassengerName, "Ravi Kumar"),
                (FieldId::Age, "34"),
                (FieldId::Gender, "O"),
                (FieldId::BusId, "1"),
                (FieldId::SeatsToBook, "2"),
                (FieldId::TravelDate, "2026-12-24"),
            ],
        )
    }

    #[test]
    fn complete_booking_is_coerced() {
        let request = build_request(FormKind::Booking, &booking_inputs()).unwrap();
        let ActionRequest::Book(booking) = request else {
            panic!("expected booking request");
        };
        assert_eq!(booking.passenger_name, "Ravi Kumar");
        assert_eq!(booking.age, 34);
        assert_eq!(booking.gender, Gender::Other);
        assert_eq!(booking.bus_id, 1);
        assert_eq!(booking.seats_to_book, 2);
        assert_eq!(booking.travel_date, NaiveDate::from_ymd_opt(2026, 12, 24).unwrap());
    }

    #[test]
    fn empty_booking_lists_missing_fields() {
        let err = build_request(FormKind::Booking, &initial_inputs(FormKind::Booking)).unwrap_err();
        match err {
            ValidationError::MissingFields { fields } => {
                assert!(fields.contains(&"Passenger Name"));
                assert!(fields.contains(&"Travel Date"));
                // Defaults count as filled.
                assert!(!fields.contains(&"Gender"));
                assert!(!fields.contains(&"Seats"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut inputs = booking_inputs();
        inputs[0].value = "   ".to_string();
        assert!(matches!(
            build_request(FormKind::Booking, &inputs),
            Err(ValidationError::MissingFields { .. })
        ));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut inputs = booking_inputs();
        if let Some(date) = inputs.iter_mut().find(|i| i.id == FieldId::TravelDate) {
            date.value = "2026-13-40".to_string();
        }
        assert_eq!(
            build_request(FormKind::Booking, &inputs),
            Err(ValidationError::InvalidDate { field: "Travel Date" })
        );
    }

    #[test]
    fn oversized_integer_is_rejected() {
        let mut inputs = booking_inputs();
        if let Some(age) = inputs.iter_mut().find(|i| i.id == FieldId::Age) {
            age.value = "99999999999".to_string();
        }
        assert_eq!(
            build_request(FormKind::Booking, &inputs),
            Err(ValidationError::NotAnInteger { field: "Age" })
        );
    }

    #[test]
    fn cancellation_requires_booking_id() {
        assert_eq!(
            build_request(FormKind::Cancellation, &initial_inputs(FormKind::Cancellation)),
            Err(ValidationError::MissingBookingId)
        );
        let inputs = filled(FormKind::Cancellation, &[(FieldId::BookingId, "55")]);
        assert_eq!(
            build_request(FormKind::Cancellation, &inputs),
            Ok(ActionRequest::Cancel { booking_id: 55 })
        );
    }

    #[test]
    fn zero_total_seats_is_forwarded() {
        let inputs = filled(
            FormKind::AddBus,
            &[
                (FieldId::BusName, "Night Rider"),
                (FieldId::Source, "Pune"),
                (FieldId::Destination, "Goa"),
                (FieldId::TotalSeats, "0"),
                (FieldId::FarePerSeat, "750.5"),
            ],
        );
        let ActionRequest::AddBus(bus) = build_request(FormKind::AddBus, &inputs).unwrap() else {
            panic!("expected add-bus request");
        };
        assert_eq!(bus.total_seats, 0);
        assert_eq!(bus.fare_per_seat, 750.5);
    }

    #[test]
    fn add_bus_requires_every_field() {
        let inputs = filled(FormKind::AddBus, &[(FieldId::BusName, "Night Rider")]);
        assert_eq!(
            build_request(FormKind::AddBus, &inputs),
            Err(ValidationError::MissingFields {
                fields: vec!["Source", "Destination", "Total Seats", "Fare (₹)"]
            })
        );
    }
}
