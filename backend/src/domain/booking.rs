//! Flight booking requests and their field constraints.
//!
//! A booking is never stored: it is validated, flattened into a
//! [`BookingConfirmation`] and echoed back to the client.

use std::sync::LazyLock;

use chrono::NaiveDate;
use email_address::EmailAddress;
use phonenumber::{Mode, PhoneNumber};
use regex::Regex;
use serde::Serialize;

use super::item::DATE_FORMAT;

/// Minimum length of a person or place name.
pub const NAME_MIN: usize = 3;
/// Maximum length of a person or place name.
pub const NAME_MAX: usize = 50;
/// Passenger age must be strictly greater than this.
pub const AGE_EXCLUSIVE_MIN: u32 = 0;
/// Passenger age must be strictly less than this.
pub const AGE_EXCLUSIVE_MAX: u32 = 120;

/// Booking fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Name,
    Age,
    Email,
    Phone,
    NextOfKin,
    Origin,
    Destination,
    FlightDate,
    SeatPref,
}

impl BookingField {
    /// Dotted path of the field inside the request body.
    pub fn path(self) -> &'static str {
        match self {
            Self::Name => "contact_details.name",
            Self::Age => "contact_details.age",
            Self::Email => "contact_details.email",
            Self::Phone => "contact_details.phone",
            Self::NextOfKin => "contact_details.next_of_kin",
            Self::Origin => "flight_details.origin",
            Self::Destination => "flight_details.destination",
            Self::FlightDate => "flight_details.flight_date",
            Self::SeatPref => "seat_pref",
        }
    }
}

/// Reasons a booking is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("{} must be between {NAME_MIN} and {NAME_MAX} characters", .0.path())]
    Length(BookingField),
    #[error("{} may only contain letters and spaces", .0.path())]
    NotAlphabetic(BookingField),
    #[error("age must be greater than {AGE_EXCLUSIVE_MIN} and less than {AGE_EXCLUSIVE_MAX}")]
    AgeOutOfRange,
    #[error("email must be a valid email address")]
    InvalidEmail,
    #[error("phone must be an international number such as +2348123456789")]
    InvalidPhone,
    #[error("flight_date must be a YYYY-MM-DD date")]
    InvalidFlightDate,
    #[error("seat_pref must be a row letter followed by a seat number 1-4, such as A1")]
    InvalidSeat,
}

impl BookingValidationError {
    /// Field that failed validation.
    pub fn field(&self) -> BookingField {
        match self {
            Self::Length(field) | Self::NotAlphabetic(field) => *field,
            Self::AgeOutOfRange => BookingField::Age,
            Self::InvalidEmail => BookingField::Email,
            Self::InvalidPhone => BookingField::Phone,
            Self::InvalidFlightDate => BookingField::FlightDate,
            Self::InvalidSeat => BookingField::SeatPref,
        }
    }

    /// Stable machine-readable reason.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Length(_) => "invalid_length",
            Self::NotAlphabetic(_) => "invalid_characters",
            Self::AgeOutOfRange => "out_of_range",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidPhone => "invalid_phone",
            Self::InvalidFlightDate => "invalid_date",
            Self::InvalidSeat => "invalid_seat",
        }
    }
}

static ALPHABETIC_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new("^[a-zA-Z ]+$").ok());
static SEAT_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new("^[A-Z][1-4]$").ok());

fn is_match(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

/// Parse an international number; local numbers without a `+` country code
/// and numbers outside any assigned numbering plan are rejected.
fn parse_phone(raw: &str) -> Result<PhoneNumber, BookingValidationError> {
    phonenumber::parse(None, raw)
        .ok()
        .filter(phonenumber::is_valid)
        .ok_or(BookingValidationError::InvalidPhone)
}

fn check_name(value: &str, field: BookingField) -> Result<(), BookingValidationError> {
    let length = value.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&length) {
        return Err(BookingValidationError::Length(field));
    }
    if !is_match(&ALPHABETIC_RE, value) {
        return Err(BookingValidationError::NotAlphabetic(field));
    }
    Ok(())
}

/// Passenger contact information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub phone: String,
    pub next_of_kin: String,
}

impl ContactDetails {
    /// Validates every field and returns the parsed phone number.
    fn validate(&self) -> Result<PhoneNumber, BookingValidationError> {
        check_name(&self.name, BookingField::Name)?;
        if self.age <= AGE_EXCLUSIVE_MIN || self.age >= AGE_EXCLUSIVE_MAX {
            return Err(BookingValidationError::AgeOutOfRange);
        }
        if !EmailAddress::is_valid(&self.email) {
            return Err(BookingValidationError::InvalidEmail);
        }
        let phone = parse_phone(&self.phone)?;
        check_name(&self.next_of_kin, BookingField::NextOfKin)?;
        Ok(phone)
    }

    /// Phone number as an RFC 3966 `tel:` URI, or `None` when it is not a
    /// valid international number.
    pub fn phone_uri(&self) -> Option<String> {
        parse_phone(&self.phone).ok().map(|phone| rfc3966(&phone))
    }
}

fn rfc3966(phone: &PhoneNumber) -> String {
    phone.format().mode(Mode::Rfc3966).to_string()
}

/// Flight itinerary; `flight_date` is kept as submitted until validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightDetails {
    pub origin: String,
    pub destination: String,
    pub flight_date: String,
}

impl FlightDetails {
    fn validate(&self) -> Result<NaiveDate, BookingValidationError> {
        check_name(&self.origin, BookingField::Origin)?;
        check_name(&self.destination, BookingField::Destination)?;
        NaiveDate::parse_from_str(&self.flight_date, DATE_FORMAT)
            .map_err(|_| BookingValidationError::InvalidFlightDate)
    }
}

/// Unvalidated booking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub contact_details: ContactDetails,
    pub flight_details: FlightDetails,
    pub seat_pref: String,
}

/// Flattened summary returned once a booking passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    pub customer_name: String,
    pub customer_age: u32,
    pub customer_email: String,
    pub customer_phone: String,
    pub flight_origin: String,
    pub flight_destination: String,
    pub flight_date: String,
    pub seat_preference: String,
}

impl Booking {
    /// Check every field in declaration order and build the confirmation.
    ///
    /// # Examples
    /// ```
    /// use lookup_api::domain::{Booking, ContactDetails, FlightDetails};
    ///
    /// let booking = Booking {
    ///     contact_details: ContactDetails {
    ///         name: "John Doe".into(),
    ///         age: 25,
    ///         email: "user@example.com".into(),
    ///         phone: "+2348123456789".into(),
    ///         next_of_kin: "Jane Doe".into(),
    ///     },
    ///     flight_details: FlightDetails {
    ///         origin: "Lagos".into(),
    ///         destination: "Abuja".into(),
    ///         flight_date: "2021-12-25".into(),
    ///     },
    ///     seat_pref: "A1".into(),
    /// };
    /// let confirmation = booking.confirm().expect("valid booking");
    /// assert_eq!(confirmation.customer_phone, "tel:+234-812-345-6789");
    /// ```
    pub fn confirm(self) -> Result<BookingConfirmation, BookingValidationError> {
        let phone = self.contact_details.validate()?;
        let flight_date = self.flight_details.validate()?;
        if !is_match(&SEAT_RE, &self.seat_pref) {
            return Err(BookingValidationError::InvalidSeat);
        }

        let customer_phone = rfc3966(&phone);
        let Booking {
            contact_details,
            flight_details,
            seat_pref,
        } = self;
        Ok(BookingConfirmation {
            customer_name: contact_details.name,
            customer_age: contact_details.age,
            customer_email: contact_details.email,
            customer_phone,
            flight_origin: flight_details.origin,
            flight_destination: flight_details.destination,
            flight_date: flight_date.format(DATE_FORMAT).to_string(),
            seat_preference: seat_pref,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn booking() -> Booking {
        Booking {
            contact_details: ContactDetails {
                name: "John Doe".to_owned(),
                age: 25,
                email: "user@example.com".to_owned(),
                phone: "+2348123456789".to_owned(),
                next_of_kin: "Jane Doe".to_owned(),
            },
            flight_details: FlightDetails {
                origin: "Lagos".to_owned(),
                destination: "Abuja".to_owned(),
                flight_date: "2021-12-25".to_owned(),
            },
            seat_pref: "A1".to_owned(),
        }
    }

    #[rstest]
    fn valid_booking_is_flattened(booking: Booking) {
        let confirmation = booking.confirm().expect("booking is valid");
        assert_eq!(
            confirmation,
            BookingConfirmation {
                customer_name: "John Doe".to_owned(),
                customer_age: 25,
                customer_email: "user@example.com".to_owned(),
                customer_phone: "tel:+234-812-345-6789".to_owned(),
                flight_origin: "Lagos".to_owned(),
                flight_destination: "Abuja".to_owned(),
                flight_date: "2021-12-25".to_owned(),
                seat_preference: "A1".to_owned(),
            }
        );
    }

    #[rstest]
    #[case::short_name(|b: &mut Booking| b.contact_details.name = "Jo".to_owned(), BookingValidationError::Length(BookingField::Name))]
    #[case::digits_in_name(|b: &mut Booking| b.contact_details.name = "John 2".to_owned(), BookingValidationError::NotAlphabetic(BookingField::Name))]
    #[case::zero_age(|b: &mut Booking| b.contact_details.age = 0, BookingValidationError::AgeOutOfRange)]
    #[case::ancient(|b: &mut Booking| b.contact_details.age = 120, BookingValidationError::AgeOutOfRange)]
    #[case::email(|b: &mut Booking| b.contact_details.email = "user@".to_owned(), BookingValidationError::InvalidEmail)]
    #[case::leading_dot_email(|b: &mut Booking| b.contact_details.email = ".a@example.com".to_owned(), BookingValidationError::InvalidEmail)]
    #[case::double_dot_email(|b: &mut Booking| b.contact_details.email = "a..b@example.com".to_owned(), BookingValidationError::InvalidEmail)]
    #[case::unassigned_country_code(|b: &mut Booking| b.contact_details.phone = "+99912345678".to_owned(), BookingValidationError::InvalidPhone)]
    #[case::local_phone(|b: &mut Booking| b.contact_details.phone = "08123456789".to_owned(), BookingValidationError::InvalidPhone)]
    #[case::kin(|b: &mut Booking| b.contact_details.next_of_kin = "J".to_owned(), BookingValidationError::Length(BookingField::NextOfKin))]
    #[case::origin(|b: &mut Booking| b.flight_details.origin = "Lagos-1".to_owned(), BookingValidationError::NotAlphabetic(BookingField::Origin))]
    #[case::destination(|b: &mut Booking| b.flight_details.destination = "Ab".to_owned(), BookingValidationError::Length(BookingField::Destination))]
    #[case::date(|b: &mut Booking| b.flight_details.flight_date = "25/12/2021".to_owned(), BookingValidationError::InvalidFlightDate)]
    #[case::seat_row(|b: &mut Booking| b.seat_pref = "a1".to_owned(), BookingValidationError::InvalidSeat)]
    #[case::seat_number(|b: &mut Booking| b.seat_pref = "A5".to_owned(), BookingValidationError::InvalidSeat)]
    fn rejects_invalid_fields(
        mut booking: Booking,
        #[case] mutate: fn(&mut Booking),
        #[case] expected: BookingValidationError,
    ) {
        mutate(&mut booking);
        assert_eq!(booking.confirm(), Err(expected));
    }

    #[test]
    fn field_patterns_compile() {
        assert!(ALPHABETIC_RE.is_some());
        assert!(SEAT_RE.is_some());
    }

    #[rstest]
    #[case("+2348123456789", Some("tel:+234-812-345-6789"))]
    #[case("08123456789", None)]
    fn phone_is_echoed_in_rfc3966_form(
        mut booking: Booking,
        #[case] raw: &str,
        #[case] expected: Option<&str>,
    ) {
        booking.contact_details.phone = raw.to_owned();
        assert_eq!(booking.contact_details.phone_uri().as_deref(), expected);
    }

    #[test]
    fn errors_report_dotted_field_paths() {
        let error = BookingValidationError::Length(BookingField::NextOfKin);
        assert_eq!(error.field().path(), "contact_details.next_of_kin");
        assert_eq!(
            error.to_string(),
            "contact_details.next_of_kin must be between 3 and 50 characters"
        );
    }
}
