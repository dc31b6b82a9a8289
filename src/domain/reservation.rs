use super::money::Price;
use crate::error::{Result, TripError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const HOTEL_DAILY_RATE: Decimal = dec!(50);
const DELUXE_MULTIPLIER: Decimal = dec!(1.5);
const ALL_INCLUSIVE_DAILY: Decimal = dec!(30);
const STANDARD_MEALS_DAILY: Decimal = dec!(15);

const FLIGHT_BASE_FARE: Decimal = dec!(200);
const FLIGHT_TAXES: Decimal = dec!(50);

const CAR_DAILY_RATE: Decimal = dec!(40);
const SUV_MULTIPLIER: Decimal = dec!(1.3);
const INSURANCE_DAILY: Decimal = dec!(10);

const ID_PREFIX: &str = "RES-";

/// Identifier of a registered reservation, rendered as `RES-<sequence>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReservationId(u64);

impl ReservationId {
    pub fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    pub fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ID_PREFIX}{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self> {
        s.strip_prefix(ID_PREFIX)
            .and_then(|seq| seq.parse().ok())
            .map(Self)
            .ok_or_else(|| TripError::invalid(format!("malformed reservation id '{s}'")))
    }
}

impl Serialize for ReservationId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The type tag a reservation is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReservationKind {
    Hotel,
    Flight,
    CarRental,
}

impl ReservationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "Hotel",
            Self::Flight => "Flight",
            Self::CarRental => "CarRental",
        }
    }
}

impl fmt::Display for ReservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationKind {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Hotel" => Ok(Self::Hotel),
            "Flight" => Ok(Self::Flight),
            "CarRental" => Ok(Self::CarRental),
            other => Err(TripError::invalid(format!("unknown reservation type '{other}'"))),
        }
    }
}

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $special:ident => $label:literal }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(into = "String")]
        pub enum $name {
            $special,
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    Self::$special => $label,
                    Self::Other(label) => label,
                }
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                if label == $label {
                    Self::$special
                } else {
                    Self::Other(label.to_string())
                }
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                if label == $label {
                    Self::$special
                } else {
                    Self::Other(label)
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labelled_enum!(
    /// Room class. Only `Deluxe` carries a surcharge.
    RoomType { Deluxe => "Deluxe" }
);
labelled_enum!(
    /// Board basis. Anything other than all-inclusive is billed at the standard meal rate.
    MealPlan { AllInclusive => "All Inclusive" }
);
labelled_enum!(
    /// Car class. Only `SUV` carries a surcharge.
    CarType { Suv => "SUV" }
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelStay {
    pub room_type: RoomType,
    pub meal_plan: MealPlan,
}

impl HotelStay {
    pub fn price(&self, days: i64) -> Price {
        let multiplier = match self.room_type {
            RoomType::Deluxe => DELUXE_MULTIPLIER,
            RoomType::Other(_) => Decimal::ONE,
        };
        let meals = match self.meal_plan {
            MealPlan::AllInclusive => ALL_INCLUSIVE_DAILY,
            MealPlan::Other(_) => STANDARD_MEALS_DAILY,
        };
        Price::per_day(HOTEL_DAILY_RATE, days) * multiplier + Price::per_day(meals, days)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flight {
    pub departure_airport: String,
    pub arrival_airport: String,
}

impl Flight {
    /// Flat fare: base plus taxes, regardless of route or dates.
    pub fn price(&self) -> Price {
        Price::new(FLIGHT_BASE_FARE + FLIGHT_TAXES)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarRental {
    pub car_type: CarType,
    pub insurance_included: bool,
}

impl CarRental {
    pub fn price(&self, days: i64) -> Price {
        let multiplier = match self.car_type {
            CarType::Suv => SUV_MULTIPLIER,
            CarType::Other(_) => Decimal::ONE,
        };
        let insurance = if self.insurance_included {
            Price::per_day(INSURANCE_DAILY, days)
        } else {
            Price::ZERO
        };
        Price::per_day(CAR_DAILY_RATE, days) * multiplier + insurance
    }
}

/// Variant-specific part of a reservation. Fixed for the reservation's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ReservationDetails {
    Hotel(HotelStay),
    Flight(Flight),
    CarRental(CarRental),
}

impl ReservationDetails {
    pub fn kind(&self) -> ReservationKind {
        match self {
            Self::Hotel(_) => ReservationKind::Hotel,
            Self::Flight(_) => ReservationKind::Flight,
            Self::CarRental(_) => ReservationKind::CarRental,
        }
    }
}

/// Everything a caller supplies to book a reservation of any kind.
///
/// Type-specific fields are optional here; which ones are required depends on the
/// type tag the form is submitted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub room_type: Option<String>,
    pub meal_plan: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub car_type: Option<String>,
    pub insurance_included: Option<bool>,
}

impl ReservationForm {
    pub fn new(
        customer_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            start_date,
            end_date,
            room_type: None,
            meal_plan: None,
            departure_airport: None,
            arrival_airport: None,
            car_type: None,
            insurance_included: None,
        }
    }

    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = Some(room_type.into());
        self
    }

    pub fn meal_plan(mut self, meal_plan: impl Into<String>) -> Self {
        self.meal_plan = Some(meal_plan.into());
        self
    }

    pub fn route(mut self, departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        self.departure_airport = Some(departure.into());
        self.arrival_airport = Some(arrival.into());
        self
    }

    pub fn car_type(mut self, car_type: impl Into<String>) -> Self {
        self.car_type = Some(car_type.into());
        self
    }

    pub fn insurance_included(mut self, included: bool) -> Self {
        self.insurance_included = Some(included);
        self
    }

    fn into_details(
        self,
        kind: ReservationKind,
    ) -> Result<(String, NaiveDate, NaiveDate, ReservationDetails)> {
        if self.customer_name.trim().is_empty() {
            return Err(TripError::invalid("customer name must not be empty"));
        }
        if self.end_date < self.start_date {
            return Err(TripError::invalid(format!(
                "end date {} is before start date {}",
                self.end_date, self.start_date
            )));
        }

        let details = match kind {
            ReservationKind::Hotel => ReservationDetails::Hotel(HotelStay {
                room_type: required(self.room_type, kind, "room_type")?.into(),
                meal_plan: required(self.meal_plan, kind, "meal_plan")?.into(),
            }),
            ReservationKind::Flight => ReservationDetails::Flight(Flight {
                departure_airport: required(self.departure_airport, kind, "departure_airport")?,
                arrival_airport: required(self.arrival_airport, kind, "arrival_airport")?,
            }),
            ReservationKind::CarRental => ReservationDetails::CarRental(CarRental {
                car_type: required(self.car_type, kind, "car_type")?.into(),
                insurance_included: self.insurance_included.unwrap_or(false),
            }),
        };

        Ok((self.customer_name, self.start_date, self.end_date, details))
    }
}

fn required(value: Option<String>, kind: ReservationKind, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(TripError::invalid(format!("{kind} reservation requires {field}"))),
    }
}

/// A registered reservation.
///
/// Instances are only minted by the booking system, with all fields checked up front.
/// The price is never stored; every call to [`Reservation::calculate_price`] recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    id: ReservationId,
    customer_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(flatten)]
    details: ReservationDetails,
}

impl Reservation {
    /// Builds a reservation of `kind` from a filled-in form.
    ///
    /// Fails with `InvalidArgument` when a field required by `kind` is missing or the
    /// end date precedes the start date.
    pub(crate) fn new(
        id: ReservationId,
        kind: ReservationKind,
        form: ReservationForm,
    ) -> Result<Self> {
        let (customer_name, start_date, end_date, details) = form.into_details(kind)?;
        Ok(Self {
            id,
            customer_name,
            start_date,
            end_date,
            details,
        })
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn kind(&self) -> ReservationKind {
        self.details.kind()
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn details(&self) -> &ReservationDetails {
        &self.details
    }

    /// Whole days between start and end date.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn calculate_price(&self) -> Price {
        match &self.details {
            ReservationDetails::Hotel(stay) => stay.price(self.days()),
            ReservationDetails::Flight(flight) => flight.price(),
            ReservationDetails::CarRental(rental) => rental.price(self.days()),
        }
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reservation {} ({})", self.id, self.kind())?;
        writeln!(f, "  Customer: {}", self.customer_name)?;
        writeln!(f, "  Start date: {}", self.start_date)?;
        writeln!(f, "  End date: {}", self.end_date)?;
        writeln!(f, "  Price: {}", self.calculate_price())?;
        match &self.details {
            ReservationDetails::Hotel(stay) => {
                writeln!(f, "  Room type: {}", stay.room_type)?;
                write!(f, "  Meal plan: {}", stay.meal_plan)
            }
            ReservationDetails::Flight(flight) => {
                writeln!(f, "  Departure airport: {}", flight.departure_airport)?;
                write!(f, "  Arrival airport: {}", flight.arrival_airport)
            }
            ReservationDetails::CarRental(rental) => {
                writeln!(f, "  Car type: {}", rental.car_type)?;
                write!(
                    f,
                    "  Insurance included: {}",
                    if rental.insurance_included { "yes" } else { "no" }
                )
            }
        }
    }
}
