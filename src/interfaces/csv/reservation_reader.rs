use crate::domain::reservation::ReservationForm;
use crate::error::{Result, TripError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

/// One row of a reservation import file.
///
/// Columns that do not apply to the row's type are left empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ReservationRecord {
    pub r#type: String,
    #[serde(rename = "customer")]
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub meal_plan: Option<String>,
    #[serde(default)]
    pub departure_airport: Option<String>,
    #[serde(default)]
    pub arrival_airport: Option<String>,
    #[serde(default)]
    pub car_type: Option<String>,
    #[serde(default)]
    pub insurance_included: Option<bool>,
}

impl ReservationRecord {
    /// Splits the row into its type tag and the form to submit under that tag.
    pub fn into_parts(self) -> (String, ReservationForm) {
        let form = ReservationForm {
            customer_name: self.customer_name,
            start_date: self.start_date,
            end_date: self.end_date,
            room_type: self.room_type,
            meal_plan: self.meal_plan,
            departure_airport: self.departure_airport,
            arrival_airport: self.arrival_airport,
            car_type: self.car_type,
            insurance_included: self.insurance_included,
        };
        (self.r#type, form)
    }
}

/// Reads reservation requests from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths, so
/// trailing empty columns may be omitted.
pub struct ReservationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ReservationReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one record per row.
    pub fn records(self) -> impl Iterator<Item = Result<ReservationRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(TripError::from))
    }
}
