#![allow(dead_code)]

use chrono::NaiveDate;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use trippay::domain::reservation::ReservationForm;

pub const HEADER: [&str; 10] = [
    "type",
    "customer",
    "start_date",
    "end_date",
    "room_type",
    "meal_plan",
    "departure_airport",
    "arrival_airport",
    "car_type",
    "insurance_included",
];

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Six-night deluxe all-inclusive stay: 630.
pub fn hotel_form() -> ReservationForm {
    ReservationForm::new("Ivan Ivanov", date(2023, 6, 1), date(2023, 6, 7))
        .room_type("Deluxe")
        .meal_plan("All Inclusive")
}

/// Flat fare: 250.
pub fn flight_form() -> ReservationForm {
    ReservationForm::new("Ivan Ivanov", date(2023, 6, 1), date(2023, 6, 1)).route("SVO", "IST")
}

/// Four-day insured SUV rental: 248.
pub fn car_form() -> ReservationForm {
    ReservationForm::new("Ivan Ivanov", date(2023, 6, 1), date(2023, 6, 5))
        .car_type("SUV")
        .insurance_included(true)
}

/// Writes `rows` flight requests to a reservations CSV.
pub fn generate_flights_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;
    for i in 1..=rows {
        let customer = format!("Customer {i}");
        wtr.write_record([
            "Flight",
            customer.as_str(),
            "2023-06-01",
            "2023-06-01",
            "",
            "",
            "SVO",
            "IST",
            "",
            "",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
