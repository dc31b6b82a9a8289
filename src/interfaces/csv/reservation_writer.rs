use crate::domain::money::Price;
use crate::domain::reservation::{Reservation, ReservationId, ReservationKind};
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ReservationRow<'a> {
    id: ReservationId,
    r#type: ReservationKind,
    customer: &'a str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: i64,
    price: Price,
}

impl<'a> From<&'a Reservation> for ReservationRow<'a> {
    fn from(reservation: &'a Reservation) -> Self {
        Self {
            id: reservation.id(),
            r#type: reservation.kind(),
            customer: reservation.customer_name(),
            start_date: reservation.start_date(),
            end_date: reservation.end_date(),
            days: reservation.days(),
            price: reservation.calculate_price(),
        }
    }
}

/// Writes a reservation listing as CSV, one row per reservation, prices computed at
/// write time.
pub struct ReservationWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReservationWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_reservations<'a, I>(&mut self, reservations: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        for reservation in reservations {
            self.writer.serialize(ReservationRow::from(reservation))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
