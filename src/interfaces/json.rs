use crate::application::booking_system::BookingSystem;
use crate::domain::money::Price;
use crate::domain::reservation::Reservation;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Point-in-time view of a booking system: active reservations plus their total value.
#[derive(Debug, Serialize)]
pub struct BookingReport {
    pub reservations: Vec<Reservation>,
    pub total_booking_value: Price,
}

impl BookingReport {
    pub fn snapshot(system: &BookingSystem) -> Self {
        let reservations = system.reservations();
        let total_booking_value = reservations.iter().map(Reservation::calculate_price).sum();
        Self {
            reservations,
            total_booking_value,
        }
    }

    pub fn write_json<W: Write>(&self, sink: W) -> Result<()> {
        serde_json::to_writer_pretty(sink, self)?;
        Ok(())
    }
}
