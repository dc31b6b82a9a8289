//! Domain model: payment ports, reservations and their pricing.

pub mod money;
pub mod payment;
pub mod ports;
pub mod reservation;
