//! Application layer orchestrating the domain.
//!
//! `PaymentService` composes a processor with an optional validator; `BookingSystem`
//! creates reservations by type tag and owns the registry of active ones. The two do
//! not interact.

pub mod booking_system;
pub mod payment_service;
