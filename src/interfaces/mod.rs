//! Outer adapters: CSV import/export of reservations and the JSON booking report.

pub mod csv;
pub mod json;
