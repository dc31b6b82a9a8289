pub mod reservation_reader;
pub mod reservation_writer;
