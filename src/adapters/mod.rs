pub mod csv_source;
pub mod json_sink;

pub use csv_source::CsvSource;
pub use json_sink::JsonSink;
