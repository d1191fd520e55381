use thiserror::Error;

use crate::StationId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Connection references unknown station id {0}")]
    UnknownStationId(StationId),
    #[error("Duplicate station name: {0}")]
    DuplicateStationName(String),
    #[error("Invalid distance {distance} km between stations {from} and {to}")]
    InvalidDistance {
        from: StationId,
        to: StationId,
        distance: f64,
    },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
