//! Raw CSV rows as produced by the data providers

use chrono::Month;
use serde::Deserialize;

use crate::{
    Distance, Error, StationId,
    model::{Connection, Station},
    stats::PassengerRecord,
};

#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    #[serde(rename = "Station_ID")]
    pub station_id: StationId,
    #[serde(rename = "Station_Name")]
    pub station_name: String,
    #[serde(rename = "Line")]
    pub line: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl From<StationRecord> for Station {
    fn from(record: StationRecord) -> Self {
        Station::new(
            record.station_id,
            record.station_name,
            record.line,
            record.latitude,
            record.longitude,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionRecord {
    #[serde(rename = "Station_1")]
    pub station_1: StationId,
    #[serde(rename = "Station_2")]
    pub station_2: StationId,
    #[serde(rename = "Line")]
    pub line: String,
    #[serde(rename = "Distance_KM")]
    pub distance_km: Distance,
}

impl From<ConnectionRecord> for Connection {
    fn from(record: ConnectionRecord) -> Self {
        Connection::new(
            record.station_1,
            record.station_2,
            record.line,
            record.distance_km,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PassengerRow {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "Passengers")]
    pub passengers: u64,
    #[serde(rename = "Purple_Line_Passengers", default)]
    pub purple_line_passengers: u64,
    #[serde(rename = "Green_Line_Passengers", default)]
    pub green_line_passengers: u64,
}

impl TryFrom<PassengerRow> for PassengerRecord {
    type Error = Error;

    fn try_from(row: PassengerRow) -> Result<Self, Self::Error> {
        u8::try_from(row.month)
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .ok_or_else(|| {
                Error::InvalidData(format!(
                    "Month {} of year {} is outside 1..=12",
                    row.month, row.year
                ))
            })?;

        Ok(PassengerRecord {
            year: row.year,
            month: row.month,
            passengers: row.passengers,
            purple_line_passengers: row.purple_line_passengers,
            green_line_passengers: row.green_line_passengers,
        })
    }
}
