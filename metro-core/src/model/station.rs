//! Catalog records - stations and the connections between them

use geo::Point;
use itertools::Itertools;

use crate::{Distance, StationId};

/// Line label of connections linking stations on different lines
pub const INTERCHANGE_LINE: &str = "Interchange";

/// Metro station
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    /// Unique name, used as the vertex key of the network
    pub name: String,
    /// Line the station belongs to
    pub line: String,
    /// Station coordinates (x = longitude, y = latitude)
    pub geometry: Point<f64>,
}

impl Station {
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        line: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            line: line.into(),
            geometry: Point::new(longitude, latitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }
}

/// Undirected link between two stations
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub from: StationId,
    pub to: StationId,
    /// Line label, `Interchange` for cross-line links
    pub line: String,
    pub distance_km: Distance,
}

impl Connection {
    pub fn new(
        from: StationId,
        to: StationId,
        line: impl Into<String>,
        distance_km: Distance,
    ) -> Self {
        Self {
            from,
            to,
            line: line.into(),
            distance_km,
        }
    }

    pub fn is_interchange(&self) -> bool {
        self.line == INTERCHANGE_LINE
    }
}

/// Sorted list of distinct station names
pub fn station_names(stations: &[Station]) -> Vec<String> {
    stations
        .iter()
        .map(|station| station.name.as_str())
        .sorted_unstable()
        .dedup()
        .map(str::to_owned)
        .collect()
}
