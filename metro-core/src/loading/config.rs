use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Locations of the CSV catalogs backing a metro network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Stations: `Station_ID,Station_Name,Line,Latitude,Longitude`
    pub stations_path: PathBuf,
    /// Connections: `Station_1,Station_2,Line,Distance_KM`
    pub connections_path: PathBuf,
    /// Optional monthly passenger counts
    #[serde(default)]
    pub passengers_path: Option<PathBuf>,
}

impl NetworkConfig {
    pub fn new(stations_path: impl Into<PathBuf>, connections_path: impl Into<PathBuf>) -> Self {
        Self {
            stations_path: stations_path.into(),
            connections_path: connections_path.into(),
            passengers_path: None,
        }
    }

    #[must_use]
    pub fn with_passengers(mut self, passengers_path: impl Into<PathBuf>) -> Self {
        self.passengers_path = Some(passengers_path.into());
        self
    }
}
