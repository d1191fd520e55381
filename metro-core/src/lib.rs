//! Core of the metro network explorer.
//!
//! Builds an undirected weighted graph from station and connection
//! catalogs, plans shortest routes over it annotated with the line
//! segments a passenger rides, and aggregates passenger statistics.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod stats;

pub use error::Error;
pub use loading::{
    NetworkConfig, create_metro_network, load_connections, load_passengers, load_stations,
};
pub use model::{Connection, ConnectionEdge, INTERCHANGE_LINE, MetroNetwork, Station, station_names};
pub use routing::{LineSegment, Route, find_route};

/// Identifier of a station as it appears in the catalogs
pub type StationId = i64;
/// Distance along a connection, in kilometres
pub type Distance = f64;

/// Minutes the dashboard budgets for every stop travelled
pub const MINUTES_PER_STOP: u32 = 2;
