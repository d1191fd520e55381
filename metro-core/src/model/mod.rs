//! Data model of the metro network
//!
//! Contains the station and connection catalogs and the graph built from them.

pub mod network;
pub mod station;

pub use network::{ConnectionEdge, MetroNetwork};
pub use station::{Connection, INTERCHANGE_LINE, Station, station_names};
