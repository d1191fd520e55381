//! This module is responsible for loading the station, connection and
//! passenger catalogs from CSV files and building the metro network.

mod builder;
mod config;
mod parser;
mod records;

pub use builder::{
    create_metro_network, load_connections, load_passengers, load_stations, read_connections,
    read_passengers, read_stations,
};
pub use config::NetworkConfig;
pub use parser::{deserialize_csv, deserialize_csv_file};
pub use records::{ConnectionRecord, PassengerRow, StationRecord};
