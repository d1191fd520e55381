use std::io::Read;
use std::path::Path;

use log::info;

use super::config::NetworkConfig;
use super::parser::{deserialize_csv, deserialize_csv_file};
use super::records::{ConnectionRecord, PassengerRow, StationRecord};
use crate::{
    Error,
    model::{Connection, MetroNetwork, Station},
    stats::PassengerRecord,
};

/// Creates a metro network from the catalogs named in the configuration
///
/// # Errors
///
/// Returns an error if a catalog is missing or malformed, or if the
/// catalogs do not form a valid network
pub fn create_metro_network(config: &NetworkConfig) -> Result<MetroNetwork, Error> {
    validate_config(config)?;

    info!("Loading stations: {}", config.stations_path.display());
    let stations = load_stations(&config.stations_path)?;

    info!("Loading connections: {}", config.connections_path.display());
    let connections = load_connections(&config.connections_path)?;

    let network = MetroNetwork::new(&stations, &connections)?;
    network.log_summary();

    Ok(network)
}

pub fn load_stations(path: &Path) -> Result<Vec<Station>, Error> {
    let records: Vec<StationRecord> = deserialize_csv_file(path)?;
    Ok(records.into_iter().map(Station::from).collect())
}

pub fn load_connections(path: &Path) -> Result<Vec<Connection>, Error> {
    let records: Vec<ConnectionRecord> = deserialize_csv_file(path)?;
    Ok(records.into_iter().map(Connection::from).collect())
}

pub fn load_passengers(path: &Path) -> Result<Vec<PassengerRecord>, Error> {
    info!("Loading passenger data: {}", path.display());
    let rows: Vec<PassengerRow> = deserialize_csv_file(path)?;
    rows.into_iter().map(PassengerRecord::try_from).collect()
}

pub fn read_stations<R: Read>(reader: R) -> Result<Vec<Station>, Error> {
    let records: Vec<StationRecord> = deserialize_csv(reader)?;
    Ok(records.into_iter().map(Station::from).collect())
}

pub fn read_connections<R: Read>(reader: R) -> Result<Vec<Connection>, Error> {
    let records: Vec<ConnectionRecord> = deserialize_csv(reader)?;
    Ok(records.into_iter().map(Connection::from).collect())
}

pub fn read_passengers<R: Read>(reader: R) -> Result<Vec<PassengerRecord>, Error> {
    let rows: Vec<PassengerRow> = deserialize_csv(reader)?;
    rows.into_iter().map(PassengerRecord::try_from).collect()
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    let mut paths = vec![&config.stations_path, &config.connections_path];
    paths.extend(config.passengers_path.as_ref());

    for path in paths {
        if !path.exists() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Catalog file not found: {}", path.display()),
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATIONS: &str = "\
Station_ID,Station_Name,Line,Latitude,Longitude
10,Sir M. Visvesvaraya Station,Purple Line,12.9846,77.5847
11,Majestic,Purple Line,12.9766,77.5713
36,Sampige Road,Green Line,12.9815,77.5720
";

    const CONNECTIONS: &str = "\
Station_1,Station_2,Line,Distance_KM
10,11,Purple Line,1.2
11,36,Interchange,0.2
";

    #[test]
    fn test_read_catalogs() {
        let stations = read_stations(STATIONS.as_bytes()).unwrap();
        assert_eq!(stations.len(), 3);
        assert_eq!(stations[1].name, "Majestic");
        assert_eq!(stations[1].latitude(), 12.9766);
        assert_eq!(stations[1].longitude(), 77.5713);

        let connections = read_connections(CONNECTIONS.as_bytes()).unwrap();
        assert_eq!(connections.len(), 2);
        assert!(connections[1].is_interchange());
        assert_eq!(connections[0].distance_km, 1.2);

        let network = MetroNetwork::new(&stations, &connections).unwrap();
        let route = network
            .find_route("Sir M. Visvesvaraya Station", "Sampige Road")
            .unwrap();
        assert_eq!(route.segments.len(), 2);
        assert_eq!(route.segments[1].line, "Interchange");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let malformed = "Station_ID,Station_Name,Line,Latitude\n1,A,Red Line,12.9\n";
        assert!(matches!(
            read_stations(malformed.as_bytes()),
            Err(Error::CsvError(_))
        ));
    }

    #[test]
    fn test_read_passengers() {
        let data = "\
Year,Month,Passengers,Purple_Line_Passengers,Green_Line_Passengers
2019,1,1000000,600000,400000
2019,2,1100000,650000,450000
";
        let records = read_passengers(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].month, 2);
        assert_eq!(records[1].purple_line_passengers, 650_000);
    }

    #[test]
    fn test_invalid_month_rejected() {
        let data = "Year,Month,Passengers\n2019,13,1000\n";
        assert!(matches!(
            read_passengers(data.as_bytes()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_wide_and_negative_station_ids() {
        let stations = "\
Station_ID,Station_Name,Line,Latitude,Longitude
-4,Depot,Purple Line,12.99,77.64
5000000000,Baiyappanahalli,Purple Line,12.9955,77.6412
";
        let connections = "\
Station_1,Station_2,Line,Distance_KM
-4,5000000000,Purple Line,0.8
";
        let stations = read_stations(stations.as_bytes()).unwrap();
        let connections = read_connections(connections.as_bytes()).unwrap();
        assert_eq!(stations[0].id, -4);
        assert_eq!(connections[0].to, 5_000_000_000);

        let network = MetroNetwork::new(&stations, &connections).unwrap();
        assert!(network.find_route("Depot", "Baiyappanahalli").is_some());
    }

    #[test]
    fn test_create_network_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let stations_path = dir.path().join("stations.csv");
        let connections_path = dir.path().join("connections.csv");
        let passengers_path = dir.path().join("passengers.csv");

        std::fs::write(
            &stations_path,
            "Station_ID,Station_Name,Line,Latitude,Longitude\n\
             1,A,Red Line,12.90,77.50\n\
             2,B,Red Line,12.91,77.51\n\
             3,C,Blue Line,12.92,77.52\n",
        )
        .unwrap();
        std::fs::write(
            &connections_path,
            "Station_1,Station_2,Line,Distance_KM\n\
             1,2,Red Line,1.0\n\
             2,3,Blue Line,0.0\n",
        )
        .unwrap();
        std::fs::write(
            &passengers_path,
            "Year,Month,Passengers,Purple_Line_Passengers,Green_Line_Passengers\n\
             2022,11,1440000,864000,576000\n",
        )
        .unwrap();

        let config = NetworkConfig::new(&stations_path, &connections_path)
            .with_passengers(&passengers_path);
        let network = create_metro_network(&config).unwrap();
        assert_eq!(network.station_count(), 3);

        let route = network.find_route("A", "C").unwrap();
        assert_eq!(route.stations, vec!["A", "B", "C"]);
        assert_eq!(route.segments.len(), 2);
        assert_eq!(route.segments[0].line, "Red Line");
        assert_eq!(route.segments[1].start_station, "B");
        assert_eq!(route.distance_km, 1.0);

        let records = load_passengers(&passengers_path).unwrap();
        assert_eq!(
            records,
            vec![PassengerRecord {
                year: 2022,
                month: 11,
                passengers: 1_440_000,
                purple_line_passengers: 864_000,
                green_line_passengers: 576_000,
            }]
        );
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = NetworkConfig::new("/nonexistent/stations.csv", "/nonexistent/connections.csv");
        match create_metro_network(&config) {
            Err(Error::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected missing file error, got {other:?}"),
        }
    }
}
