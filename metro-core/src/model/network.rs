//! Metro network graph built from the station and connection catalogs

use hashbrown::{HashMap, hash_map::Entry};
use itertools::Itertools;
use log::{debug, info, warn};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};

use super::station::{Connection, Station};
use crate::{Distance, Error, StationId};

/// Network graph edge
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionEdge {
    /// Line label of the connection
    pub line: String,
    /// Edge weight used by route planning
    pub distance_km: Distance,
}

/// Undirected weighted graph of the metro network.
///
/// Vertices are stations keyed by their unique name, edges carry the line
/// label and the distance of the connection. The network is an immutable
/// snapshot of the catalogs it was built from.
#[derive(Debug, Clone)]
pub struct MetroNetwork {
    pub(crate) graph: UnGraph<Station, ConnectionEdge>,
    name_index: HashMap<String, NodeIndex>,
}

impl MetroNetwork {
    /// Builds the network from station and connection records
    ///
    /// # Errors
    ///
    /// - `UnknownStationId` if a connection references a station id absent
    ///   from `stations`
    /// - `DuplicateStationName` if two stations share a name
    /// - `InvalidDistance` if a connection distance is negative or not finite
    pub fn new(stations: &[Station], connections: &[Connection]) -> Result<Self, Error> {
        let mut graph = UnGraph::with_capacity(stations.len(), connections.len());
        let mut name_index = HashMap::with_capacity(stations.len());
        let mut id_index: HashMap<StationId, NodeIndex> = HashMap::with_capacity(stations.len());

        for station in stations {
            match name_index.entry(station.name.clone()) {
                Entry::Occupied(_) => {
                    return Err(Error::DuplicateStationName(station.name.clone()));
                }
                Entry::Vacant(entry) => {
                    let node = graph.add_node(station.clone());
                    entry.insert(node);
                    // First station carrying an id owns it
                    match id_index.entry(station.id) {
                        Entry::Vacant(entry) => {
                            entry.insert(node);
                        }
                        Entry::Occupied(_) => warn!(
                            "Station {:?} reuses id {}, its connections resolve to the first station with that id",
                            station.name, station.id
                        ),
                    }
                }
            }
        }

        for connection in connections {
            let lookup = |id: StationId| {
                id_index
                    .get(&id)
                    .copied()
                    .ok_or(Error::UnknownStationId(id))
            };
            let from = lookup(connection.from)?;
            let to = lookup(connection.to)?;

            let distance = connection.distance_km;
            if !distance.is_finite() || distance < 0.0 {
                return Err(Error::InvalidDistance {
                    from: connection.from,
                    to: connection.to,
                    distance,
                });
            }
            if distance == 0.0 {
                warn!(
                    "Zero-length connection between stations {} and {}",
                    connection.from, connection.to
                );
            }

            let edge = ConnectionEdge {
                line: connection.line.clone(),
                distance_km: distance,
            };

            // Simple graph: a repeated pair replaces the earlier edge
            if let Some(existing) = graph.find_edge(from, to) {
                warn!(
                    "Repeated connection between stations {} and {}, keeping the last record",
                    connection.from, connection.to
                );
                graph[existing] = edge;
            } else {
                graph.add_edge(from, to, edge);
            }
        }

        debug!(
            "Built metro network with {} stations and {} connections",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Self { graph, name_index })
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_station(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// Station record by name
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.node_index(name).map(|node| &self.graph[node])
    }

    /// All stations in catalog order
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.graph.node_weights()
    }

    /// Sorted station names
    pub fn station_names(&self) -> Vec<&str> {
        self.stations()
            .map(|station| station.name.as_str())
            .sorted_unstable()
            .collect()
    }

    /// Sorted distinct line labels of the stations
    pub fn lines(&self) -> Vec<&str> {
        self.stations()
            .map(|station| station.line.as_str())
            .sorted_unstable()
            .dedup()
            .collect()
    }

    /// Edge between two stations, if they are directly connected
    pub fn connection_between(&self, a: &str, b: &str) -> Option<&ConnectionEdge> {
        let edge = self.graph.find_edge(self.node_index(a)?, self.node_index(b)?)?;
        Some(&self.graph[edge])
    }

    pub(crate) fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.name_index.get(name).copied()
    }

    pub(crate) fn station_name(&self, node: NodeIndex) -> &str {
        &self.graph[node].name
    }

    pub(crate) fn edge(&self, edge: EdgeIndex) -> &ConnectionEdge {
        &self.graph[edge]
    }

    /// Logs a short summary of the network
    pub fn log_summary(&self) {
        info!(
            "Metro network: {} stations on {} lines, {} connections",
            self.station_count(),
            self.lines().len(),
            self.connection_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations() -> Vec<Station> {
        vec![
            Station::new(1, "A", "Red Line", 12.90, 77.50),
            Station::new(2, "B", "Red Line", 12.91, 77.51),
            Station::new(3, "C", "Blue Line", 12.92, 77.52),
        ]
    }

    #[test]
    fn test_build_network() {
        let connections = vec![
            Connection::new(1, 2, "Red Line", 1.0),
            Connection::new(2, 3, "Interchange", 0.2),
        ];
        let network = MetroNetwork::new(&stations(), &connections).unwrap();

        assert_eq!(network.station_count(), 3);
        assert_eq!(network.connection_count(), 2);
        assert!(network.contains_station("B"));
        assert!(!network.contains_station("D"));
        assert_eq!(network.station("C").unwrap().id, 3);
        assert_eq!(network.lines(), vec!["Blue Line", "Red Line"]);
    }

    #[test]
    fn test_edges_are_undirected() {
        let connections = vec![Connection::new(1, 2, "Red Line", 1.5)];
        let network = MetroNetwork::new(&stations(), &connections).unwrap();

        let forward = network.connection_between("A", "B").unwrap();
        let backward = network.connection_between("B", "A").unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.line, "Red Line");
        assert_eq!(forward.distance_km, 1.5);
        assert!(network.connection_between("A", "C").is_none());
    }

    #[test]
    fn test_dangling_connection_fails() {
        let connections = vec![Connection::new(1, 999, "Red Line", 1.0)];
        let result = MetroNetwork::new(&stations(), &connections);

        assert!(matches!(result, Err(Error::UnknownStationId(999))));
    }

    #[test]
    fn test_duplicate_station_name_rejected() {
        let mut stations = stations();
        stations.push(Station::new(4, "A", "Blue Line", 0.0, 0.0));

        let result = MetroNetwork::new(&stations, &[]);
        assert!(matches!(result, Err(Error::DuplicateStationName(name)) if name == "A"));
    }

    #[test]
    fn test_duplicate_id_resolves_to_first_station() {
        let mut stations = stations();
        stations.push(Station::new(1, "D", "Blue Line", 0.0, 0.0));
        let connections = vec![Connection::new(1, 3, "Interchange", 0.2)];
        let network = MetroNetwork::new(&stations, &connections).unwrap();

        assert_eq!(network.station_count(), 4);
        assert!(network.connection_between("A", "C").is_some());
        assert!(network.connection_between("D", "C").is_none());
    }

    #[test]
    fn test_negative_distance_rejected() {
        let connections = vec![Connection::new(1, 2, "Red Line", -0.5)];
        let result = MetroNetwork::new(&stations(), &connections);

        assert!(matches!(
            result,
            Err(Error::InvalidDistance { from: 1, to: 2, .. })
        ));
    }

    #[test]
    fn test_repeated_connection_keeps_last_record() {
        let connections = vec![
            Connection::new(1, 2, "Red Line", 1.0),
            Connection::new(2, 1, "Blue Line", 3.0),
        ];
        let network = MetroNetwork::new(&stations(), &connections).unwrap();

        assert_eq!(network.connection_count(), 1);
        let edge = network.connection_between("A", "B").unwrap();
        assert_eq!(edge.line, "Blue Line");
        assert_eq!(edge.distance_km, 3.0);
    }
}
