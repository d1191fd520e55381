use metro_core::prelude::*;

/// Two lines crossing at an interchange, shaped like the Bengaluru sample
/// network: Purple 1..=18, Green 19..=50, interchange between 11 and 36.
fn sample_catalogs() -> (Vec<Station>, Vec<Connection>) {
    let stations = (1..=50_i64)
        .map(|id| {
            let line = if id <= 18 { "Purple Line" } else { "Green Line" };
            let offset = id as f64 * 0.001;
            Station::new(id, format!("Station {id}"), line, 12.9 + offset, 77.5 + offset)
        })
        .collect();

    let mut connections = Vec::new();
    for id in 1..18_i64 {
        let distance = 1.2 + 0.2 * ((id % 3) as f64 - 1.0);
        connections.push(Connection::new(id, id + 1, "Purple Line", distance));
    }
    for id in 19..50_i64 {
        let distance = 1.1 + 0.15 * ((id % 4) as f64 - 1.0);
        connections.push(Connection::new(id, id + 1, "Green Line", distance));
    }
    connections.push(Connection::new(11, 36, "Interchange", 0.2));

    (stations, connections)
}

fn sample_network() -> MetroNetwork {
    let (stations, connections) = sample_catalogs();
    MetroNetwork::new(&stations, &connections).unwrap()
}

fn assert_consistent(network: &MetroNetwork, route: &Route, source: &str, destination: &str) {
    assert_eq!(route.source(), Some(source));
    assert_eq!(route.destination(), Some(destination));

    // Every consecutive pair is a graph edge and the distances add up
    let mut total = 0.0;
    for pair in route.stations.windows(2) {
        let edge = network
            .connection_between(&pair[0], &pair[1])
            .unwrap_or_else(|| panic!("{} and {} are not connected", pair[0], pair[1]));
        total += edge.distance_km;
    }
    assert!((total - route.distance_km).abs() < 1e-9);

    // Segments are contiguous and trace the whole path
    let mut cursor = 0;
    for segment in &route.segments {
        assert_eq!(route.stations[cursor], segment.start_station);
        let end = cursor
            + route.stations[cursor..]
                .iter()
                .position(|name| *name == segment.end_station)
                .unwrap();
        assert!(end > cursor);
        for pair in route.stations[cursor..=end].windows(2) {
            let edge = network.connection_between(&pair[0], &pair[1]).unwrap();
            assert_eq!(edge.line, segment.line);
        }
        cursor = end;
    }
    assert_eq!(cursor, route.stations.len() - 1);

    // Adjacent segments always differ in line
    for pair in route.segments.windows(2) {
        assert_ne!(pair[0].line, pair[1].line);
    }
    assert!(route.segments.len() <= route.stop_count());
}

#[test]
fn route_across_interchange() {
    let network = sample_network();
    let route = network.find_route("Station 1", "Station 40").unwrap();

    assert_consistent(&network, &route, "Station 1", "Station 40");
    assert_eq!(
        route.segments,
        vec![
            LineSegment::new("Purple Line", "Station 1", "Station 11"),
            LineSegment::new("Interchange", "Station 11", "Station 36"),
            LineSegment::new("Green Line", "Station 36", "Station 40"),
        ]
    );
    assert_eq!(route.transfers(), 2);
    assert_eq!(route.stop_count(), 10 + 1 + 4);
    assert_eq!(
        route.estimated_travel_time_minutes(),
        u32::try_from(route.stop_count()).unwrap() * MINUTES_PER_STOP
    );
}

#[test]
fn every_reachable_pair_is_consistent() {
    let network = sample_network();
    let names = network.station_names();

    for source in names.iter().step_by(7) {
        for destination in names.iter().step_by(5) {
            let route = network.find_route(source, destination).unwrap();
            assert_consistent(&network, &route, source, destination);
        }
    }
}

#[test]
fn routes_are_symmetric() {
    let network = sample_network();

    for (a, b) in [
        ("Station 1", "Station 50"),
        ("Station 18", "Station 19"),
        ("Station 5", "Station 12"),
    ] {
        let forward = network.find_route(a, b).unwrap();
        let backward = network.find_route(b, a).unwrap();

        let mut reversed = backward.stations.clone();
        reversed.reverse();
        assert_eq!(forward.stations, reversed);
        assert!((forward.distance_km - backward.distance_km).abs() < 1e-9);
    }
}

#[test]
fn concrete_red_blue_scenario() {
    let stations = vec![
        Station::new(1, "A", "Red Line", 0.0, 0.0),
        Station::new(2, "B", "Red Line", 0.0, 0.0),
        Station::new(3, "C", "Red Line", 0.0, 0.0),
        Station::new(4, "D", "Blue Line", 0.0, 0.0),
        Station::new(5, "E", "Blue Line", 0.0, 0.0),
    ];
    let connections = vec![
        Connection::new(1, 2, "Red Line", 1.0),
        Connection::new(2, 3, "Red Line", 1.0),
        Connection::new(3, 4, "Blue Line", 1.0),
    ];

    let route = find_route("A", "D", &stations, &connections)
        .unwrap()
        .unwrap();
    assert_eq!(route.stations, vec!["A", "B", "C", "D"]);
    assert_eq!(
        route.segments,
        vec![
            LineSegment::new("Red Line", "A", "C"),
            LineSegment::new("Blue Line", "C", "D"),
        ]
    );

    // E has no edges
    assert!(
        find_route("A", "E", &stations, &connections)
            .unwrap()
            .is_none()
    );
    assert!(
        find_route("Nonexistent", "D", &stations, &connections)
            .unwrap()
            .is_none()
    );
}

#[test]
fn dangling_reference_aborts_query() {
    let (stations, mut connections) = sample_catalogs();
    connections.push(Connection::new(3, 999, "Purple Line", 1.0));

    let result = find_route("Station 1", "Station 2", &stations, &connections);
    assert!(matches!(result, Err(Error::UnknownStationId(999))));
}

#[test]
fn single_station_route() {
    let network = sample_network();
    let route = network.find_route("Station 7", "Station 7").unwrap();

    assert_eq!(route.stations, vec!["Station 7"]);
    assert!(route.segments.is_empty());
    assert_eq!(route.estimated_travel_time_minutes(), 0);
}
