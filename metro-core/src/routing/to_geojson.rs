use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry, GeometryValue};
use serde_json::json;

use super::planner::{LineSegment, Route};
use crate::{Error, model::MetroNetwork, model::Station};

impl Route {
    /// Converts the route to a `GeoJSON` `FeatureCollection`.
    ///
    /// Every line segment becomes a `LineString` through the stations it
    /// covers, followed by one `Point` per station on the route.
    pub fn to_geojson(&self, network: &MetroNetwork) -> Result<FeatureCollection, Error> {
        let stations = self
            .stations
            .iter()
            .map(|name| {
                network.station(name).ok_or_else(|| {
                    Error::InvalidData(format!("Station {name:?} is not part of the network"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut features = Vec::with_capacity(self.segments.len() + stations.len());

        let mut cursor = 0;
        for (idx, segment) in self.segments.iter().enumerate() {
            let end = self.stations[cursor..]
                .iter()
                .position(|name| *name == segment.end_station)
                .map(|offset| cursor + offset)
                .ok_or_else(|| {
                    Error::InvalidData(format!(
                        "Segment end {:?} does not follow the route",
                        segment.end_station
                    ))
                })?;
            features.push(create_segment_feature(idx, segment, &stations[cursor..=end])?);
            cursor = end;
        }

        for (idx, station) in stations.iter().enumerate() {
            features.push(create_station_feature(idx, station)?);
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, network: &MetroNetwork) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(network)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn create_segment_feature(
    idx: usize,
    segment: &LineSegment,
    stations: &[&Station],
) -> Result<Feature, Error> {
    let coords: Vec<Coord<f64>> = stations.iter().map(|s| s.geometry.into()).collect();
    let geometry = Geometry::new(GeometryValue::from(&LineString::new(coords)));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "feature_type": "segment",
            "segment_index": idx,
            "line": segment.line,
            "from": segment.start_station,
            "to": segment.end_station,
            "stations": stations.len(),
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn create_station_feature(idx: usize, station: &Station) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeometryValue::from(&station.geometry));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "feature_type": "station",
            "stop_index": idx,
            "station_id": station.id,
            "name": station.name,
            "line": station.line,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
