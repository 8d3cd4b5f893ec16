//! GeoJSON rendering of a parsed feed.
//!
//! Stops become Point features. Routes become LineString features traced
//! along the first trip of each route, with calls ordered by numeric
//! `stop_sequence`. Records whose coordinates are missing or unparseable are
//! left out rather than emitted as null geometry.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{FeedData, Stop, StopTime, Trip};

const DEFAULT_ROUTE_COLOR: &str = "0000FF";
const DEFAULT_ROUTE_TEXT_COLOR: &str = "FFFFFF";

/// Position or path of one feature. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature<P> {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: Geometry,
    properties: P,
}

impl<P> Feature<P> {
    fn new(geometry: Geometry, properties: P) -> Self {
        Self {
            kind: "Feature",
            geometry,
            properties,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection<P> {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    fn new(features: Vec<Feature<P>>) -> Self {
        Self {
            kind: "FeatureCollection",
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Properties carried by a stop feature. Absent columns stay absent in the
/// output instead of serializing as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_station: Option<String>,
}

/// Properties carried by a route feature. Colors always render, falling back
/// to the conventional blue-on-white when the feed omits them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_long_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_type: Option<String>,
    pub route_color: String,
    pub route_text_color: String,
}

/// Render every stop with usable coordinates as a Point feature.
pub fn stops_to_geojson(stops: &[Stop]) -> FeatureCollection<StopProperties> {
    let features = stops
        .iter()
        .filter_map(|stop| {
            let position = coordinates(stop)?;
            Some(Feature::new(
                Geometry::Point {
                    coordinates: position,
                },
                StopProperties {
                    stop_id: stop.stop_id.clone(),
                    stop_name: stop.stop_name.clone(),
                    stop_code: stop.stop_code.clone(),
                    location_type: stop.location_type.clone(),
                    parent_station: stop.parent_station.clone(),
                },
            ))
        })
        .collect();

    FeatureCollection::new(features)
}

/// Render each route as a LineString along its first trip.
///
/// The trip's calls are ordered by numeric `stop_sequence` and resolved
/// against the stop table. Routes that end up with fewer than two usable
/// positions produce no feature; a line needs two ends.
pub fn routes_to_geojson(data: &FeedData) -> FeatureCollection<RouteProperties> {
    let stops_by_id: HashMap<&str, &Stop> = data
        .stops
        .iter()
        .filter_map(|stop| stop.stop_id.as_deref().map(|id| (id, stop)))
        .collect();

    let mut trips_by_route: HashMap<&str, Vec<&Trip>> = HashMap::new();
    for trip in &data.trips {
        if let Some(route_id) = trip.route_id.as_deref() {
            trips_by_route.entry(route_id).or_default().push(trip);
        }
    }

    let features = data
        .routes
        .iter()
        .filter_map(|route| {
            let route_id = route.route_id.as_deref()?;
            let trip = trips_by_route.get(route_id)?.first()?;
            let trip_id = trip.trip_id.as_deref()?;

            let mut calls: Vec<&StopTime> = data
                .stop_times
                .iter()
                .filter(|st| st.trip_id.as_deref() == Some(trip_id))
                .collect();
            calls.sort_by_key(|st| sequence_of(st));

            let path: Vec<[f64; 2]> = calls
                .iter()
                .filter_map(|st| st.stop_id.as_deref())
                .filter_map(|id| stops_by_id.get(id))
                .filter_map(|stop| coordinates(stop))
                .collect();
            if path.len() < 2 {
                return None;
            }

            Some(Feature::new(
                Geometry::LineString { coordinates: path },
                RouteProperties {
                    route_id: route.route_id.clone(),
                    route_short_name: route.route_short_name.clone(),
                    route_long_name: route.route_long_name.clone(),
                    route_type: route.route_type.clone(),
                    route_color: route
                        .route_color
                        .clone()
                        .unwrap_or_else(|| DEFAULT_ROUTE_COLOR.to_string()),
                    route_text_color: route
                        .route_text_color
                        .clone()
                        .unwrap_or_else(|| DEFAULT_ROUTE_TEXT_COLOR.to_string()),
                },
            ))
        })
        .collect();

    FeatureCollection::new(features)
}

/// Bounding box over every stop with usable coordinates, as
/// `[[min_lon, min_lat], [max_lon, max_lat]]`. `None` when nothing is
/// placeable.
pub fn feed_bounds(stops: &[Stop]) -> Option<[[f64; 2]; 2]> {
    stops
        .iter()
        .filter_map(coordinates)
        .fold(None, |bounds, [lon, lat]| {
            Some(match bounds {
                None => [[lon, lat], [lon, lat]],
                Some([[min_lon, min_lat], [max_lon, max_lat]]) => [
                    [min_lon.min(lon), min_lat.min(lat)],
                    [max_lon.max(lon), max_lat.max(lat)],
                ],
            })
        })
}

fn coordinates(stop: &Stop) -> Option<[f64; 2]> {
    let lon = stop.stop_lon.as_deref()?.parse().ok()?;
    let lat = stop.stop_lat.as_deref()?.parse().ok()?;
    Some([lon, lat])
}

fn sequence_of(stop_time: &StopTime) -> i64 {
    stop_time
        .stop_sequence
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or(i64::MAX)
}
