//! Great-circle routing: haversine distance and evenly spaced waypoint placement.
//!
//! Distances and segment lengths share whatever unit the Earth radius is given
//! in; the rest of the workspace uses statute miles throughout.

use std::f64::consts::{FRAC_PI_2, PI};

use flight_core::geo::GeoPoint;
use thiserror::Error;

/// Errors surfaced while validating coordinates or building a route.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("latitude {0} deg outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} deg outside (-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("segment length must be positive, got {0} mi")]
    InvalidSegmentLength(f64),
    #[error("haversine intermediate {0} outside [0, 1]; coordinates are malformed")]
    HaversineDomain(f64),
    #[error("origin and destination are coincident")]
    CoincidentEndpoints,
}

/// An ordered sequence of waypoints along the great circle from origin to
/// destination, spaced one segment apart. Immutable once built.
#[derive(Debug, Clone)]
pub struct Route {
    waypoints: Vec<GeoPoint>,
    total_distance_mi: f64,
    segment_length_mi: f64,
    waypoint_count: usize,
}

impl Route {
    /// All waypoints in traversal order; first is the origin, last the destination.
    pub fn waypoints(&self) -> &[GeoPoint] {
        &self.waypoints
    }

    /// Great-circle distance between the endpoints.
    pub fn total_distance_mi(&self) -> f64 {
        self.total_distance_mi
    }

    /// Spacing the route was discretized with.
    pub fn segment_length_mi(&self) -> f64 {
        self.segment_length_mi
    }

    /// Number of whole segments, `floor(total / segment)`. The waypoint list
    /// always holds `waypoint_count + 2` points.
    pub fn waypoint_count(&self) -> usize {
        self.waypoint_count
    }

    pub fn origin(&self) -> GeoPoint {
        self.waypoints[0]
    }

    pub fn destination(&self) -> GeoPoint {
        self.waypoints[self.waypoints.len() - 1]
    }
}

/// Great-circle distance between two points via the haversine formula.
///
/// The intermediate `a` is guarded to `[0, 1]`; for valid coordinates it never
/// leaves that interval, so an excursion means the inputs are malformed.
pub fn haversine_mi(from: GeoPoint, to: GeoPoint, earth_radius_mi: f64) -> Result<f64, RouteError> {
    let dlat = to.lat_rad - from.lat_rad;
    let dlon = to.lon_rad - from.lon_rad;
    let a = (dlat / 2.0).sin().powi(2)
        + from.lat_rad.cos() * to.lat_rad.cos() * (dlon / 2.0).sin().powi(2);
    if !(0.0..=1.0).contains(&a) {
        return Err(RouteError::HaversineDomain(a));
    }
    Ok(2.0 * earth_radius_mi * a.sqrt().asin())
}

/// Discretize the great circle from `origin` to `destination` into waypoints
/// spaced `segment_length_mi` apart.
///
/// Longitude steps linearly in `waypoint_count` equal increments and each
/// intermediate latitude comes from the closed-form great-circle relation.
/// When the endpoints share a longitude that relation divides by zero, so
/// latitude steps linearly instead. Endpoints closer than one segment yield
/// the two-point route `[origin, destination]`.
pub fn build_route(
    origin: GeoPoint,
    destination: GeoPoint,
    segment_length_mi: f64,
    earth_radius_mi: f64,
) -> Result<Route, RouteError> {
    validate_point(origin)?;
    validate_point(destination)?;
    if !(segment_length_mi > 0.0) {
        return Err(RouteError::InvalidSegmentLength(segment_length_mi));
    }

    let total_distance_mi = haversine_mi(origin, destination, earth_radius_mi)?;
    if total_distance_mi == 0.0 {
        return Err(RouteError::CoincidentEndpoints);
    }

    let waypoint_count = (total_distance_mi / segment_length_mi).floor() as usize;
    let mut waypoints = Vec::with_capacity(waypoint_count + 2);
    waypoints.push(origin);

    if waypoint_count > 0 {
        let lon_step = (destination.lon_rad - origin.lon_rad) / waypoint_count as f64;
        let lat_step = (destination.lat_rad - origin.lat_rad) / waypoint_count as f64;
        let meridional = origin.lon_rad == destination.lon_rad;
        for i in 1..=waypoint_count {
            let lon_rad = origin.lon_rad + lon_step * i as f64;
            let lat_rad = if meridional {
                origin.lat_rad + lat_step * i as f64
            } else {
                great_circle_lat(origin, destination, lon_rad)
            };
            waypoints.push(GeoPoint { lat_rad, lon_rad });
        }
    }

    waypoints.push(destination);

    Ok(Route {
        waypoints,
        total_distance_mi,
        segment_length_mi,
        waypoint_count,
    })
}

/// Latitude of the great circle through `origin` and `destination` at the
/// given longitude. Undefined for equal endpoint longitudes; callers handle
/// that case before dividing.
fn great_circle_lat(origin: GeoPoint, destination: GeoPoint, lon_rad: f64) -> f64 {
    let numerator = origin.lat_rad.tan() * (lon_rad - destination.lon_rad).sin()
        + destination.lat_rad.tan() * (origin.lon_rad - lon_rad).sin();
    (numerator / (origin.lon_rad - destination.lon_rad).sin()).atan()
}

fn validate_point(point: GeoPoint) -> Result<(), RouteError> {
    if !(-FRAC_PI_2..=FRAC_PI_2).contains(&point.lat_rad) {
        return Err(RouteError::LatitudeOutOfRange(point.lat_degrees()));
    }
    if !(point.lon_rad > -PI && point.lon_rad <= PI) {
        return Err(RouteError::LongitudeOutOfRange(point.lon_degrees()));
    }
    Ok(())
}
