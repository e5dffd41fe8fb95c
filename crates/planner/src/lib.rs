//! Flight planning orchestrator that sequences routing, per-waypoint wind
//! resolution, and travel-time integration.

use flight_core::constants::{DEFAULT_SEGMENT_LENGTH_MI, EARTH_RADIUS_MI};
use flight_core::geo::GeoPoint;
use flight_route::{Route, RouteError, build_route};
use flight_time::{IntegrateError, integrate};
use flight_wind::{TrackFrame, WindError, WindObservation, resolve_groundspeed};
use flight_wx::{WindProvider, WxError};
use thiserror::Error;
use tracing::debug;

/// Inputs necessary to plan a single leg. Distances in statute miles, speeds
/// in mph; the defaults come from `flight_core::constants`.
#[derive(Debug, Clone)]
pub struct FlightConfig {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub airspeed_mph: f64,
    pub segment_length_mi: f64,
    pub earth_radius_mi: f64,
}

impl FlightConfig {
    pub fn new(origin: GeoPoint, destination: GeoPoint, airspeed_mph: f64) -> FlightConfig {
        FlightConfig {
            origin,
            destination,
            airspeed_mph,
            segment_length_mi: DEFAULT_SEGMENT_LENGTH_MI,
            earth_radius_mi: EARTH_RADIUS_MI,
        }
    }
}

/// Top-level planning error. Wind-stage failures carry the waypoint index at
/// which they were detected.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("routing failed: {0}")]
    Route(#[from] RouteError),
    #[error("track direction undefined: {0}")]
    Track(WindError),
    #[error("wind lookup failed at waypoint {waypoint}: {source}")]
    Wx { waypoint: usize, source: WxError },
    #[error("wind resolution failed at waypoint {waypoint}: {source}")]
    Wind { waypoint: usize, source: WindError },
    #[error("expected {expected} wind observations, got {actual}")]
    ObservationCount { expected: usize, actual: usize },
    #[error("time integration failed: {0}")]
    Integrate(#[from] IntegrateError),
}

/// A completed plan. Read-only after integration; the groundspeed profile is
/// index-aligned with the route's waypoints.
#[derive(Debug, Clone)]
pub struct FlightPlan {
    route: Route,
    observations: Vec<WindObservation>,
    groundspeeds_mph: Vec<f64>,
    airspeed_mph: f64,
    travel_time_hours: f64,
}

impl FlightPlan {
    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn observations(&self) -> &[WindObservation] {
        &self.observations
    }

    pub fn groundspeeds_mph(&self) -> &[f64] {
        &self.groundspeeds_mph
    }

    pub fn airspeed_mph(&self) -> f64 {
        self.airspeed_mph
    }

    pub fn travel_time_hours(&self) -> f64 {
        self.travel_time_hours
    }
}

/// Plan a flight, asking `provider` for one observation per waypoint.
pub fn plan_flight(
    config: &FlightConfig,
    provider: &dyn WindProvider,
) -> Result<FlightPlan, PlanError> {
    let route = build_route(
        config.origin,
        config.destination,
        config.segment_length_mi,
        config.earth_radius_mi,
    )?;
    debug!(
        distance_mi = route.total_distance_mi(),
        waypoints = route.waypoints().len(),
        "route built"
    );

    let mut observations = Vec::with_capacity(route.waypoints().len());
    for (index, waypoint) in route.waypoints().iter().enumerate() {
        let observation = provider
            .observe(index, *waypoint)
            .map_err(|source| PlanError::Wx {
                waypoint: index,
                source,
            })?;
        observations.push(observation);
    }

    complete(config, route, observations)
}

/// Plan a flight from a pre-fetched observation sequence, one entry per
/// waypoint including origin and destination.
pub fn plan_with_observations(
    config: &FlightConfig,
    observations: Vec<WindObservation>,
) -> Result<FlightPlan, PlanError> {
    let route = build_route(
        config.origin,
        config.destination,
        config.segment_length_mi,
        config.earth_radius_mi,
    )?;
    complete(config, route, observations)
}

fn complete(
    config: &FlightConfig,
    route: Route,
    observations: Vec<WindObservation>,
) -> Result<FlightPlan, PlanError> {
    let expected = route.waypoint_count() + 2;
    if observations.len() != expected {
        return Err(PlanError::ObservationCount {
            expected,
            actual: observations.len(),
        });
    }

    let frame =
        TrackFrame::from_endpoints(config.origin, config.destination).map_err(PlanError::Track)?;

    let mut groundspeeds_mph = Vec::with_capacity(observations.len());
    for (index, observation) in observations.iter().enumerate() {
        let groundspeed = resolve_groundspeed(config.airspeed_mph, frame, *observation).map_err(
            |source| PlanError::Wind {
                waypoint: index,
                source,
            },
        )?;
        groundspeeds_mph.push(groundspeed);
    }

    let travel_time_hours = integrate(
        route.total_distance_mi(),
        route.segment_length_mi(),
        route.waypoint_count(),
        &groundspeeds_mph,
    )?;
    debug!(travel_time_hours, "plan complete");

    Ok(FlightPlan {
        route,
        observations,
        groundspeeds_mph,
        airspeed_mph: config.airspeed_mph,
        travel_time_hours,
    })
}
