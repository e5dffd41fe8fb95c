//! Wind triangle resolution.
//!
//! Each waypoint's scalar wind observation is rotated into a frame aligned
//! with the route's overall direction; the aircraft crabs so the cross-track
//! airspeed component cancels the crosswind, and the remaining along-track
//! airspeed minus the headwind component is the groundspeed over that region.

use flight_core::geo::GeoPoint;
use thiserror::Error;

/// A scalar wind observation at a waypoint.
///
/// `from_direction_rad` follows the meteorological convention: the compass
/// direction the wind blows *from*, in radians clockwise from true north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindObservation {
    pub speed_mph: f64,
    pub from_direction_rad: f64,
}

impl WindObservation {
    /// Still air.
    pub fn calm() -> WindObservation {
        WindObservation {
            speed_mph: 0.0,
            from_direction_rad: 0.0,
        }
    }

    /// Build from a compass direction in decimal degrees.
    pub fn from_degrees(speed_mph: f64, from_direction_deg: f64) -> WindObservation {
        WindObservation {
            speed_mph,
            from_direction_rad: from_direction_deg.to_radians(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WindError {
    #[error("airspeed must be positive, got {0} mph")]
    InvalidAirspeed(f64),
    #[error("wind speed must be non-negative, got {0} mph")]
    InvalidWindSpeed(f64),
    #[error("crosswind {crosswind_mph:.1} mph exceeds airspeed {airspeed_mph:.1} mph; cannot hold course")]
    CrosswindExceedsAirspeed {
        crosswind_mph: f64,
        airspeed_mph: f64,
    },
    #[error("origin and destination are coincident; track direction is undefined")]
    UndefinedTrack,
}

/// Planar frame aligned with the route's overall direction.
///
/// Built from the origin-to-destination displacement `(Δlat, Δlon)`, a
/// flat-plane approximation good enough for direction, not distance. The
/// stored angle is the signed angle between the track and true north.
#[derive(Debug, Clone, Copy)]
pub struct TrackFrame {
    cos_theta: f64,
    sin_theta: f64,
}

impl TrackFrame {
    pub fn from_endpoints(origin: GeoPoint, destination: GeoPoint) -> Result<TrackFrame, WindError> {
        let dlat = destination.lat_rad - origin.lat_rad;
        let dlon = destination.lon_rad - origin.lon_rad;
        if dlat == 0.0 && dlon == 0.0 {
            return Err(WindError::UndefinedTrack);
        }
        let theta = dlon.atan2(dlat);
        Ok(TrackFrame {
            cos_theta: theta.cos(),
            sin_theta: theta.sin(),
        })
    }

    /// Track bearing in radians clockwise from true north, in `(-π, π]`.
    pub fn bearing_rad(&self) -> f64 {
        self.sin_theta.atan2(self.cos_theta)
    }
}

/// Groundspeed along the track at one waypoint.
///
/// The crosswind component must stay within the airspeed for the crab to
/// cancel it; beyond that the aircraft cannot hold course and the observation
/// is rejected. The result may be negative (headwind exceeding airspeed);
/// callers reject non-positive groundspeeds when integrating.
pub fn resolve_groundspeed(
    airspeed_mph: f64,
    frame: TrackFrame,
    observation: WindObservation,
) -> Result<f64, WindError> {
    if !(airspeed_mph > 0.0) {
        return Err(WindError::InvalidAirspeed(airspeed_mph));
    }
    if !(observation.speed_mph >= 0.0) {
        return Err(WindError::InvalidWindSpeed(observation.speed_mph));
    }

    // Wind from-ray in (north, east) components.
    let from_north = observation.speed_mph * observation.from_direction_rad.cos();
    let from_east = observation.speed_mph * observation.from_direction_rad.sin();

    // Rotate into the track frame: headwind opposes travel, crosswind is lateral.
    let headwind = from_north * frame.cos_theta + from_east * frame.sin_theta;
    let crosswind = -from_north * frame.sin_theta + from_east * frame.cos_theta;

    if crosswind.abs() > airspeed_mph {
        return Err(WindError::CrosswindExceedsAirspeed {
            crosswind_mph: crosswind.abs(),
            airspeed_mph,
        });
    }

    let along_track_airspeed = (airspeed_mph * airspeed_mph - crosswind * crosswind).sqrt();
    Ok(along_track_airspeed - headwind)
}
