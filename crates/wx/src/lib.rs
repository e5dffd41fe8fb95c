//! Wind observation providers.
//!
//! This is the seam between the pure solvers and however wind data is
//! actually obtained. The planner asks a [`WindProvider`] for one observation
//! per waypoint; anything network- or scraper-shaped lives behind this trait,
//! outside the workspace. The providers here serve pre-fetched data: a single
//! uniform snapshot, or a table read from a YAML file.

use std::fs::File;
use std::path::Path;

use flight_core::geo::GeoPoint;
use flight_core::units::knots_to_mph;
use flight_wind::WindObservation;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum WxError {
    #[error("failed to read wind table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse wind table: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("wind table has {available} entries but waypoint {requested} was requested")]
    TableExhausted { available: usize, requested: usize },
    #[error("unrecognized wind speed label '{0}'")]
    BadSpeedLabel(String),
}

/// Supplies one observation per waypoint, in route order.
pub trait WindProvider {
    fn observe(&self, index: usize, waypoint: GeoPoint) -> Result<WindObservation, WxError>;
}

/// Applies one observation to every waypoint (a uniform snapshot).
#[derive(Debug, Clone, Copy)]
pub struct UniformWind(pub WindObservation);

impl WindProvider for UniformWind {
    fn observe(&self, _index: usize, _waypoint: GeoPoint) -> Result<WindObservation, WxError> {
        Ok(self.0)
    }
}

/// Pre-fetched observations, index-aligned with the route's waypoints.
#[derive(Debug, Clone)]
pub struct WindTable {
    observations: Vec<WindObservation>,
}

impl WindTable {
    pub fn new(observations: Vec<WindObservation>) -> WindTable {
        WindTable { observations }
    }

    /// Load a table of `{speed, direction_deg}` records from a YAML file.
    ///
    /// Speeds are either plain mph numbers or labels with a unit suffix as
    /// sounding displays report them (`57kt`, `65.6mph`).
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<WindTable, WxError> {
        let reader = File::open(path.as_ref())?;
        let records: Vec<WindRecord> = serde_yaml::from_reader(reader)?;
        let observations = records
            .into_iter()
            .map(WindRecord::into_observation)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(entries = observations.len(), "wind table loaded");
        Ok(WindTable { observations })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl WindProvider for WindTable {
    fn observe(&self, index: usize, _waypoint: GeoPoint) -> Result<WindObservation, WxError> {
        self.observations
            .get(index)
            .copied()
            .ok_or(WxError::TableExhausted {
                available: self.observations.len(),
                requested: index,
            })
    }
}

#[derive(Debug, Deserialize)]
struct WindRecord {
    speed: SpeedField,
    direction_deg: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SpeedField {
    Mph(f64),
    Label(String),
}

impl WindRecord {
    fn into_observation(self) -> Result<WindObservation, WxError> {
        let speed_mph = match self.speed {
            SpeedField::Mph(value) => value,
            SpeedField::Label(label) => parse_speed_mph(&label)?,
        };
        Ok(WindObservation::from_degrees(speed_mph, self.direction_deg))
    }
}

/// Parse a speed label: a numeric prefix followed by an optional unit suffix.
/// `kt`/`kts`/`kn` are converted to mph; bare numbers and `mph` pass through.
pub fn parse_speed_mph(label: &str) -> Result<f64, WxError> {
    let trimmed = label.trim();
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(trimmed.len());
    let (number, suffix) = trimmed.split_at(split);
    let value: f64 = number
        .parse()
        .map_err(|_| WxError::BadSpeedLabel(label.to_string()))?;
    match suffix.trim().to_ascii_lowercase().as_str() {
        "" | "mph" => Ok(value),
        "kt" | "kts" | "kn" => Ok(knots_to_mph(value)),
        _ => Err(WxError::BadSpeedLabel(label.to_string())),
    }
}
