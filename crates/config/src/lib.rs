//! Catalog models and loaders for the Flight Travel Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Airport entry parsed from catalog files. Coordinates are kept as strings
/// so catalogs can mix DMS (`38°44′50″N`) and decimal-degree forms.
#[derive(Debug, Deserialize, Clone)]
pub struct AirportConfig {
    pub name: String,
    pub code: String,
    pub lat: String,
    pub lon: String,
}

impl AirportConfig {
    /// Parse the catalog coordinate strings into decimal degrees.
    pub fn position_degrees(&self) -> Result<(f64, f64), ConfigError> {
        Ok((
            coords::parse_coordinate(&self.lat)?,
            coords::parse_coordinate(&self.lon)?,
        ))
    }
}

/// Aircraft entry parsed from catalog files.
#[derive(Debug, Deserialize, Clone)]
pub struct AircraftConfig {
    pub name: String,
    pub cruise_speed_mph: f64,
    pub cruise_level_hpa: f64,
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unparseable coordinate '{0}'")]
    BadCoordinate(String),
    #[error("airport '{0}' not found in catalog")]
    AirportNotFound(String),
    #[error("aircraft '{0}' not found in catalog")]
    AircraftNotFound(String),
}

/// Load airport entries from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_airports<P: AsRef<Path>>(path: P) -> Result<Vec<AirportConfig>, ConfigError> {
    load_records(path)
}

/// Load aircraft entries from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_aircraft<P: AsRef<Path>>(path: P) -> Result<Vec<AircraftConfig>, ConfigError> {
    load_records(path)
}

/// Find an airport by code or name, case-insensitively.
pub fn find_airport<'a>(
    catalog: &'a [AirportConfig],
    requested: &str,
) -> Result<&'a AirportConfig, ConfigError> {
    let upper = requested.to_uppercase();
    catalog
        .iter()
        .find(|a| a.code.to_uppercase() == upper || a.name.to_uppercase() == upper)
        .ok_or_else(|| ConfigError::AirportNotFound(requested.to_string()))
}

/// Find an aircraft by name, case-insensitively.
pub fn find_aircraft<'a>(
    catalog: &'a [AircraftConfig],
    requested: &str,
) -> Result<&'a AircraftConfig, ConfigError> {
    let upper = requested.to_uppercase();
    catalog
        .iter()
        .find(|a| a.name.to_uppercase() == upper)
        .ok_or_else(|| ConfigError::AircraftNotFound(requested.to_string()))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

/// Coordinate-string parsing for catalog entries and CLI arguments.
pub mod coords {
    use super::ConfigError;

    /// Parse a single coordinate into decimal degrees.
    ///
    /// Accepts signed decimal degrees (`-90.3614`) and DMS strings with a
    /// trailing hemisphere letter (`38°44′50″N`, `090°21′41″W`). Any
    /// non-numeric characters serve as separators between the degree, minute,
    /// and second fields.
    pub fn parse_coordinate(text: &str) -> Result<f64, ConfigError> {
        let trimmed = text.trim();
        let Some(last) = trimmed.chars().last() else {
            return Err(ConfigError::BadCoordinate(text.to_string()));
        };

        let hemisphere = match last.to_ascii_uppercase() {
            'N' | 'E' => Some(1.0),
            'S' | 'W' => Some(-1.0),
            _ => None,
        };

        let Some(sign) = hemisphere else {
            return trimmed
                .parse::<f64>()
                .map_err(|_| ConfigError::BadCoordinate(text.to_string()));
        };

        let body = &trimmed[..trimmed.len() - last.len_utf8()];
        let fields: Vec<f64> = body
            .split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| ConfigError::BadCoordinate(text.to_string()))?;

        let degrees = match fields.as_slice() {
            [d] => *d,
            [d, m] => d + m / 60.0,
            [d, m, s] => d + m / 60.0 + s / 3600.0,
            _ => return Err(ConfigError::BadCoordinate(text.to_string())),
        };

        Ok(sign * degrees)
    }

    /// Parse a `"lat lon"` pair (whitespace- or comma-separated) into decimal degrees.
    pub fn parse_coordinate_pair(text: &str) -> Result<(f64, f64), ConfigError> {
        let parts: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();
        match parts.as_slice() {
            [lat, lon] => Ok((parse_coordinate(lat)?, parse_coordinate(lon)?)),
            _ => Err(ConfigError::BadCoordinate(text.to_string())),
        }
    }
}
