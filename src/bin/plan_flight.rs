use std::io::Write as _;
use std::path::PathBuf;

use chrono::{DateTime, Duration, FixedOffset};
use clap::Parser;
use flight_travel_calculator::config::{
    AirportConfig, coords, find_aircraft, find_airport, load_aircraft, load_airports,
};
use flight_travel_calculator::constants::{DEFAULT_AIRSPEED_MPH, DEFAULT_SEGMENT_LENGTH_MI};
use flight_travel_calculator::export::{profile, summary};
use flight_travel_calculator::geo::GeoPoint;
use flight_travel_calculator::planner::{FlightConfig, plan_flight};
use flight_travel_calculator::wind::WindObservation;
use flight_travel_calculator::wx::{UniformWind, WindProvider, WindTable};

#[derive(Parser)]
#[command(author, version, about = "Wind-corrected flight time over a great-circle route")]
struct Cli {
    /// Origin: airport code/name from the catalog, or a "lat lon" pair
    /// (decimal degrees or DMS, e.g. "38°44′50″N 090°21′41″W")
    #[arg(long)]
    from: String,

    /// Destination, same forms as --from
    #[arg(long)]
    to: String,

    /// Airport catalog (YAML file, TOML file, or directory of TOML files)
    #[arg(long, default_value = "data/catalogs/airports.yaml")]
    airports: PathBuf,

    /// Aircraft catalog
    #[arg(long, default_value = "data/catalogs/aircraft.yaml")]
    aircraft_catalog: PathBuf,

    /// Aircraft name whose cruise speed to fly at
    #[arg(long)]
    aircraft: Option<String>,

    /// Cruise airspeed in mph (overrides --aircraft)
    #[arg(long)]
    airspeed: Option<f64>,

    /// Waypoint spacing in statute miles
    #[arg(long, default_value_t = DEFAULT_SEGMENT_LENGTH_MI)]
    segment_length: f64,

    /// Pre-fetched per-waypoint wind table (YAML), one entry per waypoint
    #[arg(long)]
    winds: Option<PathBuf>,

    /// Uniform wind speed in mph, used when no table is given
    #[arg(long, default_value_t = 0.0)]
    wind_speed: f64,

    /// Uniform wind from-direction in compass degrees
    #[arg(long, default_value_t = 0.0)]
    wind_from: f64,

    /// Departure time (RFC 3339); arrival is reported when given
    #[arg(long)]
    depart: Option<String>,

    /// Write the per-waypoint profile as CSV (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON plan summary
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let airports = load_airports(&cli.airports)?;

    let (origin, origin_label) = resolve_endpoint(&airports, &cli.from)?;
    let (destination, destination_label) = resolve_endpoint(&airports, &cli.to)?;

    let airspeed_mph = match (cli.airspeed, &cli.aircraft) {
        (Some(mph), _) => mph,
        (None, Some(name)) => {
            let catalog = load_aircraft(&cli.aircraft_catalog)?;
            find_aircraft(&catalog, name)?.cruise_speed_mph
        }
        (None, None) => DEFAULT_AIRSPEED_MPH,
    };

    let provider: Box<dyn WindProvider> = match &cli.winds {
        Some(path) => Box::new(WindTable::from_yaml_file(path)?),
        None => Box::new(UniformWind(WindObservation::from_degrees(
            cli.wind_speed,
            cli.wind_from,
        ))),
    };

    let mut config = FlightConfig::new(origin, destination, airspeed_mph);
    config.segment_length_mi = cli.segment_length;

    let plan = plan_flight(&config, provider.as_ref())?;
    let route = plan.route();

    let hours = plan.travel_time_hours();
    let (h, m) = format_duration(hours);

    println!("=== Flight Plan ===");
    println!(
        "Origin        : {} ({:.4}°, {:.4}°)",
        origin_label,
        origin.lat_degrees(),
        origin.lon_degrees()
    );
    println!(
        "Destination   : {} ({:.4}°, {:.4}°)",
        destination_label,
        destination.lat_degrees(),
        destination.lon_degrees()
    );
    println!(
        "Route         : {:.1} mi, {} segments of {:.0} mi, {} waypoints",
        route.total_distance_mi(),
        route.waypoint_count(),
        route.segment_length_mi(),
        route.waypoints().len()
    );
    println!("Airspeed      : {:.1} mph", plan.airspeed_mph());
    println!("Travel time   : {:.3} h ({}h {:02}m)", hours, h, m);

    let mut depart_utc = None;
    let mut arrive_utc = None;
    if let Some(depart) = &cli.depart {
        let departure: DateTime<FixedOffset> = DateTime::parse_from_rfc3339(depart)?;
        let arrival = departure + Duration::seconds((hours * 3600.0).round() as i64);
        println!("Departure     : {}", departure.to_rfc3339());
        println!("Arrival       : {}", arrival.to_rfc3339());
        depart_utc = Some(departure.to_rfc3339());
        arrive_utc = Some(arrival.to_rfc3339());
    }

    if let Some(path) = &cli.csv {
        let mut writer = profile::writer_for_path(path)?;
        profile::write_header(writer.as_mut())?;
        for (index, waypoint) in route.waypoints().iter().enumerate() {
            let observation = plan.observations()[index];
            profile::Record {
                waypoint: index,
                lat_deg: waypoint.lat_degrees(),
                lon_deg: waypoint.lon_degrees(),
                wind_speed_mph: observation.speed_mph,
                wind_from_deg: observation.from_direction_rad.to_degrees(),
                groundspeed_mph: plan.groundspeeds_mph()[index],
            }
            .write_to(writer.as_mut())?;
        }
        writer.flush()?;
    }

    if let Some(path) = &cli.json {
        summary::write_summary(
            path,
            &summary::PlanSummary {
                origin: &origin_label,
                destination: &destination_label,
                depart_utc: depart_utc.as_deref(),
                arrive_utc: arrive_utc.as_deref(),
                total_distance_mi: route.total_distance_mi(),
                segment_length_mi: route.segment_length_mi(),
                waypoint_count: route.waypoint_count(),
                airspeed_mph: plan.airspeed_mph(),
                travel_time_hours: hours,
            },
        )?;
    }

    Ok(())
}

fn resolve_endpoint(
    airports: &[AirportConfig],
    requested: &str,
) -> anyhow::Result<(GeoPoint, String)> {
    if requested.contains(|c: char| c.is_whitespace() || c == ',') {
        let (lat_deg, lon_deg) = coords::parse_coordinate_pair(requested)?;
        return Ok((
            GeoPoint::from_degrees(lat_deg, lon_deg),
            format!("{:.4},{:.4}", lat_deg, lon_deg),
        ));
    }
    let airport = find_airport(airports, requested)?;
    let (lat_deg, lon_deg) = airport.position_degrees()?;
    Ok((
        GeoPoint::from_degrees(lat_deg, lon_deg),
        airport.code.clone(),
    ))
}

fn format_duration(hours: f64) -> (i64, i64) {
    let total_minutes = (hours.max(0.0) * 60.0).round() as i64;
    (total_minutes / 60, total_minutes % 60)
}
