use std::path::PathBuf;

use clap::Parser;
use flight_travel_calculator::config::{AirportConfig, coords, find_airport, load_airports};
use flight_travel_calculator::constants::{DEFAULT_SEGMENT_LENGTH_MI, EARTH_RADIUS_MI};
use flight_travel_calculator::geo::GeoPoint;
use flight_travel_calculator::route::build_route;

/// Print the discretized great-circle route as `lat_deg,lon_deg` rows, one
/// per waypoint, for hand-off to an external wind-data source.
#[derive(Parser)]
#[command(author, version, about = "List the waypoints of a great-circle route")]
struct Cli {
    /// Origin: airport code/name from the catalog, or a "lat lon" pair
    #[arg(long)]
    from: String,

    /// Destination, same forms as --from
    #[arg(long)]
    to: String,

    /// Airport catalog
    #[arg(long, default_value = "data/catalogs/airports.yaml")]
    airports: PathBuf,

    /// Waypoint spacing in statute miles
    #[arg(long, default_value_t = DEFAULT_SEGMENT_LENGTH_MI)]
    segment_length: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let airports = load_airports(&cli.airports)?;

    let origin = resolve_endpoint(&airports, &cli.from)?;
    let destination = resolve_endpoint(&airports, &cli.to)?;

    let route = build_route(origin, destination, cli.segment_length, EARTH_RADIUS_MI)?;

    println!("lat_deg,lon_deg");
    for waypoint in route.waypoints() {
        println!("{:.6},{:.6}", waypoint.lat_degrees(), waypoint.lon_degrees());
    }

    Ok(())
}

fn resolve_endpoint(airports: &[AirportConfig], requested: &str) -> anyhow::Result<GeoPoint> {
    if requested.contains(|c: char| c.is_whitespace() || c == ',') {
        let (lat_deg, lon_deg) = coords::parse_coordinate_pair(requested)?;
        return Ok(GeoPoint::from_degrees(lat_deg, lon_deg));
    }
    let airport = find_airport(airports, requested)?;
    let (lat_deg, lon_deg) = airport.position_degrees()?;
    Ok(GeoPoint::from_degrees(lat_deg, lon_deg))
}
