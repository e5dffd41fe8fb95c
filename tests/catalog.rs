use std::io::Write;

use flight_travel_calculator::config::{
    ConfigError, coords, find_aircraft, find_airport, load_aircraft, load_airports,
};

#[test]
fn airport_catalog_contains_major_fields() {
    let airports = load_airports("data/catalogs/airports.yaml").expect("airports yaml");
    assert!(airports.len() >= 8);

    let stl = find_airport(&airports, "STL").expect("STL");
    let (lat, lon) = stl.position_degrees().expect("position");
    assert!((lat - (38.0 + 44.0 / 60.0 + 50.0 / 3600.0)).abs() < 1e-9);
    assert!((lon - -(90.0 + 21.0 / 60.0 + 41.0 / 3600.0)).abs() < 1e-9);

    let lax = find_airport(&airports, "LAX").expect("LAX");
    let (lat, lon) = lax.position_degrees().expect("position");
    assert!((lat - 33.9425).abs() < 1e-9);
    assert!((lon - -118.4081).abs() < 1e-9);
}

#[test]
fn airports_resolve_by_name_case_insensitively() {
    let airports = load_airports("data/catalogs/airports.yaml").expect("airports yaml");
    let by_name = find_airport(&airports, "denver international").expect("by name");
    assert_eq!(by_name.code, "DEN");

    assert!(matches!(
        find_airport(&airports, "XYZ").unwrap_err(),
        ConfigError::AirportNotFound(_)
    ));
}

#[test]
fn aircraft_catalog_resolves_cruise_speeds() {
    let aircraft = load_aircraft("data/catalogs/aircraft.yaml").expect("aircraft yaml");
    let b738 = find_aircraft(&aircraft, "Boeing 737-800").expect("737");
    assert_eq!(b738.cruise_speed_mph, 550.0);
    assert_eq!(b738.cruise_level_hpa, 200.0);

    assert!(matches!(
        find_aircraft(&aircraft, "Concorde").unwrap_err(),
        ConfigError::AircraftNotFound(_)
    ));
}

#[test]
fn dms_coordinates_parse() {
    let lat = coords::parse_coordinate("38°44′50″N").expect("lat");
    assert!((lat - 38.747222222).abs() < 1e-6);

    let lon = coords::parse_coordinate("090°21′41″W").expect("lon");
    assert!((lon - -90.361388888).abs() < 1e-6);

    let southern = coords::parse_coordinate("33°52′04″S").expect("southern");
    assert!(southern < 0.0);

    let plain = coords::parse_coordinate("-118.4081").expect("decimal");
    assert!((plain - -118.4081).abs() < 1e-12);
}

#[test]
fn malformed_coordinates_are_rejected() {
    assert!(matches!(
        coords::parse_coordinate("").unwrap_err(),
        ConfigError::BadCoordinate(_)
    ));
    assert!(matches!(
        coords::parse_coordinate("north by northwest").unwrap_err(),
        ConfigError::BadCoordinate(_)
    ));
    assert!(matches!(
        coords::parse_coordinate("1°2′3″4‴N").unwrap_err(),
        ConfigError::BadCoordinate(_)
    ));
}

#[test]
fn coordinate_pairs_split_on_whitespace_or_comma() {
    let (lat, lon) = coords::parse_coordinate_pair("38.7472, -90.3614").expect("pair");
    assert!((lat - 38.7472).abs() < 1e-12);
    assert!((lon - -90.3614).abs() < 1e-12);

    let (lat, lon) = coords::parse_coordinate_pair("38°44′50″N 090°21′41″W").expect("dms pair");
    assert!(lat > 38.0 && lat < 39.0);
    assert!(lon < -90.0 && lon > -91.0);

    assert!(coords::parse_coordinate_pair("38.7472").is_err());
}

#[test]
fn single_toml_catalog_files_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("airport.toml");
    let mut file = std::fs::File::create(&path).expect("create");
    writeln!(
        file,
        "name = \"Test Field\"\ncode = \"TST\"\nlat = \"10.5\"\nlon = \"-20.25\""
    )
    .expect("write");
    drop(file);

    let airports = load_airports(&path).expect("toml airport");
    assert_eq!(airports.len(), 1);
    assert_eq!(airports[0].code, "TST");
    let (lat, lon) = airports[0].position_degrees().expect("position");
    assert_eq!(lat, 10.5);
    assert_eq!(lon, -20.25);
}

#[test]
fn directories_of_toml_records_load_in_sorted_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    for (file_name, code) in [("b.toml", "BBB"), ("a.toml", "AAA")] {
        let mut file = std::fs::File::create(dir.path().join(file_name)).expect("create");
        writeln!(
            file,
            "name = \"{code} Field\"\ncode = \"{code}\"\nlat = \"1.0\"\nlon = \"2.0\""
        )
        .expect("write");
    }

    let airports = load_airports(dir.path()).expect("toml dir");
    assert_eq!(airports.len(), 2);
    assert_eq!(airports[0].code, "AAA");
    assert_eq!(airports[1].code, "BBB");
}
