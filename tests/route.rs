use flight_travel_calculator::constants::EARTH_RADIUS_MI;
use flight_travel_calculator::geo::GeoPoint;
use flight_travel_calculator::route::{RouteError, build_route, haversine_mi};

#[test]
fn waypoint_count_matches_distance_over_segment() {
    let pairs = [
        ((38.7472, -90.3614), (33.4342, -112.0117)), // STL -> PHX
        ((40.6397, -73.7789), (33.9425, -118.4081)), // JFK -> LAX
        ((25.7933, -80.2906), (47.4489, -122.3094)), // MIA -> SEA
        ((0.0, 0.0), (0.0, 10.0)),
    ];
    for ((lat1, lon1), (lat2, lon2)) in pairs {
        let origin = GeoPoint::from_degrees(lat1, lon1);
        let destination = GeoPoint::from_degrees(lat2, lon2);
        let distance = haversine_mi(origin, destination, EARTH_RADIUS_MI).expect("distance");
        let route = build_route(origin, destination, 50.0, EARTH_RADIUS_MI).expect("route");

        assert_eq!(route.waypoint_count(), (distance / 50.0).floor() as usize);
        assert_eq!(route.waypoints().len(), route.waypoint_count() + 2);
        assert!((route.total_distance_mi() - distance).abs() < 1e-9);
    }
}

#[test]
fn endpoints_round_trip_through_degrees() {
    let origin = GeoPoint::from_degrees(38.7472, -90.3614);
    let destination = GeoPoint::from_degrees(33.4342, -112.0117);
    let route = build_route(origin, destination, 50.0, EARTH_RADIUS_MI).expect("route");

    let first = route.origin();
    let last = route.destination();
    assert!((first.lat_degrees() - 38.7472).abs() < 1e-9);
    assert!((first.lon_degrees() - -90.3614).abs() < 1e-9);
    assert!((last.lat_degrees() - 33.4342).abs() < 1e-9);
    assert!((last.lon_degrees() - -112.0117).abs() < 1e-9);
}

#[test]
fn interior_waypoints_lie_on_the_great_circle() {
    // A point on the shortest path splits the total distance exactly.
    let origin = GeoPoint::from_degrees(38.7472, -90.3614);
    let destination = GeoPoint::from_degrees(33.4342, -112.0117);
    let route = build_route(origin, destination, 50.0, EARTH_RADIUS_MI).expect("route");
    let total = route.total_distance_mi();

    for waypoint in &route.waypoints()[1..route.waypoints().len() - 1] {
        let to_waypoint = haversine_mi(origin, *waypoint, EARTH_RADIUS_MI).expect("leg");
        let from_waypoint = haversine_mi(*waypoint, destination, EARTH_RADIUS_MI).expect("leg");
        assert!(
            (to_waypoint + from_waypoint - total).abs() / total < 1e-9,
            "waypoint off the great circle by {} mi",
            to_waypoint + from_waypoint - total
        );
    }
}

#[test]
fn waypoint_longitudes_step_monotonically() {
    let origin = GeoPoint::from_degrees(38.7472, -90.3614);
    let destination = GeoPoint::from_degrees(33.4342, -112.0117);
    let route = build_route(origin, destination, 50.0, EARTH_RADIUS_MI).expect("route");

    let lons: Vec<f64> = route.waypoints().iter().map(|w| w.lon_rad).collect();
    for pair in lons[..lons.len() - 1].windows(2) {
        assert!(pair[1] < pair[0], "westbound longitudes must decrease");
    }
}

#[test]
fn equator_distance_matches_arc_length() {
    let origin = GeoPoint::from_degrees(0.0, 0.0);
    let destination = GeoPoint::from_degrees(0.0, 10.0);
    let distance = haversine_mi(origin, destination, EARTH_RADIUS_MI).expect("distance");
    let arc = EARTH_RADIUS_MI * 10.0_f64.to_radians();
    assert!((distance - arc).abs() < 1e-9);
}

#[test]
fn meridional_route_steps_latitude_linearly() {
    let origin = GeoPoint::from_degrees(10.0, 20.0);
    let destination = GeoPoint::from_degrees(30.0, 20.0);
    let route = build_route(origin, destination, 50.0, EARTH_RADIUS_MI).expect("route");
    assert!(route.waypoint_count() > 0);

    let count = route.waypoint_count() as f64;
    for (i, waypoint) in route.waypoints().iter().enumerate() {
        assert!((waypoint.lon_degrees() - 20.0).abs() < 1e-9);
        if i <= route.waypoint_count() {
            let expected_lat = 10.0 + 20.0 * i as f64 / count;
            assert!(
                (waypoint.lat_degrees() - expected_lat).abs() < 1e-9,
                "waypoint {i} latitude {} != {expected_lat}",
                waypoint.lat_degrees()
            );
        }
    }
}

#[test]
fn endpoints_closer_than_one_segment_yield_direct_route() {
    let origin = GeoPoint::from_degrees(38.7472, -90.3614);
    let destination = GeoPoint::from_degrees(38.8472, -90.3614);
    let route = build_route(origin, destination, 50.0, EARTH_RADIUS_MI).expect("route");
    assert_eq!(route.waypoint_count(), 0);
    assert_eq!(route.waypoints().len(), 2);
}

#[test]
fn coincident_endpoints_are_rejected() {
    let point = GeoPoint::from_degrees(38.7472, -90.3614);
    let err = build_route(point, point, 50.0, EARTH_RADIUS_MI).unwrap_err();
    assert!(matches!(err, RouteError::CoincidentEndpoints));
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    let good = GeoPoint::from_degrees(10.0, 10.0);
    let bad_lat = GeoPoint::from_degrees(95.0, 10.0);
    let bad_lon = GeoPoint::from_degrees(10.0, 200.0);

    assert!(matches!(
        build_route(bad_lat, good, 50.0, EARTH_RADIUS_MI).unwrap_err(),
        RouteError::LatitudeOutOfRange(_)
    ));
    assert!(matches!(
        build_route(good, bad_lon, 50.0, EARTH_RADIUS_MI).unwrap_err(),
        RouteError::LongitudeOutOfRange(_)
    ));
}

#[test]
fn non_positive_segment_length_is_rejected() {
    let origin = GeoPoint::from_degrees(0.0, 0.0);
    let destination = GeoPoint::from_degrees(0.0, 10.0);
    assert!(matches!(
        build_route(origin, destination, 0.0, EARTH_RADIUS_MI).unwrap_err(),
        RouteError::InvalidSegmentLength(_)
    ));
}
