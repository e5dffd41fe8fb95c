//! Travel-time integration over a per-waypoint groundspeed profile.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntegrateError {
    #[error("groundspeed profile has {actual} entries, route has {expected} waypoints")]
    ProfileLengthMismatch { expected: usize, actual: usize },
    #[error("groundspeed at waypoint {index} is {value_mph:.1} mph; no forward progress")]
    NonPositiveGroundspeed { index: usize, value_mph: f64 },
}

/// Total travel time in hours over a discretized route.
///
/// Each interior waypoint is treated as the midpoint of a uniform-wind region
/// one segment wide. The first region is the half segment ahead of the
/// origin; the last is the signed remainder `total − segment·count −
/// segment/2`, so region widths always sum to the total distance. A route
/// shorter than one segment has only its two endpoints and splits the
/// distance evenly between their speeds.
///
/// The profile must hold `waypoint_count + 2` entries, index-aligned with the
/// route's waypoints, and every groundspeed must be positive.
pub fn integrate(
    total_distance_mi: f64,
    segment_length_mi: f64,
    waypoint_count: usize,
    groundspeeds_mph: &[f64],
) -> Result<f64, IntegrateError> {
    let expected = waypoint_count + 2;
    if groundspeeds_mph.len() != expected {
        return Err(IntegrateError::ProfileLengthMismatch {
            expected,
            actual: groundspeeds_mph.len(),
        });
    }
    for (index, &value_mph) in groundspeeds_mph.iter().enumerate() {
        if !(value_mph > 0.0) {
            return Err(IntegrateError::NonPositiveGroundspeed { index, value_mph });
        }
    }

    let first = groundspeeds_mph[0];
    let last = groundspeeds_mph[expected - 1];

    if waypoint_count == 0 {
        return Ok(total_distance_mi / 2.0 / first + total_distance_mi / 2.0 / last);
    }

    let half_segment = segment_length_mi / 2.0;
    let trailing = total_distance_mi - segment_length_mi * waypoint_count as f64 - half_segment;
    let mut hours = half_segment / first + trailing / last;
    for &groundspeed in &groundspeeds_mph[1..=waypoint_count] {
        hours += segment_length_mi / groundspeed;
    }
    Ok(hours)
}
