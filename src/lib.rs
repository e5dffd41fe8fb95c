//! Wind-corrected travel time over great-circle routes.
//!
//! The solvers live in small library crates so multiple front-ends (CLI,
//! batch tooling) can share them; this facade re-exports the workspace
//! members under stable module names.

pub use flight_config as config;
pub use flight_core::{constants, geo, units};
pub use flight_export as export;
pub use flight_planner as planner;
pub use flight_route as route;
pub use flight_time as time;
pub use flight_wind as wind;
pub use flight_wx as wx;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
