//! Export helpers for CSV and JSON artifacts.

pub mod profile {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "waypoint,lat_deg,lon_deg,wind_speed_mph,wind_from_deg,groundspeed_mph";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard waypoint-profile CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted per waypoint.
    #[derive(Debug, Clone)]
    pub struct Record {
        pub waypoint: usize,
        pub lat_deg: f64,
        pub lon_deg: f64,
        pub wind_speed_mph: f64,
        pub wind_from_deg: f64,
        pub groundspeed_mph: f64,
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.6},{:.6},{:.1},{:.1},{:.2}",
                self.waypoint,
                self.lat_deg,
                self.lon_deg,
                self.wind_speed_mph,
                self.wind_from_deg,
                self.groundspeed_mph,
            )
        }
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// JSON sidecar summarising a planned flight.
    #[derive(Debug, Serialize)]
    pub struct PlanSummary<'a> {
        pub origin: &'a str,
        pub destination: &'a str,
        pub depart_utc: Option<&'a str>,
        pub arrive_utc: Option<&'a str>,
        pub total_distance_mi: f64,
        pub segment_length_mi: f64,
        pub waypoint_count: usize,
        pub airspeed_mph: f64,
        pub travel_time_hours: f64,
    }

    /// Write the summary sidecar, creating parent directories as needed.
    pub fn write_summary(path: &Path, summary: &PlanSummary<'_>) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
