// Error types for racetrace

use crate::session::Compound;
use snafu::Snafu;

#[derive(Debug, Snafu, Clone, PartialEq)]
pub enum RacetraceError {
    // Errors for lap lookups and pairwise comparisons
    #[snafu(display("No lap records for driver {driver}"))]
    DriverNotFound { driver: String },
    #[snafu(display("Not enough data: {reason}"))]
    InsufficientData { reason: String },

    // Data-quality errors surfaced by stint segmentation
    #[snafu(display("Stint {stint} of driver {driver} spans multiple compounds: {compounds:?}"))]
    InconsistentStint {
        driver: String,
        stint: u32,
        compounds: Vec<Compound>,
    },

    // Errors for telemetry projection
    #[snafu(display("No usable lap data for driver {driver}"))]
    NoLapData { driver: String },
    #[snafu(display("Unknown telemetry overlay channel: {channel}"))]
    UnknownChannel { channel: String },
}
