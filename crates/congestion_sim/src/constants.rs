/// Maximum number of rows kept in a delta report
pub const DELTA_REPORT_LIMIT: usize = 8;

/// Transform coefficients (applied to the policy's moved fraction)
pub const NON_TARGET_GAIN_RATIO: f64 = 0.18; // non-targeted areas absorb a little
pub const RING_GAIN_RATIO: f64 = 0.9;
pub const SUBURB_GAIN_RATIO: f64 = 0.25;
pub const TIME_DISPERSION_PEAK_SMOOTHING: f64 = 0.06;

/// Expected headers in sample point CSV files
pub const POINT_CSV_HEADERS: [&str; 6] = ["id", "mesh", "lng", "lat", "intensity", "area_tag"];

/// Headers of the delta report CSV
pub const DELTA_CSV_HEADERS: [&str; 4] = ["Mesh", "Before", "After", "DeltaPct"];

/// Config defaults
pub const DEFAULT_OUTPUT_DIR: &str = "reports";
pub const DEFAULT_REPORT_FORMAT: &str = "csv";
