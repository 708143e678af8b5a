pub mod baseline;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod delta;
pub mod error;
pub mod model;
pub mod points_csv;
pub mod policy;
pub mod report;
pub mod simulation;

pub use baseline::{ANCHORS, Anchor, OFFSETS, Offset, generate_baseline, generate_points};
pub use catalog::{POLICY_OPTIONS, PolicyOption, find_policy_option};
pub use config::Config;
pub use constants::DELTA_REPORT_LIMIT;
pub use error::{Result, SimError};
pub use model::{AreaTag, MeshDelta, SamplePoint};
pub use points_csv::{read_points_csv, read_points_from_reader, write_points};
pub use policy::{PolicyParams, PolicyType, parse_policy};
pub use report::{ReportFormat, export_deltas};
pub use simulation::{SimulationOutcome, apply_policy};
