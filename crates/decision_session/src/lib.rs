pub mod config;
pub mod error;
pub mod export;
pub mod framing;
pub mod session;
pub mod trace;

pub use config::Config;
pub use error::{Result, SessionError};
pub use export::{export_payload, export_session, format_trace_as_text};
pub use framing::{FocusArea, Framing, FramingPatch, Goal, Threshold, TimeRange};
pub use session::{Session, SimulationState, Step};
pub use trace::{TraceEvent, TraceLog};
