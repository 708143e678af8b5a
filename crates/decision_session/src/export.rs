use crate::error::{Result, SessionError};
use crate::framing::Framing;
use crate::session::Session;
use crate::trace::TraceEvent;

use chrono::{DateTime, SecondsFormat, Utc};
use congestion_sim::catalog::{BRIEF_INSIGHTS, Insight};
use congestion_sim::{MeshDelta, PolicyOption};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const PRODUCT_NAME: &str = "MAPAI Tourism (Sapporo Edition)";
const TEXT_HEADER: &str = "MAPAI Tourism — Decision Trace (Sapporo Edition)";
const FILE_STEM: &str = "mapai-tourism-sapporo-trace";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationExport<'a> {
    pub mesh_deltas: &'a [MeshDelta],
}

/// Everything a reviewer needs to audit the decision
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload<'a> {
    pub product: &'static str,
    #[serde(rename = "exportedAtISO")]
    pub exported_at: DateTime<Utc>,
    pub brief_insights: &'static [Insight],
    pub framing: &'a Framing,
    pub selected_policy: Option<&'static PolicyOption>,
    pub simulation: Option<SimulationExport<'a>>,
    pub trace: &'a [TraceEvent],
}

pub fn export_payload(session: &Session, exported_at: DateTime<Utc>) -> ExportPayload<'_> {
    let sim = session.simulation();
    ExportPayload {
        product: PRODUCT_NAME,
        exported_at,
        brief_insights: BRIEF_INSIGHTS,
        framing: session.framing(),
        selected_policy: session.selected_option(),
        simulation: sim.ran.then_some(SimulationExport {
            mesh_deltas: &sim.mesh_deltas,
        }),
        trace: session.trace(),
    }
}

fn iso(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Plain-text timeline, one line per event
pub fn format_trace_as_text(events: &[TraceEvent], exported_at: DateTime<Utc>) -> String {
    let mut lines = vec![
        TEXT_HEADER.to_string(),
        format!("Exported: {}", iso(&exported_at)),
        String::new(),
    ];
    for e in events {
        match &e.detail {
            Some(detail) => lines.push(format!("[{}] {} — {}", iso(&e.at), e.title, detail)),
            None => lines.push(format!("[{}] {}", iso(&e.at), e.title)),
        }
    }
    lines.join("\n")
}

/// Written file locations
#[derive(Debug, Clone)]
pub struct ExportedFiles {
    pub json: PathBuf,
    pub text: PathBuf,
}

/// Writes `{stem}-YYYY-MM-DD.json` and `.txt` into `output_dir`
pub fn export_session(session: &Session, output_dir: Option<&Path>) -> Result<ExportedFiles> {
    let exported_at = Utc::now();
    let date = exported_at.format("%Y-%m-%d");

    let dir = output_dir.unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|e| SessionError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let json_path = dir.join(format!("{FILE_STEM}-{date}.json"));
    let payload = export_payload(session, exported_at);
    let json = serde_json::to_string_pretty(&payload)?;
    write_file(&json_path, &json)?;

    let text_path = dir.join(format!("{FILE_STEM}-{date}.txt"));
    write_file(&text_path, &format_trace_as_text(session.trace(), exported_at))?;

    Ok(ExportedFiles {
        json: json_path,
        text: text_path,
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| SessionError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
