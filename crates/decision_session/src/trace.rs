use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// One entry of the decision timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEvent {
    pub id: String,
    #[serde(rename = "atISO")]
    pub at: DateTime<Utc>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Append-only event log; ids come from a per-log counter
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
    seq: u64,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, title: impl Into<String>, detail: Option<String>, data: Option<Value>) -> &TraceEvent {
        self.seq += 1;
        self.events.push(TraceEvent {
            id: format!("trace-{}", self.seq),
            at: Utc::now(),
            title: title.into(),
            detail,
            data,
        });
        &self.events[self.events.len() - 1]
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }
}
