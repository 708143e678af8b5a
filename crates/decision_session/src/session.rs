//! Single in-memory decision session.
//!
//! Holds the step the user is on, their framing answers, the selected
//! policy card and the result of the last explicit simulation run. Every
//! user-visible action appends to the decision trace.

use crate::error::{Result, SessionError};
use crate::framing::{Framing, FramingPatch};
use crate::trace::{TraceEvent, TraceLog};

use congestion_sim::{
    MeshDelta, PolicyOption, PolicyType, SamplePoint, apply_policy, find_policy_option,
    generate_baseline,
};
use log::{debug, info};
use serde::Serialize;
use serde_json::{Value, json};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Step {
    Pulse,
    Brief,
    Chat,
    Analysis,
    Simulation,
    Trace,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    pub selected_policy_id: Option<String>,
    pub selected_policy: Option<PolicyType>,
    pub ran: bool,
    pub mesh_deltas: Vec<MeshDelta>,
}

#[derive(Debug, Clone)]
pub struct Session {
    step: Step,
    framing: Framing,
    trace: TraceLog,
    baseline: Vec<SamplePoint>,
    after: Option<Vec<SamplePoint>>,
    simulation: SimulationState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            step: Step::Pulse,
            framing: Framing::default(),
            trace: TraceLog::new(),
            baseline: generate_baseline(),
            after: None,
            simulation: SimulationState::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn framing(&self) -> &Framing {
        &self.framing
    }

    pub fn trace(&self) -> &[TraceEvent] {
        self.trace.events()
    }

    pub fn baseline(&self) -> &[SamplePoint] {
        &self.baseline
    }

    /// Transformed points of the last run, if any
    pub fn after(&self) -> Option<&[SamplePoint]> {
        self.after.as_deref()
    }

    pub fn simulation(&self) -> &SimulationState {
        &self.simulation
    }

    pub fn selected_option(&self) -> Option<&'static PolicyOption> {
        self.simulation
            .selected_policy_id
            .as_deref()
            .and_then(find_policy_option)
    }

    pub fn go_to(&mut self, step: Step) {
        debug!("Step {} -> {}", self.step, step);
        self.step = step;
    }

    pub fn log(&mut self, title: impl Into<String>, detail: Option<String>, data: Option<Value>) {
        let event = self.trace.push(title, detail, data);
        debug!("Trace {}: {}", event.id, event.title);
    }

    pub fn set_framing(&mut self, patch: FramingPatch) {
        self.framing.apply(patch);
    }

    pub fn reset_framing(&mut self) {
        self.framing = Framing::default();
    }

    /// Selects a policy card, discarding any previous simulation result.
    ///
    /// # Errors
    /// `UnknownPolicy` if `policy_id` names no card; the session is left
    /// untouched in that case.
    pub fn select_policy(&mut self, policy_id: &str) -> Result<()> {
        let option = find_policy_option(policy_id)
            .ok_or_else(|| SessionError::UnknownPolicy(policy_id.to_string()))?;

        if let Some(prev) = self.selected_option()
            && prev.id != option.id
        {
            self.log(
                "Rejected policy option",
                Some(prev.title.to_string()),
                Some(serde_json::to_value(prev)?),
            );
        }

        self.simulation = SimulationState {
            selected_policy_id: Some(option.id.to_string()),
            selected_policy: Some(option.policy),
            ran: false,
            mesh_deltas: Vec::new(),
        };
        self.after = None;

        self.log(
            "Selected policy option",
            Some(format!("{} — {}", option.title, option.subtitle)),
            Some(serde_json::to_value(option)?),
        );
        Ok(())
    }

    /// Runs the engine for the selected policy against the session baseline
    pub fn run_selected_simulation(&mut self) -> Result<&[MeshDelta]> {
        let policy = self
            .simulation
            .selected_policy
            .ok_or(SessionError::NoPolicySelected)?;
        if self.simulation.ran {
            return Err(SessionError::AlreadyRan);
        }

        let outcome = apply_policy(policy, &self.baseline);
        info!(
            "Simulated {} over {} points, {} mesh deltas",
            policy,
            outcome.after.len(),
            outcome.deltas.len()
        );

        self.after = Some(outcome.after);
        self.simulation.ran = true;
        self.simulation.mesh_deltas = outcome.deltas;

        let data = json!({ "meshDeltas": self.simulation.mesh_deltas });
        self.log("Ran simulation", Some(format!("Policy: {policy}")), Some(data));
        Ok(&self.simulation.mesh_deltas)
    }

    /// Records the decision and moves to the trace step
    pub fn finalize_decision(&mut self) -> Result<()> {
        if !self.simulation.ran {
            return Err(SessionError::SimulationNotRun);
        }
        let chosen = self.selected_option();
        let detail = chosen
            .map(|c| c.title.to_string())
            .unwrap_or_else(|| "No policy selected".to_string());
        let data = json!({
            "framing": self.framing,
            "chosen": chosen,
            "meshDeltas": self.simulation.mesh_deltas,
        });
        self.log("Finalized decision", Some(detail), Some(data));
        self.go_to(Step::Trace);
        Ok(())
    }

    /// Back to a fresh session with a regenerated baseline
    pub fn reset(&mut self) {
        info!("Resetting session");
        *self = Self::new();
    }
}
