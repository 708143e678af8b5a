//! Answers collected by the scripted framing questions.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Goal {
    CongestionReduction,
    StaySpendPromotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum FocusArea {
    Downtown,
    Odori,
    Susukino,
    Station,
    Ring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TimeRange {
    Today,
    Weekend,
    Weekday,
    Evening,
    AllDay,
}

/// What counts as an unacceptable outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum Threshold {
    #[serde(rename = "peak>0.75")]
    #[strum(serialize = "peak>0.75")]
    PeakAbove075,
    #[serde(rename = "peak>0.65")]
    #[strum(serialize = "peak>0.65")]
    PeakAbove065,
    #[serde(rename = "queue>10m")]
    #[strum(serialize = "queue>10m")]
    QueueOver10Min,
    #[serde(rename = "dwell>+8m")]
    #[strum(serialize = "dwell>+8m")]
    DwellPlus8Min,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Framing {
    pub goal: Option<Goal>,
    pub areas: Vec<FocusArea>,
    pub time_range: Option<TimeRange>,
    pub unacceptable_threshold: Option<Threshold>,
    pub notes: String,
}

/// Partial update; `None` fields leave the current value alone
#[derive(Debug, Clone, Default)]
pub struct FramingPatch {
    pub goal: Option<Goal>,
    pub areas: Option<Vec<FocusArea>>,
    pub time_range: Option<TimeRange>,
    pub unacceptable_threshold: Option<Threshold>,
    pub notes: Option<String>,
}

impl Framing {
    pub fn apply(&mut self, patch: FramingPatch) {
        if let Some(goal) = patch.goal {
            self.goal = Some(goal);
        }
        if let Some(areas) = patch.areas {
            self.areas = areas;
        }
        if let Some(time_range) = patch.time_range {
            self.time_range = Some(time_range);
        }
        if let Some(threshold) = patch.unacceptable_threshold {
            self.unacceptable_threshold = Some(threshold);
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }

    /// Adds `area` if absent, removes it otherwise
    pub fn toggle_area(&mut self, area: FocusArea) {
        if let Some(pos) = self.areas.iter().position(|a| *a == area) {
            self.areas.remove(pos);
        } else {
            self.areas.push(area);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.goal.is_some()
            && !self.areas.is_empty()
            && self.time_range.is_some()
            && self.unacceptable_threshold.is_some()
    }
}
