use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Coarse zone classification of a sample point
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AreaTag {
    Downtown,
    Station,
    Odori,
    Susukino,
    Ring,
    Suburb,
}

#[inline]
pub fn clamp01(n: f64) -> f64 {
    if n.is_nan() {
        0.0
    } else {
        n.clamp(0.0, 1.0)
    }
}

/// Measured congestion of one small geographic cell.
///
/// `intensity` is kept in [0, 1]: every write path (`new`, `with_intensity`,
/// deserialization) clamps it, and NaN is stored as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub id: String,
    pub mesh: String,
    pub lng: f64,
    pub lat: f64,
    #[serde(deserialize_with = "deserialize_intensity")]
    intensity: f64,
    pub area_tag: AreaTag,
}

impl SamplePoint {
    pub fn new(
        id: impl Into<String>,
        mesh: impl Into<String>,
        (lng, lat): (f64, f64),
        intensity: f64,
        area_tag: AreaTag,
    ) -> Self {
        Self {
            id: id.into(),
            mesh: mesh.into(),
            lng,
            lat,
            intensity: clamp01(intensity),
            area_tag,
        }
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Returns a copy of this point carrying a new (clamped) intensity
    pub fn with_intensity(&self, intensity: f64) -> Self {
        Self {
            intensity: clamp01(intensity),
            ..self.clone()
        }
    }
}

fn deserialize_intensity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp01)
}

/// Before/after aggregate of one mesh, rounded for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshDelta {
    pub mesh: String,
    pub before: f64,
    pub after: f64,
    pub delta_pct: f64,
}
