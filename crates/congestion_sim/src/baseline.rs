//! Deterministic baseline point set.
//!
//! Each anchor names one mesh; it is expanded into one point per offset,
//! scaled by the offset weight.

use crate::model::{AreaTag, SamplePoint};

/// Mesh anchor: centre coordinate and base intensity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub mesh: &'static str,
    pub lng: f64,
    pub lat: f64,
    pub intensity: f64,
    pub area_tag: AreaTag,
}

/// Offset from the anchor and the intensity weight applied there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
    pub weight: f64,
}

const fn anchor(mesh: &'static str, lng: f64, lat: f64, intensity: f64, area_tag: AreaTag) -> Anchor {
    Anchor {
        mesh,
        lng,
        lat,
        intensity,
        area_tag,
    }
}

pub const ANCHORS: &[Anchor] = &[
    // Odori band
    anchor("A-01", 141.3542, 43.061, 0.82, AreaTag::Odori),
    anchor("A-02", 141.357, 43.0612, 0.78, AreaTag::Odori),
    anchor("A-03", 141.3518, 43.0604, 0.7, AreaTag::Odori),
    // Susukino cluster
    anchor("B-01", 141.3539, 43.0546, 0.84, AreaTag::Susukino),
    anchor("B-02", 141.3562, 43.0552, 0.68, AreaTag::Susukino),
    anchor("B-03", 141.3513, 43.0538, 0.62, AreaTag::Susukino),
    // Station corridor
    anchor("C-01", 141.3509, 43.0687, 0.8, AreaTag::Station),
    anchor("C-02", 141.3493, 43.0698, 0.66, AreaTag::Station),
    anchor("C-03", 141.3522, 43.0669, 0.6, AreaTag::Station),
    // Downtown connector
    anchor("D-01", 141.3546, 43.0582, 0.72, AreaTag::Downtown),
    anchor("D-02", 141.3568, 43.0588, 0.58, AreaTag::Downtown),
    anchor("D-03", 141.3519, 43.0576, 0.55, AreaTag::Downtown),
    // Ring (absorption areas)
    anchor("R-01", 141.366, 43.0618, 0.28, AreaTag::Ring),
    anchor("R-02", 141.342, 43.0609, 0.24, AreaTag::Ring),
    anchor("R-03", 141.3612, 43.0526, 0.22, AreaTag::Ring),
    anchor("R-04", 141.3478, 43.0721, 0.2, AreaTag::Ring),
    // Suburb (low baseline)
    anchor("S-01", 141.33, 43.085, 0.08, AreaTag::Suburb),
    anchor("S-02", 141.378, 43.083, 0.07, AreaTag::Suburb),
];

pub const OFFSETS: &[Offset] = &[
    Offset { dx: 0.0, dy: 0.0, weight: 1.0 },
    Offset { dx: 0.0022, dy: 0.0016, weight: 0.82 },
    Offset { dx: -0.002, dy: 0.0012, weight: 0.78 },
    Offset { dx: 0.0014, dy: -0.0017, weight: 0.74 },
    Offset { dx: -0.0016, dy: -0.0014, weight: 0.7 },
];

/// Expands every anchor through every offset.
///
/// Point ids are `"{mesh}-{offset index}"`, so they are unique as long as
/// the anchor mesh ids are.
pub fn generate_points(anchors: &[Anchor], offsets: &[Offset]) -> Vec<SamplePoint> {
    let mut points = Vec::with_capacity(anchors.len() * offsets.len());
    for a in anchors {
        for (i, o) in offsets.iter().enumerate() {
            points.push(SamplePoint::new(
                format!("{}-{}", a.mesh, i),
                a.mesh,
                (a.lng + o.dx, a.lat + o.dy),
                a.intensity * o.weight,
                a.area_tag,
            ));
        }
    }
    points
}

/// The fixed session baseline (18 meshes x 5 points)
pub fn generate_baseline() -> Vec<SamplePoint> {
    generate_points(ANCHORS, OFFSETS)
}
