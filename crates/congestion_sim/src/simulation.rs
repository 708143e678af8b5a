//! Policy impact transform.
//!
//! Targeted areas lose a share of their intensity, everything else gains a
//! little, and ring/suburb areas absorb extra on top. The result is a new
//! point set plus a ranked per-mesh delta report.

use crate::constants::{
    DELTA_REPORT_LIMIT, NON_TARGET_GAIN_RATIO, RING_GAIN_RATIO, SUBURB_GAIN_RATIO,
};
use crate::delta::{mesh_deltas, rank_deltas};
use crate::model::{AreaTag, MeshDelta, SamplePoint, clamp01};
use crate::policy::{PolicyParams, PolicyType};

use log::debug;
use serde::Serialize;

/// Transformed points and the display-ready delta report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    pub after: Vec<SamplePoint>,
    pub deltas: Vec<MeshDelta>,
}

/// New intensity of a single point under `params`
pub fn transform_intensity(intensity: f64, tag: AreaTag, params: &PolicyParams) -> f64 {
    let moved = params.moved_fraction;
    let is_target = params.targets(tag);

    // negative for non-targeted areas, so they gain
    let reduce = if is_target {
        moved
    } else {
        -moved * NON_TARGET_GAIN_RATIO
    };
    let shifted = clamp01(intensity * (1.0 - reduce));

    let ring_boost = if tag == AreaTag::Ring {
        1.0 + moved * RING_GAIN_RATIO * params.ring_gain_bias
    } else {
        1.0
    };
    let suburb_boost = if tag == AreaTag::Suburb {
        1.0 + moved * SUBURB_GAIN_RATIO
    } else {
        1.0
    };
    let boosted = clamp01(shifted * ring_boost * suburb_boost);

    let smoothing = if is_target { params.peak_smoothing } else { 0.0 };
    clamp01(boosted * (1.0 - smoothing))
}

/// Applies `policy` to `baseline` without touching it.
///
/// `after` has the same length and order as `baseline`; `deltas` holds at
/// most [`DELTA_REPORT_LIMIT`] rows sorted by descending `|delta_pct|`.
pub fn apply_policy(policy: PolicyType, baseline: &[SamplePoint]) -> SimulationOutcome {
    let params = policy.params();
    debug!(
        "Applying {} to {} points (moved fraction {}, targets {:?})",
        policy,
        baseline.len(),
        params.moved_fraction,
        params.targeted
    );

    let after: Vec<SamplePoint> = baseline
        .iter()
        .map(|p| p.with_intensity(transform_intensity(p.intensity(), p.area_tag, &params)))
        .collect();

    let deltas = rank_deltas(mesh_deltas(baseline, &after), DELTA_REPORT_LIMIT);
    debug!("Delta report has {} rows", deltas.len());

    SimulationOutcome { after, deltas }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::generate_baseline;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-9;

    fn point(id: &str, mesh: &str, intensity: f64, tag: AreaTag) -> SamplePoint {
        SamplePoint::new(id, mesh, (141.35, 43.06), intensity, tag)
    }

    #[test]
    fn test_time_dispersion_on_downtown_mesh() {
        let baseline = vec![
            point("A-01-0", "A-01", 0.5, AreaTag::Downtown),
            point("A-01-1", "A-01", 0.3, AreaTag::Downtown),
        ];
        let outcome = apply_policy(PolicyType::TimeDispersion, &baseline);

        assert!((outcome.after[0].intensity() - 0.4136).abs() < EPS);
        assert!((outcome.after[1].intensity() - 0.24816).abs() < EPS);

        assert_eq!(outcome.deltas.len(), 1);
        let d = &outcome.deltas[0];
        assert_eq!(d.mesh, "A-01");
        assert_eq!(d.before, 0.8);
        assert_eq!(d.after, 0.7);
        assert_eq!(d.delta_pct, -17.3);
    }

    #[test]
    fn test_empty_baseline() {
        for policy in PolicyType::iter() {
            let outcome = apply_policy(policy, &[]);
            assert!(outcome.after.is_empty());
            assert!(outcome.deltas.is_empty());
        }
    }

    #[test]
    fn test_ring_gains_under_route_dispersion() {
        let baseline = vec![point("R-01-0", "R-01", 0.2, AreaTag::Ring)];
        let outcome = apply_policy(PolicyType::RouteDispersion, &baseline);

        let expected = 0.2 * 1.0324 * (1.0 + 0.18 * 0.9 * 1.15);
        let got = outcome.after[0].intensity();
        assert!((got - expected).abs() < EPS, "got {got}, expected {expected}");
        assert!((got - 0.245).abs() < 1e-3);
        assert!(got > 0.2);
    }

    #[test]
    fn test_suburb_gains_under_every_policy() {
        for policy in PolicyType::iter() {
            let moved = policy.params().moved_fraction;
            let got = transform_intensity(0.1, AreaTag::Suburb, &policy.params());
            let expected = 0.1 * (1.0 + moved * 0.18) * (1.0 + moved * 0.25);
            assert!((got - expected).abs() < EPS, "{policy}");
        }
    }

    #[test]
    fn test_untargeted_area_gains_slightly() {
        // station is not targeted by soft restriction
        let got = transform_intensity(0.5, AreaTag::Station, &PolicyType::SoftRestriction.params());
        assert!((got - 0.5 * (1.0 + 0.1 * 0.18)).abs() < EPS);
    }

    #[test]
    fn test_transit_nudges_reduce_station_without_smoothing() {
        let got = transform_intensity(0.8, AreaTag::Station, &PolicyType::TransitNudges.params());
        assert!((got - 0.8 * 0.86).abs() < EPS);
    }

    #[test]
    fn test_saturated_points_stay_in_range() {
        let tags = [
            AreaTag::Downtown,
            AreaTag::Station,
            AreaTag::Odori,
            AreaTag::Susukino,
            AreaTag::Ring,
            AreaTag::Suburb,
        ];
        for policy in PolicyType::iter() {
            for tag in tags {
                for i in 0..=20 {
                    let intensity = i as f64 / 20.0;
                    let got = transform_intensity(intensity, tag, &policy.params());
                    assert!((0.0..=1.0).contains(&got), "{policy} {tag} {intensity} -> {got}");
                }
            }
        }
        // a full ring cell cannot exceed 1
        let full = transform_intensity(1.0, AreaTag::Ring, &PolicyType::RouteDispersion.params());
        assert_eq!(full, 1.0);
    }

    #[test]
    fn test_baseline_properties_for_every_policy() {
        let baseline = generate_baseline();
        let distinct: HashSet<&str> = baseline.iter().map(|p| p.mesh.as_str()).collect();

        for policy in PolicyType::iter() {
            let outcome = apply_policy(policy, &baseline);
            assert_eq!(outcome.after.len(), baseline.len());
            assert_eq!(outcome.deltas.len(), distinct.len().min(DELTA_REPORT_LIMIT));

            for (before, after) in baseline.iter().zip(&outcome.after) {
                assert_eq!(before.id, after.id);
                assert_eq!(before.mesh, after.mesh);
                assert_eq!(before.lng, after.lng);
                assert_eq!(before.lat, after.lat);
                assert_eq!(before.area_tag, after.area_tag);
                assert!((0.0..=1.0).contains(&after.intensity()));
            }

            for pair in outcome.deltas.windows(2) {
                assert!(pair[0].delta_pct.abs() >= pair[1].delta_pct.abs());
            }
        }
    }

    #[test]
    fn test_apply_policy_is_deterministic_and_pure() {
        let baseline = generate_baseline();
        let snapshot = baseline.clone();

        let first = apply_policy(PolicyType::TransitNudges, &baseline);
        let second = apply_policy(PolicyType::TransitNudges, &baseline);
        assert_eq!(first, second);
        assert_eq!(baseline, snapshot);
    }

    #[test]
    fn test_small_mesh_count_is_not_padded() {
        let baseline = vec![
            point("a", "M1", 0.6, AreaTag::Odori),
            point("b", "M2", 0.4, AreaTag::Ring),
            point("c", "M3", 0.0, AreaTag::Suburb),
        ];
        let outcome = apply_policy(PolicyType::SoftRestriction, &baseline);
        assert_eq!(outcome.deltas.len(), 3);
        // the all-zero mesh reports no change and sorts last
        assert_eq!(outcome.deltas[2].mesh, "M3");
        assert_eq!(outcome.deltas[2].delta_pct, 0.0);
    }

    #[test]
    fn test_route_dispersion_moves_central_meshes_most() {
        let outcome = apply_policy(PolicyType::RouteDispersion, &generate_baseline());
        let top = &outcome.deltas[0];
        // ring meshes gain about 22.5%, central meshes lose 18%
        assert!(top.mesh.starts_with("R-"), "top mesh was {}", top.mesh);
        assert!(top.delta_pct > 0.0);
    }
}
