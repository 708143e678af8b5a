use crate::model::{MeshDelta, SamplePoint};

use itertools::Itertools;
use std::collections::HashMap;

/// Rounds half up (towards +inf) at one decimal place.
///
/// `-0.25` becomes `-0.2`, not `-0.3`.
#[inline]
pub fn round1(n: f64) -> f64 {
    (n * 10.0 + 0.5).floor() / 10.0
}

/// Percentage change, defined as 0 for a zero baseline
#[inline]
pub fn delta_pct(before: f64, after: f64) -> f64 {
    if before == 0.0 {
        0.0
    } else {
        (after - before) / before * 100.0
    }
}

fn sum_by_mesh(points: &[SamplePoint]) -> HashMap<&str, f64> {
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for p in points {
        *sums.entry(p.mesh.as_str()).or_insert(0.0) += p.intensity();
    }
    sums
}

/// One delta row per mesh seen on either side.
///
/// Rows come out in first-seen order (meshes of `before` first, then meshes
/// only present in `after`). A mesh missing on one side counts as 0 there.
pub fn mesh_deltas(before: &[SamplePoint], after: &[SamplePoint]) -> Vec<MeshDelta> {
    let before_sums = sum_by_mesh(before);
    let after_sums = sum_by_mesh(after);

    before
        .iter()
        .chain(after)
        .map(|p| p.mesh.as_str())
        .unique()
        .map(|mesh| {
            let before_sum = before_sums.get(mesh).copied().unwrap_or(0.0);
            let after_sum = after_sums.get(mesh).copied().unwrap_or(0.0);
            MeshDelta {
                mesh: mesh.to_string(),
                before: round1(before_sum),
                after: round1(after_sum),
                delta_pct: round1(delta_pct(before_sum, after_sum)),
            }
        })
        .collect()
}

/// Orders rows by descending absolute change and keeps the first `limit`.
///
/// The sort is stable: rows with equal magnitude keep their input order.
pub fn rank_deltas(mut deltas: Vec<MeshDelta>, limit: usize) -> Vec<MeshDelta> {
    deltas.sort_by(|x, y| y.delta_pct.abs().total_cmp(&x.delta_pct.abs()));
    deltas.truncate(limit);
    deltas
}
