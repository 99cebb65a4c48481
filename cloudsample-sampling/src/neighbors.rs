//! Neighbor selection strategies
//!
//! Both strategies operate on one center at a time and fill `out_indices`
//! with point indices plus one padding flag per slot. An example with `k`
//! valid points and `k < M` slots always gets exactly `M - k` flagged slots;
//! downstream consumers must respect the flags since every slot carries a
//! concrete index.

use cloudsample_core::{squared_distance, ExampleView, Point3f};
use itertools::Itertools;
use rand::Rng;

/// Select neighbors by independent uniform draws over the valid points.
///
/// Sampling is with replacement; the center's own index may be drawn. When
/// fewer valid points than slots exist, every valid point is emitted once (in
/// index order) and the remaining slots repeat the first valid point, flagged
/// as padding.
pub fn sample_uniform_neighbors<R: Rng>(
    example: &ExampleView<'_>,
    rng: &mut R,
    out_indices: &mut [u32],
    out_padding: &mut [f32],
) {
    debug_assert_eq!(out_indices.len(), out_padding.len());

    let valid = example.valid_indices();
    if valid.is_empty() {
        out_indices.fill(0);
        out_padding.fill(1.0);
        return;
    }

    if valid.len() >= out_indices.len() {
        for (slot, flag) in out_indices.iter_mut().zip(out_padding.iter_mut()) {
            *slot = valid[rng.gen_range(0..valid.len())] as u32;
            *flag = 0.0;
        }
        return;
    }

    for (j, (slot, flag)) in out_indices
        .iter_mut()
        .zip(out_padding.iter_mut())
        .enumerate()
    {
        if j < valid.len() {
            *slot = valid[j] as u32;
            *flag = 0.0;
        } else {
            *slot = valid[0] as u32;
            *flag = 1.0;
        }
    }
}

/// Select the exact nearest valid points to `center`.
///
/// All valid points are ranked by squared Euclidean distance, ties broken by
/// lowest index. A selected slot is flagged as padding when its distance
/// exceeds `max_distance` (the index is still emitted). When fewer valid
/// points than slots exist, the remainder repeats the nearest point and is
/// always flagged.
pub fn sample_closest_neighbors(
    example: &ExampleView<'_>,
    center: &Point3f,
    max_distance: f32,
    out_indices: &mut [u32],
    out_padding: &mut [f32],
) {
    debug_assert_eq!(out_indices.len(), out_padding.len());

    let valid = example.valid_indices();
    if valid.is_empty() {
        out_indices.fill(0);
        out_padding.fill(1.0);
        return;
    }

    let max_dist_sq = max_distance * max_distance;
    let ordered: Vec<(usize, f32)> = valid
        .iter()
        .map(|&i| (i, squared_distance(&example.point(i), center)))
        .sorted_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
        .collect();

    for (j, (slot, flag)) in out_indices
        .iter_mut()
        .zip(out_padding.iter_mut())
        .enumerate()
    {
        if j < ordered.len() {
            let (index, dist_sq) = ordered[j];
            *slot = index as u32;
            *flag = if dist_sq > max_dist_sq { 1.0 } else { 0.0 };
        } else {
            *slot = ordered[0].0 as u32;
            *flag = 1.0;
        }
    }
}
