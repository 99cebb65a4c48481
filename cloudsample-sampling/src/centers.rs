//! Center selection strategies
//!
//! Both strategies operate on one example at a time and fill `out_indices`
//! with point indices plus one padding flag per slot. Repeated picks of real
//! points are not padding; only an example without any valid point yields
//! flagged slots (placeholder index 0).

use cloudsample_core::{squared_distance, ExampleView};
use rand::Rng;

/// Select centers by independent uniform draws over the valid points.
///
/// Sampling is with replacement, so duplicates can occur whenever the example
/// has any valid point at all.
pub fn sample_uniform_centers<R: Rng>(
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

    for (slot, flag) in out_indices.iter_mut().zip(out_padding.iter_mut()) {
        *slot = valid[rng.gen_range(0..valid.len())] as u32;
        *flag = 0.0;
    }
}

/// Select centers by greedy farthest-point sampling.
///
/// The first center is drawn uniformly at random; each following center is
/// the valid point maximizing the distance to its nearest already-chosen
/// center, ties broken by lowest point index. Once every valid point has been
/// chosen the distance table is all zero and remaining slots repeat the
/// lowest-indexed valid point.
///
/// Greedy k-center is an approximation with no global optimality guarantee;
/// the O(n * P) running-minimum update is exact for the greedy rule itself.
pub fn sample_farthest_centers<R: Rng>(
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
    out_padding.fill(0.0);

    let first = valid[rng.gen_range(0..valid.len())];
    out_indices[0] = first as u32;

    // Minimum squared distance from each valid point to the chosen set.
    let first_point = example.point(first);
    let mut min_dist: Vec<f32> = valid
        .iter()
        .map(|&i| squared_distance(&example.point(i), &first_point))
        .collect();

    for slot in 1..out_indices.len() {
        // Strict comparison keeps the lowest index on ties.
        let mut best = 0;
        for (j, &d) in min_dist.iter().enumerate() {
            if d > min_dist[best] {
                best = j;
            }
        }
        let chosen = valid[best];
        out_indices[slot] = chosen as u32;

        let chosen_point = example.point(chosen);
        for (j, &i) in valid.iter().enumerate() {
            let d = squared_distance(&example.point(i), &chosen_point);
            if d < min_dist[j] {
                min_dist[j] = d;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudsample_core::ExampleView;
    use ndarray::{Array1, Array2};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn line_example(count: usize, padded_tail: usize) -> (Array2<f32>, Array1<f32>) {
        let total = count + padded_tail;
        let mut points = Array2::<f32>::zeros((total, 3));
        let mut padding = Array1::<f32>::zeros(total);
        for i in 0..total {
            points[[i, 0]] = i as f32;
            if i >= count {
                padding[i] = 1.0;
            }
        }
        (points, padding)
    }

    #[test]
    fn test_uniform_centers_only_valid_points() {
        let (points, padding) = line_example(6, 4);
        let example = ExampleView::new(points.view(), padding.view()).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);

        let mut indices = vec![0u32; 32];
        let mut flags = vec![0.0f32; 32];
        sample_uniform_centers(&example, &mut rng, &mut indices, &mut flags);

        assert!(indices.iter().all(|&i| i < 6));
        assert!(flags.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn test_uniform_centers_empty_example() {
        let (points, padding) = line_example(0, 5);
        let example = ExampleView::new(points.view(), padding.view()).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);

        let mut indices = vec![9u32; 4];
        let mut flags = vec![0.0f32; 4];
        sample_uniform_centers(&example, &mut rng, &mut indices, &mut flags);

        assert_eq!(indices, vec![0, 0, 0, 0]);
        assert_eq!(flags, vec![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_farthest_centers_distinct_when_enough_points() {
        let (points, padding) = line_example(10, 0);
        let example = ExampleView::new(points.view(), padding.view()).unwrap();
        let mut rng = SmallRng::seed_from_u64(3);

        let mut indices = vec![0u32; 10];
        let mut flags = vec![0.0f32; 10];
        sample_farthest_centers(&example, &mut rng, &mut indices, &mut flags);

        let unique: HashSet<_> = indices.iter().collect();
        assert_eq!(unique.len(), 10);
        assert!(flags.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn test_farthest_centers_spread_before_repeats() {
        // Two tight clusters far apart; the second pick must leave the first
        // pick's cluster no matter where the walk starts.
        let mut points = Array2::<f32>::zeros((8, 3));
        for i in 0..4 {
            points[[i, 0]] = i as f32 * 0.01;
            points[[i + 4, 0]] = 100.0 + i as f32 * 0.01;
        }
        let padding = Array1::<f32>::zeros(8);
        let example = ExampleView::new(points.view(), padding.view()).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);

        let mut indices = vec![0u32; 2];
        let mut flags = vec![0.0f32; 2];
        sample_farthest_centers(&example, &mut rng, &mut indices, &mut flags);

        let cluster = |i: u32| if i < 4 { 0 } else { 1 };
        assert_ne!(cluster(indices[0]), cluster(indices[1]));
    }

    #[test]
    fn test_farthest_centers_repeat_without_padding() {
        let (points, padding) = line_example(3, 2);
        let example = ExampleView::new(points.view(), padding.view()).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);

        let mut indices = vec![0u32; 6];
        let mut flags = vec![1.0f32; 6];
        sample_farthest_centers(&example, &mut rng, &mut indices, &mut flags);

        // Three real points selected, then repeats of valid points; never
        // flagged because real points exist.
        let unique: HashSet<_> = indices.iter().copied().collect();
        assert_eq!(unique.len(), 3);
        assert!(indices.iter().all(|&i| i < 3));
        assert!(flags.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn test_farthest_centers_empty_example() {
        let (points, padding) = line_example(0, 4);
        let example = ExampleView::new(points.view(), padding.view()).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);

        let mut indices = vec![7u32; 3];
        let mut flags = vec![0.0f32; 3];
        sample_farthest_centers(&example, &mut rng, &mut indices, &mut flags);

        assert_eq!(indices, vec![0, 0, 0]);
        assert_eq!(flags, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_farthest_centers_tie_break_lowest_index() {
        // Points at -1, 0, +1 on the x axis. Starting from the middle, both
        // ends are equally far; the lower index must win.
        let mut points = Array2::<f32>::zeros((3, 3));
        points[[0, 0]] = 0.0;
        points[[1, 0]] = -1.0;
        points[[2, 0]] = 1.0;
        let padding = Array1::<f32>::zeros(3);
        let example = ExampleView::new(points.view(), padding.view()).unwrap();

        // Try seeds until the first pick lands on the middle point.
        for seed in 0..64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut indices = vec![0u32; 2];
            let mut flags = vec![0.0f32; 2];
            sample_farthest_centers(&example, &mut rng, &mut indices, &mut flags);
            if indices[0] == 0 {
                assert_eq!(indices[1], 1);
                return;
            }
        }
        panic!("no seed picked the middle point first");
    }
}
