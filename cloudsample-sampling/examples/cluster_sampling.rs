//! Walkthrough: subsample a clustered scene into centers and neighborhoods.

use cloudsample_sampling::{CenterMethod, NeighborMethod, Sampler, SamplerConfig};
use ndarray::{Array2, Array3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn main() -> cloudsample_core::Result<()> {
    // One example: 8 clusters of 100 points each along the diagonal, with 200
    // trailing slots padded out.
    let capacity = 1000;
    let valid = 800;
    let mut rng = SmallRng::seed_from_u64(7);
    let mut points = Array3::<f32>::zeros((1, capacity, 3));
    let mut padding = Array2::<f32>::zeros((1, capacity));
    for i in 0..capacity {
        if i < valid {
            let cluster = (i / 100) as f32;
            points[[0, i, 0]] = cluster + rng.gen_range(-0.05..0.05);
            points[[0, i, 1]] = cluster + rng.gen_range(-0.05..0.05);
            points[[0, i, 2]] = rng.gen_range(-0.05..0.05);
        } else {
            padding[[0, i]] = 1.0;
        }
    }

    let sampler = Sampler::new(SamplerConfig {
        center_method: CenterMethod::Farthest,
        neighbor_method: NeighborMethod::Closest,
        num_centers: 8,
        num_neighbors: 4,
        max_distance: 1.0,
        random_seed: 12345,
    })?;

    let result = sampler.sample(points.view(), padding.view())?;

    println!("Selected {} centers:", result.center.dim().1);
    for j in 0..result.center.dim().1 {
        let idx = result.center[[0, j]] as usize;
        print!(
            "  center {} at ({:5.2}, {:5.2}, {:5.2}) -> neighbors",
            idx,
            points[[0, idx, 0]],
            points[[0, idx, 1]],
            points[[0, idx, 2]],
        );
        for k in 0..result.indices.dim().2 {
            print!(
                " {}/{}",
                result.indices[[0, j, k]],
                result.indices_padding[[0, j, k]]
            );
        }
        println!();
    }

    Ok(())
}
