//! Batched sampling driver
//!
//! The [`Sampler`] owns an immutable [`SamplerConfig`] and exposes one
//! operation, [`Sampler::sample`], which runs center selection and then
//! neighbor selection for every example in a batch. Examples never interact;
//! the batch axis is processed in parallel with an example-local RNG stream
//! so the output is independent of the degree of parallelism.

use crate::centers::{sample_farthest_centers, sample_uniform_centers};
use crate::config::{CenterMethod, NeighborMethod, SamplerConfig};
use crate::neighbors::{sample_closest_neighbors, sample_uniform_neighbors};
use cloudsample_core::{ExampleView, PointBatch, Result};
use ndarray::{Array2, Array3, ArrayView2, ArrayView3};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Output of [`Sampler::sample`]; one row (or plane) per batch example.
///
/// Padded slots always carry a concrete index (0, or a repeated real point),
/// so consumers must honor the flags rather than the presence of an index.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleResult {
    /// `[B, N]` indices of the chosen centers.
    pub center: Array2<u32>,
    /// `[B, N]` flags, 1.0 where the example had no valid point to choose.
    pub center_padding: Array2<f32>,
    /// `[B, N, M]` indices of the neighbors grouped under each center.
    pub indices: Array3<u32>,
    /// `[B, N, M]` flags marking neighbor slots that are not real selections.
    pub indices_padding: Array3<f32>,
}

// One example's selections before batch assembly; neighbor rows are stored
// flattened as n * m.
struct ExampleSample {
    center: Vec<u32>,
    center_padding: Vec<f32>,
    indices: Vec<u32>,
    indices_padding: Vec<f32>,
}

/// Batched center/neighbor sampler for point clouds.
///
/// Configured once, invoked per batch. Strategy dispatch happens once per
/// center, not per point.
#[derive(Debug, Clone)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    /// Create a sampler, validating the configuration.
    pub fn new(config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this sampler was built with.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Select centers and group neighbors for every example in the batch.
    ///
    /// `points` has shape `[B, P, 3]` and `points_padding` shape `[B, P]`
    /// with 1.0 marking padded slots. Fails on mismatched shapes.
    pub fn sample<'a>(
        &self,
        points: ArrayView3<'a, f32>,
        points_padding: ArrayView2<'a, f32>,
    ) -> Result<SampleResult> {
        let batch = PointBatch::new(points, points_padding)?;
        let batch_size = batch.batch_size();
        let n = self.config.num_centers;
        let m = self.config.num_neighbors;

        let examples: Vec<ExampleSample> = (0..batch_size)
            .into_par_iter()
            .map(|cur_batch| self.sample_example(&batch.example(cur_batch), cur_batch))
            .collect();

        let mut center = Array2::<u32>::zeros((batch_size, n));
        let mut center_padding = Array2::<f32>::zeros((batch_size, n));
        let mut indices = Array3::<u32>::zeros((batch_size, n, m));
        let mut indices_padding = Array3::<f32>::zeros((batch_size, n, m));

        for (cur_batch, example) in examples.iter().enumerate() {
            for j in 0..n {
                center[[cur_batch, j]] = example.center[j];
                center_padding[[cur_batch, j]] = example.center_padding[j];
                for k in 0..m {
                    indices[[cur_batch, j, k]] = example.indices[j * m + k];
                    indices_padding[[cur_batch, j, k]] = example.indices_padding[j * m + k];
                }
            }
        }

        Ok(SampleResult {
            center,
            center_padding,
            indices,
            indices_padding,
        })
    }

    fn sample_example(&self, example: &ExampleView<'_>, example_index: usize) -> ExampleSample {
        let n = self.config.num_centers;
        let m = self.config.num_neighbors;
        let mut rng = self.example_rng(example_index);

        let mut center = vec![0u32; n];
        let mut center_padding = vec![0.0f32; n];
        match self.config.center_method {
            CenterMethod::Uniform => {
                sample_uniform_centers(example, &mut rng, &mut center, &mut center_padding)
            }
            CenterMethod::Farthest => {
                sample_farthest_centers(example, &mut rng, &mut center, &mut center_padding)
            }
        }

        let mut indices = vec![0u32; n * m];
        let mut indices_padding = vec![0.0f32; n * m];
        for j in 0..n {
            let idx_row = &mut indices[j * m..(j + 1) * m];
            let pad_row = &mut indices_padding[j * m..(j + 1) * m];
            if center_padding[j] != 0.0 {
                pad_row.fill(1.0);
                continue;
            }
            match self.config.neighbor_method {
                NeighborMethod::Uniform => {
                    sample_uniform_neighbors(example, &mut rng, idx_row, pad_row)
                }
                NeighborMethod::Closest => {
                    let center_point = example.point(center[j] as usize);
                    sample_closest_neighbors(
                        example,
                        &center_point,
                        self.config.max_distance,
                        idx_row,
                        pad_row,
                    )
                }
            }
        }

        ExampleSample {
            center,
            center_padding,
            indices,
            indices_padding,
        }
    }

    // Example-local RNG stream, so batch output does not depend on how the
    // batch axis is scheduled across threads.
    fn example_rng(&self, example_index: usize) -> SmallRng {
        if self.config.random_seed >= 0 {
            let seed = (self.config.random_seed as u64).wrapping_add(example_index as u64);
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_entropy()
        }
    }
}
