//! Sampler configuration

use cloudsample_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Strategy for choosing center points within an example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CenterMethod {
    /// Independent uniform draws over the valid points, with replacement.
    Uniform,
    /// Greedy farthest-point sampling.
    Farthest,
}

/// Strategy for grouping neighbor points under a chosen center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeighborMethod {
    /// Independent uniform draws over the valid points, with replacement.
    Uniform,
    /// The exact nearest valid points by Euclidean distance.
    Closest,
}

/// Immutable configuration for a [`Sampler`](crate::Sampler).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// How centers are selected per example.
    pub center_method: CenterMethod,
    /// How neighbors are selected per center.
    pub neighbor_method: NeighborMethod,
    /// Number of centers produced per example.
    pub num_centers: usize,
    /// Number of neighbors produced per center.
    pub num_neighbors: usize,
    /// Inclusion radius for [`NeighborMethod::Closest`]. Selected neighbors
    /// beyond this distance are still emitted but flagged as padding.
    pub max_distance: f32,
    /// Non-negative values make sampling reproducible; any negative value
    /// requests entropy seeding.
    pub random_seed: i64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            center_method: CenterMethod::Farthest,
            neighbor_method: NeighborMethod::Uniform,
            num_centers: 128,
            num_neighbors: 128,
            max_distance: 1.0,
            random_seed: -1,
        }
    }
}

impl SamplerConfig {
    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.num_centers == 0 {
            return Err(Error::Config(
                "num_centers must be greater than 0".to_string(),
            ));
        }
        if self.num_neighbors == 0 {
            return Err(Error::Config(
                "num_neighbors must be greater than 0".to_string(),
            ));
        }
        if !(self.max_distance > 0.0) || !self.max_distance.is_finite() {
            return Err(Error::Config(
                "max_distance must be positive and finite".to_string(),
            ));
        }
        Ok(())
    }
}
