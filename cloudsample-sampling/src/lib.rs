//! # cloudsample-sampling
//!
//! Center selection and neighbor grouping for batched point clouds.
//!
//! Given a batch of fixed-capacity point sets with padding masks, the
//! [`Sampler`] picks a fixed number of representative centers per example and
//! groups a fixed number of neighbors under each center, keeping every output
//! shape fixed across the batch regardless of how many points are valid. This
//! is the subsampling step of hierarchical point-cloud feature extractors.

pub mod centers;
pub mod config;
pub mod neighbors;
pub mod sampler;

// Re-export commonly used items
pub use centers::*;
pub use config::*;
pub use neighbors::*;
pub use sampler::*;
