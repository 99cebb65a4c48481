//! Core data structures for cloudsample
//!
//! This crate provides the shared types for batched point-cloud sampling:
//! the batched point container with its padding mask, point type aliases,
//! and error types.

pub mod batch;
pub mod error;
pub mod point;

pub use batch::*;
pub use error::*;
pub use point::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
