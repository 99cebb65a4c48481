//! Point types and related functionality

use nalgebra::{Point3, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// Squared Euclidean distance between two points.
///
/// Distance comparisons throughout the workspace are done on squared values;
/// thresholds must be squared by the caller.
pub fn squared_distance(a: &Point3f, b: &Point3f) -> f32 {
    let d: Vector3f = a - b;
    d.norm_squared()
}
