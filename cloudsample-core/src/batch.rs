//! Batched point containers with padding masks
//!
//! A batch holds `B` examples of up to `P` points each. Validity is encoded
//! through a parallel `[B, P]` mask where 1.0 marks a padded slot and 0.0 a
//! real point; the count of valid points may differ per example while every
//! shape stays fixed across the batch. Padded slots must never be selected.

use crate::error::{Error, Result};
use crate::point::Point3f;
use ndarray::{ArrayView1, ArrayView2, ArrayView3, Axis};

/// A read-only batch of fixed-capacity 3D point sets with a padding mask.
#[derive(Debug, Clone, Copy)]
pub struct PointBatch<'a> {
    points: ArrayView3<'a, f32>,
    padding: ArrayView2<'a, f32>,
}

impl<'a> PointBatch<'a> {
    /// Wrap `[B, P, 3]` points and their `[B, P]` padding mask.
    ///
    /// Fails if the coordinate dimension is not 3 or the mask's batch/point
    /// dimensions disagree with the points.
    pub fn new(points: ArrayView3<'a, f32>, padding: ArrayView2<'a, f32>) -> Result<Self> {
        let (b, p, d) = points.dim();
        if d != 3 {
            return Err(Error::ShapeMismatch(format!(
                "points must have shape [B, P, 3], got coordinate dimension {}",
                d
            )));
        }
        if padding.dim() != (b, p) {
            return Err(Error::ShapeMismatch(format!(
                "points_padding has shape {:?}, expected [{}, {}]",
                padding.dim(),
                b,
                p
            )));
        }
        Ok(Self { points, padding })
    }

    /// Number of examples in the batch.
    pub fn batch_size(&self) -> usize {
        self.points.dim().0
    }

    /// Fixed per-example point capacity `P`.
    pub fn capacity(&self) -> usize {
        self.points.dim().1
    }

    /// View of a single example.
    pub fn example(&self, index: usize) -> ExampleView<'a> {
        ExampleView {
            points: self.points.index_axis_move(Axis(0), index),
            padding: self.padding.index_axis_move(Axis(0), index),
        }
    }
}

/// One example's points and padding mask within a batch.
#[derive(Debug, Clone, Copy)]
pub struct ExampleView<'a> {
    points: ArrayView2<'a, f32>,
    padding: ArrayView1<'a, f32>,
}

impl<'a> ExampleView<'a> {
    /// Wrap one example's `[P, 3]` points and `[P]` padding mask directly.
    pub fn new(points: ArrayView2<'a, f32>, padding: ArrayView1<'a, f32>) -> Result<Self> {
        let (p, d) = points.dim();
        if d != 3 {
            return Err(Error::ShapeMismatch(format!(
                "points must have shape [P, 3], got coordinate dimension {}",
                d
            )));
        }
        if padding.dim() != p {
            return Err(Error::ShapeMismatch(format!(
                "points_padding has length {}, expected {}",
                padding.dim(),
                p
            )));
        }
        Ok(Self { points, padding })
    }

    /// Fixed point capacity `P` of this example.
    pub fn capacity(&self) -> usize {
        self.points.dim().0
    }

    /// Whether slot `index` holds a real point.
    pub fn is_valid(&self, index: usize) -> bool {
        self.padding[index] == 0.0
    }

    /// Indices of all valid slots, in increasing order.
    pub fn valid_indices(&self) -> Vec<usize> {
        self.padding
            .iter()
            .enumerate()
            .filter(|(_, &pad)| pad == 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count of valid slots.
    pub fn num_valid(&self) -> usize {
        self.padding.iter().filter(|&&pad| pad == 0.0).count()
    }

    /// The point stored at `index`.
    pub fn point(&self, index: usize) -> Point3f {
        Point3f::new(
            self.points[[index, 0]],
            self.points[[index, 1]],
            self.points[[index, 2]],
        )
    }
}
