// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use thiserror::Error;

use crate::{geometry::Point2, numeric::scalar::Scalar};

pub mod bucket;
pub mod delaunay;
pub mod predicates;

pub use bucket::PointBuckets;
pub use delaunay::DelaunayTriangulation;
pub use predicates::VertexPredicates;

pub trait Triangulate2D<T: Scalar> {
    fn triangulate(points: &[Point2<T>]) -> Triangulation<T>;
}

/// Input points together with the output triangles, as index triples into
/// `points`.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation<T: Scalar> {
    pub points: Vec<Point2<T>>,
    pub triangles: Vec<[usize; 3]>,
}

impl<T: Scalar> Triangulation<T> {
    /// Flat index buffer, three entries per triangle.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles
            .iter()
            .flat_map(|t| t.iter().map(|&i| i as u32))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("collinear epsilon must be a non-negative number")]
    InvalidEpsilon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationConfig<T: Scalar> {
    /// A point within this cross-product area of a face edge is inserted on
    /// that edge rather than inside the face.
    pub collinear_epsilon: T,
    /// Detach the faces touching a point at infinity once all points are in.
    pub finalize: bool,
}

impl<T: Scalar> Default for TriangulationConfig<T> {
    fn default() -> Self {
        Self {
            collinear_epsilon: T::default_collinear_epsilon(),
            finalize: true,
        }
    }
}

impl<T: Scalar> TriangulationConfig<T> {
    pub fn with_collinear_epsilon(mut self, eps: T) -> Self {
        self.collinear_epsilon = eps;
        self
    }

    pub fn with_finalize(mut self, finalize: bool) -> Self {
        self.finalize = finalize;
        self
    }

    pub fn validate(&self) -> Result<(), TriangulationError> {
        if self.collinear_epsilon.is_nan() || self.collinear_epsilon < T::zero() {
            return Err(TriangulationError::InvalidEpsilon);
        }
        Ok(())
    }
}
