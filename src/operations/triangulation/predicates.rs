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

use crate::geometry::Point2;
use crate::kernel::predicates::{are_collinear, in_circle, orient2d};
use crate::mesh::VertexId;
use crate::numeric::scalar::Scalar;

/// Orientation and in-circle tests on vertex ids, with the two points at
/// infinity handled symbolically.
///
/// `AtInfinityCcw` sits straight below every real point and `AtInfinityCw`
/// straight above, so a line from a real vertex towards either one is the
/// vertical through that vertex.
#[derive(Debug, Clone, Copy)]
pub struct VertexPredicates<'a, T: Scalar> {
    points: &'a [Point2<T>],
}

impl<'a, T: Scalar> VertexPredicates<'a, T> {
    pub fn new(points: &'a [Point2<T>]) -> Self {
        Self { points }
    }

    #[inline]
    pub fn point(&self, i: usize) -> &Point2<T> {
        &self.points[i]
    }

    /// Signed side of point `p` against the directed edge `a -> b`: positive
    /// on the left, zero on the line.
    pub fn edge_side(&self, a: VertexId, b: VertexId, p: usize) -> T {
        let q = &self.points[p];
        match (a, b) {
            (VertexId::Real(a), VertexId::Real(b)) => orient2d(&self.points[a], &self.points[b], q),
            (VertexId::Real(a), VertexId::AtInfinityCcw) => q.x - self.points[a].x,
            (VertexId::Real(a), VertexId::AtInfinityCw) => self.points[a].x - q.x,
            (VertexId::AtInfinityCcw, VertexId::Real(b)) => self.points[b].x - q.x,
            (VertexId::AtInfinityCw, VertexId::Real(b)) => q.x - self.points[b].x,
            // the edge joining the two points at infinity bounds nothing
            _ => T::one(),
        }
    }

    /// `p` strictly left of `a -> b`. `a` is never a point at infinity.
    #[inline]
    pub fn to_left(&self, a: VertexId, b: VertexId, p: usize) -> bool {
        debug_assert!(a.is_real(), "orientation origin must be a real vertex");
        self.edge_side(a, b, p) > T::zero()
    }

    #[inline]
    pub fn to_right(&self, a: VertexId, b: VertexId, p: usize) -> bool {
        !self.to_left(a, b, p)
    }

    /// `target` strictly inside the circle through `p0, p1, p2`, where
    /// `(p1, p2, p0)` winds counter-clockwise and `p0` is real.
    ///
    /// A circle through a point at infinity degenerates to a half-plane:
    /// right of `p0 -> p2` when `p1` is at infinity, left of `p0 -> p1` when
    /// `p2` is. A point at infinity is never inside.
    pub fn in_circle(&self, p0: usize, p1: VertexId, p2: VertexId, target: VertexId) -> bool {
        let VertexId::Real(t) = target else {
            return false;
        };
        let v0 = VertexId::Real(p0);
        match (p1, p2) {
            (VertexId::Real(a), VertexId::Real(b)) => in_circle(
                &self.points[p0],
                &self.points[a],
                &self.points[b],
                &self.points[t],
            ),
            (p1, p2) if p1.is_sentinel() => self.to_right(v0, p2, t),
            (p1, _) => self.to_left(v0, p1, t),
        }
    }

    /// `p` within `eps` of the infinite line through the real vertices `a`
    /// and `b`. Always false when either end is at infinity.
    pub fn on_edge_line(&self, a: VertexId, b: VertexId, p: usize, eps: T) -> bool {
        match (a, b) {
            (VertexId::Real(a), VertexId::Real(b)) => {
                are_collinear(&self.points[a], &self.points[b], &self.points[p], eps)
            }
            _ => false,
        }
    }

    /// `p` inside or on the boundary of the triangle `[a, b, c]`.
    pub fn face_contains(&self, face: [VertexId; 3], p: usize) -> bool {
        let [a, b, c] = face;
        [(a, b), (b, c), (c, a)]
            .into_iter()
            .all(|(u, w)| self.edge_side(u, w, p) >= T::zero())
    }
}
