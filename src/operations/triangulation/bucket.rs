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

use ahash::AHashMap;

use crate::mesh::HalfEdgeMesh;
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::predicates::VertexPredicates;

/// Point-location index: which face each not-yet-inserted point lies in,
/// and the inverse per-face buckets.
///
/// Buckets are never edited point by point. Every redistribution takes a
/// snapshot of the affected buckets, clears them and reclassifies the
/// snapshot, dropping points that were promoted to mesh vertices since the
/// last pass.
#[derive(Debug, Clone, Default)]
pub struct PointBuckets {
    buckets: AHashMap<usize, Vec<usize>>,
    owner: Vec<Option<usize>>,
}

impl PointBuckets {
    pub fn new(point_count: usize) -> Self {
        Self {
            buckets: AHashMap::default(),
            owner: vec![None; point_count],
        }
    }

    /// Initial bucketing: every point except `skip` goes into `face`.
    pub fn fill(&mut self, face: usize, skip: usize) {
        let bucket = self.buckets.entry(face).or_default();
        bucket.reserve(self.owner.len().saturating_sub(1));
        for (p, owner) in self.owner.iter_mut().enumerate() {
            if p != skip {
                bucket.push(p);
                *owner = Some(face);
            }
        }
    }

    #[inline]
    pub fn assign(&mut self, point: usize, face: usize) {
        self.buckets.entry(face).or_default().push(point);
        self.owner[point] = Some(face);
    }

    /// Marks `point` as inserted into the mesh. It leaves its bucket at the
    /// next redistribution of that face.
    #[inline]
    pub fn promote(&mut self, point: usize) {
        self.owner[point] = None;
    }

    #[inline]
    pub fn owner(&self, point: usize) -> Option<usize> {
        self.owner[point]
    }

    pub fn bucket(&self, face: usize) -> &[usize] {
        self.buckets.get(&face).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of points still waiting for insertion.
    pub fn pending_count(&self) -> usize {
        self.owner.iter().filter(|o| o.is_some()).count()
    }

    /// Reclassifies the points of the face split by a new vertex.
    ///
    /// `spokes` are the three half-edges leaving the new vertex, one per
    /// resulting face, the first one on the reused face id:
    ///
    /// ```text
    ///              * v2
    ///            / ^ \
    ///           /  |  \
    ///          /   e2  \
    ///         /f2  *v  f1\
    ///        /   _/ \_    \
    ///       /  e0     e1   \
    ///      / |/_   f0   _\| \
    ///  v0 *-------------------* v1
    /// ```
    pub fn redistribute_after_face_split<T: Scalar>(
        &mut self,
        mesh: &HalfEdgeMesh,
        preds: &VertexPredicates<'_, T>,
        spokes: [usize; 3],
    ) {
        let [e0, e1, e2] = spokes;
        let v = mesh.origin(e0);
        let v0 = mesh.target(e0);
        let v1 = mesh.target(e1);
        let v2 = mesh.target(e2);
        let (f0, f1, f2) = (mesh.face_of(e0), mesh.face_of(e1), mesh.face_of(e2));

        for p in self.take_snapshot(&[f0]) {
            let face = if preds.to_left(v, v0, p) {
                if preds.to_left(v, v1, p) { f1 } else { f0 }
            } else if preds.to_left(v, v2, p) {
                f2
            } else {
                f1
            };
            self.assign(p, face);
        }
    }

    /// Merges the buckets on both sides of `he` and splits them again along
    /// `he`'s line.
    ///
    /// ```text
    ///                *
    ///              / |
    ///            /  f0|
    ///          <--he--* a
    ///      b  *--hef-->
    ///           \  f1 |
    ///             \   |
    ///               \ |
    ///                 *
    /// ```
    pub fn redistribute_after_edge_flip<T: Scalar>(
        &mut self,
        mesh: &HalfEdgeMesh,
        preds: &VertexPredicates<'_, T>,
        he: usize,
    ) {
        let Some(hef) = mesh.flip(he) else {
            return;
        };
        let (f0, f1) = (mesh.face_of(he), mesh.face_of(hef));
        let (a, b) = (mesh.origin(he), mesh.origin(hef));

        for p in self.take_snapshot(&[f0, f1]) {
            let face = if preds.to_left(a, b, p) { f0 } else { f1 };
            self.assign(p, face);
        }
    }

    /// Empties the given buckets and returns their still-pending points.
    fn take_snapshot(&mut self, faces: &[usize]) -> Vec<usize> {
        let mut snapshot = Vec::new();
        for face in faces {
            if let Some(bucket) = self.buckets.get_mut(face) {
                snapshot.append(bucket);
            }
        }
        snapshot.retain(|&p| self.owner[p].is_some());
        snapshot
    }
}
