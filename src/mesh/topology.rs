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

use tracing::debug;

use crate::mesh::{
    basic_types::{HalfEdgeMesh, MeshError},
    vertex::VertexId,
};

impl HalfEdgeMesh {
    #[inline]
    pub fn origin(&self, he: usize) -> VertexId {
        self.half_edges[he].origin
    }

    /// Origin of the next half-edge, i.e. where `he` ends.
    #[inline]
    pub fn target(&self, he: usize) -> VertexId {
        self.half_edges[self.half_edges[he].next].origin
    }

    #[inline]
    pub fn next(&self, he: usize) -> usize {
        self.half_edges[he].next
    }

    #[inline]
    pub fn prev(&self, he: usize) -> usize {
        self.half_edges[he].prev
    }

    #[inline]
    pub fn flip(&self, he: usize) -> Option<usize> {
        self.half_edges[he].flip
    }

    #[inline]
    pub fn face_of(&self, he: usize) -> usize {
        self.half_edges[he].face
    }

    #[inline]
    pub fn is_boundary(&self, he: usize) -> bool {
        self.half_edges[he].is_boundary()
    }

    /// Clockwise around the origin of `he`; `None` across a boundary.
    #[inline]
    pub fn rot_cw(&self, he: usize) -> Option<usize> {
        self.flip(he).map(|f| self.next(f))
    }

    /// Counter-clockwise around the origin of `he`; `None` across a boundary.
    #[inline]
    pub fn rot_ccw(&self, he: usize) -> Option<usize> {
        self.flip(self.prev(he))
    }

    #[inline]
    pub fn face_half_edges(&self, f: usize) -> [usize; 3] {
        let he0 = self.faces[f].half_edge;
        let he1 = self.half_edges[he0].next;
        let he2 = self.half_edges[he1].next;
        [he0, he1, he2]
    }

    /// Origins of the face cycle, starting at the representative half-edge.
    #[inline]
    pub fn face_vertices(&self, f: usize) -> [VertexId; 3] {
        self.face_half_edges(f).map(|he| self.half_edges[he].origin)
    }

    /// Faces not marked invalid, in id order.
    pub fn live_faces(&self) -> impl Iterator<Item = usize> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, face)| !face.invalid)
            .map(|(i, _)| i)
    }

    /// Outgoing half-edges of `v` found by rotating from `start`, which
    /// must leave `v`. Stops early at a boundary.
    pub fn outgoing_half_edges(&self, start: usize) -> Vec<usize> {
        let mut result = vec![start];
        let mut cur = start;
        while let Some(next) = self.rot_ccw(cur) {
            if next == start {
                break;
            }
            result.push(next);
            cur = next;
        }
        result
    }

    /// Checks the cycle, flip and face invariants on every live half-edge
    /// and face.
    pub fn validate_connectivity(&self) -> Result<(), MeshError> {
        let he_len = self.half_edges.len();
        for (i, he) in self.half_edges.iter().enumerate() {
            if he.invalid {
                continue;
            }
            if he.next >= he_len || he.prev >= he_len || he.face >= self.faces.len() {
                return Err(MeshError::DanglingIndex { half_edge: i });
            }
            if self.half_edges[he.next].prev != i || self.half_edges[he.prev].next != i {
                return Err(MeshError::NextPrevMismatch { half_edge: i });
            }
            let third = self.half_edges[self.half_edges[he.next].next].next;
            if third != i {
                return Err(MeshError::NonTriangularFace {
                    face: he.face,
                    len: self.cycle_len(i),
                });
            }
            if self.half_edges[he.next].face != he.face {
                return Err(MeshError::FaceMismatch {
                    half_edge: he.next,
                    face: he.face,
                });
            }
            if let Some(f) = he.flip {
                if f >= he_len {
                    return Err(MeshError::DanglingIndex { half_edge: i });
                }
                let twin = &self.half_edges[f];
                if twin.flip != Some(i)
                    || twin.origin != self.target(i)
                    || self.target(f) != he.origin
                {
                    return Err(MeshError::FlipMismatch { half_edge: i });
                }
            }
        }

        for (fi, face) in self.faces.iter().enumerate() {
            if face.invalid {
                continue;
            }
            if face.half_edge >= he_len {
                return Err(MeshError::DanglingIndex {
                    half_edge: face.half_edge,
                });
            }
            for he in self.face_half_edges(fi) {
                if self.half_edges[he].face != fi {
                    return Err(MeshError::FaceMismatch { half_edge: he, face: fi });
                }
            }
        }
        Ok(())
    }

    pub fn log_summary(&self, msg: &str) {
        debug!(
            faces = self.faces.len(),
            live_faces = self.live_faces().count(),
            half_edges = self.half_edges.len(),
            "{msg}"
        );
    }

    fn cycle_len(&self, start: usize) -> usize {
        let mut len = 1;
        let mut cur = self.half_edges[start].next;
        while cur != start && cur < self.half_edges.len() && len <= self.half_edges.len() {
            cur = self.half_edges[cur].next;
            len += 1;
        }
        len
    }
}
