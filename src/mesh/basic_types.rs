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

use crate::mesh::{face::Face, half_edge::HalfEdge};

/// Topology violations reported by [`HalfEdgeMesh::validate_connectivity`]
/// and by edits that need an interior edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("half-edge {half_edge} references an index outside the mesh")]
    DanglingIndex { half_edge: usize },
    #[error("half-edge {half_edge}: next/prev links disagree")]
    NextPrevMismatch { half_edge: usize },
    #[error("half-edge {half_edge}: flip is not mutual or joins mismatched endpoints")]
    FlipMismatch { half_edge: usize },
    #[error("half-edge {half_edge} is not on the cycle of face {face}")]
    FaceMismatch { half_edge: usize, face: usize },
    #[error("face {face} has a cycle of length {len}, expected 3")]
    NonTriangularFace { face: usize, len: usize },
    #[error("half-edge {half_edge} has no flip")]
    BoundaryEdge { half_edge: usize },
}

/// Half-edges and faces created by splitting one face around a new vertex.
///
/// `half_edges[0]`, `[2]` and `[4]` start at the new vertex (the spokes);
/// `[1]`, `[3]` and `[5]` are their flips. Face `face` is the reused id of
/// the split face, `new_faces` the two appended ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceSplit {
    pub face: usize,
    pub new_faces: [usize; 2],
    pub half_edges: [usize; 6],
}

impl FaceSplit {
    /// Spokes in the order of the faces they bound: `face`, `new_faces[0]`,
    /// `new_faces[1]`.
    #[inline]
    pub fn spokes(&self) -> [usize; 3] {
        [self.half_edges[0], self.half_edges[2], self.half_edges[4]]
    }
}

/// Half-edges and faces created by splitting the two faces on either side
/// of an interior edge.
///
/// `split_edge` keeps its id and now starts at the new vertex. Spokes out
/// of the new vertex are `split_edge`, `half_edges[1]`, `[3]` and `[5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSplit {
    pub split_edge: usize,
    pub faces: [usize; 4],
    pub half_edges: [usize; 6],
}

impl EdgeSplit {
    /// Spokes whose two sides each pair a reused face with a new one.
    #[inline]
    pub fn rebucket_edges(&self) -> [usize; 2] {
        [self.half_edges[1], self.half_edges[5]]
    }
}

/// Arena-backed triangle mesh. Storage only grows; faces removed at the
/// end of a run are marked invalid instead of being dropped, so ids stay
/// stable for the lifetime of the mesh.
#[derive(Debug, Clone, Default)]
pub struct HalfEdgeMesh {
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,
}
