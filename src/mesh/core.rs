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

use crate::mesh::{
    basic_types::{EdgeSplit, FaceSplit, HalfEdgeMesh, MeshError},
    face::Face,
    half_edge::HalfEdge,
    vertex::VertexId,
};

impl HalfEdgeMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the arenas for a triangulation of `point_count` points.
    pub fn with_capacity(point_count: usize) -> Self {
        Self {
            half_edges: Vec::with_capacity(6 * point_count + 3),
            faces: Vec::with_capacity(2 * point_count + 1),
        }
    }

    #[inline]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Builds the single face `(AtInfinityCcw, AtInfinityCw, seed)` and
    /// returns its id. None of its edges has a flip.
    pub fn init_seed_triangle(&mut self, seed: usize) -> usize {
        let he0 = self.push_half_edge(VertexId::AtInfinityCcw);
        let he1 = self.push_half_edge(VertexId::AtInfinityCw);
        let he2 = self.push_half_edge(VertexId::Real(seed));
        let face = self.push_face(he0);
        self.link_face(he0, he1, he2, face);
        face
    }

    /// Splits face `f` into three faces meeting at `v`.
    ///
    /// ```text
    ///              * c
    ///            / ^ \
    ///           /  |  \
    ///          /  s2   \
    ///         / f2 * v f1\
    ///        /   _/ \_    \
    ///       /  s0     s1   \
    ///      / |/_   f    _\| \
    ///   a *-------------------* b
    /// ```
    ///
    /// The boundary edge of `f`'s representative half-edge stays on `f`.
    pub fn insert_vertex_in_face(&mut self, v: VertexId, f: usize) -> FaceSplit {
        let ori0 = self.faces[f].half_edge;
        let ori1 = self.half_edges[ori0].next;
        let ori2 = self.half_edges[ori1].next;

        let a = self.half_edges[ori0].origin;
        let b = self.half_edges[ori1].origin;
        let c = self.half_edges[ori2].origin;

        let base = self.half_edges.len();
        let new_he = [
            self.push_half_edge(v),
            self.push_half_edge(b),
            self.push_half_edge(v),
            self.push_half_edge(c),
            self.push_half_edge(v),
            self.push_half_edge(a),
        ];
        debug_assert_eq!(new_he[0], base);

        let f1 = self.push_face(ori1);
        let f2 = self.push_face(ori2);

        self.link_face(ori0, new_he[1], new_he[0], f);
        self.link_face(ori1, new_he[3], new_he[2], f1);
        self.link_face(ori2, new_he[5], new_he[4], f2);

        self.set_flip(new_he[1], new_he[2]);
        self.set_flip(new_he[3], new_he[4]);
        self.set_flip(new_he[5], new_he[0]);

        FaceSplit {
            face: f,
            new_faces: [f1, f2],
            half_edges: new_he,
        }
    }

    /// Splits the two faces sharing `he` into four faces meeting at `v`.
    ///
    /// ```text
    ///              c                    c
    ///            /   \                / | \
    ///           /  f0 \              / f1|f0\
    ///        a *--he-->* b  ---->  a *---v---* b
    ///           \  f3 /              \ f2|f3/
    ///            \   /                \ | /
    ///              d                    d
    /// ```
    ///
    /// `he` keeps its id and face and now runs `v -> b`; its flip keeps its
    /// face and runs `b -> v`.
    pub fn insert_vertex_on_edge(&mut self, v: VertexId, he: usize) -> Result<EdgeSplit, MeshError> {
        let hef = self.half_edges[he]
            .flip
            .ok_or(MeshError::BoundaryEdge { half_edge: he })?;

        let ori0 = self.half_edges[he].next;
        let ori1 = self.half_edges[ori0].next;
        let ori2 = self.half_edges[hef].next;
        let ori3 = self.half_edges[ori2].next;

        let c = self.half_edges[ori1].origin;
        let a = self.half_edges[ori2].origin;
        let d = self.half_edges[ori3].origin;

        let new_he = [
            self.push_half_edge(c),
            self.push_half_edge(v),
            self.push_half_edge(a),
            self.push_half_edge(v),
            self.push_half_edge(d),
            self.push_half_edge(v),
        ];
        self.half_edges[he].origin = v;

        self.set_flip(new_he[0], new_he[1]);
        self.set_flip(new_he[2], new_he[3]);
        self.set_flip(new_he[4], new_he[5]);

        let f0 = self.half_edges[he].face;
        let f3 = self.half_edges[hef].face;
        let f1 = self.push_face(ori1);
        let f2 = self.push_face(ori2);

        self.link_face(ori0, new_he[0], he, f0);
        self.link_face(ori1, new_he[2], new_he[1], f1);
        self.link_face(ori2, new_he[4], new_he[3], f2);
        self.link_face(ori3, hef, new_he[5], f3);

        Ok(EdgeSplit {
            split_edge: he,
            faces: [f0, f1, f2, f3],
            half_edges: new_he,
        })
    }

    /// Replaces the diagonal shared by the faces of `he` and its flip with
    /// the other diagonal of their quadrilateral.
    ///
    /// ```text
    ///        v                v
    ///       / \              /|\
    ///      a-he>b   ---->   a | b
    ///       \ /              \|/
    ///        p                p
    /// ```
    ///
    /// `he` becomes `v -> p` and stays on its face; the flip becomes
    /// `p -> v` and stays on the other face.
    pub fn flip_edge(&mut self, he: usize) -> Result<(), MeshError> {
        let hef = self.half_edges[he]
            .flip
            .ok_or(MeshError::BoundaryEdge { half_edge: he })?;

        let he1 = self.half_edges[he].next;
        let he2 = self.half_edges[he].prev;
        let he3 = self.half_edges[hef].next;
        let he4 = self.half_edges[hef].prev;

        self.half_edges[he].origin = self.half_edges[he2].origin;
        self.half_edges[hef].origin = self.half_edges[he4].origin;

        let f = self.half_edges[he].face;
        let g = self.half_edges[hef].face;
        self.link_face(he, he4, he1, f);
        self.link_face(hef, he2, he3, g);

        Ok(())
    }

    /// Marks `f` and its half-edges invalid and clears every flip link on
    /// its cycle, detaching it from its neighbours.
    pub fn invalidate_face(&mut self, f: usize) {
        self.faces[f].invalid = true;
        let start = self.faces[f].half_edge;
        let mut cur = start;
        loop {
            self.half_edges[cur].invalid = true;
            self.break_flip(cur);
            cur = self.half_edges[cur].next;
            if cur == start {
                break;
            }
        }
    }

    pub(crate) fn set_flip(&mut self, a: usize, b: usize) {
        self.half_edges[a].flip = Some(b);
        self.half_edges[b].flip = Some(a);
    }

    pub(crate) fn break_flip(&mut self, he: usize) {
        if let Some(f) = self.half_edges[he].flip.take() {
            self.half_edges[f].flip = None;
        }
    }

    fn push_half_edge(&mut self, origin: VertexId) -> usize {
        let idx = self.half_edges.len();
        self.half_edges.push(HalfEdge::new(origin));
        idx
    }

    fn push_face(&mut self, half_edge: usize) -> usize {
        let idx = self.faces.len();
        self.faces.push(Face::new(half_edge));
        idx
    }

    /// Closes `h0 -> h1 -> h2` into the cycle of `face`, with `h0` as the
    /// face's representative.
    fn link_face(&mut self, h0: usize, h1: usize, h2: usize, face: usize) {
        for (cur, next) in [(h0, h1), (h1, h2), (h2, h0)] {
            self.half_edges[cur].next = next;
            self.half_edges[next].prev = cur;
            self.half_edges[cur].face = face;
        }
        self.faces[face].half_edge = h0;
    }
}
