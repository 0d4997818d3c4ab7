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

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::geometry::Point2;
use crate::geometry::util::lowest_lexicographic;
use crate::mesh::{HalfEdgeMesh, VertexId};
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::{
    Triangulate2D, Triangulation, TriangulationConfig, TriangulationError, bucket::PointBuckets,
    predicates::VertexPredicates,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Location {
    InFace(usize),
    OnEdge(usize),
}

/// Incremental Delaunay triangulation of a 2D point set.
///
/// Construction seeds one triangle from the lowest point in (x, y) order
/// and two points at infinity, buckets every other point into it, then
/// inserts the points in input order: locate through the buckets, split
/// the containing face (or edge), rebucket, and restore the Delaunay
/// condition by flipping edges opposite the new vertex. Faces that touch a
/// point at infinity are detached at the end.
#[derive(Debug, Clone)]
pub struct DelaunayTriangulation<T: Scalar = f64> {
    points: Vec<Point2<T>>,
    mesh: HalfEdgeMesh,
    buckets: PointBuckets,
    config: TriangulationConfig<T>,
    seed: Option<usize>,
    flips: usize,
}

impl<T: Scalar> DelaunayTriangulation<T> {
    pub fn new(points: Vec<Point2<T>>) -> Self {
        Self::with_config(points, TriangulationConfig::default())
    }

    /// Fewer than three points give an empty triangulation.
    pub fn with_config(points: Vec<Point2<T>>, config: TriangulationConfig<T>) -> Self {
        let mut dt = Self::prepare(points, config);
        if dt.seed.is_none() {
            return dt;
        }

        dt.traverse_points();
        if dt.config.finalize {
            dt.finalize();
        }

        debug!(
            points = dt.points.len(),
            triangles = dt.triangle_count(),
            flips = dt.flips,
            "delaunay triangulation done"
        );
        dt.mesh.log_summary("delaunay mesh");
        dt
    }

    /// Like [`Self::with_config`], but rejects an invalid configuration and
    /// non-finite coordinates instead of triangulating them.
    pub fn try_with_config(
        points: Vec<Point2<T>>,
        config: TriangulationConfig<T>,
    ) -> Result<Self, TriangulationError> {
        config.validate()?;
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(TriangulationError::NonFiniteCoordinate { index });
        }
        Ok(Self::with_config(points, config))
    }

    /// Seed triangle and initial bucketing, no insertion yet.
    pub(crate) fn prepare(points: Vec<Point2<T>>, config: TriangulationConfig<T>) -> Self {
        let mut dt = Self {
            mesh: HalfEdgeMesh::with_capacity(points.len()),
            buckets: PointBuckets::new(points.len()),
            points,
            config,
            seed: None,
            flips: 0,
        };

        if dt.points.len() < 3 {
            warn!(points = dt.points.len(), "need at least 3 points, triangulation left empty");
            return dt;
        }

        if let Some(seed) = lowest_lexicographic(&dt.points) {
            let face = dt.mesh.init_seed_triangle(seed);
            dt.buckets.fill(face, seed);
            dt.seed = Some(seed);
            debug!(seed, points = dt.points.len(), "seeded first triangle");
        }
        dt
    }

    fn traverse_points(&mut self) {
        let Some(seed) = self.seed else {
            return;
        };
        for p in 0..self.points.len() {
            if p != seed {
                self.insert_point(p);
            }
        }
    }

    /// Inserts pending point `p` and legalizes around it. Returns the
    /// number of flips performed.
    pub(crate) fn insert_point(&mut self, p: usize) -> usize {
        let Some(location) = self.locate(p) else {
            warn!(point = p, "point has no owning face, skipped");
            return 0;
        };

        self.buckets.promote(p);
        let v = VertexId::Real(p);
        let preds = VertexPredicates::new(&self.points);

        let frontier: SmallVec<[usize; 4]> = match location {
            Location::OnEdge(he) => match self.mesh.insert_vertex_on_edge(v, he) {
                Ok(split) => {
                    trace!(point = p, half_edge = he, "insert on edge");
                    for e in split.rebucket_edges() {
                        self.buckets.redistribute_after_edge_flip(&self.mesh, &preds, e);
                    }
                    let h = split.half_edges;
                    SmallVec::from_slice(&[
                        self.mesh.prev(h[0]),
                        self.mesh.next(h[1]),
                        self.mesh.next(h[3]),
                        self.mesh.next(h[5]),
                    ])
                }
                Err(err) => {
                    warn!(point = p, %err, "edge split refused, inserting into face");
                    let face = self.mesh.face_of(he);
                    self.split_face(v, face)
                }
            },
            Location::InFace(face) => {
                trace!(point = p, face, "insert in face");
                self.split_face(v, face)
            }
        };

        self.legalize(frontier, p)
    }

    fn split_face(&mut self, v: VertexId, face: usize) -> SmallVec<[usize; 4]> {
        let preds = VertexPredicates::new(&self.points);
        let split = self.mesh.insert_vertex_in_face(v, face);
        self.buckets
            .redistribute_after_face_split(&self.mesh, &preds, split.spokes());
        split
            .spokes()
            .into_iter()
            .map(|e| self.mesh.next(e))
            .collect()
    }

    /// Owning face of pending point `p`, refined to one of its edges when
    /// `p` is collinear with that edge's line.
    pub(crate) fn locate(&self, p: usize) -> Option<Location> {
        let face = self.buckets.owner(p)?;
        let preds = VertexPredicates::new(&self.points);
        let eps = self.config.collinear_epsilon;
        let edge = self
            .mesh
            .face_half_edges(face)
            .into_iter()
            .find(|&he| preds.on_edge_line(self.mesh.origin(he), self.mesh.target(he), p, eps));
        Some(match edge {
            Some(he) => Location::OnEdge(he),
            None => Location::InFace(face),
        })
    }

    /// Lawson flipping from a stack of half-edges whose faces have
    /// `inserted` as the vertex opposite them. Returns the number of flips.
    ///
    /// `inserted` must be a point index and every half-edge a mesh id.
    pub(crate) fn legalize<I>(&mut self, worklist: I, inserted: usize) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let preds = VertexPredicates::new(&self.points);
        let mut stack: SmallVec<[usize; 16]> = worklist.into_iter().collect();
        let mut flips = 0;

        while let Some(he) = stack.pop() {
            let Some(hef) = self.mesh.flip(he) else {
                continue;
            };
            let opposite = self.mesh.origin(self.mesh.prev(hef));
            if !preds.in_circle(inserted, self.mesh.origin(he), self.mesh.origin(hef), opposite) {
                continue;
            }

            stack.push(self.mesh.prev(hef));
            stack.push(self.mesh.next(hef));
            if let Err(err) = self.mesh.flip_edge(he) {
                warn!(half_edge = he, %err, "flip refused");
                continue;
            }
            self.buckets.redistribute_after_edge_flip(&self.mesh, &preds, he);
            flips += 1;
        }

        if flips > 0 {
            trace!(point = inserted, flips, "legalized");
        }
        self.flips += flips;
        flips
    }

    /// Runs Lawson flipping over every live half-edge against the real vertex
    /// opposite it. Returns the number of flips, zero when the mesh is
    /// already Delaunay.
    pub fn relegalize(&mut self) -> usize {
        let mut flips = 0;
        for he in 0..self.mesh.half_edge_count() {
            if self.mesh.half_edges[he].invalid {
                continue;
            }
            if let VertexId::Real(apex) = self.mesh.origin(self.mesh.prev(he)) {
                flips += self.legalize([he], apex);
            }
        }
        flips
    }

    /// Detaches every face incident to a point at infinity.
    fn finalize(&mut self) {
        for he in 0..self.mesh.half_edges.len() {
            let h = &self.mesh.half_edges[he];
            if h.origin.is_sentinel() && !h.invalid {
                let face = h.face;
                self.mesh.invalidate_face(face);
            }
        }
    }

    /// Faces with three real vertices, as index triples in mesh winding
    /// (counter-clockwise), in face id order.
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        self.mesh
            .live_faces()
            .filter_map(|f| {
                let [a, b, c] = self.mesh.face_vertices(f);
                Some([a.index()?, b.index()?, c.index()?])
            })
            .collect()
    }

    /// Index buffer for the input points, three entries per triangle.
    pub fn extract_triangle_indices(&self) -> Vec<u32> {
        self.triangles()
            .into_iter()
            .flat_map(|t| t.map(|i| i as u32))
            .collect()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles().len()
    }

    /// True when every interior edge between two real triangles passes the
    /// in-circle test against its opposite vertex.
    pub fn is_locally_delaunay(&self) -> bool {
        let preds = VertexPredicates::new(&self.points);
        self.mesh.live_faces().all(|f| {
            self.mesh.face_half_edges(f).into_iter().all(|he| {
                let Some(hef) = self.mesh.flip(he) else {
                    return true;
                };
                let VertexId::Real(apex) = self.mesh.origin(self.mesh.prev(he)) else {
                    return true;
                };
                let opposite = self.mesh.origin(self.mesh.prev(hef));
                !preds.in_circle(apex, self.mesh.origin(he), self.mesh.origin(hef), opposite)
            })
        })
    }

    pub fn points(&self) -> &[Point2<T>] {
        &self.points
    }

    pub fn mesh(&self) -> &HalfEdgeMesh {
        &self.mesh
    }

    pub fn buckets(&self) -> &PointBuckets {
        &self.buckets
    }

    pub fn config(&self) -> &TriangulationConfig<T> {
        &self.config
    }

    /// The real vertex of the seed triangle; `None` for fewer than 3 points.
    pub fn seed_vertex(&self) -> Option<usize> {
        self.seed
    }

    /// Total edge flips performed so far.
    pub fn flip_count(&self) -> usize {
        self.flips
    }

    pub fn into_triangulation(self) -> Triangulation<T> {
        let triangles = self.triangles();
        Triangulation {
            points: self.points,
            triangles,
        }
    }
}

impl<T: Scalar> Triangulate2D<T> for DelaunayTriangulation<T> {
    fn triangulate(points: &[Point2<T>]) -> Triangulation<T> {
        DelaunayTriangulation::new(points.to_vec()).into_triangulation()
    }
}
