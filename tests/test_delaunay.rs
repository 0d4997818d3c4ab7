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

mod common;

use lawson::geometry::util::generate_random_points;
use lawson::kernel::orient2d;
use lawson::{DelaunayTriangulation, Point2, Triangulate2D, TriangulationConfig, TriangulationError};

use common::{all_ccw, delaunay_violations, hull_size};

fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

#[test]
fn test_single_triangle() {
    let dt = DelaunayTriangulation::new(pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]));
    assert_eq!(dt.seed_vertex(), Some(0));
    assert_eq!(dt.extract_triangle_indices(), vec![0, 1, 2]);
    assert_eq!(dt.triangle_count(), 1);
}

#[test]
fn test_unit_square() {
    let dt = DelaunayTriangulation::new(pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]));
    assert_eq!(dt.extract_triangle_indices(), vec![0, 1, 2, 0, 2, 3]);
    assert!(all_ccw(dt.points(), &dt.triangles()));
}

#[test]
fn test_unit_square_reordered() {
    let dt = DelaunayTriangulation::new(pts(&[(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]));
    assert_eq!(dt.seed_vertex(), Some(3));
    assert_eq!(dt.extract_triangle_indices(), vec![3, 1, 0, 1, 3, 2]);
    assert!(dt.flip_count() >= 1);
}

#[test]
fn test_point_on_interior_edge() {
    // (1, 1) lies on the edge between (2, 0) and (0, 2).
    let dt = DelaunayTriangulation::new(pts(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0), (1.0, 1.0)]));
    assert_eq!(dt.extract_triangle_indices(), vec![2, 0, 3, 0, 1, 3]);
    assert!(dt.is_locally_delaunay());
}

#[test]
fn test_hull_repaired_by_flip() {
    let dt = DelaunayTriangulation::new(pts(&[(0.0, 0.0), (2.0, -1.0), (4.0, 0.0)]));
    let triangles = dt.triangles();
    assert_eq!(triangles.len(), 1);
    assert!(all_ccw(dt.points(), &triangles));

    let dt = DelaunayTriangulation::new(pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, -1.0)]));
    assert_eq!(dt.triangle_count(), 1);
    assert!(all_ccw(dt.points(), &dt.triangles()));
}

#[test]
fn test_too_few_points() {
    let empty: DelaunayTriangulation = DelaunayTriangulation::new(Vec::new());
    assert!(empty.extract_triangle_indices().is_empty());
    assert_eq!(empty.seed_vertex(), None);
    assert_eq!(empty.mesh().face_count(), 0);

    let two = DelaunayTriangulation::new(pts(&[(0.0, 0.0), (1.0, 1.0)]));
    assert!(two.extract_triangle_indices().is_empty());
    assert_eq!(two.flip_count(), 0);
}

#[test]
fn test_collinear_input_terminates() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    let dt = DelaunayTriangulation::new(points);
    for i in dt.extract_triangle_indices() {
        assert!((i as usize) < 3);
    }
}

#[test]
fn test_random_points_delaunay() {
    let points = generate_random_points::<f64>(200, 42, 0.0, 1000.0);
    let dt = DelaunayTriangulation::new(points.clone());
    let triangles = dt.triangles();

    let h = hull_size(&points);
    assert_eq!(triangles.len(), 2 * points.len() - h - 2);
    assert!(all_ccw(&points, &triangles));
    assert_eq!(delaunay_violations(&points, &triangles), 0);
    assert!(dt.is_locally_delaunay());
    assert_eq!(dt.mesh().validate_connectivity(), Ok(()));
    assert_eq!(dt.buckets().pending_count(), 0);

    let indices = dt.extract_triangle_indices();
    assert_eq!(indices.len(), 3 * triangles.len());
    assert!(indices.iter().all(|&i| (i as usize) < points.len()));
}

#[test]
fn test_every_point_is_a_vertex() {
    let points = generate_random_points::<f64>(100, 7, -50.0, 50.0);
    let dt = DelaunayTriangulation::new(points.clone());
    let mut used = vec![false; points.len()];
    for t in dt.triangles() {
        for i in t {
            used[i] = true;
        }
    }
    assert!(used.iter().all(|&u| u));
}

#[test]
fn test_relegalize_is_a_fixpoint() {
    let points = generate_random_points::<f64>(120, 3, 0.0, 100.0);
    let mut dt = DelaunayTriangulation::new(points);
    let before = dt.flip_count();
    let triangles = dt.triangles();

    assert_eq!(dt.relegalize(), 0);
    assert_eq!(dt.flip_count(), before);
    assert_eq!(dt.triangles(), triangles);
    assert_eq!(dt.mesh().validate_connectivity(), Ok(()));
}

#[test]
fn test_collinear_hull_point_split_onto_edge_line() {
    // (2, 2) is owned by a face touching a point at infinity and lies on
    // the line through (0, 0) and (1, 1), past the end of that edge. It is
    // still split onto the edge, leaving a zero-area triangle.
    let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (2.0, 0.0)]);
    let dt = DelaunayTriangulation::new(points.clone());
    let triangles = dt.triangles();
    assert_eq!(triangles, vec![[0, 3, 1], [2, 0, 1], [2, 1, 3]]);
    assert_eq!(orient2d(&points[2], &points[0], &points[1]), 0.0);
    assert!(!all_ccw(&points, &triangles));

    // Same on a vertical hull line: the lowest point drops out of the output.
    let dt = DelaunayTriangulation::new(pts(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (1.0, 0.5)]));
    assert_eq!(dt.triangles(), vec![[3, 2, 1]]);
}

#[test]
fn test_finalize_disabled_keeps_ghost_faces() {
    let points = generate_random_points::<f64>(60, 11, 0.0, 10.0);
    let finalized = DelaunayTriangulation::new(points.clone());
    let kept = DelaunayTriangulation::with_config(
        points,
        TriangulationConfig::default().with_finalize(false),
    );

    assert_eq!(kept.triangles(), finalized.triangles());
    assert!(kept.mesh().live_faces().count() > finalized.mesh().live_faces().count());
    assert_eq!(kept.mesh().validate_connectivity(), Ok(()));
}

#[test]
fn test_try_with_config_rejects_bad_input() {
    let mut points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    points[1].y = f64::NAN;
    let err = DelaunayTriangulation::try_with_config(points, TriangulationConfig::default())
        .unwrap_err();
    assert_eq!(err, TriangulationError::NonFiniteCoordinate { index: 1 });

    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let config = TriangulationConfig::default().with_collinear_epsilon(-1.0);
    let err = DelaunayTriangulation::try_with_config(points.clone(), config).unwrap_err();
    assert_eq!(err, TriangulationError::InvalidEpsilon);

    let dt = DelaunayTriangulation::try_with_config(points, TriangulationConfig::default()).unwrap();
    assert_eq!(dt.triangle_count(), 1);
}

#[test]
fn test_single_precision() {
    let points = generate_random_points::<f32>(30, 5, 0.0, 100.0);
    let dt = DelaunayTriangulation::new(points.clone());

    let as_f64: Vec<Point2<f64>> = points
        .iter()
        .map(|p| Point2::new(p.x as f64, p.y as f64))
        .collect();
    let triangles = dt.triangles();
    assert_eq!(triangles.len(), 2 * points.len() - hull_size(&as_f64) - 2);
    assert!(all_ccw(&as_f64, &triangles));
}

#[test]
fn test_triangulate_trait() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let tri = DelaunayTriangulation::<f64>::triangulate(&points);
    assert_eq!(tri.points, points);
    assert_eq!(tri.triangles, vec![[0, 1, 2], [0, 2, 3]]);
    assert_eq!(tri.indices(), vec![0, 1, 2, 0, 2, 3]);

    let owned = DelaunayTriangulation::new(points).into_triangulation();
    assert_eq!(owned, tri);
}
