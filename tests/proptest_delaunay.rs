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

use lawson::{DelaunayTriangulation, Point2};
use proptest::prelude::*;

use common::{all_ccw, delaunay_violations, hull_size, in_general_position};

fn point_set() -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec((-1000i32..1000, -1000i32..1000), 3..40).prop_map(|coords| {
        coords
            .into_iter()
            .map(|(x, y)| Point2::new(x as f64, y as f64))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_triangle_count_matches_hull(points in point_set()) {
        prop_assume!(in_general_position(&points, 1.0));
        let dt = DelaunayTriangulation::new(points.clone());
        let expected = 2 * points.len() - hull_size(&points) - 2;
        prop_assert_eq!(dt.triangle_count(), expected);
    }

    #[test]
    fn prop_empty_circumcircles(points in point_set()) {
        prop_assume!(in_general_position(&points, 1.0));
        let dt = DelaunayTriangulation::new(points.clone());
        let triangles = dt.triangles();
        prop_assert!(all_ccw(&points, &triangles));
        prop_assert_eq!(delaunay_violations(&points, &triangles), 0);
        prop_assert!(dt.mesh().validate_connectivity().is_ok());
    }
}
