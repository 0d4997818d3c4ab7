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

#![allow(dead_code)]

use lawson::geometry::Point2;
use lawson::kernel::{in_circle, orient2d};

/// Number of strict convex hull vertices (collinear boundary points
/// excluded), by monotone chain.
pub fn hull_size(points: &[Point2<f64>]) -> usize {
    let mut sorted: Vec<Point2<f64>> = points.to_vec();
    sorted.sort_by(|a, b| a.lex_cmp(b));
    if sorted.len() < 3 {
        return sorted.len();
    }

    let mut lower: Vec<Point2<f64>> = Vec::new();
    for p in &sorted {
        while lower.len() >= 2 && orient2d(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point2<f64>> = Vec::new();
    for p in sorted.iter().rev() {
        while upper.len() >= 2 && orient2d(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.len() + upper.len() - 2
}

/// Triangles with an input point strictly inside their circumcircle.
pub fn delaunay_violations(points: &[Point2<f64>], triangles: &[[usize; 3]]) -> usize {
    let mut violations = 0;
    for t in triangles {
        let [a, b, c] = *t;
        for (i, p) in points.iter().enumerate() {
            if i == a || i == b || i == c {
                continue;
            }
            if in_circle(&points[a], &points[b], &points[c], p) {
                violations += 1;
            }
        }
    }
    violations
}

/// Every triangle winds counter-clockwise.
pub fn all_ccw(points: &[Point2<f64>], triangles: &[[usize; 3]]) -> bool {
    triangles
        .iter()
        .all(|&[a, b, c]| orient2d(&points[a], &points[b], &points[c]) > 0.0)
}

/// No duplicates and no three points within `eps` of a common line.
pub fn in_general_position(points: &[Point2<f64>], eps: f64) -> bool {
    let n = points.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if points[i] == points[j] {
                return false;
            }
            for k in (j + 1)..n {
                if orient2d(&points[i], &points[j], &points[k]).abs() < eps {
                    return false;
                }
            }
        }
    }
    true
}
