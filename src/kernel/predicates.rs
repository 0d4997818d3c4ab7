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
use crate::numeric::scalar::Scalar;

/// Twice the signed area of triangle `(a, b, c)`: `cross(b - a, c - a)`.
/// Positive when the triangle winds counter-clockwise.
#[inline]
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    (*b - *a).cross(&(*c - *a))
}

/// Strictly left of the directed line `a -> b`.
#[inline]
pub fn is_left_of<T: Scalar>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> bool {
    orient2d(a, b, p) > T::zero()
}

/// Signed in-circle determinant of `p` against the circle through `a, b, c`.
///
/// Rows are reduced against `p` before expansion:
///
/// ```text
/// | ax-px  ay-py  |a|^2-|p|^2 |
/// | bx-px  by-py  |b|^2-|p|^2 |
/// | cx-px  cy-py  |c|^2-|p|^2 |
/// ```
///
/// For a counter-clockwise `(a, b, c)` the value is positive iff `p` lies
/// strictly inside the circle.
pub fn incircle<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, p: &Point2<T>) -> T {
    let p_sq = p.as_vector().norm2();
    let m = [
        [a.x - p.x, a.y - p.y, a.as_vector().norm2() - p_sq],
        [b.x - p.x, b.y - p.y, b.as_vector().norm2() - p_sq],
        [c.x - p.x, c.y - p.y, c.as_vector().norm2() - p_sq],
    ];

    m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[1][0] * m[2][1]
        - m[0][2] * m[1][1] * m[2][0]
        - m[0][1] * m[1][0] * m[2][2]
        - m[0][0] * m[1][2] * m[2][1]
}

/// `p` strictly inside the circumcircle of the counter-clockwise triangle
/// `(a, b, c)`. Cocircular points are not inside.
#[inline]
pub fn in_circle<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, p: &Point2<T>) -> bool {
    incircle(a, b, c, p) > T::zero()
}

/// `p` lies on the infinite line through `a` and `b`, up to `eps` on the
/// cross-product area. Says nothing about `p` being between `a` and `b`.
#[inline]
pub fn are_collinear<T: Scalar>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>, eps: T) -> bool {
    let area = orient2d(a, b, p);
    area < eps && area > -eps
}

