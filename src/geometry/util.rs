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

use num_traits::cast;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::point_2::Point2;
use crate::numeric::scalar::Scalar;

/// Uniformly distributed points in the square `[min, max)^2`, reproducible
/// for a fixed `seed`. Generation stops at the first coordinate `T` cannot
/// represent.
pub fn generate_random_points<T: Scalar>(count: usize, seed: u64, min: f64, max: f64) -> Vec<Point2<T>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map_while(|_| {
            let x: f64 = rng.random_range(min..max);
            let y: f64 = rng.random_range(min..max);
            Some(Point2::new(cast(x)?, cast(y)?))
        })
        .collect()
}

/// Index of the lexicographically smallest point (x first, then y).
/// The earliest index wins ties.
pub fn lowest_lexicographic<T: Scalar>(points: &[Point2<T>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            Some(b) if p.lex_cmp(&points[b]).is_ge() => {}
            _ => best = Some(i),
        }
    }
    best
}
