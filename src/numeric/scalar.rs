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

use std::fmt::Debug;

use num_traits::Float;

/// Floating-point coordinate type used by points, predicates and the
/// triangulator. Implemented for `f32` and `f64`.
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
    /// Bound on the absolute cross product below which three points are
    /// treated as collinear. Both widths default to the single-precision
    /// machine epsilon.
    fn default_collinear_epsilon() -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn default_collinear_epsilon() -> Self {
        f32::EPSILON
    }
}

impl Scalar for f64 {
    #[inline]
    fn default_collinear_epsilon() -> Self {
        f32::EPSILON as f64
    }
}
