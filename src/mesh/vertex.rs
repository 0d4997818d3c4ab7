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

use std::fmt;

/// Vertex reference stored on half-edges.
///
/// Real vertices are indices into the input point sequence. The two
/// sentinels are points at infinity with no coordinates: `AtInfinityCcw`
/// lies straight below every real point and `AtInfinityCw` straight above,
/// so the seed face `(AtInfinityCcw, AtInfinityCw, seed)` covers the whole
/// half-plane to the right of the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexId {
    Real(usize),
    AtInfinityCcw,
    AtInfinityCw,
}

impl VertexId {
    #[inline]
    pub fn is_real(&self) -> bool {
        matches!(self, VertexId::Real(_))
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        !self.is_real()
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        match *self {
            VertexId::Real(i) => Some(i),
            _ => None,
        }
    }
}

impl From<usize> for VertexId {
    fn from(i: usize) -> Self {
        VertexId::Real(i)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexId::Real(i) => write!(f, "{i}"),
            VertexId::AtInfinityCcw => write!(f, "inf-ccw"),
            VertexId::AtInfinityCw => write!(f, "inf-cw"),
        }
    }
}
