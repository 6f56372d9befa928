use std::f64::consts::SQRT_2;

use meetpath_core::{Dir, Point};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
///
/// This is the step count between two cells on an open 8-connected grid.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Octile distance: the cost of the cheapest 8-connected route on an open
/// grid when orthogonal steps cost 1 and diagonal steps cost √2.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    dx.max(dy) as f64 + (SQRT_2 - 1.0) * dx.min(dy) as f64
}

/// Cost of a single step in direction `d`.
#[inline]
pub fn step_cost(d: Dir) -> f64 {
    if d.is_diagonal() { SQRT_2 } else { 1.0 }
}

/// Sum of step costs along `path` (1 orthogonal, √2 diagonal).
///
/// Consecutive points are expected to be 8-adjacent; for any other pair the
/// octile distance between them is added.
pub fn path_cost(path: &[Point]) -> f64 {
    path.windows(2).map(|w| octile(w[0], w[1])).sum()
}
