//! Distance and circumradius computations for labeled point sets.
//!
//! This is the geometric kernel of the search: everything downstream is
//! expressed in terms of a pairwise distance matrix and the circumradius
//! of role triples.

use crate::errors::{SearchError, SearchResult};

/// An ordered set of points in d-dimensional Euclidean space.
///
/// The point order is the draw order; role assignment is applied later by
/// the permutation search, so the set itself is immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Vec<f64>>,
}

impl PointSet {
    /// Creates a point set, checking that all points share one dimension.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidParameters`] if the set is empty or the
    /// points have inconsistent dimensions, and
    /// [`SearchError::UnsupportedDimension`] for dimension < 2.
    pub fn new(points: Vec<Vec<f64>>) -> SearchResult<Self> {
        let Some(first) = points.first() else {
            return Err(SearchError::InvalidParameters(
                "point set must not be empty".to_string(),
            ));
        };
        let dimension = first.len();
        if dimension < 2 {
            return Err(SearchError::UnsupportedDimension(dimension));
        }
        if points.iter().any(|p| p.len() != dimension) {
            return Err(SearchError::InvalidParameters(
                "all points must have the same dimension".to_string(),
            ));
        }
        Ok(Self { points })
    }

    /// Number of points in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set contains no points (never true for a constructed set).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Spatial dimension of the points.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.points.first().map_or(0, Vec::len)
    }

    /// Coordinates of the point at `index`.
    #[must_use]
    pub fn point(&self, index: usize) -> &[f64] {
        &self.points[index]
    }

    /// Iterates over the points in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.points.iter().map(Vec::as_slice)
    }
}

/// Symmetric matrix of pairwise Euclidean distances with zero diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    entries: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances for a point set.
    #[must_use]
    pub fn from_points(points: &PointSet) -> Self {
        let size = points.len();
        let mut entries = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = euclidean_distance(points.point(i), points.point(j));
                entries[i * size + j] = d;
                entries[j * size + i] = d;
            }
        }
        Self { size, entries }
    }

    /// Number of points the matrix was built from.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance between points `i` and `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.entries[i * self.size + j]
    }
}

fn euclidean_distance(p: &[f64], q: &[f64]) -> f64 {
    p.iter()
        .zip(q)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

/// Circumradius of a triangle given its three side lengths.
///
/// Uses `R = abc / sqrt(2(a²b² + b²c² + c²a²) − (a⁴ + b⁴ + c⁴))`, where the
/// radicand equals 16·(area)². Collinear or coincident points make the
/// radicand vanish (or go slightly negative from floating-point noise); that
/// case returns `f64::INFINITY` rather than NaN, since no finite disk bounds
/// a degenerate triple tightly.
#[must_use]
pub fn circumradius(a: f64, b: f64, c: f64) -> f64 {
    let (a2, b2, c2) = (a * a, b * b, c * c);
    let radicand = 2.0 * (a2 * b2 + b2 * c2 + c2 * a2) - (a2 * a2 + b2 * b2 + c2 * c2);
    if radicand <= f64::EPSILON {
        return f64::INFINITY;
    }
    (a * b * c) / radicand.sqrt()
}
