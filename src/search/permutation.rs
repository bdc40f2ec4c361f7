//! Exhaustive role-labeling search over a single point draw.
//!
//! One draw of n points admits n! labelings; they are enumerated in
//! lexicographic order over position indices and evaluated until the first
//! success. The distance matrix is computed once per draw and every labeling
//! indexes into it.

use crate::errors::{SearchError, SearchResult};
use crate::search::evaluate::{ConditionResult, evaluate};
use crate::search::geometry::{DistanceMatrix, PointSet};
use crate::search::template::WitnessTemplate;

/// Lexicographic permutations of `0..n`.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    exhausted: bool,
    started: bool,
}

impl Permutations {
    /// Creates an iterator over all permutations of `0..n`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            exhausted: false,
            started: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started && !next_lexicographic(&mut self.current) {
            self.exhausted = true;
            return None;
        }
        self.started = true;
        Some(self.current.clone())
    }
}

/// Advances `perm` to its lexicographic successor in place.
///
/// Returns false when `perm` is already the final (descending) permutation.
fn next_lexicographic(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }
    let mut pivot = perm.len() - 1;
    while pivot > 0 && perm[pivot - 1] >= perm[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let mut successor = perm.len() - 1;
    while perm[successor] <= perm[pivot - 1] {
        successor -= 1;
    }
    perm.swap(pivot - 1, successor);
    perm[pivot..].reverse();
    true
}

/// The first successful labeling found for a draw.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// `labeling[role]` is the point index assigned to that role.
    pub labeling: Vec<usize>,
    /// Threshold bounds for the winning labeling.
    pub result: ConditionResult,
}

/// Tries every labeling of `points` against `template`, stopping at the
/// first success.
///
/// Returns `Ok(None)` when all n! labelings fail. Enumeration order is
/// deterministic, so repeated calls on the same draw return the same
/// outcome.
///
/// # Errors
///
/// Returns [`SearchError::InvalidParameters`] if the draw size does not
/// match the template's role count, and propagates evaluator errors.
pub fn search(
    points: &PointSet,
    template: &WitnessTemplate,
) -> SearchResult<Option<SearchOutcome>> {
    if points.len() != template.role_count() {
        return Err(SearchError::InvalidParameters(format!(
            "template '{}' needs {} points, draw has {}",
            template.name,
            template.role_count(),
            points.len()
        )));
    }

    let dist = DistanceMatrix::from_points(points);
    for labeling in Permutations::new(points.len()) {
        let result = evaluate(&dist, &labeling, template)?;
        if result.success() {
            return Ok(Some(SearchOutcome { labeling, result }));
        }
    }
    Ok(None)
}
