//! Threshold-interval evaluation of one role labeling against a template.
//!
//! The evaluator answers: is there a threshold t for which exactly the
//! template's required simplices appear and none of the forbidden ones do?
//! Edges appear once the endpoint balls of radius t overlap (distance ≤ 2t),
//! faces once the triple's circumscribing disk has radius ≤ t, so edge
//! lengths are halved to express both constraint families in the same unit.

use crate::errors::{SearchError, SearchResult};
use crate::search::geometry::{DistanceMatrix, circumradius};
use crate::search::template::WitnessTemplate;
use float_ord::FloatOrd;

/// Outcome of evaluating one labeling: the threshold interval bounds and
/// whether a separating threshold range exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionResult {
    /// Smallest threshold realizing all required adjacencies and faces.
    pub t_connect: f64,
    /// Largest threshold still excluding all forbidden adjacencies and faces.
    pub t_nonconnect: f64,
}

impl ConditionResult {
    /// True iff a real threshold range reproduces the template's pattern.
    ///
    /// Strict inequality: two infinite bounds (fully degenerate geometry) do
    /// not demonstrate a separating threshold.
    #[must_use]
    pub fn success(&self) -> bool {
        self.t_connect < self.t_nonconnect
    }
}

/// Evaluates a labeling of a point set against a witness template.
///
/// `labeling[role]` is the point index assigned to that role; all distance
/// lookups go through it, so one distance matrix serves every labeling of a
/// draw.
///
/// # Errors
///
/// Returns [`SearchError::MalformedTemplate`] if the template's
/// forbidden-edge set is empty, since no finite non-connection bound can be
/// derived from it.
pub fn evaluate(
    dist: &DistanceMatrix,
    labeling: &[usize],
    template: &WitnessTemplate,
) -> SearchResult<ConditionResult> {
    if template.forbidden_edges.is_empty() {
        return Err(SearchError::MalformedTemplate(format!(
            "template '{}' has no forbidden edges",
            template.name
        )));
    }
    let d = |i: usize, j: usize| dist.get(labeling[i], labeling[j]);
    let radius = |face: &[usize; 3]| {
        circumradius(d(face[1], face[2]), d(face[2], face[0]), d(face[0], face[1]))
    };

    let face_radius_max = template
        .required_faces
        .iter()
        .map(|face| FloatOrd(radius(face)))
        .max()
        .map_or(f64::NEG_INFINITY, |r| r.0);

    let plain_edges = template.required_edges.iter().map(|&(i, j)| d(i, j));
    let clause_edges = template.required_edge_clauses.iter().map(|clause| {
        clause
            .iter()
            .map(|&(i, j)| FloatOrd(d(i, j)))
            .min()
            .map_or(f64::INFINITY, |m| m.0)
    });
    let edge_max = plain_edges
        .chain(clause_edges)
        .map(FloatOrd)
        .max()
        .map_or(f64::NEG_INFINITY, |m| m.0);

    let t_connect = face_radius_max.max(edge_max / 2.0);

    let nonface_radius_min = template
        .forbidden_faces
        .iter()
        .map(|face| FloatOrd(radius(face)))
        .min()
        .map_or(f64::INFINITY, |r| r.0);

    let edge_min = template
        .forbidden_edges
        .iter()
        .map(|&(i, j)| FloatOrd(d(i, j)))
        .min()
        .map_or(f64::INFINITY, |m| m.0);

    let t_nonconnect = nonface_radius_min.min(edge_min / 2.0);

    debug_assert!(
        !t_connect.is_nan() && !t_nonconnect.is_nan(),
        "NaN reached threshold comparison"
    );

    Ok(ConditionResult {
        t_connect,
        t_nonconnect,
    })
}
