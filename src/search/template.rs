//! Witness templates for the two complex families under search.
//!
//! A template is pure data: which role pairs must be connected, which must
//! not, and which role triples must or must not bound a face. Templates are
//! built once at startup and passed explicitly into the evaluator and the
//! permutation search; nothing here is mutated at runtime.

use crate::errors::{SearchError, SearchResult};
use clap::ValueEnum;

/// The two complex families with a fixed witness template each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ComplexFamily {
    /// Disk-based (Čech-style) complex over 5 roles.
    Disk,
    /// Ball-radius (Vietoris–Rips-style) complex over 8 roles.
    Ball,
}

impl ComplexFamily {
    /// Builds the witness template for this family.
    #[must_use]
    pub fn template(self) -> WitnessTemplate {
        match self {
            Self::Disk => WitnessTemplate::disk(),
            Self::Ball => WitnessTemplate::ball(),
        }
    }

    /// Default output directory name, matching the family.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Disk => "Cech",
            Self::Ball => "VR",
        }
    }
}

/// Required/forbidden adjacency and face pattern over a fixed set of roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessTemplate {
    /// Human-readable template name for logging.
    pub name: &'static str,
    /// Symbolic role names; role index = position in this slice.
    pub roles: &'static [&'static str],
    /// Role pairs whose distance must be within threshold.
    pub required_edges: Vec<(usize, usize)>,
    /// OR-clauses: each is satisfied if at least one candidate pair is
    /// within threshold, so the clause contributes its minimum distance.
    pub required_edge_clauses: Vec<Vec<(usize, usize)>>,
    /// Role triples that must bound a face (circumradius within threshold).
    pub required_faces: Vec<[usize; 3]>,
    /// Role pairs that must stay disconnected.
    pub forbidden_edges: Vec<(usize, usize)>,
    /// Role triples that must not bound a face.
    pub forbidden_faces: Vec<[usize; 3]>,
}

/// Adjacency-candidate table for the ball template: entry `[i][j]` is 1 when
/// roles i and j may be connected. The forbidden-edge set is its complement.
/// Preserved verbatim, including the symmetric X/Y structure; no generating
/// rule is assumed.
const BALL_ADJACENCY: [[u8; 8]; 8] = [
    // A   B   C   D   E   F   X   Y
    [1, 1, 1, 0, 0, 0, 1, 1], // A
    [1, 1, 0, 1, 0, 0, 1, 1], // B
    [1, 0, 1, 1, 1, 0, 1, 0], // C
    [0, 1, 1, 1, 0, 1, 0, 1], // D
    [0, 0, 1, 0, 1, 1, 1, 1], // E
    [0, 0, 0, 1, 1, 1, 1, 1], // F
    [1, 1, 1, 0, 1, 1, 1, 1], // X
    [1, 1, 0, 1, 1, 1, 1, 1], // Y
];

impl WitnessTemplate {
    /// The disk-family witness: 5 roles A, B, C, D, X.
    ///
    /// Required faces XAB, XAC, XBD, XCD; required edges XB, XC, BC beyond
    /// those implied by the faces; forbidden faces ABC, BCD, XBC; forbidden
    /// edge AD.
    #[must_use]
    pub fn disk() -> Self {
        const A: usize = 0;
        const B: usize = 1;
        const C: usize = 2;
        const D: usize = 3;
        const X: usize = 4;

        Self {
            name: "disk",
            roles: &["A", "B", "C", "D", "X"],
            required_edges: vec![(X, B), (X, C), (B, C)],
            required_edge_clauses: vec![],
            required_faces: vec![[X, A, B], [X, A, C], [X, B, D], [X, C, D]],
            forbidden_edges: vec![(A, D)],
            forbidden_faces: vec![[A, B, C], [B, C, D], [X, B, C]],
        }
    }

    /// The ball-family witness: 8 roles A..F on a 2×3 grid plus X, Y.
    ///
    /// Grid and connector edges are required directly; the two face-filling
    /// conditions become OR-clauses min(XB, YA) and min(XF, YE). Every role
    /// pair absent from the adjacency-candidate table is forbidden.
    #[must_use]
    pub fn ball() -> Self {
        const A: usize = 0;
        const B: usize = 1;
        const C: usize = 2;
        const D: usize = 3;
        const E: usize = 4;
        const F: usize = 5;
        const X: usize = 6;
        const Y: usize = 7;

        let forbidden_edges = (0..8)
            .flat_map(|i| ((i + 1)..8).map(move |j| (i, j)))
            .filter(|&(i, j)| BALL_ADJACENCY[i][j] == 0)
            .collect();

        Self {
            name: "ball",
            roles: &["A", "B", "C", "D", "E", "F", "X", "Y"],
            required_edges: vec![
                (A, B),
                (A, C),
                (A, X),
                (B, D),
                (B, Y),
                (C, D),
                (C, E),
                (C, X),
                (D, F),
                (D, Y),
                (E, F),
                (E, X),
                (F, Y),
                (X, Y),
            ],
            required_edge_clauses: vec![vec![(X, B), (Y, A)], vec![(X, F), (Y, E)]],
            required_faces: vec![],
            forbidden_edges,
            forbidden_faces: vec![],
        }
    }

    /// Number of roles, which equals the number of points per draw.
    #[must_use]
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Checks the template for authoring bugs.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MalformedTemplate`] if the forbidden-edge set
    /// is empty (no finite non-connection bound exists) or any role index is
    /// out of range.
    pub fn validate(&self) -> SearchResult<()> {
        if self.forbidden_edges.is_empty() {
            return Err(SearchError::MalformedTemplate(format!(
                "template '{}' has no forbidden edges",
                self.name
            )));
        }
        let n = self.role_count();
        let edges = self
            .required_edges
            .iter()
            .chain(self.forbidden_edges.iter())
            .chain(self.required_edge_clauses.iter().flatten());
        for &(i, j) in edges {
            if i >= n || j >= n || i == j {
                return Err(SearchError::MalformedTemplate(format!(
                    "template '{}' has invalid edge ({i}, {j})",
                    self.name
                )));
            }
        }
        let faces = self.required_faces.iter().chain(self.forbidden_faces.iter());
        for face in faces {
            let distinct = face[0] != face[1] && face[1] != face[2] && face[0] != face[2];
            if face.iter().any(|&r| r >= n) || !distinct {
                return Err(SearchError::MalformedTemplate(format!(
                    "template '{}' has invalid face {face:?}",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_template_shape() {
        let template = WitnessTemplate::disk();
        assert_eq!(template.role_count(), 5);
        assert_eq!(template.required_faces.len(), 4);
        assert_eq!(template.required_edges.len(), 3);
        assert_eq!(template.forbidden_faces.len(), 3);
        assert_eq!(template.forbidden_edges, vec![(0, 3)]); // AD
        assert!(template.required_edge_clauses.is_empty());
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_ball_template_shape() {
        let template = WitnessTemplate::ball();
        assert_eq!(template.role_count(), 8);
        assert_eq!(template.required_edges.len(), 14);
        assert_eq!(template.required_edge_clauses.len(), 2);
        assert!(template.required_faces.is_empty());
        assert!(template.forbidden_faces.is_empty());
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_ball_adjacency_table_symmetric() {
        for i in 0..8 {
            assert_eq!(BALL_ADJACENCY[i][i], 1, "diagonal entry {i}");
            for j in 0..8 {
                assert_eq!(
                    BALL_ADJACENCY[i][j], BALL_ADJACENCY[j][i],
                    "asymmetry at ({i}, {j})"
                );
            }
        }
    }

    #[test]
    fn test_ball_forbidden_edges_complement_table() {
        let template = WitnessTemplate::ball();
        // Upper triangle zeros: AD, AE, AF, BC, BE, BF, CF, CY, DE, DX.
        assert_eq!(template.forbidden_edges.len(), 10);
        assert!(template.forbidden_edges.contains(&(0, 3))); // AD
        assert!(template.forbidden_edges.contains(&(2, 7))); // CY
        assert!(template.forbidden_edges.contains(&(3, 6))); // DX
        // No forbidden edge may also be a required edge or clause candidate.
        for edge in &template.forbidden_edges {
            assert!(!template.required_edges.contains(edge));
            let flipped = (edge.1, edge.0);
            for clause in &template.required_edge_clauses {
                assert!(!clause.contains(edge) && !clause.contains(&flipped));
            }
        }
    }

    #[test]
    fn test_validate_rejects_empty_forbidden_edges() {
        let mut template = WitnessTemplate::disk();
        template.forbidden_edges.clear();
        assert!(matches!(
            template.validate(),
            Err(crate::errors::SearchError::MalformedTemplate(_))
        ));
    }

    #[test]
    fn test_family_template_dispatch() {
        assert_eq!(ComplexFamily::Disk.template().name, "disk");
        assert_eq!(ComplexFamily::Ball.template().name, "ball");
        assert_eq!(ComplexFamily::Disk.dir_name(), "Cech");
        assert_eq!(ComplexFamily::Ball.dir_name(), "VR");
    }
}
