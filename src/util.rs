//! Random point generation helpers.

use crate::errors::{SearchError, SearchResult};
use crate::search::geometry::PointSet;
use rand::rngs::{StdRng, SysRng};
use rand::{RngExt, SeedableRng};

/// Creates the run RNG: seeded for reproducible runs, OS entropy otherwise.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(
        || StdRng::try_from_rng(&mut SysRng).expect("OS entropy source failed"),
        StdRng::seed_from_u64,
    )
}

/// Draws `count` points with i.i.d. uniform coordinates in `[0, 1)^dimension`.
///
/// # Errors
///
/// Returns [`SearchError::UnsupportedDimension`] for dimension < 2 and
/// [`SearchError::InvalidParameters`] for an empty draw.
pub fn draw_points<R: RngExt>(
    rng: &mut R,
    count: usize,
    dimension: usize,
) -> SearchResult<PointSet> {
    if dimension < 2 {
        return Err(SearchError::UnsupportedDimension(dimension));
    }
    if count == 0 {
        return Err(SearchError::InvalidParameters(
            "point draw must contain at least one point".to_string(),
        ));
    }
    let points = (0..count)
        .map(|_| (0..dimension).map(|_| rng.random::<f64>()).collect())
        .collect();
    PointSet::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_points_shape_and_range() {
        let mut rng = rng_from_seed(Some(3));
        let points = draw_points(&mut rng, 5, 3).expect("draw succeeds");
        assert_eq!(points.len(), 5);
        assert_eq!(points.dimension(), 3);
        for point in points.iter() {
            for &coordinate in point {
                assert!((0.0..1.0).contains(&coordinate));
            }
        }
    }

    #[test]
    fn test_draw_points_rejects_bad_parameters() {
        let mut rng = rng_from_seed(Some(3));
        assert!(draw_points(&mut rng, 5, 1).is_err());
        assert!(draw_points(&mut rng, 0, 3).is_err());
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let mut first = rng_from_seed(Some(99));
        let mut second = rng_from_seed(Some(99));
        assert_eq!(
            draw_points(&mut first, 8, 4).expect("draw succeeds"),
            draw_points(&mut second, 8, 4).expect("draw succeeds")
        );
    }
}
