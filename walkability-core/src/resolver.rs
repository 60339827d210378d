//! Nearest-POI lookup for one category.

use geo::Point;

use crate::{EngineError, Poi, geometry};

/// The closest POI of a category and its distance from the centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Nearest {
    /// The closest POI.
    pub poi: Poi,
    /// Haversine distance from the centre, in metres.
    pub distance_m: f64,
}

/// Find the POI nearest to `center`.
///
/// Returns `None` for an empty slice; a category without POIs is a normal
/// outcome, not a failure. Ties go to the first-encountered POI so results
/// are reproducible regardless of how the candidate list was assembled.
///
/// # Examples
/// ```
/// use geo::{Coord, Point};
/// use walkability_core::{Category, Poi, nearest};
///
/// let center = Point::new(7.63, 51.96);
/// let pois = vec![
///     Poi::new(1, Coord { x: 7.64, y: 51.96 }, Category::Bank),
///     Poi::new(2, Coord { x: 7.631, y: 51.96 }, Category::Bank),
/// ];
/// let hit = nearest(center, &pois)?.unwrap();
/// assert_eq!(hit.poi.id, 2);
/// # Ok::<(), walkability_core::EngineError>(())
/// ```
///
/// # Errors
/// Propagates coordinate validation failures from the distance computation.
pub fn nearest(center: Point<f64>, pois: &[Poi]) -> Result<Option<Nearest>, EngineError> {
    let mut best: Option<Nearest> = None;
    for poi in pois {
        let distance_m = geometry::distance(center, Point::from(poi.location))?;
        let closer = best.as_ref().is_none_or(|b| distance_m < b.distance_m);
        if closer {
            best = Some(Nearest {
                poi: poi.clone(),
                distance_m,
            });
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};

    use crate::Category;

    #[fixture]
    fn center() -> Point<f64> {
        Point::new(7.63, 51.96)
    }

    fn poi_at(id: u64, lon: f64, lat: f64) -> Poi {
        Poi::new(id, Coord { x: lon, y: lat }, Category::Supermarket)
    }

    #[rstest]
    fn empty_slice_resolves_to_none(center: Point<f64>) {
        assert_eq!(nearest(center, &[]).unwrap(), None);
    }

    #[rstest]
    fn picks_the_minimum_distance(center: Point<f64>) {
        let pois = vec![
            poi_at(1, 7.64, 51.96),
            poi_at(2, 7.6301, 51.96),
            poi_at(3, 7.65, 51.97),
        ];
        let hit = nearest(center, &pois).unwrap().unwrap();
        assert_eq!(hit.poi.id, 2);
        assert!(hit.distance_m < 10.0);
    }

    #[rstest]
    fn ties_resolve_to_the_first_encountered(center: Point<f64>) {
        // Same offset east and west of the centre: identical distances.
        let pois = vec![poi_at(1, 7.631, 51.96), poi_at(2, 7.629, 51.96)];
        let hit = nearest(center, &pois).unwrap().unwrap();
        assert_eq!(hit.poi.id, 1);
    }

    #[rstest]
    fn invalid_poi_coordinates_surface_an_error(center: Point<f64>) {
        let pois = vec![poi_at(1, 7.63, 91.0)];
        let err = nearest(center, &pois).unwrap_err();
        assert!(matches!(err, EngineError::LatitudeOutOfRange { .. }));
    }
}
