//! Great-circle distance between WGS84 points.
//!
//! A spherical-earth approximation is sufficient at walking scale; errors
//! stay well under half a percent across a city.

use geo::{Distance, Haversine, Point};

use crate::EngineError;

/// Validate that a point carries finite, in-range WGS84 coordinates.
///
/// # Errors
/// Returns [`EngineError::NonFiniteCoordinate`],
/// [`EngineError::LatitudeOutOfRange`] or
/// [`EngineError::LongitudeOutOfRange`] when the point is malformed.
pub fn validate(point: Point<f64>) -> Result<(), EngineError> {
    let (lon, lat) = point.x_y();
    if !lat.is_finite() {
        return Err(EngineError::NonFiniteCoordinate {
            axis: "latitude",
            value: lat,
        });
    }
    if !lon.is_finite() {
        return Err(EngineError::NonFiniteCoordinate {
            axis: "longitude",
            value: lon,
        });
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(EngineError::LatitudeOutOfRange { value: lat });
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(EngineError::LongitudeOutOfRange { value: lon });
    }
    Ok(())
}

/// Haversine distance between two points, in metres.
///
/// Pure and symmetric; `distance(a, a)` is zero.
///
/// # Examples
/// ```
/// use geo::Point;
/// use walkability_core::geometry::distance;
///
/// let a = Point::new(7.63, 51.96);
/// assert_eq!(distance(a, a).unwrap(), 0.0);
/// ```
///
/// # Errors
/// Returns an [`EngineError`] of kind `InvalidInput` when either point has a
/// non-finite or out-of-range coordinate.
pub fn distance(a: Point<f64>, b: Point<f64>) -> Result<f64, EngineError> {
    validate(a)?;
    validate(b)?;
    Ok(Haversine.distance(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identical_points_are_zero_metres_apart() {
        let p = Point::new(7.6261347, 51.9606649);
        assert_eq!(distance(p, p).unwrap(), 0.0);
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Point::new(7.63, 51.96);
        let b = Point::new(7.645285, 51.904280);
        let ab = distance(a, b).unwrap();
        let ba = distance(b, a).unwrap();
        assert!((ab - ba).abs() < 1e-9);
    }

    #[rstest]
    fn city_scale_distance_is_plausible() {
        // Münster centre to Hiltrup is roughly 6.4 km as the crow flies.
        let centrum = Point::new(7.6261347, 51.9606649);
        let hiltrup = Point::new(7.645285, 51.904280);
        let d = distance(centrum, hiltrup).unwrap();
        assert!((6_000.0..7_000.0).contains(&d), "got {d} m");
    }

    #[rstest]
    fn one_arc_minute_of_latitude_is_a_nautical_mile() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 1.0 / 60.0);
        let d = distance(a, b).unwrap();
        assert!((1_840.0..1_870.0).contains(&d), "got {d} m");
    }

    #[rstest]
    #[case(Point::new(0.0, f64::NAN))]
    #[case(Point::new(f64::INFINITY, 0.0))]
    fn non_finite_coordinates_are_rejected(#[case] bad: Point<f64>) {
        let err = distance(bad, Point::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, EngineError::NonFiniteCoordinate { .. }));
    }

    #[rstest]
    #[case(Point::new(0.0, 90.5), true)]
    #[case(Point::new(-180.5, 0.0), false)]
    fn out_of_range_coordinates_are_rejected(#[case] bad: Point<f64>, #[case] latitude: bool) {
        let err = validate(bad).unwrap_err();
        if latitude {
            assert!(matches!(err, EngineError::LatitudeOutOfRange { .. }));
        } else {
            assert!(matches!(err, EngineError::LongitudeOutOfRange { .. }));
        }
    }
}
