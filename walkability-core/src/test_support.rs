//! Test-only, in-memory provider implementations used by unit and behaviour
//! tests.

use std::collections::BTreeMap;

use geo::{Coord, LineString, Point, Polygon};

use crate::{Category, FetchError, IsochroneProvider, Poi, PoiProvider, TimeLimit};

/// Roughly one metre of latitude, in degrees.
pub const LAT_DEG_PER_M: f64 = 1.0 / 111_194.93;

/// Build a POI the given number of metres due north of a centre.
#[must_use]
pub fn poi_north_of(center: Point<f64>, id: u64, category: Category, metres: f64) -> Poi {
    Poi::new(
        id,
        Coord {
            x: center.x(),
            y: center.y() + metres * LAT_DEG_PER_M,
        },
        category,
    )
}

/// A small square polygon around a centre, usable as a stand-in isochrone.
#[must_use]
pub fn square_around(center: Point<f64>, half_side_m: f64) -> Polygon<f64> {
    let d = half_side_m * LAT_DEG_PER_M;
    let (x, y) = center.x_y();
    Polygon::new(
        LineString::from(vec![
            Coord { x: x - d, y: y - d },
            Coord { x: x + d, y: y - d },
            Coord { x: x + d, y: y + d },
            Coord { x: x - d, y: y + d },
            Coord { x: x - d, y: y - d },
        ]),
        vec![],
    )
}

/// `IsochroneProvider` returning a fixed polygon.
#[derive(Debug, Clone)]
pub struct StaticIsochroneProvider {
    polygon: Polygon<f64>,
}

impl StaticIsochroneProvider {
    /// Serve the given polygon for every request.
    #[must_use]
    pub const fn new(polygon: Polygon<f64>) -> Self {
        Self { polygon }
    }
}

impl IsochroneProvider for StaticIsochroneProvider {
    fn isochrone(
        &self,
        _center: Point<f64>,
        _time_limit: TimeLimit,
    ) -> Result<Polygon<f64>, FetchError> {
        Ok(self.polygon.clone())
    }
}

/// `PoiProvider` serving a fixed per-category table.
#[derive(Debug, Clone, Default)]
pub struct StaticPoiProvider {
    pois: BTreeMap<Category, Vec<Poi>>,
}

impl StaticPoiProvider {
    /// Serve the given POI table for every request.
    #[must_use]
    pub const fn new(pois: BTreeMap<Category, Vec<Poi>>) -> Self {
        Self { pois }
    }
}

impl PoiProvider for StaticPoiProvider {
    fn pois_within(
        &self,
        _isochrone: &Polygon<f64>,
        categories: &[Category],
    ) -> Result<BTreeMap<Category, Vec<Poi>>, FetchError> {
        Ok(categories
            .iter()
            .map(|&category| {
                (
                    category,
                    self.pois.get(&category).cloned().unwrap_or_default(),
                )
            })
            .collect())
    }
}
