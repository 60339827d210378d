//! OpenRouteService isochrone response types.
//!
//! Deserialisation covers the subset of the GeoJSON answer the engine
//! consumes: the feature collection, its first feature, and that feature's
//! polygon rings. Positions are `[lon, lat]`, matching the WGS84 axis order
//! used across the engine.

use geo::{Coord, LineString, Polygon};
use serde::Deserialize;
use walkability_core::FetchError;

/// Isochrone answer: a GeoJSON feature collection.
#[derive(Debug, Deserialize)]
pub struct IsochroneResponse {
    /// Returned features; one per requested range value.
    #[serde(default)]
    pub features: Vec<IsochroneFeature>,
}

/// One isochrone feature.
#[derive(Debug, Deserialize)]
pub struct IsochroneFeature {
    /// The reachability polygon.
    pub geometry: IsochroneGeometry,
}

/// GeoJSON geometry member of an isochrone feature.
#[derive(Debug, Deserialize)]
pub struct IsochroneGeometry {
    /// GeoJSON geometry type; only `"Polygon"` is supported.
    #[serde(rename = "type")]
    pub kind: String,
    /// Polygon rings: exterior first, then any holes.
    pub coordinates: Vec<Vec<Vec<f64>>>,
}

impl IsochroneResponse {
    /// Extract the first feature's polygon.
    ///
    /// # Errors
    /// Returns [`FetchError::MissingGeometry`] when the collection is empty
    /// and [`FetchError::Parse`] for unsupported geometry types or malformed
    /// positions.
    pub fn into_polygon(self) -> Result<Polygon<f64>, FetchError> {
        let feature = self
            .features
            .into_iter()
            .next()
            .ok_or(FetchError::MissingGeometry)?;
        feature.geometry.into_polygon()
    }
}

impl IsochroneGeometry {
    /// Convert the raw rings into a `geo` polygon.
    ///
    /// # Errors
    /// Returns [`FetchError::Parse`] for non-polygon geometry or positions
    /// with fewer than two components, and [`FetchError::MissingGeometry`]
    /// when no exterior ring is present.
    pub fn into_polygon(self) -> Result<Polygon<f64>, FetchError> {
        if self.kind != "Polygon" {
            return Err(FetchError::Parse {
                message: format!("unsupported geometry type '{}'", self.kind),
            });
        }
        let mut rings = self.coordinates.into_iter();
        let exterior = ring_to_line_string(rings.next().ok_or(FetchError::MissingGeometry)?)?;
        if exterior.0.is_empty() {
            return Err(FetchError::MissingGeometry);
        }
        let interiors = rings
            .map(ring_to_line_string)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polygon::new(exterior, interiors))
    }
}

fn ring_to_line_string(ring: Vec<Vec<f64>>) -> Result<LineString<f64>, FetchError> {
    ring.into_iter()
        .map(|position| {
            let lon = position.first().copied();
            let lat = position.get(1).copied();
            lon.zip(lat)
                .map(|(x, y)| Coord { x, y })
                .ok_or_else(|| FetchError::Parse {
                    message: format!("position with {} component(s)", position.len()),
                })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::from)
}
