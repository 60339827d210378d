//! Point-of-interest value type.

use geo::Coord;

use crate::Category;

/// A point-located amenity tagged with a service category.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. POI lists
/// are read-only input produced by the fetch collaborator; the engine never
/// mutates them.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use walkability_core::{Category, Poi};
///
/// let poi = Poi::new(42, Coord { x: 7.63, y: 51.96 }, Category::Pharmacy)
///     .with_name("Hirsch-Apotheke");
/// assert_eq!(poi.display_name(), "Hirsch-Apotheke");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Poi {
    /// Upstream identifier (OSM element id for Overpass-sourced POIs).
    pub id: u64,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Service category the POI satisfies.
    pub category: Category,
    /// Display name, when the source provides one.
    pub name: Option<String>,
}

impl Poi {
    /// Construct an unnamed POI.
    #[must_use]
    pub const fn new(id: u64, location: Coord<f64>, category: Category) -> Self {
        Self {
            id,
            location,
            category,
            name: None,
        }
    }

    /// Attach a display name while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The display name, or a placeholder for unnamed POIs.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}
