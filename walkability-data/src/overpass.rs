//! HTTP [`PoiProvider`] backed by the Overpass API.
//!
//! POIs are fetched for the bounding box of the isochrone and then filtered
//! to the polygon itself, so a single request covers all requested
//! categories. Elements on the polygon boundary count as inside.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use geo::{BoundingRect, Contains, Intersects, Point, Polygon, Rect};
use reqwest::Client;
use serde::Deserialize;
use tokio::runtime::Runtime;
use walkability_core::{Category, FetchError, Poi, PoiProvider};

use crate::http::{self, ClientBuildError};

/// Default public Overpass endpoint.
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Default user agent for Overpass requests.
pub const DEFAULT_USER_AGENT: &str = "walkability-engine/0.1";

/// Server-side query timeout in seconds, embedded in the Overpass QL header.
const QUERY_TIMEOUT_SECS: u64 = 60;

/// OSM tag selectors that map elements onto a service category.
#[must_use]
pub const fn selectors(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Supermarket => &[
            ("shop", "supermarket"),
            ("shop", "convenience"),
            ("shop", "grocery"),
        ],
        Category::Pharmacy => &[("amenity", "pharmacy")],
        Category::Doctor => &[
            ("amenity", "doctors"),
            ("amenity", "clinic"),
            ("amenity", "hospital"),
            ("healthcare", "doctor"),
        ],
        Category::School => &[("amenity", "school"), ("amenity", "kindergarten")],
        Category::Restaurant => &[
            ("amenity", "restaurant"),
            ("amenity", "fast_food"),
            ("amenity", "cafe"),
        ],
        Category::Bank => &[("amenity", "bank"), ("amenity", "atm")],
    }
}

/// Build the Overpass QL query for a bounding box and category set.
///
/// Both nodes and ways are requested; ways come back with a computed
/// `center` so they can be treated as points.
fn build_query(bbox: &Rect<f64>, categories: &[Category]) -> String {
    let (south, west) = (bbox.min().y, bbox.min().x);
    let (north, east) = (bbox.max().y, bbox.max().x);
    let mut lines = vec![format!("[out:json][timeout:{QUERY_TIMEOUT_SECS}];"), "(".to_owned()];
    for &category in categories {
        for &(key, value) in selectors(category) {
            lines.push(format!(
                "  node[\"{key}\"=\"{value}\"]({south},{west},{north},{east});"
            ));
            lines.push(format!(
                "  way[\"{key}\"=\"{value}\"]({south},{west},{north},{east});"
            ));
        }
    }
    lines.push(");".to_owned());
    lines.push("out center;".to_owned());
    lines.join("\n")
}

/// Overpass answer envelope.
#[derive(Debug, Deserialize)]
pub struct PoiResponse {
    /// Matched OSM elements.
    #[serde(default)]
    pub elements: Vec<PoiElement>,
}

/// One OSM element from an Overpass answer.
#[derive(Debug, Deserialize)]
pub struct PoiElement {
    /// Element type: `node` or `way`.
    #[serde(rename = "type")]
    pub kind: String,
    /// OSM element id.
    pub id: u64,
    /// Latitude, present on nodes.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude, present on nodes.
    #[serde(default)]
    pub lon: Option<f64>,
    /// Computed centre, present on ways queried with `out center`.
    #[serde(default)]
    pub center: Option<ElementCenter>,
    /// Raw OSM tags.
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Computed centre of a way.
#[derive(Debug, Deserialize)]
pub struct ElementCenter {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl PoiElement {
    /// Point position of the element, if it has one.
    fn position(&self) -> Option<Point<f64>> {
        if self.kind == "node" {
            self.lon
                .zip(self.lat)
                .map(|(lon, lat)| Point::new(lon, lat))
        } else {
            self.center
                .as_ref()
                .map(|center| Point::new(center.lon, center.lat))
        }
    }

    fn matches(&self, category: Category) -> bool {
        selectors(category)
            .iter()
            .any(|&(key, value)| self.tags.get(key).is_some_and(|tag| tag == value))
    }
}

/// Assign elements to the first matching requested category, keeping only
/// those inside (or on the boundary of) the isochrone.
fn classify(
    elements: Vec<PoiElement>,
    isochrone: &Polygon<f64>,
    categories: &[Category],
) -> BTreeMap<Category, Vec<Poi>> {
    let mut results: BTreeMap<Category, Vec<Poi>> = categories
        .iter()
        .map(|&category| (category, Vec::new()))
        .collect();
    for element in elements {
        let Some(position) = element.position() else {
            log::warn!("skipping {} {} without coordinates", element.kind, element.id);
            continue;
        };
        if !(isochrone.contains(&position) || isochrone.intersects(&position)) {
            continue;
        }
        let Some(category) = categories
            .iter()
            .copied()
            .find(|&category| element.matches(category))
        else {
            continue;
        };
        let mut poi = Poi::new(element.id, position.into(), category);
        if let Some(name) = element.tags.get("name") {
            poi = poi.with_name(name);
        }
        if let Some(bucket) = results.get_mut(&category) {
            bucket.push(poi);
        }
    }
    results
}

/// Configuration for [`OverpassPoiClient`].
#[derive(Debug, Clone)]
pub struct OverpassClientConfig {
    /// Overpass interpreter endpoint.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OverpassClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OVERPASS_URL.to_owned(),
            timeout: Duration::from_secs(http::DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OverpassClientConfig {
    /// Point the client at a different interpreter endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// POI client for an Overpass API instance.
pub struct OverpassPoiClient {
    client: Client,
    config: OverpassClientConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for OverpassPoiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverpassPoiClient")
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl OverpassPoiClient {
    /// Create a client for the default public endpoint.
    ///
    /// # Errors
    /// Returns a [`ClientBuildError`] when the HTTP client or runtime fails
    /// to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(OverpassClientConfig::default())
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    /// Returns a [`ClientBuildError`] when the HTTP client or runtime fails
    /// to build.
    pub fn with_config(config: OverpassClientConfig) -> Result<Self, ClientBuildError> {
        let client = http::build_client(&config.user_agent, config.timeout)?;
        let runtime = http::build_runtime()?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    async fn fetch_pois_async(
        &self,
        isochrone: &Polygon<f64>,
        categories: &[Category],
    ) -> Result<BTreeMap<Category, Vec<Poi>>, FetchError> {
        let bbox = isochrone
            .bounding_rect()
            .ok_or(FetchError::MissingGeometry)?;
        let query = build_query(&bbox, categories);
        let url = &self.config.base_url;

        let response = self
            .client
            .post(url)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|err| http::convert_reqwest_error(&err, url, self.config.timeout))?
            .error_for_status()
            .map_err(|err| http::convert_reqwest_error(&err, url, self.config.timeout))?;

        let payload: PoiResponse = response.json().await.map_err(|err| FetchError::Parse {
            message: err.to_string(),
        })?;
        let results = classify(payload.elements, isochrone, categories);
        log::debug!(
            "overpass returned {} POIs across {} categories",
            results.values().map(Vec::len).sum::<usize>(),
            results.len()
        );
        Ok(results)
    }
}

impl PoiProvider for OverpassPoiClient {
    fn pois_within(
        &self,
        isochrone: &Polygon<f64>,
        categories: &[Category],
    ) -> Result<BTreeMap<Category, Vec<Poi>>, FetchError> {
        http::block_on(&self.runtime, self.fetch_pois_async(isochrone, categories))
    }
}
