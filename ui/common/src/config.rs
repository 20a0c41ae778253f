use macros::Json;
use serde::{Deserialize, Serialize};

use crate::LatLng;

pub const CAMPUS_CENTER: LatLng = LatLng {
    lat: 40.73077810827138,
    lng: -73.99732127116461,
};
pub const DEFAULT_ZOOM: f64 = 18.0;
pub const DEFAULT_CONTAINER_ID: &str = "map";
pub const DETAIL_ROUTE: &str = "/posts";

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_MAX_ZOOM: f64 = 19.0;
pub const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayerConfig {
    pub url_template: String,
    pub max_zoom: f64,
    pub attribution: String,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url_template: OSM_TILE_URL.to_string(),
            max_zoom: OSM_MAX_ZOOM,
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

/// Static settings of the spot map.
///
/// Every field has a default, so a page may override only part of it, e.g.
/// `{"zoom": 16}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Json)]
#[serde(default)]
pub struct MapConfig {
    /// Id of the element hosting the map
    pub container_id: String,
    pub center: LatLng,
    pub zoom: f64,
    pub tile_layer: TileLayerConfig,
    /// Prefix of the spot detail page, the spot id is appended to it
    pub detail_route: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            center: CAMPUS_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_layer: TileLayerConfig::default(),
            detail_route: DETAIL_ROUTE.to_string(),
        }
    }
}
