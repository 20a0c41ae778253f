use crate::{
    config::TileLayerConfig,
    map::{add_markers, init_map, MapSurface, Marker},
    LatLng, MapConfig, Spot,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: f64,
}

/// Everything drawn on the map, in the order it was added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapScene {
    pub view: Option<MapView>,
    pub tile_layers: Vec<TileLayerConfig>,
    pub markers: Vec<Marker>,
}

impl MapScene {
    /// Initializes the map from `config` and places the markers of `spots`.
    pub fn build(config: &MapConfig, spots: &[Spot]) -> Self {
        let mut scene = Self::default();
        init_map(&mut scene, config);
        add_markers(&mut scene, spots, &config.detail_route);
        scene
    }
}

impl MapSurface for MapScene {
    fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.view = Some(MapView { center, zoom });
    }

    fn add_tile_layer(&mut self, layer: &TileLayerConfig) {
        self.tile_layers.push(layer.clone());
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
}
