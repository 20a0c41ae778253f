use crate::{config::TileLayerConfig, LatLng, MapConfig, Popup, Spot};

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub title: String,
    pub popup: Popup,
}

/// The map widget markers are drawn on.
///
/// Implemented by the in-memory [`crate::MapScene`]; a frontend renders the
/// scene with whatever map library it uses.
pub trait MapSurface {
    fn set_view(&mut self, center: LatLng, zoom: f64);
    fn add_tile_layer(&mut self, layer: &TileLayerConfig);
    fn add_marker(&mut self, marker: Marker);
}

/// Centers the map and attaches the tile layer. Must run before `add_markers`.
pub fn init_map<S: MapSurface + ?Sized>(surface: &mut S, config: &MapConfig) {
    surface.set_view(config.center, config.zoom);
    surface.add_tile_layer(&config.tile_layer);
}

/// Builds the marker of a spot, `None` when the spot has no coordinates.
pub fn marker_for(spot: &Spot, detail_route: &str) -> Option<Marker> {
    let position = spot.latlng?;
    Some(Marker {
        position,
        title: spot.location.clone(),
        popup: Popup::for_spot(detail_route, spot),
    })
}

/// Places one marker per spot that has coordinates. Spots without them are
/// skipped.
pub fn add_markers<S: MapSurface + ?Sized>(surface: &mut S, spots: &[Spot], detail_route: &str) {
    log::debug!("{spots:?}");

    let mut placed = 0;
    for spot in spots {
        match marker_for(spot, detail_route) {
            Some(marker) => {
                surface.add_marker(marker);
                placed += 1;
            }
            None => log::debug!("Spot `{}` has no coordinates, skipping", spot.id),
        }
    }

    log::info!("Placed {placed} of {} spots on the map", spots.len());
}
