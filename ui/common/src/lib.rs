pub mod config;
pub mod map;
mod popup;
mod scene;
mod spot;

pub use config::{MapConfig, TileLayerConfig};
pub use map::{add_markers, init_map, marker_for, MapSurface, Marker};
pub use popup::{detail_href, Popup};
pub use scene::{MapScene, MapView};
pub use spot::{LatLng, Spot};
