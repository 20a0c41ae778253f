use leptos::*;
use leptos_leaflet::*;
use ui_common::{MapScene, MapView};

/// Popup content, the anchor to the spot's detail page.
#[component]
pub fn PopupBody(popup: ui_common::Popup) -> impl IntoView {
    view! { <div class="spot-popup" inner_html=popup.html()></div> }
}

#[component]
pub fn SpotMap(scene: MapScene) -> impl IntoView {
    let MapScene {
        view: map_view,
        tile_layers,
        markers,
    } = scene;

    let Some(MapView { center, zoom, .. }) = map_view else {
        log::error!("Map view was never initialized");
        return view! { <p>"Map unavailable"</p> }.into_view();
    };

    let tile_layers = tile_layers
        .into_iter()
        .map(|layer| {
            view! {
                <TileLayer url=layer.url_template attribution=layer.attribution max_zoom=layer.max_zoom/>
            }
        })
        .collect_view();

    let markers = markers
        .into_iter()
        .map(|marker| {
            let position = Position::new(marker.position.lat, marker.position.lng);
            view! {
                <Marker position=position title=marker.title>
                    <Popup>
                        <PopupBody popup=marker.popup/>
                    </Popup>
                </Marker>
            }
        })
        .collect_view();

    view! {
        <MapContainer style="height: 100vh" center=Position::new(center.lat, center.lng) zoom=zoom set_view=true class="z-0">
            {tile_layers}
            {markers}
        </MapContainer>
    }
    .into_view()
}
