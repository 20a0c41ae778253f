use leptos::*;
use leptos_meta::*;
use anyhow::Context;
use wasm_bindgen::{JsCast, JsValue};

mod components;

pub use crate::components::map::{PopupBody, SpotMap};
use ui_common::{MapConfig, MapScene, Spot};

/// Reads a global variable of the page as JSON, `None` when it is not set.
pub fn page_global(name: &str) -> anyhow::Result<Option<String>> {
    let Some(window) = web_sys::window() else {
        anyhow::bail!("Cannot get window");
    };

    let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(name)) else {
        anyhow::bail!("Cannot read `{name}` from window");
    };

    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let Ok(json) = js_sys::JSON::stringify(&value) else {
        anyhow::bail!("Cannot convert `{name}` to JSON");
    };

    Ok(Some(String::from(json)))
}

/// Spots injected by the server as the `posts` global. Malformed records are
/// skipped, see [`Spot::list_from_json`].
pub fn load_posts() -> anyhow::Result<Vec<Spot>> {
    let Some(json) = page_global("posts")? else {
        anyhow::bail!("`posts` is not defined on this page");
    };
    Spot::list_from_json(json.as_str()).context("Cannot load `posts`")
}

/// Map settings, optionally overridden by a `mapConfig` global.
pub fn load_map_config() -> MapConfig {
    match page_global("mapConfig") {
        Ok(Some(json)) => MapConfig::from_json(json.as_str()).unwrap_or_else(|e| {
            log::error!("Invalid mapConfig: {e:#}");
            log::info!("Using default map configuration");
            MapConfig::default()
        }),
        Ok(None) => MapConfig::default(),
        Err(e) => {
            log::warn!("Error reading mapConfig: {e:#}");
            log::info!("Using default map configuration");
            MapConfig::default()
        }
    }
}

fn map_container(id: &str) -> Option<web_sys::HtmlElement> {
    document().get_element_by_id(id)?.dyn_into().ok()
}

/// Loads the page data and mounts the map into its container.
pub fn start() {
    let config = load_map_config();
    let spots = load_posts().unwrap_or_else(|e| {
        log::error!("{e:#}");
        Vec::new()
    });

    match map_container(&config.container_id) {
        Some(parent) => mount_to(parent, move || view! { <App config spots/> }),
        None => {
            log::warn!(
                "No element with id `{}`, mounting the map to the body",
                config.container_id
            );
            mount_to_body(move || view! { <App config spots/> })
        }
    }
}

#[component]
pub fn App(config: MapConfig, spots: Vec<Spot>) -> impl IntoView {
    provide_meta_context();

    let scene = MapScene::build(&config, &spots);

    view! {
        <Title text="Study Spots"/>
        <SpotMap scene/>
    }
}
