//! # photofeed-client
//!
//! Leptos + WASM frontend for a static photo-feed screen: header chrome, a
//! story tray, a post feed and a suggestions panel rendered from built-in
//! sample data.
//!
//! The same components render on the server (`ssr`) and hydrate in the
//! browser (`hydrate`). Browser-only concerns live behind the `hydrate`
//! feature so server rendering stays deterministic.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// Id of the element the app is rendered into and hydrated from.
pub const MOUNT_ID: &str = "root";

/// WASM entry point: hydrate the server-rendered app inside `#root`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use wasm_bindgen::JsCast as _;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
    else {
        log::error!("mount point #{MOUNT_ID} not found; skipping hydration");
        return;
    };
    let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
        log::error!("mount point #{MOUNT_ID} is not an HTML element");
        return;
    };

    leptos::mount::hydrate_from(root, app::App).forget();
}
