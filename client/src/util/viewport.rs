//! Browser bridge for the viewport-width context.
//!
//! Provides an `RwSignal<Viewport>` context. In the browser the signal tracks
//! `window.innerWidth` from mount onward; during server rendering it keeps the
//! default desktop width so SSR output and the first hydrated render agree.

use leptos::prelude::*;

use crate::state::viewport::Viewport;

/// Provide the viewport context for the component tree and return it.
pub fn provide_viewport() -> RwSignal<Viewport> {
    let viewport = RwSignal::new(Viewport::default());

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(width) = read_window_width() {
                viewport.set(Viewport::new(width));
            }
        });
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = read_window_width() {
                viewport.set(Viewport::new(width));
            }
        });
        on_cleanup(move || handle.remove());
    }

    provide_context(viewport);
    viewport
}

/// Read the viewport context provided by [`provide_viewport`].
pub fn use_viewport() -> RwSignal<Viewport> {
    expect_context::<RwSignal<Viewport>>()
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn read_window_width() -> Option<u32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0).round() as u32)
}
