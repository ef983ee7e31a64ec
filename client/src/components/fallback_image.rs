//! Image element that swaps to a generated placeholder when loading fails.
//!
//! DESIGN
//! ======
//! Substitution happens at most once per element. After the first failure
//! the element points at the placeholder and further `error` events are
//! ignored, so a broken placeholder cannot trigger a reload loop.
//!
//! The browser starts fetching server-rendered images before the WASM bundle
//! attaches `on:error`, so a failure can happen before hydration. After mount
//! the element is inspected once and a load that already failed is treated
//! like an `error` event.

use leptos::prelude::*;

#[cfg(test)]
#[path = "fallback_image_test.rs"]
mod fallback_image_test;

/// Source selection state behind [`FallbackImage`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackSource {
    primary: String,
    fallback: String,
    failed: bool,
}

impl FallbackSource {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self { primary: primary.into(), fallback: fallback.into(), failed: false }
    }

    /// URL the element should currently display.
    pub fn current(&self) -> &str {
        if self.failed { &self.fallback } else { &self.primary }
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Record a load failure. Returns `true` only when the source changed.
    pub fn fail(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        true
    }
}

/// Whether an image element finished loading without producing pixels.
///
/// Mirrors `HTMLImageElement.complete && naturalWidth == 0`, which is how a
/// load that errored before any listener was attached shows up.
pub fn load_already_failed(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}

/// Apply a load failure to `source`; only the first one notifies.
fn fail_once(source: RwSignal<FallbackSource>) {
    #[cfg(feature = "hydrate")]
    source.with_untracked(|s| {
        if !s.has_failed() {
            log::warn!("image {} failed to load; showing {}", s.primary, s.fallback);
        }
    });
    source.maybe_update(FallbackSource::fail);
}

/// `<img>` bound to `src`, falling back to `fallback` on the first load error.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] fallback: String,
    #[prop(into)] alt: String,
    #[prop(into, optional)] class: Option<String>,
) -> impl IntoView {
    let source = RwSignal::new(FallbackSource::new(src, fallback));
    let img_ref = NodeRef::<leptos::html::Img>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(img) = img_ref.get() else {
                return;
            };
            if load_already_failed(img.complete(), img.natural_width()) {
                fail_once(source);
            }
        });
    }

    view! {
        <img
            node_ref=img_ref
            class=class
            src=move || source.with(|s| s.current().to_owned())
            alt=alt
            on:error=move |_| fail_once(source)
        />
    }
}
