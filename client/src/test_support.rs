//! Helpers for rendering components to HTML inside unit tests.

use leptos::prelude::*;

use crate::state::viewport::Viewport;

/// Render a view to an HTML string under a fresh reactive owner.
pub fn render<V, F>(build: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| build().to_html())
}

/// Like [`render`], with a viewport context of the given width provided.
pub fn render_at_width<V, F>(width: u32, build: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| {
        provide_context(RwSignal::new(Viewport::new(width)));
        build().to_html()
    })
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Assert that `needles` appear in `haystack` in the given order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        let Some(pos) = haystack[from..].find(needle) else {
            panic!("`{needle}` missing or out of order");
        };
        from += pos + needle.len();
    }
}
