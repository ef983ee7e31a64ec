//! Top navigation chrome: logo, search field and icon links.
//!
//! Nothing here is wired to a handler. The search field is only part of the
//! tree at or above the search breakpoint.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::util::viewport::use_viewport;

#[cfg(test)]
#[path = "header_bar_test.rs"]
mod header_bar_test;

/// Brand text shown at the left of the header.
pub const BRAND_NAME: &str = "Instagram";

/// Navigation icons, left to right.
pub const NAV_ICONS: [IconKind; 6] = [
    IconKind::Home,
    IconKind::Messages,
    IconKind::NewPost,
    IconKind::Explore,
    IconKind::Activity,
    IconKind::Profile,
];

/// Sticky header bar.
#[component]
pub fn HeaderBar() -> impl IntoView {
    let viewport = use_viewport();

    view! {
        <header class="header-bar">
            <div class="header-bar__inner">
                <div class="header-bar__logo">{BRAND_NAME}</div>
                <Show when=move || viewport.get().shows_search()>
                    <div class="header-bar__search">
                        <input class="header-bar__search-input" type="text" placeholder="Search"/>
                        <Icon kind=IconKind::Search class="header-bar__search-icon"/>
                    </div>
                </Show>
                <nav class="header-bar__nav">
                    {NAV_ICONS
                        .into_iter()
                        .map(|kind| view! { <Icon kind=kind class="header-bar__nav-icon"/> })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
