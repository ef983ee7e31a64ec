//! Page frame: header chrome over a two-column responsive body.
//!
//! ARCHITECTURE
//! ============
//! The primary column holds the story tray above the feed. The secondary
//! column holds the suggestions panel and is dropped from the tree entirely
//! below the suggestions breakpoint.

use leptos::prelude::*;

use crate::components::feed::Feed;
use crate::components::header_bar::HeaderBar;
use crate::components::story_tray::StoryTray;
use crate::components::suggestions_panel::SuggestionsPanel;
use crate::state::feed::FeedState;
use crate::util::viewport::use_viewport;

#[cfg(test)]
#[path = "root_layout_test.rs"]
mod root_layout_test;

/// Full home-screen layout for `feed`.
#[component]
pub fn RootLayout(feed: FeedState) -> impl IntoView {
    let viewport = use_viewport();
    let FeedState { stories, posts, suggestions, current_user } = feed;

    view! {
        <div class="root-layout">
            <HeaderBar/>
            <main class="root-layout__body">
                <section class="root-layout__primary">
                    <StoryTray stories/>
                    <Feed posts/>
                </section>
                <Show when=move || viewport.get().shows_suggestions()>
                    <section class="root-layout__secondary">
                        <SuggestionsPanel
                            current_user=current_user.clone()
                            suggestions=suggestions.clone()
                        />
                    </section>
                </Show>
            </main>
        </div>
    }
}
