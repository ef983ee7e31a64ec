//! Horizontal, scrollbar-free strip of story avatars.

use leptos::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::state::feed::Story;
use crate::util::placeholder::{STORY_AVATAR, avatar_placeholder};
use crate::util::styles::SCROLLBAR_HIDE_CLASS;

#[cfg(test)]
#[path = "story_tray_test.rs"]
mod story_tray_test;

/// Fixed display width of a story's username label.
pub const STORY_LABEL_WIDTH_PX: u32 = 64;

/// Inline style clipping a label to the fixed width on a single line.
pub fn story_label_style() -> String {
    format!(
        "width: {STORY_LABEL_WIDTH_PX}px; max-width: {STORY_LABEL_WIDTH_PX}px; overflow: hidden; \
         text-overflow: ellipsis; white-space: nowrap; text-align: center;"
    )
}

/// Avatar fallback for a story: its initials on a 60x60 tile.
pub fn story_fallback(story: &Story) -> String {
    avatar_placeholder(STORY_AVATAR, &story.user)
}

/// All stories, in input order, rendered at once.
#[component]
pub fn StoryTray(stories: Vec<Story>) -> impl IntoView {
    view! {
        <div class=format!("story-tray {SCROLLBAR_HIDE_CLASS}")>
            <div class="story-tray__row">
                <For
                    each=move || stories.clone()
                    key=|story| story.id
                    children=move |story| view! { <StoryAvatar story/> }
                />
            </div>
        </div>
    }
}

#[component]
fn StoryAvatar(story: Story) -> impl IntoView {
    let fallback = story_fallback(&story);
    let Story { id: _, user, avatar } = story;
    let alt = user.clone();
    let title = user.clone();
    view! {
        <div class="story-tray__item">
            <div class="story-tray__ring">
                <FallbackImage
                    class="story-tray__avatar"
                    src=avatar
                    fallback=fallback
                    alt=alt
                />
            </div>
            <p class="story-tray__label" style=story_label_style() title=title>
                {user}
            </p>
        </div>
    }
}
