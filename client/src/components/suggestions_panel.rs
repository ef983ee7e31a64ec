//! Current-user summary and suggested accounts.
//!
//! "Switch", "See All" and "Follow" are inert buttons. The list is shown in
//! input order with no sorting, filtering or pagination.

use leptos::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::state::feed::{CurrentUser, Suggestion};
use crate::util::placeholder::{CURRENT_USER_AVATAR, SUGGESTION_AVATAR, avatar_placeholder};

#[cfg(test)]
#[path = "suggestions_panel_test.rs"]
mod suggestions_panel_test;

/// Avatar fallback for the signed-in account: initials on a 60x60 tile.
pub fn current_user_fallback(user: &CurrentUser) -> String {
    avatar_placeholder(CURRENT_USER_AVATAR, &user.username)
}

/// Avatar fallback for a suggested account: initials on a 40x40 tile.
pub fn suggestion_fallback(suggestion: &Suggestion) -> String {
    avatar_placeholder(SUGGESTION_AVATAR, &suggestion.user)
}

/// Sidebar panel with the signed-in account and follow suggestions.
#[component]
pub fn SuggestionsPanel(
    current_user: CurrentUser,
    suggestions: Vec<Suggestion>,
) -> impl IntoView {
    let avatar_fallback = current_user_fallback(&current_user);
    let CurrentUser { username, display_name, avatar } = current_user;

    view! {
        <div class="suggestions-panel">
            <div class="suggestions-panel__me">
                <FallbackImage
                    class="suggestions-panel__me-avatar"
                    src=avatar
                    fallback=avatar_fallback
                    alt="Current User"
                />
                <div class="suggestions-panel__names">
                    <p class="suggestions-panel__username">{username}</p>
                    <p class="suggestions-panel__secondary">{display_name}</p>
                </div>
                <button class="suggestions-panel__link" type="button">"Switch"</button>
            </div>

            <div class="suggestions-panel__header">
                <p class="suggestions-panel__title">"Suggestions for you"</p>
                <button class="suggestions-panel__see-all" type="button">"See All"</button>
            </div>

            <div class="suggestions-panel__list">
                <For
                    each=move || suggestions.clone()
                    key=|suggestion| suggestion.id
                    children=move |suggestion| view! { <SuggestionRow suggestion/> }
                />
            </div>
        </div>
    }
}

#[component]
fn SuggestionRow(suggestion: Suggestion) -> impl IntoView {
    let fallback = suggestion_fallback(&suggestion);
    let Suggestion { id: _, user, avatar, mutual } = suggestion;
    let alt = user.clone();
    view! {
        <div class="suggestions-panel__item">
            <FallbackImage
                class="suggestions-panel__avatar"
                src=avatar
                fallback=fallback
                alt=alt
            />
            <div class="suggestions-panel__names">
                <p class="suggestions-panel__username">{user}</p>
                <p class="suggestions-panel__secondary">{mutual}</p>
            </div>
            <button class="suggestions-panel__link" type="button">"Follow"</button>
        </div>
    }
}
