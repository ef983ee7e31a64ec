//! Vertical list of post cards.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::state::feed::Post;

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

/// Posts rendered top-to-bottom in input order.
#[component]
pub fn Feed(posts: Vec<Post>) -> impl IntoView {
    view! {
        <div class="feed">
            <For
                each=move || posts.clone()
                key=|post| post.id
                children=move |post| view! { <PostCard post/> }
            />
        </div>
    }
}
