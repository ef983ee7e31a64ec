//! One feed entry: author header, media, actions, likes, caption, comments.
//!
//! LAYOUT
//! ======
//!   1. header   avatar, username, overflow menu
//!   2. media    16:9 cover-cropped image
//!   3. actions  like / comment / share on the left, save on the right
//!   4. likes    `1,234 likes`
//!   5. caption  bold username then caption text
//!   6. comments bold username then text, then the relative time
//!   7. entry    comment input
//!
//! Action icons and the comment input are inert. The input is not bound to
//! any state and never appends to the comment list.

use leptos::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::icon::{Icon, IconKind};
use crate::state::feed::{Comment, Post};
use crate::util::format::likes_label;
use crate::util::placeholder::{POST_AVATAR, avatar_placeholder, media_placeholder};

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

/// Placeholder text of the comment-entry field.
pub const COMMENT_PLACEHOLDER: &str = "Add a comment...";

/// Avatar fallback for a post author: initials on a 40x40 tile.
pub fn post_avatar_fallback(post: &Post) -> String {
    avatar_placeholder(POST_AVATAR, &post.username)
}

/// Media fallback: the generic "Image Not Found" banner, never per-user.
pub fn post_media_fallback() -> String {
    media_placeholder()
}

/// A single, self-contained post.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let avatar_fallback = post_avatar_fallback(&post);
    let Post { id: _, username, avatar, image, caption, likes, comments, time } = post;
    let avatar_alt = username.clone();
    let header_name = username.clone();

    view! {
        <article class="post-card">
            <div class="post-card__header">
                <FallbackImage
                    class="post-card__avatar"
                    src=avatar
                    fallback=avatar_fallback
                    alt=avatar_alt
                />
                <p class="post-card__username">{header_name}</p>
                <span class="post-card__more">
                    <Icon kind=IconKind::More/>
                </span>
            </div>

            <FallbackImage
                class="post-card__media"
                src=image
                fallback=post_media_fallback()
                alt="Post"
            />

            <div class="post-card__actions">
                <div class="post-card__actions-left">
                    <Icon kind=IconKind::Like class="post-card__action"/>
                    <Icon kind=IconKind::Comment class="post-card__action"/>
                    <Icon kind=IconKind::Share class="post-card__action"/>
                </div>
                <Icon kind=IconKind::Save class="post-card__action"/>
            </div>

            <p class="post-card__likes">{likes_label(likes)}</p>

            <p class="post-card__caption">
                <span class="post-card__author">{username}</span>
                " "
                {caption}
            </p>

            <div class="post-card__comments">
                {comments
                    .into_iter()
                    .map(|comment| view! { <CommentLine comment/> })
                    .collect_view()}
                <p class="post-card__time">{time}</p>
            </div>

            <div class="post-card__entry">
                <input class="post-card__entry-input" type="text" placeholder=COMMENT_PLACEHOLDER/>
            </div>
        </article>
    }
}

#[component]
fn CommentLine(comment: Comment) -> impl IntoView {
    view! {
        <p class="post-card__comment">
            <span class="post-card__author">{comment.user}</span>
            " "
            {comment.text}
        </p>
    }
}
