use super::*;
use crate::state::feed::FeedState;
use crate::test_support::{assert_in_order, count, render};

#[test]
fn renders_sample_posts_in_order() {
    let posts = FeedState::sample().posts;
    let html = render(move || view! { <Feed posts/> });

    assert_eq!(count(&html, "class=\"post-card\""), 3);
    assert_in_order(
        &html,
        &[">traveler_explorer</p>", ">foodie_delights</p>", ">urban_photography</p>"],
    );
}

#[test]
fn each_card_carries_its_own_like_count_and_comments() {
    let posts = FeedState::sample().posts;
    let html = render(move || view! { <Feed posts/> });

    assert_in_order(&html, &[">1,234 likes</p>", ">876 likes</p>", ">2,100 likes</p>"]);
    assert_eq!(count(&html, "class=\"post-card__comment\""), 6);
}

#[test]
fn empty_feed_renders_no_cards() {
    let html = render(|| view! { <Feed posts=Vec::new()/> });
    assert!(html.contains("class=\"feed\""));
    assert_eq!(count(&html, "class=\"post-card\""), 0);
}
