use std::collections::HashSet;

use super::*;

#[test]
fn sample_ids_are_unique_within_each_list() {
    let feed = FeedState::sample();

    let story_ids: HashSet<u32> = feed.stories.iter().map(|s| s.id).collect();
    let post_ids: HashSet<u32> = feed.posts.iter().map(|p| p.id).collect();
    let suggestion_ids: HashSet<u32> = feed.suggestions.iter().map(|s| s.id).collect();

    assert_eq!(story_ids.len(), feed.stories.len());
    assert_eq!(post_ids.len(), feed.posts.len());
    assert_eq!(suggestion_ids.len(), feed.suggestions.len());
}

#[test]
fn sample_has_expected_list_sizes() {
    let feed = FeedState::sample();
    assert_eq!(feed.stories.len(), 8);
    assert_eq!(feed.posts.len(), 3);
    assert_eq!(feed.suggestions.len(), 4);
}

#[test]
fn sample_posts_keep_authored_order() {
    let feed = FeedState::sample();
    let ids: Vec<u32> = feed.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let first = &feed.posts[0];
    assert_eq!(first.username, "traveler_explorer");
    assert_eq!(first.likes, 1234);
    assert_eq!(first.comments.len(), 2);
    assert_eq!(first.comments[0].user, "adventure_seeker");
    assert_eq!(first.comments[1].user, "nature_lover");
}

#[test]
fn sample_current_user_matches_first_story_avatar() {
    let feed = FeedState::sample();
    assert_eq!(feed.current_user.username, "your_username");
    assert_eq!(feed.current_user.display_name, "Your Name");
    assert_eq!(feed.current_user.avatar, feed.stories[0].avatar);
}
