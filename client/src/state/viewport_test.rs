use super::*;

#[test]
fn default_viewport_is_desktop_and_shows_everything() {
    let viewport = Viewport::default();
    assert_eq!(viewport.width, DEFAULT_VIEWPORT_WIDTH_PX);
    assert!(viewport.shows_search());
    assert!(viewport.shows_suggestions());
}

#[test]
fn suggestions_breakpoint_is_inclusive() {
    assert!(!Viewport::new(SUGGESTIONS_BREAKPOINT_PX - 1).shows_suggestions());
    assert!(Viewport::new(SUGGESTIONS_BREAKPOINT_PX).shows_suggestions());
}

#[test]
fn search_breakpoint_is_inclusive() {
    assert!(!Viewport::new(SEARCH_BREAKPOINT_PX - 1).shows_search());
    assert!(Viewport::new(SEARCH_BREAKPOINT_PX).shows_search());
}

#[test]
fn tablet_width_keeps_search_but_drops_suggestions() {
    let tablet = Viewport::new(900);
    assert!(tablet.shows_search());
    assert!(!tablet.shows_suggestions());
}

#[test]
fn phone_width_drops_both() {
    let phone = Viewport::new(375);
    assert!(!phone.shows_search());
    assert!(!phone.shows_suggestions());
}
