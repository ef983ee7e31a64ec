use super::*;
use crate::state::viewport::SEARCH_BREAKPOINT_PX;
use crate::test_support::{count, render_at_width};

#[test]
fn search_field_present_at_desktop_width() {
    let html = render_at_width(1280, || view! { <HeaderBar/> });
    assert!(html.contains("header-bar__search-input"));
    assert!(html.contains("placeholder=\"Search\""));
}

#[test]
fn search_field_absent_below_breakpoint() {
    let html = render_at_width(SEARCH_BREAKPOINT_PX - 1, || view! { <HeaderBar/> });
    assert!(!html.contains("header-bar__search"));
    assert!(html.contains(BRAND_NAME));
}

#[test]
fn search_field_present_at_breakpoint() {
    let html = render_at_width(SEARCH_BREAKPOINT_PX, || view! { <HeaderBar/> });
    assert!(html.contains("header-bar__search-input"));
}

#[test]
fn renders_every_nav_icon() {
    let html = render_at_width(500, || view! { <HeaderBar/> });
    assert_eq!(count(&html, "header-bar__nav-icon"), NAV_ICONS.len());
    for kind in NAV_ICONS {
        assert!(html.contains(&format!("aria-label=\"{}\"", kind.label())));
    }
}
