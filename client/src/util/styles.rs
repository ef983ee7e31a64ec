//! Process-wide style rules emitted once into the document head.
//!
//! SYSTEM CONTEXT
//! ==============
//! Component stylesheets ship in the compiled bundle. The rules here are the
//! few that must exist before the bundle loads, so `app::shell` writes them
//! into a single `<style>` element during server rendering.

use std::sync::LazyLock;

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

/// Class that hides native scrollbars on a scrollable element.
pub const SCROLLBAR_HIDE_CLASS: &str = "scrollbar-hide";

/// A selector and its declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobalRule {
    pub selector: &'static str,
    pub declarations: &'static [&'static str],
}

impl GlobalRule {
    fn render(self) -> String {
        format!("{} {{ {} }}", self.selector, self.declarations.join(" "))
    }
}

/// Scrollbar suppression. No single property covers every engine, so WebKit,
/// legacy IE/Edge and the standards-track property are set together.
pub const SCROLLBAR_HIDE_RULES: [GlobalRule; 2] = [
    GlobalRule {
        selector: ".scrollbar-hide::-webkit-scrollbar",
        declarations: &["display: none;"],
    },
    GlobalRule {
        selector: ".scrollbar-hide",
        declarations: &["-ms-overflow-style: none;", "scrollbar-width: none;"],
    },
];

static GLOBAL_STYLES: LazyLock<String> = LazyLock::new(|| {
    SCROLLBAR_HIDE_RULES
        .iter()
        .map(|rule| rule.render())
        .collect::<Vec<_>>()
        .join("\n")
});

/// All global rules as one stylesheet, built on first use.
pub fn global_styles() -> &'static str {
    GLOBAL_STYLES.as_str()
}
