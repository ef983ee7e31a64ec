//! Inline SVG line icons.
//!
//! Icons are decorative or inert controls; none carries a handler.

use leptos::prelude::*;

/// Icon glyphs used by the header and post cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Home,
    Messages,
    NewPost,
    Explore,
    Activity,
    Profile,
    Like,
    Comment,
    Share,
    Save,
    Search,
    More,
}

impl IconKind {
    /// Accessible name for the icon.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Messages => "Messages",
            Self::NewPost => "New post",
            Self::Explore => "Explore",
            Self::Activity => "Activity",
            Self::Profile => "Profile",
            Self::Like => "Like",
            Self::Comment => "Comment",
            Self::Share => "Share",
            Self::Save => "Save",
            Self::Search => "Search",
            Self::More => "More options",
        }
    }

    /// Path data on a 24x24 grid, stroked with `currentColor`.
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Home => &["m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
            Self::Messages => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Self::NewPost => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M8 12h8",
                "M12 8v8",
            ],
            Self::Explore => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
                "m16.24 7.76-2.12 6.36-6.36 2.12 2.12-6.36 6.36-2.12z",
            ],
            Self::Activity | Self::Like => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            ],
            Self::Profile => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            ],
            Self::Comment => &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"],
            Self::Share => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            Self::Save => &["m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z"],
            Self::Search => &["M11 3a8 8 0 1 0 0 16a8 8 0 1 0 0-16z", "m21 21-4.3-4.3"],
            Self::More => &["M5 12h.01", "M12 12h.01", "M19 12h.01"],
        }
    }
}

/// A single stroked icon.
#[component]
pub fn Icon(kind: IconKind, #[prop(optional)] class: &'static str) -> impl IntoView {
    let class = if class.is_empty() { "icon".to_owned() } else { format!("icon {class}") };
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-label=kind.label()
        >
            {kind.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
