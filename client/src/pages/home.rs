//! Home screen: the sample feed inside the root layout.

use leptos::prelude::*;

use crate::components::root_layout::RootLayout;
use crate::state::feed::FeedState;

/// Home page bound to the built-in sample data.
#[component]
pub fn HomePage() -> impl IntoView {
    view! { <RootLayout feed=FeedState::sample()/> }
}
