//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::MOUNT_ID;
use crate::components::header_bar::BRAND_NAME;
use crate::pages::home::HomePage;
use crate::util::{styles, viewport};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    page_document(options, || view! { <App/> })
}

/// Full document around `app`, mounted inside the `#root` element.
///
/// Global style rules are emitted here once per document; components never
/// inject them again.
pub fn page_document<F, V>(options: LeptosOptions, app: F) -> impl IntoView
where
    F: FnOnce() -> V,
    V: IntoView + 'static,
{
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <style id="global-styles">{styles::global_styles()}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <div id=MOUNT_ID>{app()}</div>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the viewport context read by the responsive layout and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    viewport::provide_viewport();

    view! {
        <Stylesheet id="leptos" href="/pkg/photofeed.css"/>
        <Title text=BRAND_NAME/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
