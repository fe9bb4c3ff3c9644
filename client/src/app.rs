//! Root application component with routing and context providers.

use ats::config::DEFAULT_API_URL;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::net::api::BrowserApi;
use crate::pages::{add_professional::AddProfessionalPage, professionals::ProfessionalsPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API adapter to every page and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = BrowserApi::from_build_env().unwrap_or_else(|err| {
        tracing::error!(error = %err, "invalid ATS_API_URL at build time; using default");
        BrowserApi::new(DEFAULT_API_URL)
    });
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/ats.css"/>
        <Title text="Demo ATS"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ProfessionalsPage/>
                    <Route path=StaticSegment("add") view=AddProfessionalPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
