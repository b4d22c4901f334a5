//! Root application component with routing and the site chrome.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::site_footer::{SiteFooter, TOP_ANCHOR};
use crate::content::BRAND;
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, projects::ProjectsPage, services::ServicesPage,
    tour::TourPage,
};

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
/// Every route shares the nav bar and footer. Page state is local to each
/// page, so nothing is provided through context beyond meta tags.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/zenith-solar.css"/>
        <Title text=format!("{BRAND} Solar")/>
        <Meta name="description" content="Residential and commercial solar installation, storage and monitoring."/>

        <Router>
            <div id=TOP_ANCHOR></div>
            <NavBar/>
            <main class="site-main">
                <Routes fallback=NotFound>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("tour") view=TourPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="section section--intro">
            <Title text=format!("Page not found | {BRAND} Solar")/>
            <h1>"Page not found"</h1>
            <A href="/" attr:class="btn btn--accent">"Back home"</A>
        </section>
    }
}
