//! Root application component with routing and the persistent page chrome.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header, theme_switcher::ThemeSwitcher};
use crate::pages::{
    about::AboutPage, components::ComponentsPage, home::HomePage, interactivity::InteractivityPage,
    route::PageRoute,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
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
/// The theme toggle, header and footer stay mounted across navigation; only
/// the `<main>` area swaps with the route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/primer.css"/>
        <Title text="Leptos Primer"/>

        <Router>
            <div class="app">
                <ThemeSwitcher/>
                <Header/>
                <main class="main-content">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                        <Route path=StaticSegment(PageRoute::Home.segment()) view=HomePage/>
                        <Route path=StaticSegment(PageRoute::Components.segment()) view=ComponentsPage/>
                        <Route path=StaticSegment(PageRoute::Interactivity.segment()) view=InteractivityPage/>
                        <Route path=StaticSegment(PageRoute::About.segment()) view=AboutPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
