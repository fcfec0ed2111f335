//! Site header with the title link and primary navigation.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::route::PageRoute;

/// Persistent header shown above every page.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <h1 class="site-header__logo">
                    <A href=PageRoute::Home.path()>"Leptos Primer"</A>
                </h1>
                <nav>
                    <ul class="site-header__nav">
                        {PageRoute::ALL
                            .into_iter()
                            .map(|route| {
                                view! {
                                    <li class="site-header__nav-item">
                                        <A href=route.path()>{route.label()}</A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </div>
        </header>
    }
}
