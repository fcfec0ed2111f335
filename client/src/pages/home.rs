//! Landing page: what Leptos is and what the tutorial covers.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::pages::route::PageRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let on_explore = Callback::new(move |_| navigate(PageRoute::Components.path(), NavigateOptions::default()));

    view! {
        <div>
            <h1 class="section-title">"Welcome to the Leptos Primer"</h1>

            <div class="cheat-sheet-grid">
                <Card title="What is Leptos?">
                    <p>
                        "Leptos is a " <strong>"Rust framework"</strong>
                        " for building web user interfaces. Components are plain Rust functions and "
                        "reactivity is driven by fine-grained signals."
                    </p>
                    <ul class="card-list">
                        <li>"Component-based architecture"</li>
                        <li>"Fine-grained reactivity, no virtual DOM"</li>
                        <li>"Declarative " <code>"view!"</code> " templates"</li>
                        <li>"Server-side rendering with hydration"</li>
                    </ul>
                </Card>

                <Card title="What is a UI Framework?">
                    <p>"A UI framework provides:"</p>
                    <ul class="card-list">
                        <li><strong>"Structure:"</strong> " An organized way to write code"</li>
                        <li><strong>"Tools:"</strong> " Pre-built primitives and components"</li>
                        <li><strong>"Patterns:"</strong> " Conventions that scale"</li>
                        <li><strong>"Community:"</strong> " Shared knowledge and crates"</li>
                    </ul>
                    <p class="card-note">
                        <strong>"Instead of manually manipulating the DOM"</strong>
                        ", you describe what the UI should look like for the current state and the "
                        "framework keeps the page in sync."
                    </p>
                </Card>

                <Card title="Benefits of Leptos">
                    <ul class="card-list">
                        <li><strong>"Reusable Components:"</strong> " Write once, use everywhere"</li>
                        <li><strong>"Fast Updates:"</strong> " Signals touch only the nodes that changed"</li>
                        <li><strong>"Type Safety:"</strong> " Props are checked by the compiler"</li>
                        <li><strong>"One Language:"</strong> " Server and browser code are both Rust"</li>
                        <li><strong>"Small Bundles:"</strong> " WASM output with no runtime diffing"</li>
                    </ul>
                </Card>

                <Card title="When is Leptos Used?">
                    <p><strong>"Good fit for:"</strong></p>
                    <ul class="card-list">
                        <li>"Single Page Applications (SPAs)"</li>
                        <li>"Interactive dashboards and tools"</li>
                        <li>"Full-stack apps sharing types with an Axum backend"</li>
                        <li>"SEO-friendly sites via server rendering"</li>
                    </ul>
                    <p class="card-note"><strong>"Less ideal for:"</strong></p>
                    <ul class="card-list">
                        <li>"Plain static pages with no interactivity"</li>
                        <li>"Teams with no Rust experience and a tight deadline"</li>
                    </ul>
                </Card>

                <Card title="A Full-Stack Rust Setup">
                    <p>"This site itself runs on a small stack:"</p>
                    <div class="stack-list">
                        <div><strong>"Leptos"</strong> " - components, signals, routing"</div>
                        <div><strong>"Axum"</strong> " - HTTP server and server-side rendering"</div>
                        <div><strong>"Tokio"</strong> " - async runtime"</div>
                        <div><strong>"WASM"</strong> " - the same components running in the browser"</div>
                    </div>
                    <p>"One language from the request handler to the click handler."</p>
                </Card>

                <Card title="Getting Started">
                    <p>"This tutorial covers:"</p>
                    <ul class="card-list">
                        <li>"✅ Basic Leptos concepts and components"</li>
                        <li>"✅ Client-side routing with leptos_router"</li>
                        <li>"✅ State with signals"</li>
                        <li>"✅ Side effects with Effect"</li>
                        <li>"✅ Real examples you can run locally"</li>
                    </ul>
                    <div class="card-actions">
                        <Button variant=ButtonVariant::Primary on_click=on_explore>
                            "Explore Components →"
                        </Button>
                    </div>
                </Card>
            </div>
        </div>
    }
}
