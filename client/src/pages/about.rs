//! About page: purpose, stack and how to run the tutorial.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::pages::route::PageRoute;

const DEPENDENCIES_SNIPPET: &str = r#"# client/Cargo.toml
[dependencies]
leptos = "0.8"
leptos_router = "0.8"
leptos_meta = "0.8"

# Cargo.toml (server)
axum = "0.8"
leptos_axum = "0.8""#;

const RUNNING_SNIPPET: &str = "# Install the build tool
cargo install cargo-leptos

# Start the dev server with live reload
cargo leptos watch

# Build for production
cargo leptos build --release";

#[component]
pub fn AboutPage() -> impl IntoView {
    let navigate = use_navigate();
    let on_try = Callback::new(move |_| navigate(PageRoute::Interactivity.path(), NavigateOptions::default()));

    view! {
        <div>
            <h1 class="section-title">"About This Tutorial"</h1>

            <div class="cheat-sheet-grid">
                <Card title="Purpose">
                    <p>
                        "This tutorial is for " <strong>"absolute beginners"</strong>
                        " who want to learn Leptos. It focuses on:"
                    </p>
                    <ul class="card-list">
                        <li>"Small, readable components"</li>
                        <li>"Comments that explain the why of each pattern"</li>
                        <li>"Real examples you can run locally"</li>
                        <li>"Cheat sheet style reference"</li>
                    </ul>
                </Card>

                <Card title="What You'll Learn">
                    <ul class="card-list">
                        <li>"✅ What Leptos is and why it's useful"</li>
                        <li>"✅ How to create and use components"</li>
                        <li>"✅ Routing for multi-page apps"</li>
                        <li>"✅ State with signals"</li>
                        <li>"✅ Side effects with Effect"</li>
                        <li>"✅ Event handling and user interaction"</li>
                    </ul>
                </Card>

                <Card title="Technologies Used">
                    <pre class="code-block">{DEPENDENCIES_SNIPPET}</pre>
                    <p>"We keep it simple with a handful of crates!"</p>
                </Card>

                <Card title="Running Locally">
                    <pre class="code-block">{RUNNING_SNIPPET}</pre>
                    <p>
                        "The development server runs on " <code>"http://localhost:3000"</code>
                        " and reloads the page when you save."
                    </p>
                </Card>

                <Card title="Next Steps">
                    <p>"After this tutorial, consider:"</p>
                    <ul class="card-list">
                        <li>"Building a personal project"</li>
                        <li>"Server functions for typed client/server calls"</li>
                        <li>"Resources and Suspense for real data loading"</li>
                        <li>"Stores for larger shared state"</li>
                        <li>"Testing component logic with cargo test"</li>
                    </ul>
                </Card>

                <Card title="Resources">
                    <ul class="card-list">
                        <li><strong>"Official Book:"</strong> " book.leptos.dev"</li>
                        <li><strong>"API Docs:"</strong> " docs.rs/leptos"</li>
                        <li><strong>"Practice:"</strong> " Build small projects"</li>
                        <li><strong>"Community:"</strong> " The Leptos Discord and GitHub discussions"</li>
                    </ul>
                    <div class="card-actions">
                        <Button variant=ButtonVariant::Primary on_click=on_try>
                            "Try Interactive Examples →"
                        </Button>
                    </div>
                </Card>
            </div>
        </div>
    }
}
