//! Components page: reference cards plus a live demo of the `Button` variants.

#[cfg(test)]
#[path = "components_test.rs"]
mod components_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::util::document::notify;

/// Message reported when a demo button fires.
pub fn demo_click_message(variant: ButtonVariant) -> String {
    format!("{} button clicked!", variant.label())
}

#[component]
pub fn ComponentsPage() -> impl IntoView {
    let demo_buttons = ButtonVariant::ALL
        .into_iter()
        .map(|variant| {
            let on_click = Callback::new(move |_| notify(&demo_click_message(variant)));
            view! {
                <Button variant=variant on_click=on_click>
                    {format!("{} Button", variant.label())}
                </Button>
            }
        })
        .collect_view();
    let on_disabled = Callback::new(|_| notify("This won't fire"));

    view! {
        <div>
            <h1 class="section-title">"Leptos Components"</h1>

            <Card title="What are Components?" style="margin-bottom: 30px;">
                <p>
                    "Components are " <strong>"reusable pieces of UI"</strong>
                    ". Think of them like LEGO blocks: small pieces combine into complex interfaces."
                </p>
                <ul class="card-list">
                    <li><strong>"Encapsulation:"</strong> " Each component owns its signals and logic"</li>
                    <li><strong>"Reusability:"</strong> " Write once, use everywhere"</li>
                    <li><strong>"Composability:"</strong> " Nest small components inside larger ones"</li>
                    <li><strong>"Testability:"</strong> " Pull logic into plain functions and unit-test it"</li>
                </ul>
            </Card>

            <div class="cheat-sheet-grid">
                <Card title="The view! Macro">
                    <p><strong>"Templates are Rust:"</strong></p>
                    <ul class="card-list">
                        <li><code>"#[component]"</code> " turns a function into a component"</li>
                        <li><code>"view! { ... }"</code> " writes HTML-like markup in Rust"</li>
                        <li>"Text must be quoted: " <code>"\"Hello\""</code></li>
                        <li>"Closures like " <code>"move || count.get()"</code> " become reactive"</li>
                    </ul>
                    <p class="card-note">
                        "The macro expands at compile time, so a typo in a prop name is a build error, "
                        "not a blank page."
                    </p>
                </Card>

                <Card title="Typed Props">
                    <p><strong>"Why typed props?"</strong></p>
                    <ul class="card-list">
                        <li><strong>"Compile-time checks:"</strong> " Missing props fail the build"</li>
                        <li><strong>"Defaults:"</strong> <code>" #[prop(optional)]"</code> " and " <code>"#[prop(default = ...)]"</code></li>
                        <li><strong>"Conversions:"</strong> <code>" #[prop(into)]"</code> " accepts anything convertible"</li>
                        <li><strong>"Children:"</strong> " Pass markup into a component like any other prop"</li>
                    </ul>
                    <p class="card-note">
                        "Our " <code>"Button"</code> " takes a variant enum, so an invalid variant cannot be written."
                    </p>
                </Card>

                <Card title="Atomic Design Principles">
                    <p><strong>"Organize components by complexity:"</strong></p>
                    <ul class="card-list">
                        <li><strong>"Atoms:"</strong> " Basic building blocks (Button, Input, Label)"</li>
                        <li><strong>"Molecules:"</strong> " Simple combinations of atoms (SearchBox, FormField)"</li>
                        <li><strong>"Organisms:"</strong> " Complex UI sections (Header, ProductList, Footer)"</li>
                        <li><strong>"Templates:"</strong> " Page-level layouts without specific content"</li>
                        <li><strong>"Pages:"</strong> " Complete views with real data"</li>
                    </ul>
                    <p>
                        "Our " <strong>"Button"</strong> " and " <strong>"Card"</strong>
                        " components are atoms that the pages combine into larger structures."
                    </p>
                </Card>

                <Card title="Component Lifecycle">
                    <p><strong>"How components live and die:"</strong></p>
                    <ul class="card-list">
                        <li><strong>"Setup:"</strong> " The component function runs exactly once"</li>
                        <li><strong>"Updating:"</strong> " Only the reactive closures re-run when signals change"</li>
                        <li><strong>"Cleanup:"</strong> <code>" on_cleanup"</code> " runs when the component is removed"</li>
                    </ul>
                    <p>
                        "Unlike frameworks that re-render whole components, Leptos components never "
                        "re-run; effects and derived closures carry all the updates."
                    </p>
                </Card>

                <Card title="Reactive Primitives">
                    <p><strong>"The building blocks:"</strong></p>
                    <ul class="card-list">
                        <li><strong>"RwSignal:"</strong> " Readable and writable state"</li>
                        <li><strong>"Memo:"</strong> " Cached derived values"</li>
                        <li><strong>"Effect:"</strong> " Side effects that re-run when their inputs change"</li>
                        <li><strong>"Resource:"</strong> " Async data tied to reactive inputs"</li>
                        <li><strong>"Context:"</strong> <code>" provide_context"</code> " / " <code>"expect_context"</code></li>
                        <li><strong>"NodeRef:"</strong> " Direct access to a DOM element"</li>
                        <li><strong>"Callback:"</strong> " A cloneable event handler passed as a prop"</li>
                    </ul>
                </Card>

                <Card title="State Management Strategies">
                    <p><strong>"Pick the right scope:"</strong></p>
                    <ul class="card-list">
                        <li><strong>"Local signals:"</strong> " Component-specific data"</li>
                        <li><strong>"Lifting state up:"</strong> " Create the signal in a common parent"</li>
                        <li><strong>"Context:"</strong> " App-wide state without prop drilling"</li>
                        <li><strong>"Stores:"</strong> " Fine-grained updates inside large structs"</li>
                    </ul>
                    <p>
                        <strong>"Rule of thumb:"</strong>
                        " start local, lift when siblings need it, use context for theme and auth."
                    </p>
                </Card>

                <Card title="Live Component Demo">
                    <p>"Here are our actual Button components in action:"</p>
                    <div class="button-row">
                        {demo_buttons}
                        <Button disabled=true on_click=on_disabled>
                            "Disabled Button"
                        </Button>
                    </div>
                    <p class="card-note">
                        "These buttons demonstrate " <strong>"component composition"</strong>
                        ": one Button component takes different props (variant, disabled, on_click) "
                        "to create different behaviors with consistent styling."
                    </p>
                </Card>
            </div>
        </div>
    }
}

