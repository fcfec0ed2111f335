//! Interactivity page: four independent state demos.
//!
//! SYSTEM CONTEXT
//! ==============
//! Counter, name field, to-do list and mock fetch each own a separate signal
//! created here. None of them reads another, so they can be studied (and
//! broken) in isolation. The counter additionally drives the tab title
//! through an effect.

#[cfg(test)]
#[path = "interactivity_test.rs"]
mod interactivity_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::net::api;
use crate::net::types::Post;
use crate::state::counter::CounterState;
use crate::state::posts::PostsState;
use crate::state::todos::{Todo, TodoList};
use crate::util::document;

/// Greeting under the controlled name field.
pub fn greeting(name: &str) -> String {
    if name.is_empty() { "Type something above...".to_owned() } else { format!("Hello, {name}!") }
}

/// Mark the fetch as started. `false` means one is already in flight.
pub(crate) fn start_fetch(posts: RwSignal<PostsState>) -> bool {
    posts.try_update(PostsState::begin).unwrap_or(false)
}

pub(crate) fn settle_fetch(posts: RwSignal<PostsState>, result: Result<Vec<Post>, String>) {
    posts.update(|p| p.finish(result));
}

#[component]
pub fn InteractivityPage() -> impl IntoView {
    let counter = RwSignal::new(CounterState::default());
    let name = RwSignal::new(String::new());
    let todos = RwSignal::new(TodoList::default());
    let posts = RwSignal::new(PostsState::default());

    Effect::new(move || log::info!("Interactivity page mounted"));
    Effect::new(move || document::set_title(&counter.get().label()));

    let on_increment = Callback::new(move |_| counter.update(CounterState::increment));
    let on_decrement = Callback::new(move |_| counter.update(CounterState::decrement));
    let on_reset = Callback::new(move |_| counter.update(CounterState::reset));

    let add_todo = move || {
        todos.update(|t| {
            t.add();
        });
    };
    let on_add_todo = Callback::new(move |_| add_todo());

    let on_fetch = Callback::new(move |_| {
        if !start_fetch(posts) {
            return;
        }
        leptos::task::spawn_local(async move {
            settle_fetch(posts, api::fetch_sample_posts().await);
        });
    });
    let fetch_disabled = Signal::derive(move || posts.get().loading);

    view! {
        <div>
            <h1 class="section-title">"Interactive Leptos Examples"</h1>

            <div class="cheat-sheet-grid">
                <Card title="Signals - Counter">
                    <p>"Signals let components remember values between updates."</p>
                    <p class="card-note">
                        <strong>"Signals are reactive"</strong>
                        " - when one changes, every closure that read it re-runs and the matching "
                        "text node updates. Nothing else on the page is touched."
                    </p>
                    <div class="counter">
                        <h3>{move || counter.get().label()}</h3>
                        <div class="button-row button-row--center">
                            <Button variant=ButtonVariant::Primary on_click=on_increment>"+1"</Button>
                            <Button variant=ButtonVariant::Primary on_click=on_decrement>"-1"</Button>
                            <Button variant=ButtonVariant::Secondary on_click=on_reset>"Reset"</Button>
                        </div>
                    </div>
                </Card>

                <Card title="Signals - Form Input">
                    <p>"Controlled inputs keep the field value in a signal."</p>
                    <p class="card-note">
                        <strong>"Controlled inputs"</strong>
                        " read their value from state through " <code>"prop:value"</code>
                        " and write every keystroke back with " <code>"on:input"</code>
                        ", which makes validation and formatting straightforward."
                    </p>
                    <div class="demo-block">
                        <input
                            class="text-input"
                            type="text"
                            placeholder="Enter your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <p class="greeting">{move || greeting(&name.get())}</p>
                    </div>
                </Card>

                <Card title="Effects - Side Effects">
                    <p>"Effects run code after rendering (timers, storage, document updates)."</p>
                    <p class="card-note">
                        <strong>"Dependency tracking"</strong>
                        " is automatic: an effect re-runs when any signal it read changes. An effect "
                        "that reads nothing runs once after mount."
                    </p>
                    <div class="demo-block">
                        <p>"Check your browser tab title - it updates with the counter!"</p>
                        <Button variant=ButtonVariant::Primary disabled=fetch_disabled on_click=on_fetch>
                            {move || posts.get().button_label()}
                        </Button>
                    </div>
                </Card>

                <Card title="Complex State - Todo List">
                    <p>"Managing a list of records in one signal."</p>
                    <p class="card-note">
                        <strong>"Update in place"</strong>
                        " with " <code>"signal.update(|list| ...)"</code>
                        ": the closure gets " <code>"&mut"</code>
                        " access and subscribers are notified once it returns."
                    </p>
                    <div class="demo-block">
                        <div class="todo-form">
                            <input
                                class="text-input todo-form__input"
                                type="text"
                                placeholder="Add a todo..."
                                prop:value=move || todos.get().draft
                                on:input=move |ev| todos.update(|t| t.set_draft(event_target_value(&ev)))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        add_todo();
                                    }
                                }
                            />
                            <Button variant=ButtonVariant::Primary on_click=on_add_todo>"Add"</Button>
                        </div>
                        <ul class="todo-list">
                            <For
                                each=move || todos.get().items
                                key=|todo| (todo.id, todo.completed)
                                children=move |todo: Todo| view! { <TodoRow todo=todo todos=todos/> }
                            />
                        </ul>
                        <Show when=move || todos.get().is_empty()>
                            <p class="todo-list__empty">"No todos yet. Add one above!"</p>
                        </Show>
                    </div>
                </Card>

                <Show when=move || posts.get().has_posts()>
                    <Card title="Fetched Data">
                        <p>"Loading and displaying data from an async task."</p>
                        <div class="demo-block">
                            <For
                                each=move || posts.get().posts
                                key=|post| post.id
                                children=|post| {
                                    view! {
                                        <div class="post">
                                            <h3 class="post__title">{post.title}</h3>
                                            <p class="post__content">{post.content}</p>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Card>
                </Show>

                <Card title="Key Leptos Concepts">
                    <ul class="card-list">
                        <li><strong>"Components run once:"</strong> " Reactive closures do the updating"</li>
                        <li><strong>"RwSignal:"</strong> " State that notifies its readers"</li>
                        <li><strong>"Effect:"</strong> " Side effects (timers, storage, subscriptions)"</li>
                        <li><strong>"Tracking:"</strong> " Effects subscribe to whatever they read"</li>
                        <li><strong>"Event handlers:"</strong> <code>" on:click"</code> " and friends"</li>
                        <li><strong>"Controlled inputs:"</strong> " Values driven by signals"</li>
                    </ul>
                    <p class="card-note">
                        <strong>"Performance:"</strong>
                        " use " <code>"Memo"</code> " for expensive derived values and "
                        <code>"get_untracked"</code> " inside handlers that should not subscribe."
                    </p>
                </Card>

                <Card title="More Patterns">
                    <p><strong>"Error boundaries:"</strong></p>
                    <p class="card-note">
                        <code>"<ErrorBoundary/>"</code>
                        " renders a fallback when a child view yields an " <code>"Err"</code> "."
                    </p>
                    <p><strong>"Suspense:"</strong></p>
                    <p class="card-note">
                        <code>"<Suspense/>"</code> " shows a placeholder while resources load."
                    </p>
                    <p><strong>"Reusable logic:"</strong></p>
                    <p class="card-note">
                        "Plain functions that create and return signals play the role of custom hooks."
                    </p>
                    <p><strong>"Compound components:"</strong></p>
                    <p>"Components that share state through context, like a tab list and its panels."</p>
                </Card>
            </div>
        </div>
    }
}

/// One row of the to-do list.
#[component]
fn TodoRow(todo: Todo, todos: RwSignal<TodoList>) -> impl IntoView {
    let id = todo.id;
    view! {
        <li class="todo-item">
            <input
                type="checkbox"
                prop:checked=todo.completed
                on:change=move |_| todos.update(|t| t.toggle(id))
            />
            <span class="todo-item__text" class:todo-item__text--done=todo.completed>
                {todo.text}
            </span>
            <button
                class="todo-item__delete"
                title="Delete todo"
                aria-label="Delete todo"
                on:click=move |_| todos.update(|t| t.remove(id))
            >
                "×"
            </button>
        </li>
    }
}
