//! Floating light/dark toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the only persisted state in the app. The server always renders the
//! light theme; after hydration a mount effect adopts the stored flag, and
//! each click mirrors the new theme onto `<html data-theme>` and storage.

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::util::theme_storage;

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = RwSignal::new(Theme::default());

    // Tracks nothing, so it runs once after mount (and never during SSR).
    Effect::new(move || {
        if let Some(saved) = theme_storage::restore() {
            theme.set(saved);
        }
    });

    let on_toggle = move |_| theme.set(theme_storage::toggle(theme.get_untracked()));

    view! {
        <div class="theme-switcher">
            <button
                class="btn btn-secondary theme-switcher__button"
                title=move || theme.get().toggle_title()
                on:click=on_toggle
            >
                {move || theme.get().toggle_label()}
            </button>
        </div>
    }
}
