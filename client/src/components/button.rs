//! Reusable button with visual variants and a disabled state.
//!
//! DESIGN
//! ======
//! Styling is computed from props into an inline style string so the three
//! variants stay consistent wherever the button is used. The click guard
//! lives here too: a disabled button never reaches its handler, even if the
//! browser delivers the event.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::ev::MouseEvent;
use leptos::prelude::*;

const BASE_STYLE: &str = "padding: 10px 20px; font-size: 16px; border: none; border-radius: 5px; transition: all 0.3s ease;";

/// Visual variant of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 3] = [Self::Primary, Self::Secondary, Self::Outline];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Outline => "Outline",
        }
    }

    const fn style(self) -> &'static str {
        match self {
            Self::Primary => "background: var(--accent-color); color: white;",
            Self::Secondary => "background: var(--text-secondary); color: white;",
            Self::Outline => {
                "background: transparent; color: var(--accent-color); border: 1px solid var(--accent-color);"
            }
        }
    }
}

/// Inline style for a button: base, then disabled affordances, then variant.
///
/// The variant comes last so its `border` overrides the base `border: none`.
pub fn button_style(variant: ButtonVariant, disabled: bool) -> String {
    let (cursor, opacity) = if disabled { ("not-allowed", "0.6") } else { ("pointer", "1") };
    format!("{BASE_STYLE} cursor: {cursor}; opacity: {opacity}; {}", variant.style())
}

/// Run `handler` with `ev` unless the button is disabled.
///
/// Returns whether the handler ran.
pub(crate) fn forward_click<E>(disabled: bool, ev: E, handler: Option<impl FnOnce(E)>) -> bool {
    if disabled {
        return false;
    }
    match handler {
        Some(handler) => {
            handler(ev);
            true
        }
        None => false,
    }
}

/// Styled `<button>` that forwards clicks to `on_click` unless disabled.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(into, default = false.into())] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let on_click_guarded = move |ev: MouseEvent| {
        forward_click(disabled.get_untracked(), ev, on_click.map(|cb| move |ev| cb.run(ev)));
    };

    view! {
        <button
            class="btn"
            style=move || button_style(variant, disabled.get())
            disabled=move || disabled.get()
            title=title
            on:click=on_click_guarded
        >
            {children()}
        </button>
    }
}
