//! Content card: optional title over arbitrary children.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use leptos::prelude::*;

const BASE_STYLE: &str = "background: var(--bg-secondary); border: 1px solid var(--border-color); border-radius: 8px; padding: 20px; transition: all 0.3s ease;";

/// Class list: `card` plus an optional caller class.
pub fn card_class(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|c| !c.is_empty()) {
        Some(extra) => format!("card {extra}"),
        None => "card".to_owned(),
    }
}

/// Inline style: the card base followed by caller overrides.
pub fn card_style(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|s| !s.is_empty()) {
        Some(extra) => format!("{BASE_STYLE} {extra}"),
        None => BASE_STYLE.to_owned(),
    }
}

/// A bordered panel wrapping `children`, headed by `title` when one is given.
#[component]
pub fn Card(
    children: Children,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let heading = title
        .filter(|t| !t.is_empty())
        .map(|t| view! { <h2 class="card__title">{t}</h2> });

    view! {
        <div class=card_class(class.as_deref()) style=card_style(style.as_deref())>
            {heading}
            {children()}
        </div>
    }
}
