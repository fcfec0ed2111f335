//! Theme flag persistence and document mirroring.
//!
//! Reads and writes the `"theme"` key in `localStorage` and mirrors the
//! active theme as a `data-theme` attribute on the `<html>` element, which
//! the stylesheet keys its colour variables on. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and native test
//! paths no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::Theme;

/// `localStorage` key holding the theme flag.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on the document element carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Read the stored theme, if a recognised one was saved.
pub fn read_saved() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        let theme = Theme::parse(&raw);
        if theme.is_none() {
            log::warn!("ignoring unrecognised stored theme {raw:?}");
        }
        theme
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Persist `theme` under [`STORAGE_KEY`].
pub fn save(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Adopt the saved theme on mount. Returns it so the caller can sync state.
///
/// Nothing is applied when no recognised theme was saved.
pub fn restore() -> Option<Theme> {
    let saved = read_saved()?;
    apply(saved);
    Some(saved)
}

/// Switch away from `current`, mirror and persist the result, and return it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    save(next);
    log::debug!("theme switched to {}", next.as_str());
    next
}
