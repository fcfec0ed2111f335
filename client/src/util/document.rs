//! Small document/window helpers used by the pages.
//!
//! Each helper touches the browser only under `hydrate`; on the server it
//! falls back to something deterministic (or logs) so SSR never needs a DOM.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

/// Set the browser tab title.
pub fn set_title(title: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = title;
    }
}

/// Show `message` to the user: a browser alert when hydrated, a log line
/// otherwise.
pub fn notify(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    log::info!("{message}");
}

/// Current calendar year from the browser clock, or the system clock on the
/// server.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// Footer copyright line for `year`.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} Leptos Primer. Built with ❤️ for learning Leptos.")
}
