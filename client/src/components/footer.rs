//! Site footer with the copyright line.

use leptos::prelude::*;

use crate::util::document::{copyright_line, current_year};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <p class="site-footer__text">{copyright_line(current_year())}</p>
                <p class="site-footer__small">"Made for beginners by beginners. Keep it simple!"</p>
            </div>
        </footer>
    }
}
