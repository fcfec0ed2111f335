#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_year_is_plausible() {
    let year = current_year();
    assert!((2024..3000).contains(&year), "unexpected year {year}");
}

#[test]
fn copyright_line_embeds_year() {
    assert_eq!(copyright_line(2031), "© 2031 Leptos Primer. Built with ❤️ for learning Leptos.");
}

#[test]
fn set_title_and_notify_are_callable_without_a_browser() {
    set_title("Count: 3");
    notify("Primary button clicked!");
}
