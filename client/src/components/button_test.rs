use std::cell::Cell;

use super::*;

// =============================================================
// button_style
// =============================================================

#[test]
fn default_variant_is_primary() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn enabled_style_uses_pointer_and_full_opacity() {
    let style = button_style(ButtonVariant::Primary, false);
    assert!(style.contains("cursor: pointer;"));
    assert!(style.contains("opacity: 1;"));
    assert!(style.contains("background: var(--accent-color);"));
}

#[test]
fn disabled_style_dims_and_blocks_cursor() {
    let style = button_style(ButtonVariant::Secondary, true);
    assert!(style.contains("cursor: not-allowed;"));
    assert!(style.contains("opacity: 0.6;"));
    assert!(style.contains("background: var(--text-secondary);"));
}

#[test]
fn outline_border_follows_base_border() {
    let style = button_style(ButtonVariant::Outline, false);
    let base = style.find("border: none;").expect("base border");
    let variant = style.find("border: 1px solid var(--accent-color);").expect("outline border");
    assert!(variant > base, "variant border must override the base");
    assert!(style.contains("background: transparent;"));
}

#[test]
fn variants_produce_distinct_styles() {
    let styles: Vec<_> = ButtonVariant::ALL.iter().map(|v| button_style(*v, false)).collect();
    assert_ne!(styles[0], styles[1]);
    assert_ne!(styles[0], styles[2]);
    assert_ne!(styles[1], styles[2]);
}

// =============================================================
// forward_click
// =============================================================

#[test]
fn enabled_click_runs_handler_with_event() {
    let seen = Cell::new(0);
    let ran = forward_click(false, 7, Some(|ev: i32| seen.set(ev)));
    assert!(ran);
    assert_eq!(seen.get(), 7);
}

#[test]
fn disabled_click_never_runs_handler() {
    let seen = Cell::new(false);
    let ran = forward_click(true, (), Some(|()| seen.set(true)));
    assert!(!ran);
    assert!(!seen.get());
}

#[test]
fn click_without_handler_is_noop() {
    assert!(!forward_click(false, (), None::<fn(())>));
}
