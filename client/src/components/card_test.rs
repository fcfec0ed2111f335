use super::*;

#[test]
fn card_class_defaults_to_card() {
    assert_eq!(card_class(None), "card");
    assert_eq!(card_class(Some("")), "card");
    assert_eq!(card_class(Some("   ")), "card");
}

#[test]
fn card_class_appends_extra_class() {
    assert_eq!(card_class(Some("card--wide")), "card card--wide");
    assert_eq!(card_class(Some(" intro ")), "card intro");
}

#[test]
fn card_style_defaults_to_base() {
    assert_eq!(card_style(None), BASE_STYLE);
}

#[test]
fn card_style_appends_overrides_after_base() {
    let style = card_style(Some("margin-bottom: 30px;"));
    assert!(style.starts_with(BASE_STYLE));
    assert!(style.ends_with("margin-bottom: 30px;"));
}
