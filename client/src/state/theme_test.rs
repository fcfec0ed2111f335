use super::*;

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn parse_accepts_only_known_flags() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips_between_variants() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn toggle_label_names_the_next_theme() {
    assert_eq!(Theme::Light.toggle_label(), "🌙 Dark");
    assert_eq!(Theme::Dark.toggle_label(), "☀️ Light");
}

#[test]
fn toggle_title_names_the_next_theme() {
    assert_eq!(Theme::Light.toggle_title(), "Switch to dark theme");
    assert_eq!(Theme::Dark.toggle_title(), "Switch to light theme");
}

#[test]
fn serde_uses_the_wire_string() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(serde_json::from_str::<Theme>("\"light\"").unwrap(), Theme::Light);
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}
