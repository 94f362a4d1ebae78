use super::*;

#[test]
fn color_mode_defaults_to_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn never_mode_disables_colors() {
    let output = ErrorOutput::new(ColorMode::Never);
    let mut buf = Vec::new();
    output.write_warning(&mut buf, "release list missing", None, None);

    let text = String::from_utf8(buf).unwrap();
    assert!(!text.contains("\x1b["));
    assert!(text.contains("release list missing"));
}

#[test]
fn always_mode_enables_colors() {
    let output = ErrorOutput::new(ColorMode::Always);
    let mut buf = Vec::new();
    output.write_error(&mut buf, "Render", "page failed", None, None);

    assert!(String::from_utf8(buf).unwrap().contains("\x1b["));
}
