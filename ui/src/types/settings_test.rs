use super::*;
use crate::Error;

#[test]
fn from_json_should_work() {
    let settings = LogoSettings::from_json(
        r##"{ "variant": "minio", "width": 120, "theme": { "logoColor": "#081C42" } }"##,
    )
    .unwrap();

    assert_eq!(LogoVariant::Minio, settings.variant);
    assert_eq!(Some(LogoWidth::Number(120.0)), settings.width);
    assert_eq!(Some(Theme::with_logo_color("#081C42")), settings.theme);
}

#[test]
fn from_json_should_default_missing_values() {
    let settings = LogoSettings::from_json("{}").unwrap();
    assert_eq!(LogoSettings::default(), settings);
    assert_eq!(LogoVariant::Custom, settings.variant);
}

#[test]
fn from_json_should_reject_unknown_variant() {
    let res = LogoSettings::from_json(r#"{ "variant": "acme" }"#);
    assert!(matches!(res, Err(Error::Json(_))));
}

#[test]
fn render_should_use_settings() {
    let settings = LogoSettings {
        variant: LogoVariant::Minio,
        width: Some("8rem".into()),
        theme: Some(Theme::with_logo_color("#081C42")),
    };

    let root = settings.render();
    assert_eq!(Some("0 0 162.612 24.465"), root.attribute("viewBox"));
    assert_eq!(Some("8rem"), root.attribute("width"));
    assert_eq!(Some("#081C42"), root.attribute("fill"));
}
