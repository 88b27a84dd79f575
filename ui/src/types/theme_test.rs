use super::*;
use crate::Error;

#[test]
fn from_json_should_work() {
    let theme = Theme::from_json(r##"{ "logoColor": "#123456" }"##).unwrap();
    assert_eq!(Some("#123456"), theme.logo_color());

    let theme = Theme::from_json(r##"{ "bgColor": "#fff", "fontColor": "#000" }"##).unwrap();
    assert_eq!(None, theme.logo_color(), "missing color should be unset");

    let res = Theme::from_json(r#"{ "logoColor": 12 }"#);
    assert!(matches!(res, Err(Error::Json(_))));
}

#[test]
fn serialize_should_skip_unset_color() {
    assert_eq!("{}", serde_json::to_string(&Theme::new()).unwrap());
    assert_eq!(
        r##"{"logoColor":"#000"}"##,
        serde_json::to_string(&Theme::with_logo_color("#000")).unwrap()
    );
}
