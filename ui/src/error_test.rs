use super::*;

#[test]
fn error_from_serde_error_should_work() {
    let o_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let c_err: Error = o_err.into();
    assert!(matches!(c_err, Error::Json(_)));
}

#[test]
fn unknown_variant_should_name_key() {
    let err = Error::unknown_variant("acme");
    assert!(matches!(&err, Error::UnknownVariant(key) if key == "acme"));
    assert_eq!("logo variant `acme` does not exist", err.to_string());
}
