use super::*;
use crate::types::ColorMode;

#[test]
fn builtin_logos_should_build() {
    for variant in LogoVariant::ALL {
        let logo = builtin(variant);
        assert!(
            !logo.content().nodes().is_empty(),
            "`{variant}` should have content"
        );
    }
}

#[test]
fn builtin_logos_should_be_shared() {
    for variant in LogoVariant::ALL {
        assert!(std::ptr::eq(builtin(variant), variant.descriptor()));
        assert!(std::ptr::eq(builtin(variant), builtin(variant)));
    }
}

#[test]
fn builtin_logos_should_match_sources() {
    let minio = builtin(LogoVariant::Minio);
    assert_eq!("0 0 162.612 24.465", minio.view_box().as_str());
    assert_eq!(ColorMode::ThemeColored, minio.color_mode());

    let custom = builtin(LogoVariant::Custom);
    assert_eq!("0 0 375 112.5", custom.view_box().as_str());
    assert_eq!(ColorMode::Preserved, custom.color_mode());

    let demo = builtin(LogoVariant::Demo);
    assert_eq!("0 0 65 65", demo.view_box().as_str());
    assert_eq!(ColorMode::Preserved, demo.color_mode());
    assert_eq!(DEMO_MARKUP, demo.content().markup());
    assert_eq!("DEMO", demo.content().group().text_content());
}

#[test]
fn theme_colored_logos_should_not_set_fills() {
    for variant in LogoVariant::ALL {
        let logo = builtin(variant);
        if !logo.use_theme_color() {
            continue;
        }

        let filled = logo
            .content()
            .group()
            .descendants()
            .filter(|element| element.attribute("fill").is_some())
            .count();

        assert_eq!(0, filled, "`{variant}` should take its fill from the theme");
    }
}

#[test]
fn default_catalog_should_hold_builtin_logos() {
    let catalog = Catalog::default();
    assert_eq!(
        vec!["minio", "custom", "demo"],
        catalog.keys().collect::<Vec<_>>()
    );

    for variant in LogoVariant::ALL {
        assert_eq!(variant.descriptor(), catalog.get(variant.as_str()).unwrap());
    }
}

#[test]
fn get_should_fail_for_unknown_key() {
    let catalog = Catalog::default();
    let res = catalog.get("acme");
    assert!(matches!(res, Err(Error::UnknownVariant(ref key)) if key == "acme"));

    let catalog = Catalog::empty();
    assert!(catalog.is_empty());
    assert!(matches!(catalog.get("custom"), Err(Error::UnknownVariant(_))));
}

#[test]
fn insert_should_work() {
    let logo = LogoDescriptor::from_markup(
        r##"<path fill="#FF5733" d="M10,10 L50,10 L50,50 L10,50 Z"/>"##,
        "0 0 60 60",
        false,
    )
    .unwrap();

    let mut catalog = Catalog::default();
    assert!(catalog.insert("mycompany", logo.clone()).is_none());
    assert!(catalog.contains("mycompany"));
    assert_eq!(4, catalog.len());
    assert_eq!(&logo, catalog.get("mycompany").unwrap());

    let replaced = catalog.insert("demo", logo.clone());
    assert_eq!(
        Some(LogoVariant::Demo.descriptor()),
        replaced.as_deref(),
        "previous logo should be returned"
    );
    assert_eq!(&logo, catalog.get("demo").unwrap());
    assert_eq!(4, catalog.len());
}
