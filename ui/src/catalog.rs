//! Logo catalog.
use crate::types::{LogoDescriptor, LogoVariant};
use crate::{Error, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::rc::Rc;

static MINIO_MARKUP: &str = include_str!("../assets/logos/minio.svg");
static CUSTOM_MARKUP: &str = include_str!("../assets/logos/custom.svg");
static DEMO_MARKUP: &str = include_str!("../assets/logos/demo.svg");

// ****************
// *** Built-in ***
// ****************

struct BuiltinLogos {
    minio: LogoDescriptor,
    custom: LogoDescriptor,
    demo: LogoDescriptor,
}

static BUILTIN: Lazy<BuiltinLogos> = Lazy::new(|| BuiltinLogos {
    minio: builtin_descriptor(LogoVariant::Minio),
    custom: builtin_descriptor(LogoVariant::Custom),
    demo: builtin_descriptor(LogoVariant::Demo),
});

/// Source of a built-in logo.
///
/// # Returns
/// `(markup, view box, use theme color)`.
fn builtin_source(variant: LogoVariant) -> (&'static str, &'static str, bool) {
    match variant {
        LogoVariant::Minio => (MINIO_MARKUP, "0 0 162.612 24.465", true),
        LogoVariant::Custom => (CUSTOM_MARKUP, "0 0 375 112.5", false),
        LogoVariant::Demo => (DEMO_MARKUP, "0 0 65 65", false),
    }
}

fn builtin_descriptor(variant: LogoVariant) -> LogoDescriptor {
    let (markup, view_box, use_theme_color) = builtin_source(variant);
    tracing::debug!(%variant, "building logo");
    LogoDescriptor::from_markup(markup, view_box, use_theme_color)
        .expect("built-in logo should be well-formed")
}

/// Descriptor of a built-in logo.
/// Built on first use and shared afterwards.
pub fn builtin(variant: LogoVariant) -> &'static LogoDescriptor {
    let logos = Lazy::force(&BUILTIN);
    match variant {
        LogoVariant::Minio => &logos.minio,
        LogoVariant::Custom => &logos.custom,
        LogoVariant::Demo => &logos.demo,
    }
}

// ***************
// *** Catalog ***
// ***************

/// Logos addressed by key.
///
/// [`Catalog::default`] holds the built-in logos under their [`LogoVariant`] keys.
/// Further logos can be added with [`Catalog::insert`].
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    logos: IndexMap<String, Rc<LogoDescriptor>>,
}

impl Catalog {
    /// Creates a catalog without any logos.
    pub fn empty() -> Self {
        Self {
            logos: IndexMap::new(),
        }
    }

    /// Adds a logo, replacing any logo under the same key.
    ///
    /// # Returns
    /// The replaced logo.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        logo: impl Into<Rc<LogoDescriptor>>,
    ) -> Option<Rc<LogoDescriptor>> {
        let key = key.into();
        let replaced = self.logos.insert(key.clone(), logo.into());
        if replaced.is_some() {
            tracing::debug!(%key, "replaced logo");
        }

        replaced
    }

    pub fn with(mut self, key: impl Into<String>, logo: impl Into<Rc<LogoDescriptor>>) -> Self {
        self.insert(key, logo);
        self
    }

    /// Gets the logo for a key.
    ///
    /// # Errors
    /// + [`Error::UnknownVariant`] if the key is not in the catalog.
    pub fn get(&self, key: &str) -> Result<&LogoDescriptor> {
        self.get_shared(key).map(|logo| logo.as_ref())
    }

    /// Gets a shared handle to the logo for a key.
    ///
    /// # Errors
    /// + [`Error::UnknownVariant`] if the key is not in the catalog.
    pub fn get_shared(&self, key: &str) -> Result<&Rc<LogoDescriptor>> {
        self.logos.get(key).ok_or_else(|| {
            tracing::warn!(%key, "logo not found");
            Error::unknown_variant(key)
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.logos.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.logos.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.logos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        LogoVariant::ALL
            .into_iter()
            .fold(Self::empty(), |catalog, variant| {
                catalog.with(variant.as_str(), variant.descriptor().clone())
            })
    }
}

#[cfg(test)]
#[path = "./catalog_test.rs"]
mod catalog_test;
