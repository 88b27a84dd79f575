//! Owned SVG element trees.
use crate::constants::{SVG_NAMESPACE, XLINK_NAMESPACE};
use crate::{Error, Result};
use indexmap::IndexMap;
use std::fmt;

// ****************
// *** Svg Node ***
// ****************

#[derive(Clone, Debug, PartialEq)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
}

impl From<SvgElement> for SvgNode {
    fn from(element: SvgElement) -> Self {
        Self::Element(element)
    }
}

impl fmt::Display for SvgNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Text(text) => f.write_str(&escape(text, false)),
        }
    }
}

// *******************
// *** Svg Element ***
// *******************

/// An SVG element.
/// Attributes keep their insertion order so serialization is deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgElement {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<SvgNode>,
}

impl SvgElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Sets an attribute, replacing any previous value in place.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.shift_remove(key)
    }

    pub fn children(&self) -> &[SvgNode] {
        &self.children
    }

    pub fn push_child(&mut self, child: impl Into<SvgNode>) {
        self.children.push(child.into());
    }

    pub fn with_child(mut self, child: impl Into<SvgNode>) -> Self {
        self.push_child(child);
        self
    }

    /// Collects the text content of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in self.children.iter() {
            match child {
                SvgNode::Text(value) => text.push_str(value),
                SvgNode::Element(element) => text.push_str(&element.text_content()),
            }
        }

        text
    }

    /// Iterates over this element and all descendant elements, depth first.
    pub fn descendants(&self) -> Box<dyn Iterator<Item = &SvgElement> + '_> {
        let children = self.children.iter().filter_map(|child| match child {
            SvgNode::Element(element) => Some(element),
            SvgNode::Text(_) => None,
        });

        Box::new(std::iter::once(self).chain(children.flat_map(|child| child.descendants())))
    }
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in self.attributes.iter() {
            write!(f, " {}=\"{}\"", key, escape(value, true))?;
        }

        if self.children.is_empty() {
            return f.write_str("/>");
        }

        f.write_str(">")?;
        for child in self.children.iter() {
            fmt::Display::fmt(child, f)?;
        }

        write!(f, "</{}>", self.name)
    }
}

// ********************
// *** Svg Fragment ***
// ********************

/// Parsed inner content of an `<svg>` element.
///
/// The fragment is held as a single `<g>` group of the parsed nodes.
/// The source markup is kept unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgFragment {
    markup: String,
    group: SvgElement,
}

impl SvgFragment {
    /// Parses SVG markup, e.g. `<path d="..."/><circle r="2"/>`.
    /// Unprefixed elements are placed in the SVG namespace and `xlink:` is bound.
    /// `xlink:href` is kept as the SVG 2 `href`.
    /// Comments, processing instructions, and whitespace between elements are dropped.
    ///
    /// # Errors
    /// + [`Error::InvalidMarkup`] if the markup is not well-formed.
    #[tracing::instrument(level = "trace", skip(markup))]
    pub fn parse(markup: impl Into<String>) -> Result<Self> {
        let markup = markup.into();
        let document =
            format!(r#"<g xmlns="{SVG_NAMESPACE}" xmlns:xlink="{XLINK_NAMESPACE}">{markup}</g>"#);

        let document = roxmltree::Document::parse(&document)
            .map_err(|err| Error::invalid_markup(err.to_string()))?;

        let group = convert_element(document.root_element(), false);
        tracing::trace!(nodes = group.children().len());
        Ok(Self { markup, group })
    }

    /// Source markup.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// `<g>` element holding the parsed nodes.
    pub fn group(&self) -> &SvgElement {
        &self.group
    }

    pub fn nodes(&self) -> &[SvgNode] {
        self.group.children()
    }
}

// ***************
// *** helpers ***
// ***************

/// Converts a parsed element.
/// `xlink:href` becomes `href`, other `xlink:` attributes are dropped.
/// Whitespace only text is kept inside text elements and where `xml:space="preserve"` applies.
fn convert_element(node: roxmltree::Node, preserve_space: bool) -> SvgElement {
    let mut element = SvgElement::new(node.tag_name().name());
    for attribute in node.attributes() {
        let key = match attribute.namespace() {
            Some(XLINK_NAMESPACE) if attribute.name() == "href" => {
                if node.has_attribute("href") {
                    continue;
                }

                "href".to_string()
            }

            Some(XLINK_NAMESPACE) => {
                tracing::trace!(attribute = attribute.name(), "dropped xlink attribute");
                continue;
            }

            Some(roxmltree::NS_XML_URI) => format!("xml:{}", attribute.name()),
            _ => attribute.name().to_string(),
        };

        element.set_attribute(key, attribute.value());
    }

    let preserve_space = match node.attribute((roxmltree::NS_XML_URI, "space")) {
        Some(space) => space == "preserve",
        None => preserve_space,
    };

    let keep_whitespace =
        preserve_space || matches!(element.name(), "text" | "tspan" | "textPath");
    for child in node.children() {
        if child.is_element() {
            element.push_child(convert_element(child, preserve_space));
        } else if child.is_text() {
            let Some(text) = child.text() else {
                continue;
            };

            if keep_whitespace || !text.trim().is_empty() {
                element.push_child(SvgNode::Text(text.to_string()));
            }
        }
    }

    element
}

/// Escapes XML special characters.
/// Quotes are only escaped for attribute values.
fn escape(value: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
#[path = "./svg_test.rs"]
mod svg_test;
