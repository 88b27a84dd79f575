//! Logo with an optional theme fill.
use crate::render::{render, render_descriptor, RenderOptions};
use crate::types::{LogoDescriptor, LogoVariant, LogoWidth, SvgElement, SvgNode, Theme};
use indexmap::IndexMap;
use std::rc::Rc;
use yew::prelude::*;
use yew::virtual_dom::{VNode, VTag, VText};

#[derive(Properties, PartialEq)]
pub struct ThemedLogoProps {
    /// Width of the logo.
    /// Unset by default so the container determines the size.
    #[prop_or_default]
    pub width: Option<LogoWidth>,

    /// Callback to execute when the logo is clicked.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,

    /// Built-in logo to display.
    #[prop_or_default]
    pub variant: LogoVariant,

    /// Logo to display instead of `variant`.
    #[prop_or_default]
    pub logo: Option<Rc<LogoDescriptor>>,

    /// Theme used for theme colored logos.
    /// If not set, the nearest `Theme` context is used.
    #[prop_or_default]
    pub theme: Option<Theme>,
}

#[tracing::instrument(skip(props))]
#[function_component(ThemedLogo)]
pub fn themed_logo(props: &ThemedLogoProps) -> Html {
    let context_theme = use_context::<Theme>();
    let options = RenderOptions {
        width: props.width.clone(),
        theme: props.theme.clone().or(context_theme),
    };

    let root = match props.logo.as_ref() {
        Some(logo) => render_descriptor(logo, &options),
        None => render(props.variant, &options),
    };

    let view_box = attribute_value(&root, "viewBox");
    let width = attribute_value(&root, "width");
    let fill = attribute_value(&root, "fill");

    html! {
        <svg
            viewBox={view_box}
            width={width}
            fill={fill}
            onclick={props.onclick.clone()}>

            { for root.children().iter().map(svg_html) }
        </svg>
    }
}

// ***************
// *** helpers ***
// ***************

fn attribute_value(element: &SvgElement, key: &str) -> Option<AttrValue> {
    element
        .attribute(key)
        .map(|value| AttrValue::from(value.to_string()))
}

/// Converts an SVG node into a virtual DOM node.
fn svg_html(node: &SvgNode) -> Html {
    match node {
        SvgNode::Text(text) => VNode::VText(VText::new(text.clone())),
        SvgNode::Element(element) => {
            let mut tag = VTag::new(element.name().to_string());
            let attributes = element
                .attributes()
                .map(|(key, value)| {
                    (
                        AttrValue::from(key.to_string()),
                        AttrValue::from(value.to_string()),
                    )
                })
                .collect::<IndexMap<_, _>>();

            tag.set_attributes(attributes);
            for child in element.children() {
                tag.add_child(svg_html(child));
            }

            tag.into()
        }
    }
}
