//! Button component
//!
//! Resolves a style variant and the `enabled`/`hidden` flags into a single
//! `button` element. Rendering is total: every combination of props yields
//! markup, and unknown style names render a bare button.

mod style;

pub use style::CanonStyle;

use crate::markup::{Attributes, ClickHandler, Element, Node};
use std::fmt;
use std::rc::Rc;

/// Class carried by every rendered button.
pub const BASE_CLASS: &str = "rs-button";
/// Class added when the button is not enabled.
pub const DISABLED_CLASS: &str = "disabled";
/// Class added when the button is hidden.
pub const HIDDEN_CLASS: &str = "rs-hidden";

const ICON_CLASS: &str = "rs-cog";
const CARET_CLASS: &str = "rs-caret";

/// Button properties.
#[derive(Clone)]
pub struct ButtonProps {
    pub id: Option<String>,
    /// Caller classes, appended after the computed ones
    pub class_name: Option<String>,
    pub canon_style: CanonStyle,
    pub enabled: bool,
    pub hidden: bool,
    pub on_click: Option<ClickHandler>,
    pub children: Vec<Node>,
    /// Any other attribute, forwarded to the element unchanged
    pub attributes: Attributes,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            id: None,
            class_name: None,
            canon_style: CanonStyle::None,
            enabled: true,
            hidden: false,
            on_click: None,
            children: Vec::new(),
            attributes: Attributes::new(),
        }
    }
}

impl ButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the style variant. Accepts a [`CanonStyle`] or a style name.
    pub fn canon_style(mut self, style: impl Into<CanonStyle>) -> Self {
        self.canon_style = style.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Set the click callback.
    pub fn on_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Forward an attribute to the rendered element.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

impl fmt::Debug for ButtonProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonProps")
            .field("id", &self.id)
            .field("class_name", &self.class_name)
            .field("canon_style", &self.canon_style)
            .field("enabled", &self.enabled)
            .field("hidden", &self.hidden)
            .field("on_click", &self.on_click.is_some())
            .field("children", &self.children)
            .field("attributes", &self.attributes)
            .finish()
    }
}

/// The button component.
pub struct Button;

impl Button {
    /// Render `props` into a `button` element.
    pub fn render(props: ButtonProps) -> Element {
        let ButtonProps {
            id,
            class_name,
            canon_style,
            enabled,
            hidden,
            on_click,
            children,
            attributes,
        } = props;

        let mut button = Element::new("button").class(BASE_CLASS);
        if !enabled {
            button.classes.push(DISABLED_CLASS);
        }
        if hidden {
            button.classes.push(HIDDEN_CLASS);
        }
        for class in canon_style.classes() {
            button.classes.push(class);
        }

        // An explicit `id` prop wins over a forwarded `id` attribute.
        let has_id = id.is_some();
        if let Some(id) = id {
            button.set_attribute("id", id);
        }
        for (name, value) in attributes.iter() {
            if has_id && name == "id" {
                continue;
            }
            button.set_attribute(name, value);
        }
        if let Some(class_name) = class_name {
            button.classes.push(&class_name);
        }

        button.children = if canon_style.is_decorated() {
            decorate(children)
        } else {
            children
        };

        button.on_click(Rc::new(move || {
            if !enabled {
                return;
            }
            if let Some(callback) = &on_click {
                callback();
            }
        }))
    }

    /// Render a primary button with a text label.
    pub fn primary(label: impl Into<String>) -> Element {
        Self::render(ButtonProps::new().canon_style(CanonStyle::Primary).text(label))
    }

    /// Render a secondary button with a text label.
    pub fn secondary(label: impl Into<String>) -> Element {
        Self::render(ButtonProps::new().canon_style(CanonStyle::Secondary).text(label))
    }

    /// Render an action button with a text label.
    pub fn action(label: impl Into<String>) -> Element {
        Self::render(ButtonProps::new().canon_style(CanonStyle::Action).text(label))
    }
}

/// Surround children with the cog icon and caret. The separating spaces end
/// up in the text content as a single leading and trailing space.
fn decorate(children: Vec<Node>) -> Vec<Node> {
    let mut decorated = Vec::with_capacity(children.len() + 4);
    decorated.push(Element::new("span").class(ICON_CLASS).into());
    decorated.push(Node::text(" "));
    decorated.extend(children);
    decorated.push(Node::text(" "));
    decorated.push(Element::new("span").class(CARET_CLASS).into());
    decorated
}
