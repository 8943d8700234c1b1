//! Gallery page assembly.

use crate::config::DemoConfig;
use canon_core::{Button, Element, Node};

const STYLESHEET: &str = include_str!("../assets/canon.css");

/// Build the gallery page: one row per configured button.
pub fn page(config: &DemoConfig) -> Node {
    let rows = config.buttons.iter().map(|entry| {
        let label = if entry.canon_style.is_empty() {
            "none"
        } else {
            entry.canon_style.as_str()
        };
        Node::from(
            Element::new("div")
                .class("demo-row")
                .child(Element::new("span").class("demo-label").child(label))
                .child(Button::render(entry.props())),
        )
    });

    let mut body = Element::new("body").child(Element::new("h1").child(config.title.as_str()));
    if let Some(subtitle) = &config.subtitle {
        body = body.child(Element::new("p").class("subtitle").child(subtitle.as_str()));
    }

    Element::new("html")
        .attr("lang", "en")
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "utf-8"))
                .child(Element::new("title").child(config.title.as_str()))
                .child(Element::new("style").child(STYLESHEET)),
        )
        .child(body.child(Element::new("main").children(rows)))
        .into()
}
