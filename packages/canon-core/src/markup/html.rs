//! HTML serialization.

use super::{Element, Node};

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Tags whose content is always written inline by the pretty writer.
const INLINE_TAGS: &[&str] = &[
    "a", "b", "button", "em", "i", "label", "option", "small", "span", "strong", "textarea",
    "title",
];

/// Serialize a tree to compact HTML.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_compact(node, &mut out);
    out
}

/// Serialize a tree to indented HTML.
///
/// Only block elements whose children are all elements get line breaks.
/// Mixed content and inline tags are written compactly, so text content is
/// the same as in [`to_html`].
pub fn to_html_pretty(node: &Node) -> String {
    let mut out = String::new();
    write_pretty(node, 0, &mut out);
    out
}

fn write_compact(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_text(text, out),
        Node::Element(element) => {
            open_tag(element, out);
            if is_void(element) {
                return;
            }
            for child in &element.children {
                write_compact(child, out);
            }
            close_tag(element, out);
        }
    }
}

fn write_pretty(node: &Node, depth: usize, out: &mut String) {
    indent(depth, out);
    match node {
        Node::Element(element) if block_layout(element) => {
            open_tag(element, out);
            out.push('\n');
            for child in &element.children {
                write_pretty(child, depth + 1, out);
            }
            indent(depth, out);
            close_tag(element, out);
        }
        _ => write_compact(node, out),
    }
    out.push('\n');
}

fn block_layout(element: &Element) -> bool {
    !is_void(element)
        && !INLINE_TAGS.contains(&element.tag.as_str())
        && !element.children.is_empty()
        && element
            .children
            .iter()
            .all(|child| matches!(child, Node::Element(_)))
}

fn is_void(element: &Element) -> bool {
    VOID_TAGS.contains(&element.tag.as_str())
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn open_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in element.attributes.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_attribute(value, out);
        out.push('"');
    }
    if !element.classes.is_empty() {
        out.push_str(" class=\"");
        escape_attribute(&element.classes.to_string(), out);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(element: &Element, out: &mut String) {
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_html() {
        let node: Node = Element::new("button")
            .attr("id", "go")
            .class("rs-btn rs-btn-primary")
            .child("Go")
            .into();

        assert_eq!(
            to_html(&node),
            r#"<button id="go" class="rs-btn rs-btn-primary">Go</button>"#
        );
    }

    #[test]
    fn test_escaping() {
        let node: Node = Element::new("p")
            .attr("title", r#"a "quoted" <value>"#)
            .child("1 < 2 & 3 > 2")
            .into();

        assert_eq!(
            to_html(&node),
            r#"<p title="a &quot;quoted&quot; &lt;value&gt;">1 &lt; 2 &amp; 3 &gt; 2</p>"#
        );
    }

    #[test]
    fn test_void_tags_have_no_close() {
        let node: Node = Element::new("meta").attr("charset", "utf-8").into();
        assert_eq!(to_html(&node), r#"<meta charset="utf-8">"#);
    }

    #[test]
    fn test_pretty_keeps_inline_tags_compact() {
        let node: Node = Element::new("main")
            .child(
                Element::new("button")
                    .child(Element::new("em").child("Menu"))
                    .child(Element::new("span").class("rs-caret")),
            )
            .into();

        let pretty = to_html_pretty(&node);
        assert_eq!(
            pretty,
            "<main>\n  <button><em>Menu</em><span class=\"rs-caret\"></span></button>\n</main>\n"
        );
        assert!(pretty.contains(&to_html(node.node_at(&[0]).unwrap())));
    }

    #[test]
    fn test_pretty_keeps_mixed_content_inline() {
        let node: Node = Element::new("div")
            .child(
                Element::new("button")
                    .child(Element::new("span").class("rs-cog"))
                    .child(" Text ")
                    .child(Element::new("span").class("rs-caret")),
            )
            .into();

        let expected = "<div>\n  <button><span class=\"rs-cog\"></span> Text <span class=\"rs-caret\"></span></button>\n</div>\n";
        assert_eq!(to_html_pretty(&node), expected);
    }
}
