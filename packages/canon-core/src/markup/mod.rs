//! Markup tree produced by components.
//!
//! A tree is made of [`Element`]s and text [`Node`]s. Elements carry a tag,
//! ordered attributes, a class list and an optional click handler. The
//! query helpers mirror what a test harness needs from a rendered DOM:
//! text content, class lookups and tag lookups.

mod html;

pub use html::{to_html, to_html_pretty};

use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// Zero-argument click callback.
pub type ClickHandler = Rc<dyn Fn()>;

/// Ordered, de-duplicated list of CSS classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Create an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every whitespace-separated class in `classes`.
    ///
    /// Classes already present keep their first position.
    pub fn push(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            if !self.contains(class) {
                self.0.push(class.to_string());
            }
        }
    }

    /// Whether `class` is in the list.
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for class in iter {
            list.push(class);
        }
        list
    }
}

/// Attributes in insertion order. Setting an existing name replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` can be written as an HTML attribute name.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && !name.chars().any(|c| {
                c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
            })
    }

    /// Set `name` to `value`. Names that are not valid attribute names are
    /// dropped.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !Self::is_valid_name(&name) {
            tracing::debug!("Dropping invalid attribute name {:?}", name);
            return;
        }
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Get the value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

/// An element node.
#[derive(Clone, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(skip_serializing_if = "ClassList::is_empty")]
    pub classes: ClassList,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(skip)]
    pub on_click: Option<ClickHandler>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            classes: ClassList::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Add classes (whitespace-separated).
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.push(classes);
        self
    }

    /// Set an attribute. `class` is merged into the class list.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attach a click handler.
    pub fn on_click(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if name == "class" {
            self.classes.push(&value.into());
        } else {
            self.attributes.set(name, value);
        }
    }

    /// Get an attribute value. `class` returns `None`; use [`Element::has_class`].
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Concatenated text of every descendant text node.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("classes", &self.classes)
            .field("children", &self.children)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// A node of the markup tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Whether this node is an element carrying `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.as_element().is_some_and(|e| e.has_class(class))
    }

    /// Elements in document order, this node first.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        out
    }

    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            out.push(element);
            for child in &element.children {
                child.collect_elements(out);
            }
        }
    }

    /// First element (this node included) carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.elements().into_iter().find(|e| e.has_class(class))
    }

    /// Every element (this node included) carrying `class`.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// First element (this node included) with tag `tag`.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        self.elements().into_iter().find(|e| e.tag == tag)
    }

    /// Follow child indices from this node.
    pub fn node_at(&self, path: &[usize]) -> Option<&Node> {
        let mut node = self;
        for &index in path {
            node = node.as_element()?.children.get(index)?;
        }
        Some(node)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Element::new("div")
            .class("outer")
            .child(Element::new("span").class("icon"))
            .child(" hello ")
            .child(Element::new("b").child("world"))
            .into()
    }

    #[test]
    fn test_class_list_splits_and_dedups() {
        let mut classes = ClassList::new();
        classes.push("a b");
        classes.push("  b   c ");
        classes.push("");

        assert_eq!(classes.len(), 3);
        assert_eq!(classes.to_string(), "a b c");
    }

    #[test]
    fn test_attributes_replace_in_place() {
        let mut attrs = Attributes::new();
        attrs.set("id", "one");
        attrs.set("type", "button");
        attrs.set("id", "two");

        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, vec![("id", "two"), ("type", "button")]);
    }

    #[test]
    fn test_invalid_attribute_names_are_dropped() {
        let mut attrs = Attributes::new();
        attrs.set("x onclick=\"alert(1)\" y", "v");
        attrs.set("a>b", "v");
        attrs.set("", "v");
        attrs.set("data-id", "ok");
        attrs.set("aria-label", "ok");

        let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["data-id", "aria-label"]);
        assert!(!Attributes::is_valid_name("a/b"));
        assert!(!Attributes::is_valid_name("it's"));
        assert!(Attributes::is_valid_name("hx-on:click"));
    }

    #[test]
    fn test_class_attribute_merges_into_class_list() {
        let element = Element::new("p").class("x").attr("class", "y z");

        assert!(element.has_class("x"));
        assert!(element.has_class("z"));
        assert_eq!(element.attribute("class"), None);
    }

    #[test]
    fn test_text_content_concatenates() {
        assert_eq!(sample().text_content(), " hello world");
    }

    #[test]
    fn test_queries() {
        let tree = sample();

        assert_eq!(tree.find_by_class("outer").map(|e| e.tag.as_str()), Some("div"));
        assert_eq!(tree.find_by_class("icon").map(|e| e.tag.as_str()), Some("span"));
        assert!(tree.find_by_class("missing").is_none());
        assert_eq!(tree.find_by_tag("b").map(|e| e.text_content()), Some("world".to_string()));
        assert_eq!(tree.elements().len(), 3);
    }

    #[test]
    fn test_node_at() {
        let tree = sample();

        assert!(tree.node_at(&[]).is_some());
        assert_eq!(tree.node_at(&[2, 0]).map(|n| n.text_content()), Some("world".to_string()));
        assert!(tree.node_at(&[1, 0]).is_none());
        assert!(tree.node_at(&[7]).is_none());
    }

    #[test]
    fn test_serialize_skips_handler() {
        let tree: Node = Element::new("button")
            .on_click(Rc::new(|| {}))
            .child("Go")
            .into();

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["element"]["tag"], "button");
        assert_eq!(json["element"]["children"][0]["text"], "Go");
        assert!(json["element"].get("on_click").is_none());
    }
}
