//! Style variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Style variant selecting the class family and decoration of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum CanonStyle {
    /// Dropdown-style action button with a cog icon and a caret
    Action,
    Primary,
    Secondary,
    Link,
    Login,
    /// Icon-only cog button
    Cog,
    /// Icon-only delete button
    Delete,
    /// Icon-only edit button
    Edit,
    /// Icon-only plus button
    Plus,
    /// Bare button, no style family
    #[default]
    None,
}

impl CanonStyle {
    /// Every recognized variant, bare button excluded.
    pub const ALL: [CanonStyle; 9] = [
        CanonStyle::Action,
        CanonStyle::Primary,
        CanonStyle::Secondary,
        CanonStyle::Link,
        CanonStyle::Login,
        CanonStyle::Cog,
        CanonStyle::Delete,
        CanonStyle::Edit,
        CanonStyle::Plus,
    ];

    /// Resolve a style name. Unrecognized names resolve to [`CanonStyle::None`].
    pub fn parse(name: &str) -> Self {
        match name {
            "action" => CanonStyle::Action,
            "primary" => CanonStyle::Primary,
            "secondary" => CanonStyle::Secondary,
            "link" => CanonStyle::Link,
            "login" => CanonStyle::Login,
            "cog" => CanonStyle::Cog,
            "delete" => CanonStyle::Delete,
            "edit" => CanonStyle::Edit,
            "plus" => CanonStyle::Plus,
            _ => CanonStyle::None,
        }
    }

    /// Whether `name` names a variant. `"none"` counts as recognized.
    pub fn is_recognized(name: &str) -> bool {
        name == "none" || CanonStyle::parse(name) != CanonStyle::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CanonStyle::Action => "action",
            CanonStyle::Primary => "primary",
            CanonStyle::Secondary => "secondary",
            CanonStyle::Link => "link",
            CanonStyle::Login => "login",
            CanonStyle::Cog => "cog",
            CanonStyle::Delete => "delete",
            CanonStyle::Edit => "edit",
            CanonStyle::Plus => "plus",
            CanonStyle::None => "none",
        }
    }

    /// Style-family classes added to the root element.
    ///
    /// `secondary` carries only the family class.
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            CanonStyle::Action => &["rs-btn", "rs-btn-action"],
            CanonStyle::Primary => &["rs-btn", "rs-btn-primary"],
            CanonStyle::Secondary => &["rs-btn"],
            CanonStyle::Link => &["rs-btn", "rs-btn-link"],
            CanonStyle::Login => &["rs-btn", "rs-btn-login"],
            CanonStyle::Cog => &["rs-cog"],
            CanonStyle::Delete => &["rs-delete"],
            CanonStyle::Edit => &["rs-edit"],
            CanonStyle::Plus => &["rs-plus"],
            CanonStyle::None => &[],
        }
    }

    /// Icon-only variants render no style family.
    pub fn is_icon(self) -> bool {
        matches!(
            self,
            CanonStyle::Cog | CanonStyle::Delete | CanonStyle::Edit | CanonStyle::Plus
        )
    }

    /// Whether children are wrapped with the cog icon and caret.
    pub fn is_decorated(self) -> bool {
        self == CanonStyle::Action
    }
}

impl fmt::Display for CanonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CanonStyle {
    fn from(name: &str) -> Self {
        CanonStyle::parse(name)
    }
}

impl From<String> for CanonStyle {
    fn from(name: String) -> Self {
        CanonStyle::parse(&name)
    }
}

impl From<CanonStyle> for &'static str {
    fn from(style: CanonStyle) -> Self {
        style.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for style in CanonStyle::ALL {
            assert_eq!(CanonStyle::parse(style.as_str()), style);
        }
    }

    #[test]
    fn test_unknown_names_fall_back() {
        assert_eq!(CanonStyle::parse("tertiary"), CanonStyle::None);
        assert_eq!(CanonStyle::parse(""), CanonStyle::None);
        assert_eq!(CanonStyle::parse("Primary"), CanonStyle::None);
        assert!(!CanonStyle::is_recognized("tertiary"));
        assert!(CanonStyle::is_recognized("none"));
    }

    #[test]
    fn test_icon_styles_have_no_family_class() {
        for style in CanonStyle::ALL.into_iter().filter(|s| s.is_icon()) {
            assert_eq!(style.classes().len(), 1);
            assert!(!style.classes().contains(&"rs-btn"));
        }
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&CanonStyle::Login).unwrap();
        assert_eq!(json, "\"login\"");

        let style: CanonStyle = serde_json::from_str("\"mystery\"").unwrap();
        assert_eq!(style, CanonStyle::None);
    }
}
