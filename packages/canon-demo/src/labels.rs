//! Built-in gallery labels.

use std::collections::HashMap;

const LABELS: &str = include_str!("../assets/labels.json");

#[derive(Clone, Debug, Default)]
pub struct Labels {
    entries: HashMap<String, String>,
}

impl Labels {
    /// The table compiled into the binary.
    pub fn embedded() -> Self {
        Self::parse(LABELS)
    }

    fn parse(raw: &str) -> Self {
        let entries = serde_json::from_str::<HashMap<String, String>>(raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed label table: {}", e);
            HashMap::new()
        });
        Self { entries }
    }

    /// Label for `key`, or the key itself when missing.
    pub fn get(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Label for `key` with `{name}` placeholders filled in.
    pub fn format(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut value = self.get(key);
        for (param, replacement) in params {
            value = value.replace(&format!("{{{param}}}"), replacement);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_missing_keys() {
        let labels = Labels::embedded();
        assert_eq!(labels.get("button.login"), "Log In");
        assert_eq!(labels.get("button.cog"), "");
        assert_eq!(labels.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_format() {
        let labels = Labels::embedded();
        assert_eq!(
            labels.format("gallery.disabled", &[("label", "Save")]),
            "Save (disabled)"
        );
    }

    #[test]
    fn test_malformed_table_falls_back_to_keys() {
        let labels = Labels::parse("[1, 2]");
        assert_eq!(labels.get("gallery.title"), "gallery.title");
    }
}
