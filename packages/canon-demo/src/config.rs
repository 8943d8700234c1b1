//! Gallery configuration
//!
//! The gallery is described by a TOML manifest:
//!
//! ```toml
//! title = "Canon Buttons"
//! output_dir = "dist"
//! banner = "canon-demo"
//!
//! [[button]]
//! id = "save"
//! label = "Save"
//! canon_style = "primary"
//!
//! [button.attributes]
//! type = "submit"
//! ```
//!
//! Without a manifest the built-in gallery shows every style.

use crate::error::{DemoError, Result};
use crate::labels::Labels;
use canon_core::{ButtonProps, CanonStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a manifest to use.
pub const CONFIG_ENV: &str = "CANON_DEMO_CONFIG";

/// Whole gallery manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Page title
    pub title: String,
    /// Line shown under the page heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Directory the build writes into
    pub output_dir: PathBuf,
    /// Name written in the minified banner
    pub banner: String,
    /// Buttons, in page order
    #[serde(rename = "button")]
    pub buttons: Vec<ButtonEntry>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Canon Buttons".to_string(),
            subtitle: None,
            output_dir: PathBuf::from("dist"),
            banner: "canon-demo".to_string(),
            buttons: Vec::new(),
        }
    }
}

/// One button of the gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ButtonEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub label: String,
    /// Raw style name, kept as written so lint can report unknown names
    #[serde(default)]
    pub canon_style: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

fn default_true() -> bool {
    true
}

impl ButtonEntry {
    pub fn new(canon_style: &str, label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            canon_style: canon_style.to_string(),
            enabled: true,
            hidden: false,
            class_name: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn style(&self) -> CanonStyle {
        CanonStyle::parse(&self.canon_style)
    }

    /// Props for rendering this entry.
    pub fn props(&self) -> ButtonProps {
        let mut props = ButtonProps::new()
            .canon_style(self.style())
            .enabled(self.enabled)
            .hidden(self.hidden);
        if let Some(id) = &self.id {
            props = props.id(id.clone());
        }
        if let Some(class_name) = &self.class_name {
            props = props.class_name(class_name.clone());
        }
        for (name, value) in &self.attributes {
            props = props.attribute(name.clone(), value.clone());
        }
        if !self.label.is_empty() {
            props = props.text(self.label.clone());
        }
        props
    }
}

impl DemoConfig {
    /// Gallery with one button per style plus a disabled primary button.
    pub fn builtin() -> Self {
        let labels = Labels::embedded();
        let mut buttons: Vec<ButtonEntry> = CanonStyle::ALL
            .iter()
            .map(|style| {
                let mut entry = ButtonEntry::new(style.as_str(), labels.get(&format!("button.{style}")));
                entry.id = Some(format!("demo-{style}"));
                entry
            })
            .collect();

        let label = labels.get("button.primary");
        let mut disabled = ButtonEntry::new(
            "primary",
            labels.format("gallery.disabled", &[("label", label.as_str())]),
        );
        disabled.id = Some("demo-primary-disabled".to_string());
        disabled.enabled = false;
        buttons.push(disabled);

        Self {
            title: labels.get("gallery.title"),
            subtitle: Some(labels.get("gallery.subtitle")),
            buttons,
            ..Default::default()
        }
    }

    /// Parse a manifest file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DemoError::ConfigNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| DemoError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the manifest named by `explicit`, the environment, or the
    /// platform config dir, falling back to the built-in gallery.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match resolve_path(explicit, env::var(CONFIG_ENV).ok(), platform_path()) {
            Some(path) => {
                tracing::info!("Loading gallery config from {}", path.display());
                Self::from_path(&path)
            }
            None => {
                tracing::debug!("No gallery config found, using built-in gallery");
                Ok(Self::builtin())
            }
        }
    }
}

/// `demo.toml` in the platform config directory.
pub fn platform_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "canon").map(|dirs| dirs.config_dir().join("demo.toml"))
}

/// Pick the manifest path. Explicit and environment paths are used as
/// given; the platform path only when the file exists.
fn resolve_path(
    explicit: Option<&Path>,
    from_env: Option<String>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = from_env {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    platform.filter(|path| path.exists())
}
