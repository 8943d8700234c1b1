//! Gallery manifest checks.
//!
//! Duplicate ids are errors. Unknown style names, empty labels on text
//! buttons and attribute keys that cannot be written as HTML are warnings:
//! the button still renders, just not as intended.

use crate::config::DemoConfig;
use canon_core::{Attributes, CanonStyle};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Position of the button in the manifest
    pub index: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    pub findings: Vec<Finding>,
}

impl LintReport {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    fn push(&mut self, severity: Severity, index: usize, message: String) {
        self.findings.push(Finding {
            severity,
            index,
            message,
        });
    }
}

/// Check every button of the manifest.
pub fn lint(config: &DemoConfig) -> LintReport {
    let mut report = LintReport::default();
    let mut seen_ids = HashSet::new();

    for (index, entry) in config.buttons.iter().enumerate() {
        if let Some(id) = &entry.id {
            if !seen_ids.insert(id.as_str()) {
                report.push(Severity::Error, index, format!("duplicate id '{}'", id));
            }
        }

        if !entry.canon_style.is_empty() && !CanonStyle::is_recognized(&entry.canon_style) {
            report.push(
                Severity::Warning,
                index,
                format!(
                    "unknown canon_style '{}', renders as a bare button",
                    entry.canon_style
                ),
            );
        }

        for name in entry.attributes.keys() {
            if !Attributes::is_valid_name(name) {
                report.push(
                    Severity::Warning,
                    index,
                    format!("invalid attribute name {:?}, dropped from output", name),
                );
            }
        }

        if entry.label.trim().is_empty() && !entry.style().is_icon() {
            report.push(
                Severity::Warning,
                index,
                "empty label on a text button".to_string(),
            );
        }
    }

    for finding in &report.findings {
        match finding.severity {
            Severity::Error => tracing::error!("button[{}]: {}", finding.index, finding.message),
            Severity::Warning => tracing::warn!("button[{}]: {}", finding.index, finding.message),
        }
    }

    report
}
