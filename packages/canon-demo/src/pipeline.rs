//! Build steps for the gallery.
//!
//! `build` lints the manifest, renders the page and writes three outputs
//! into the output directory; `clean` removes them again.

use crate::config::DemoConfig;
use crate::error::{DemoError, Result};
use crate::gallery;
use crate::lint::{self, LintReport};
use canon_core::{to_html, to_html_pretty, Node};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const PAGE_FILE: &str = "canon-demo.html";
pub const MINIFIED_FILE: &str = "canon-demo.min.html";
pub const SNAPSHOT_FILE: &str = "canon-demo.json";

const DOCTYPE: &str = "<!DOCTYPE html>";

/// Files written by a build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub page: PathBuf,
    pub minified: PathBuf,
    pub snapshot: PathBuf,
    pub buttons: usize,
    pub warnings: usize,
}

/// Gallery build pipeline bound to one manifest and output directory.
#[derive(Debug)]
pub struct Pipeline {
    config: DemoConfig,
    out_dir: PathBuf,
}

impl Pipeline {
    /// Use the manifest's output directory unless `out_dir` overrides it.
    pub fn new(config: DemoConfig, out_dir: Option<PathBuf>) -> Self {
        let out_dir = out_dir.unwrap_or_else(|| config.output_dir.clone());
        Self { config, out_dir }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn lint(&self) -> LintReport {
        lint::lint(&self.config)
    }

    /// Indented page, doctype included.
    pub fn render(&self) -> String {
        format!("{}\n{}", DOCTYPE, to_html_pretty(&self.page()))
    }

    /// Compact page prefixed with the dated banner.
    pub fn render_minified(&self, date: NaiveDate) -> String {
        format!(
            "{}\n{}{}",
            banner(&self.config.banner, date),
            DOCTYPE,
            to_html(&self.page())
        )
    }

    fn page(&self) -> Node {
        gallery::page(&self.config)
    }

    /// Lint, then write the page, the minified page and the tree snapshot.
    pub fn build(&self, date: NaiveDate) -> Result<BuildReport> {
        let report = self.lint();
        if report.error_count() > 0 {
            return Err(DemoError::Lint(report.error_count()));
        }

        fs::create_dir_all(&self.out_dir)?;

        let page = self.out_dir.join(PAGE_FILE);
        fs::write(&page, self.render())?;
        tracing::debug!("Wrote {}", page.display());

        let minified = self.out_dir.join(MINIFIED_FILE);
        fs::write(&minified, self.render_minified(date))?;
        tracing::debug!("Wrote {}", minified.display());

        let snapshot = self.out_dir.join(SNAPSHOT_FILE);
        fs::write(&snapshot, serde_json::to_string_pretty(&self.page())?)?;
        tracing::debug!("Wrote {}", snapshot.display());

        tracing::info!(
            "Built gallery with {} buttons into {}",
            self.config.buttons.len(),
            self.out_dir.display()
        );

        Ok(BuildReport {
            page,
            minified,
            snapshot,
            buttons: self.config.buttons.len(),
            warnings: report.warning_count(),
        })
    }

    /// Remove build outputs. Returns the files actually removed.
    pub fn clean(&self) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for name in [PAGE_FILE, MINIFIED_FILE, SNAPSHOT_FILE] {
            let path = self.out_dir.join(name);
            if path.exists() {
                fs::remove_file(&path)?;
                tracing::debug!("Removed {}", path.display());
                removed.push(path);
            }
        }
        Ok(removed)
    }
}

/// Comment placed at the top of minified output.
pub fn banner(name: &str, date: NaiveDate) -> String {
    format!("<!-- {} {} -->", name, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ButtonEntry;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn builtin(out: &Path) -> Pipeline {
        Pipeline::new(DemoConfig::builtin(), Some(out.to_path_buf()))
    }

    #[test]
    fn test_banner() {
        assert_eq!(banner("canon-demo", date()), "<!-- canon-demo 2024-03-09 -->");
    }

    #[test]
    fn test_out_dir_override() {
        let config = DemoConfig::default();
        assert_eq!(Pipeline::new(config.clone(), None).out_dir(), Path::new("dist"));
        assert_eq!(
            Pipeline::new(config, Some(PathBuf::from("elsewhere"))).out_dir(),
            Path::new("elsewhere")
        );
    }

    #[test]
    fn test_build_writes_outputs() {
        let dir = TempDir::new().unwrap();
        let pipeline = builtin(dir.path());

        let report = pipeline.build(date()).unwrap();
        assert_eq!(report.warnings, 0);

        let page = fs::read_to_string(&report.page).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>\n<html"));
        assert!(page.contains("rs-btn-login"));

        let minified = fs::read_to_string(&report.minified).unwrap();
        let mut lines = minified.lines();
        assert_eq!(lines.next(), Some("<!-- canon-demo 2024-03-09 -->"));
        assert!(lines.next().unwrap().starts_with("<!DOCTYPE html><html"));
        assert!(minified.len() < page.len());

        let snapshot: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report.snapshot).unwrap()).unwrap();
        assert_eq!(snapshot["element"]["tag"], "html");
    }

    #[test]
    fn test_build_refuses_lint_errors() {
        let dir = TempDir::new().unwrap();
        let mut first = ButtonEntry::new("primary", "A");
        first.id = Some("dup".to_string());
        let second = first.clone();
        let pipeline = Pipeline::new(
            DemoConfig {
                buttons: vec![first, second],
                ..Default::default()
            },
            Some(dir.path().to_path_buf()),
        );

        assert!(matches!(pipeline.build(date()), Err(DemoError::Lint(1))));
        assert!(!dir.path().join(PAGE_FILE).exists());
    }

    #[test]
    fn test_clean() {
        let dir = TempDir::new().unwrap();
        let pipeline = builtin(dir.path());

        assert!(pipeline.clean().unwrap().is_empty());

        pipeline.build(date()).unwrap();
        let removed = pipeline.clean().unwrap();
        assert_eq!(removed.len(), 3);
        assert!(!dir.path().join(MINIFIED_FILE).exists());
    }
}
