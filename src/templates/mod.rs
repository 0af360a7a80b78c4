//! Template bundle generation and materialization

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use crate::SetupMode;

pub mod files;
pub use files::*;

/// Default backend base URL baked into the generated constants module
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Packages installed for the RTK Query setup
const RTK_QUERY_PACKAGES: &[&str] = &["@reduxjs/toolkit", "react-redux", "axios"];

/// Packages installed for the plain reducer setup
const NORMAL_REDUCER_PACKAGES: &[&str] = &["@reduxjs/toolkit", "react-redux"];

/// Fixed set of (relative path, content) pairs for one setup mode, plus the
/// npm packages that mode depends on
pub struct TemplateBundle {
    files: Vec<(PathBuf, String)>,
    packages: &'static [&'static str],
}

impl TemplateBundle {
    /// Render the template bundle for the chosen setup mode.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn generate(mode: SetupMode) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        let context = json!({
            "base_url": DEFAULT_BASE_URL,
            "node_env": "development",
        });

        let templates: &[(&str, &str)] = match mode {
            SetupMode::RtkQuery => &[
                ("src/redux/store.js", STORE_RTK_QUERY),
                ("src/redux/service/backendApi.js", BACKEND_API),
                ("src/redux/service/authSlice.js", AUTH_SLICE_RTK_QUERY),
                ("src/utils/constant.js", CONSTANT),
                ("src/lib/axios.js", AXIOS_CLIENT),
            ],
            SetupMode::NormalReducer => &[
                ("src/redux/store.js", STORE_REDUCER),
                ("src/redux/slices/authSlice.js", AUTH_SLICE_REDUCER),
            ],
        };

        let mut rendered_files = Vec::with_capacity(templates.len());
        for (relative_path, template) in templates {
            let rendered = handlebars
                .render_template(template, &context)
                .with_context(|| format!("Failed to render template: {relative_path}"))?;
            rendered_files.push((PathBuf::from(relative_path), rendered));
        }

        Ok(Self {
            files: rendered_files,
            packages: match mode {
                SetupMode::RtkQuery => RTK_QUERY_PACKAGES,
                SetupMode::NormalReducer => NORMAL_REDUCER_PACKAGES,
            },
        })
    }

    /// npm packages this bundle depends on
    #[must_use]
    pub const fn packages(&self) -> &'static [&'static str] {
        self.packages
    }

    /// Rendered (relative path, content) pairs
    #[must_use]
    pub fn files(&self) -> &[(PathBuf, String)] {
        &self.files
    }

    /// Write the bundle under `root`, creating missing directories.
    ///
    /// Existing files are never overwritten: a target that already exists is
    /// silently skipped, so user edits to previously generated files
    /// survive. Running twice is byte-identical to running once.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or a file cannot be
    /// written.
    pub fn materialize(&self, root: &Path) -> Result<MaterializeReport> {
        let mut report = MaterializeReport::default();

        for (relative_path, content) in &self.files {
            let path = root.join(relative_path);

            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory: {}", parent.display())
                    })?;
                    report.created_dirs.push(parent.to_path_buf());
                }
            }

            if path.exists() {
                report.skipped_files.push(relative_path.clone());
            } else {
                fs::write(&path, content)
                    .with_context(|| format!("Failed to write file: {}", path.display()))?;
                report.created_files.push(relative_path.clone());
            }
        }

        Ok(report)
    }
}

/// What a materialization pass actually touched, for diagnostics
#[derive(Debug, Default)]
pub struct MaterializeReport {
    /// Directories created by this pass
    pub created_dirs: Vec<PathBuf>,
    /// Files written by this pass, relative to the project root
    pub created_files: Vec<PathBuf>,
    /// Files skipped because they already existed
    pub skipped_files: Vec<PathBuf>,
}
