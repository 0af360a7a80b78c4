//! Dependency installation through the project's package manager

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Install the given npm packages into the project at `root`.
///
/// Blocks until `npm install` exits, inheriting the parent's stdout/stderr.
/// No timeout is applied and the install is never retried; callers treat a
/// failure as a warning, not a fatal error.
///
/// # Errors
///
/// Returns an error if `npm` cannot be launched or exits with a non-zero
/// status.
pub fn install(root: &Path, packages: &[&str]) -> Result<()> {
    let status = Command::new("npm")
        .arg("install")
        .args(packages)
        .current_dir(root)
        .status()
        .context("Failed to launch npm")?;

    if !status.success() {
        anyhow::bail!("npm install exited with {status}");
    }

    Ok(())
}
