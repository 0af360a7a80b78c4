//! Provider injection into a project's entry file
//!
//! Textually rewrites the root render file: two import lines on top, and the
//! first parenthesized return block wrapped in `<Provider store={store}>`.
//! Anchors are literal text patterns, not parsed syntax.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::project::ProjectType;

/// Marker that suppresses re-injection. Deliberately coarse: any occurrence
/// anywhere in the file (a comment, an unrelated identifier) counts.
const PROVIDER_MARKER: &str = "Provider";

const PROVIDER_IMPORT: &str = "import { Provider } from 'react-redux';";

/// Opens the wrapped return block, replacing the matched return-open anchor
const PROVIDER_OPEN: &str = "return (\n  <Provider store={store}>";

/// Closing of a parenthesized return block
const RETURN_CLOSE: &str = "\n);";

const PROVIDER_CLOSE: &str = "\n  </Provider>\n);";

/// Outcome of a provider injection attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    /// Entry file was rewritten with the provider wrapper
    Injected,
    /// Provider marker already present; file left untouched
    AlreadyPresent,
    /// Entry file does not exist
    FileMissing,
    /// No parenthesized return block found; file left untouched
    AnchorMissing,
    /// More than one return block matches; file left untouched
    AnchorAmbiguous,
}

/// Wrap the entry file's root return expression in a `<Provider>`.
///
/// Prepends the provider import and a store import (parent-relative for
/// project types whose entry file lives under `app/`), then wraps the single
/// `return (` ... `\n);` block. Idempotent: a file already containing the
/// provider marker is returned as [`InjectOutcome::AlreadyPresent`] without
/// a write. Files with zero or multiple matching return blocks are left
/// byte-identical and reported through the outcome instead of being patched
/// into malformed output.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written back.
pub fn inject_provider(entry_file: &Path, project_type: ProjectType) -> Result<InjectOutcome> {
    if !entry_file.exists() {
        return Ok(InjectOutcome::FileMissing);
    }

    let content = fs::read_to_string(entry_file)
        .with_context(|| format!("Failed to read entry file: {}", entry_file.display()))?;

    if content.contains(PROVIDER_MARKER) {
        return Ok(InjectOutcome::AlreadyPresent);
    }

    let return_open = Regex::new(r"return\s*\(").context("Invalid return anchor pattern")?;
    let mut matches = return_open.find_iter(&content);
    let Some(open) = matches.next() else {
        return Ok(InjectOutcome::AnchorMissing);
    };
    if matches.next().is_some() {
        return Ok(InjectOutcome::AnchorAmbiguous);
    }

    let Some(close_offset) = content[open.end()..].find(RETURN_CLOSE) else {
        return Ok(InjectOutcome::AnchorMissing);
    };
    let close = open.end() + close_offset;

    let store_import = format!(
        "import {{ store }} from '{}';",
        project_type.store_import_path()
    );

    let mut updated = String::with_capacity(content.len() + 128);
    updated.push('\n');
    updated.push_str(PROVIDER_IMPORT);
    updated.push('\n');
    updated.push_str(&store_import);
    updated.push_str("\n\n");
    updated.push_str(&content[..open.start()]);
    updated.push_str(PROVIDER_OPEN);
    updated.push_str(&content[open.end()..close]);
    updated.push_str(PROVIDER_CLOSE);
    updated.push_str(&content[close + RETURN_CLOSE.len()..]);

    fs::write(entry_file, updated)
        .with_context(|| format!("Failed to write entry file: {}", entry_file.display()))?;

    Ok(InjectOutcome::Injected)
}
