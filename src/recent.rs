//! Extraction of recently opened projects from an IDE state file.
//!
//! Each JetBrains product maintains a `recentProjects.xml` (Rider:
//! `recentSolutions.xml`) under its configuration directory. The paths of
//! recently opened projects are stored as `option` elements with a `value`
//! attribute, nested in a `list` under the `option` named `recentPaths`,
//! and may reference the home directory through a literal `$USER_HOME$`
//! placeholder:
//!
//! ```xml
//! <application>
//!   <component name="RecentProjectsManager">
//!     <option name="recentPaths">
//!       <list>
//!         <option value="$USER_HOME$/src/app" />
//!       </list>
//!     </option>
//!   </component>
//! </application>
//! ```
//!
//! Entries whose path no longer exists on disk are dropped; everything
//! else becomes a [`ProjectRecord`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use roxmltree::Document;

use crate::config::expand_tilde;
use crate::product::{Product, ProjectRecord};

/// The placeholder JetBrains IDEs store in place of the home directory.
const USER_HOME_PLACEHOLDER: &str = "$USER_HOME$";

/// Read all recent projects of `product` from its state file.
///
/// A missing state file means the product simply has no recorded recent
/// projects and yields an empty list. A state file that exists but cannot
/// be read or parsed is an error.
///
/// `home` is used both to expand stored `$USER_HOME$` placeholders and as
/// the base for `~` notation in the emitted `path` field.
///
/// # Errors
///
/// Returns an error when the state file cannot be read or is not
/// well-formed XML.
pub fn read_recent_projects(
    state_file: &Path,
    product: Product,
    home: &Path,
    verbose: bool,
) -> Result<Vec<ProjectRecord>> {
    if !state_file.exists() {
        if verbose {
            eprintln!(
                "{}",
                format!("{product}: no state file at {}", state_file.display()).dimmed()
            );
        }
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(state_file)
        .with_context(|| format!("Failed to read {}", state_file.display()))?;
    let document = Document::parse(&content)
        .with_context(|| format!("Failed to parse {}", state_file.display()))?;

    let records = recent_path_values(&document)
        .into_iter()
        .filter_map(|value| resolve_project(value, product, home, verbose))
        .collect();

    Ok(records)
}

/// Collect the raw path values under `option[@name="recentPaths"]/list`.
fn recent_path_values<'doc>(document: &'doc Document<'_>) -> Vec<&'doc str> {
    let mut values = Vec::new();

    let recent_paths = document.descendants().filter(|node| {
        node.has_tag_name("option") && node.attribute("name") == Some("recentPaths")
    });
    for node in recent_paths {
        for list in node.children().filter(|child| child.has_tag_name("list")) {
            values.extend(
                list.children()
                    .filter(|child| child.has_tag_name("option"))
                    .filter_map(|option| option.attribute("value")),
            );
        }
    }

    values
}

/// Turn one stored path value into a project record, if it still exists.
///
/// The stored value is rewritten to `~` notation, expanded against `home`,
/// and normalized to a directory: a value denoting a file (Rider stores
/// `.sln` solution files) is replaced by its parent directory. Entries
/// whose directory no longer exists are silently dropped.
fn resolve_project(
    value: &str,
    product: Product,
    home: &Path,
    verbose: bool,
) -> Option<ProjectRecord> {
    let stored = value.replace(USER_HOME_PLACEHOLDER, "~");
    let stored = Path::new(&stored);
    let resolved = expand_tilde(stored, home);

    let (stored_dir, resolved_dir) = project_directory(stored, &resolved)?;

    if !resolved_dir.is_dir() {
        if verbose {
            eprintln!(
                "{}",
                format!(
                    "{product}: skipping vanished project {}",
                    resolved_dir.display()
                )
                .yellow()
            );
        }
        return None;
    }

    let name = project_name(&resolved_dir);
    Some(ProjectRecord::new(product, &stored_dir, &resolved_dir, name))
}

/// The directory owning a recent-paths entry, in stored and resolved form.
///
/// An entry that denotes a file belongs to the directory containing it;
/// anything else is taken as the project directory itself.
fn project_directory(stored: &Path, resolved: &Path) -> Option<(PathBuf, PathBuf)> {
    if resolved.is_file() {
        let resolved_parent = resolved.parent()?;
        let stored_parent = stored.parent().unwrap_or(stored);
        Some((stored_parent.to_path_buf(), resolved_parent.to_path_buf()))
    } else {
        Some((stored.to_path_buf(), resolved.to_path_buf()))
    }
}

/// Derive the display name of the project in the given directory.
///
/// The IDE writes the user-visible project name to `.idea/.name` when it
/// differs from the directory name. Any failure to read that sidecar file
/// falls back to the directory's base name.
fn project_name(project_dir: &Path) -> String {
    let name_file = project_dir.join(".idea").join(".name");

    match fs::read_to_string(&name_file) {
        Ok(content) if !content.trim().is_empty() => content.trim().to_string(),
        _ => project_dir
            .file_name()
            .map_or_else(
                || project_dir.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            ),
    }
}
