//! The normalized project record emitted for discovered projects.
//!
//! A [`ProjectRecord`] is the unit of output: one recently opened project
//! that still exists on disk, described with the exact field names the
//! search-provider consumer expects. The serialization contract is part of
//! the external interface; renaming a field breaks the consumer.

use std::path::Path;

use serde::Serialize;

use super::Product;

/// A single discovered project, normalized for the consumer.
///
/// Field names are serialized verbatim and must stay stable.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ProjectRecord {
    /// Identifier unique across all products.
    ///
    /// Composed of the product key and the absolute project path, so two
    /// products referencing the same directory yield distinct IDs.
    pub id: String,

    /// Human-readable project name.
    ///
    /// Taken from the `.idea/.name` sidecar file when present, otherwise
    /// the base name of the project directory.
    pub name: String,

    /// The project path as stored by the IDE, possibly `~`-relative.
    pub path: String,

    /// The fully resolved project path.
    pub abspath: String,
}

impl ProjectRecord {
    /// Build a record for a project directory discovered for `product`.
    ///
    /// `stored_dir` is the directory in the notation the IDE stored it
    /// (with the home placeholder already rewritten to `~`), while
    /// `resolved_dir` is the same directory with the home directory
    /// expanded.
    #[must_use]
    pub fn new(product: Product, stored_dir: &Path, resolved_dir: &Path, name: String) -> Self {
        Self {
            id: format!("{}-{}", product.key(), resolved_dir.display()),
            name,
            path: stored_dir.display().to_string(),
            abspath: resolved_dir.display().to_string(),
        }
    }
}
