//! Configuration directory resolution and project discovery.
//!
//! This module provides the core discovery logic: for each supported
//! product it locates the product's versioned configuration directories,
//! selects the newest installation, and extracts the recent projects from
//! that installation's state file. Discovery is read-only, sequential, and
//! stateless; every invocation observes the filesystem fresh.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use glob::glob;

use crate::config::{DiscoveryOptions, paths};
use crate::product::{Product, ProjectRecord};
use crate::recent;
use crate::utils::ConfigVersion;

/// A resolved configuration directory together with its parsed version.
#[derive(Clone, Debug)]
pub struct ConfigDir {
    /// Path of the configuration directory
    pub path: PathBuf,

    /// Version parsed from the directory name
    pub version: ConfigVersion,
}

impl ConfigDir {
    /// Path of the recent-projects state file inside this configuration
    /// directory.
    ///
    /// Versions from 2020 onwards keep `options/` directly inside the
    /// configuration directory; older versions nest it under `config/`.
    #[must_use]
    pub fn recent_state_path(&self, product: Product) -> PathBuf {
        if self.version.has_flat_options_dir() {
            self.path.join("options").join(product.recent_state_file())
        } else {
            self.path
                .join("config")
                .join("options")
                .join(product.recent_state_file())
        }
    }
}

/// Project discovery across a set of JetBrains products.
///
/// The `Discovery` struct encapsulates the lookup of configuration
/// directories and the per-product extraction of recent projects. It is
/// configured once with [`DiscoveryOptions`] and a product selection and
/// then driven via [`Discovery::discover`].
#[derive(Debug)]
pub struct Discovery {
    /// Configuration for lookup locations and diagnostics
    options: DiscoveryOptions,

    /// The products to discover, in output order
    products: Vec<Product>,
}

impl Discovery {
    /// Create a new discovery run over the given products.
    #[must_use]
    pub const fn new(options: DiscoveryOptions, products: Vec<Product>) -> Self {
        Self { options, products }
    }

    /// Discover recent projects of all selected products.
    ///
    /// Products without any configuration directory contribute nothing;
    /// products without a state file contribute nothing. The result is a
    /// single flat list ordered by product declaration order, then by the
    /// order entries appear in each state file.
    ///
    /// # Errors
    ///
    /// Returns an error when the home directory cannot be determined, when
    /// a glob-matched configuration directory name carries no parseable
    /// version, or when a state file exists but cannot be read or parsed.
    pub fn discover(&self) -> Result<Vec<ProjectRecord>> {
        let mut records = Vec::new();

        for &product in &self.products {
            records.extend(self.discover_product(product)?);
        }

        Ok(records)
    }

    /// Discover the recent projects of a single product.
    ///
    /// # Errors
    ///
    /// See [`Discovery::discover`].
    pub fn discover_product(&self, product: Product) -> Result<Vec<ProjectRecord>> {
        let Some(config_dir) = self.resolve_config_dir(product)? else {
            if self.options.verbose {
                eprintln!(
                    "{}",
                    format!("{product}: no configuration directory found").dimmed()
                );
            }
            return Ok(Vec::new());
        };

        if self.options.verbose {
            eprintln!(
                "{}",
                format!(
                    "{product}: using version {} at {}",
                    config_dir.version,
                    config_dir.path.display()
                )
                .dimmed()
            );
        }

        let state_file = config_dir.recent_state_path(product);
        recent::read_recent_projects(&state_file, product, &self.home()?, self.options.verbose)
    }

    /// Resolve the configuration directory of the newest installed version
    /// of `product`.
    ///
    /// Candidates are gathered from `<config-home>/JetBrains/<glob>` and
    /// from the legacy dotted form `~/.<glob>` used before 2020. The
    /// candidate with the highest version wins; equal versions are broken
    /// by the lexically greater directory name.
    ///
    /// Returns `Ok(None)` when no directory matches — an absent product is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the home directory cannot be determined, or
    /// when a matched directory name does not embed a `YYYY.N` version.
    pub fn resolve_config_dir(&self, product: Product) -> Result<Option<ConfigDir>> {
        let mut candidates = Vec::new();

        if let Some(config_home) = self.config_home() {
            let pattern = config_home.join("JetBrains").join(product.config_dir_glob());
            candidates.extend(matching_dirs(&pattern)?);
        }

        let legacy_pattern = self.home()?.join(format!(".{}", product.config_dir_glob()));
        candidates.extend(matching_dirs(&legacy_pattern)?);

        let mut best: Option<ConfigDir> = None;
        for path in candidates {
            let version = ConfigVersion::from_dir_name(&path)?;
            let supersedes = best.as_ref().is_none_or(|current| {
                version
                    .cmp_candidates(&path, current.version, &current.path)
                    .is_gt()
            });
            if supersedes {
                best = Some(ConfigDir { path, version });
            }
        }

        Ok(best)
    }

    /// The home directory for this run.
    fn home(&self) -> Result<PathBuf> {
        self.options
            .home
            .clone()
            .or_else(paths::user_home)
            .ok_or_else(|| anyhow!("Could not determine the home directory"))
    }

    /// The configuration root containing the `JetBrains` directory, if one
    /// can be determined.
    fn config_home(&self) -> Option<PathBuf> {
        self.options
            .config_root
            .clone()
            .or_else(paths::config_home)
    }
}

/// All directories matching the given glob pattern.
///
/// Non-directory matches and unreadable entries are skipped; only an
/// invalid pattern is an error.
fn matching_dirs(pattern: &Path) -> Result<Vec<PathBuf>> {
    let pattern = pattern.to_string_lossy();
    let paths = glob(&pattern).with_context(|| format!("Invalid glob pattern {pattern}"))?;

    Ok(paths
        .filter_map(std::result::Result::ok)
        .filter(|path| path.is_dir())
        .collect())
}
