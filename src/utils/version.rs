//! Version extraction from JetBrains configuration directory names.
//!
//! JetBrains IDEs store per-version settings in directories whose names embed
//! the release version, such as `IntelliJIdea2023.2` or `.PyCharm2019.3`.
//! This module parses that embedded version so the newest installation can
//! be selected when several versions are present side by side.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

/// The version pattern embedded in configuration directory names: a four
/// digit release year followed by a one or two digit revision.
///
/// The pattern is a hardcoded literal and always compiles.
#[allow(clippy::unwrap_used)]
fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d{4})\.(\d{1,2})").unwrap())
}

/// A JetBrains release version as encoded in a configuration directory name.
///
/// Versions order by release year first and revision second, so
/// `2023.2 > 2023.1 > 2022.3`. The field order matters: the derived
/// [`Ord`] implementation compares fields top to bottom.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct ConfigVersion {
    /// Release year (e.g. `2023`)
    pub year: u16,

    /// Revision within the release year (e.g. `2` for `2023.2`)
    pub revision: u8,
}

impl ConfigVersion {
    /// Extract the version from the name of a configuration directory.
    ///
    /// The version may appear anywhere in the directory name, which covers
    /// both the modern layout (`WebStorm2023.2` under `JetBrains/`) and the
    /// legacy dotted layout (`.WebStorm2019.3` directly in the home
    /// directory).
    ///
    /// # Errors
    ///
    /// Returns an error when the directory name does not contain a
    /// `YYYY.N` version. A directory that matched a product glob but
    /// carries no parseable version is malformed input, not something to
    /// silently skip.
    pub fn from_dir_name(config_dir: &Path) -> Result<Self> {
        let name = config_dir
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                anyhow!(
                    "Not a valid JetBrains configuration directory: {}",
                    config_dir.display()
                )
            })?;

        let captures = version_pattern().captures(name).ok_or_else(|| {
            anyhow!(
                "Not a valid JetBrains configuration directory: {}",
                config_dir.display()
            )
        })?;

        let year = captures[1]
            .parse()
            .with_context(|| format!("Invalid release year in {name}"))?;
        let revision = captures[2]
            .parse()
            .with_context(|| format!("Invalid revision in {name}"))?;

        Ok(Self { year, revision })
    }

    /// Whether this version uses the post-2020 configuration layout, where
    /// `options/` sits directly inside the configuration directory instead
    /// of under a `config/` subdirectory.
    #[must_use]
    pub const fn has_flat_options_dir(self) -> bool {
        self.year >= 2020
    }

    /// Compare two candidate directories for the same product.
    ///
    /// Candidates order by version; at equal versions the lexically greater
    /// directory name wins, which makes selection deterministic regardless
    /// of filesystem enumeration order.
    #[must_use]
    pub fn cmp_candidates(self, self_path: &Path, other: Self, other_path: &Path) -> Ordering {
        self.cmp(&other)
            .then_with(|| self_path.file_name().cmp(&other_path.file_name()))
    }
}

impl Display for ConfigVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.year, self.revision)
    }
}
