//! Well-known filesystem locations used during discovery.
//!
//! JetBrains IDEs place their versioned configuration directories under a
//! `JetBrains` folder in the platform configuration directory, which can
//! be relocated with the `XDG_CONFIG_HOME` environment variable. Versions
//! before 2020 used dotted directories directly in the home directory
//! instead.

use std::env;
use std::path::{Path, PathBuf};

/// Expand a leading `~` in a path against the given home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path, home: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// The user's home directory.
#[must_use]
pub fn user_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// The configuration directory under which the `JetBrains` folder lives.
///
/// The `XDG_CONFIG_HOME` environment variable takes priority when set to a
/// non-empty value; otherwise the platform configuration directory is used
/// (`~/.config` on Linux).
#[must_use]
pub fn config_home() -> Option<PathBuf> {
    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg));
    }
    dirs::config_dir()
}
