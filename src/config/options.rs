//! Discovery configuration.
//!
//! This module defines the options that control where configuration
//! directories are looked up and how much diagnostic output is produced.

use std::path::PathBuf;

/// Configuration for a discovery run.
///
/// Both location fields are overrides for testability and scripting; when
/// unset, discovery falls back to the platform lookup in
/// [`crate::config::paths`].
#[derive(Clone, Debug, Default)]
pub struct DiscoveryOptions {
    /// Whether to report skipped entries and per-product diagnostics on
    /// stderr. Stdout carries only the final JSON document either way.
    pub verbose: bool,

    /// Configuration root containing the `JetBrains` directory, overriding
    /// the `XDG_CONFIG_HOME` lookup when set.
    pub config_root: Option<PathBuf>,

    /// Home directory override, used for the legacy dotted configuration
    /// directories and for `$USER_HOME$` placeholder expansion.
    pub home: Option<PathBuf>,
}
