//! Configuration for discovery runs.
//!
//! This module groups the discovery options and the lookup of well-known
//! filesystem locations (configuration root, home directory, tilde
//! expansion).

pub mod options;
pub mod paths;

pub use options::DiscoveryOptions;
pub use paths::expand_tilde;
