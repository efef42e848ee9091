//! The built-in table of supported JetBrains IDE products.
//!
//! Every supported product is described by a short stable key, the glob
//! pattern that matches its versioned configuration directory name, and
//! the name of the XML state file that holds its recent projects. The set
//! is fixed at compile time; discovery iterates over it in declaration
//! order so output is reproducible.

use std::fmt::{Display, Formatter, Result};

use clap::ValueEnum;
use serde::Serialize;

/// Enumeration of supported JetBrains IDE products.
///
/// Each variant corresponds to one installable IDE. The variant order is
/// the order in which products are discovered and in which their project
/// records appear in the aggregated output.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Product {
    /// IntelliJ IDEA Ultimate (config directories named `IntelliJIdea*`)
    #[value(name = "idea")]
    IntelliJIdea,

    /// IntelliJ IDEA Community Edition (config directories named `IdeaIC*`)
    #[value(name = "idea-ce")]
    IntelliJIdeaCommunity,

    /// WebStorm (config directories named `WebStorm*`)
    #[value(name = "webstorm")]
    WebStorm,

    /// CLion (config directories named `CLion*`)
    #[value(name = "clion")]
    CLion,

    /// GoLand (config directories named `GoLand*`)
    #[value(name = "goland")]
    GoLand,

    /// PyCharm (config directories named `PyCharm*`)
    #[value(name = "pycharm")]
    PyCharm,

    /// PhpStorm (config directories named `PhpStorm*`)
    #[value(name = "phpstorm")]
    PhpStorm,

    /// Rider (config directories named `Rider*`; tracks recent solutions
    /// instead of recent projects)
    #[value(name = "rider")]
    Rider,
}

impl Product {
    /// All supported products, in discovery order.
    pub const ALL: [Self; 8] = [
        Self::IntelliJIdea,
        Self::IntelliJIdeaCommunity,
        Self::WebStorm,
        Self::CLion,
        Self::GoLand,
        Self::PyCharm,
        Self::PhpStorm,
        Self::Rider,
    ];

    /// The short stable identifier for this product.
    ///
    /// Keys namespace project record IDs so that two products referencing
    /// the same project directory still produce distinct records. They are
    /// also the accepted values of the `--product` command line option, so
    /// changing a key is a breaking change for consumers.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::IntelliJIdea => "idea",
            Self::IntelliJIdeaCommunity => "idea-ce",
            Self::WebStorm => "webstorm",
            Self::CLion => "clion",
            Self::GoLand => "goland",
            Self::PyCharm => "pycharm",
            Self::PhpStorm => "phpstorm",
            Self::Rider => "rider",
        }
    }

    /// The glob pattern matching this product's versioned configuration
    /// directory name, e.g. `IntelliJIdea*` matching `IntelliJIdea2023.2`.
    #[must_use]
    pub const fn config_dir_glob(self) -> &'static str {
        match self {
            Self::IntelliJIdea => "IntelliJIdea*",
            Self::IntelliJIdeaCommunity => "IdeaIC*",
            Self::WebStorm => "WebStorm*",
            Self::CLion => "CLion*",
            Self::GoLand => "GoLand*",
            Self::PyCharm => "PyCharm*",
            Self::PhpStorm => "PhpStorm*",
            Self::Rider => "Rider*",
        }
    }

    /// The file name of the XML state file listing recently opened
    /// projects.
    ///
    /// Rider tracks .NET solutions rather than projects and uses a
    /// different file name for the same structure.
    #[must_use]
    pub const fn recent_state_file(self) -> &'static str {
        match self {
            Self::Rider => "recentSolutions.xml",
            _ => "recentProjects.xml",
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            Self::IntelliJIdea => "IntelliJ IDEA",
            Self::IntelliJIdeaCommunity => "IntelliJ IDEA Community Edition",
            Self::WebStorm => "WebStorm",
            Self::CLion => "CLion",
            Self::GoLand => "GoLand",
            Self::PyCharm => "PyCharm",
            Self::PhpStorm => "PhpStorm",
            Self::Rider => "Rider",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_keys_are_unique() {
        let keys: HashSet<&str> = Product::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys.len(), Product::ALL.len());
    }

    #[test]
    fn test_product_globs_are_unique() {
        let globs: HashSet<&str> = Product::ALL.iter().map(|p| p.config_dir_glob()).collect();
        assert_eq!(globs.len(), Product::ALL.len());
    }

    #[test]
    fn test_rider_uses_recent_solutions_file() {
        assert_eq!(Product::Rider.recent_state_file(), "recentSolutions.xml");

        for product in Product::ALL {
            if product != Product::Rider {
                assert_eq!(product.recent_state_file(), "recentProjects.xml");
            }
        }
    }

    #[test]
    fn test_community_edition_glob_does_not_overlap_ultimate() {
        // IdeaIC2023.2 must not match the Ultimate pattern and vice versa.
        assert_eq!(Product::IntelliJIdea.config_dir_glob(), "IntelliJIdea*");
        assert_eq!(Product::IntelliJIdeaCommunity.config_dir_glob(), "IdeaIC*");
    }

    #[test]
    fn test_product_display_names() {
        assert_eq!(Product::IntelliJIdea.to_string(), "IntelliJ IDEA");
        assert_eq!(Product::Rider.to_string(), "Rider");
        assert_eq!(
            Product::IntelliJIdeaCommunity.to_string(),
            "IntelliJ IDEA Community Edition"
        );
    }

    #[test]
    fn test_product_value_enum_round_trip() {
        for product in Product::ALL {
            let parsed = Product::from_str(product.key(), false).unwrap();
            assert_eq!(parsed, product);
        }
    }
}
