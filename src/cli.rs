//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and their validation
//! using the [clap](https://docs.rs/clap/) library. Invoking the binary
//! without any arguments performs the default discovery across all
//! supported products; every flag narrows or adjusts that behavior.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use jetbrains_recent_projects::DiscoveryOptions;
use jetbrains_recent_projects::product::Product;

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the table of supported products (key, config directory
    /// pattern, state file)
    Products,
}

/// Main command-line interface structure.
///
/// This struct defines the complete command-line interface for the
/// jetbrains-recent-projects tool. All options are optional; the bare
/// invocation discovers every supported product and prints compact JSON.
#[derive(Parser)]
#[command(name = "jetbrains-recent-projects")]
#[command(
    about = "Discover recently opened projects of installed JetBrains IDEs and print them as JSON"
)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand (e.g. `products`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Restrict discovery to the given product(s)
    ///
    /// Can be specified multiple times. When exactly one product is
    /// selected and no configuration directory exists for it, an error
    /// object is printed instead of an empty success document.
    #[arg(short = 'p', long, value_enum, action = clap::ArgAction::Append)]
    product: Vec<Product>,

    /// Configuration root containing the JetBrains directory
    ///
    /// Overrides the XDG_CONFIG_HOME lookup. Mostly useful for scripting
    /// and testing against a fixture tree.
    #[arg(long, value_name = "DIR")]
    config_root: Option<PathBuf>,

    /// Pretty-print the JSON document
    #[arg(long)]
    pretty: bool,

    /// Report skipped entries and per-product diagnostics on stderr
    ///
    /// Stdout carries only the final JSON document either way.
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    /// The products to discover, in output order.
    ///
    /// Defaults to all supported products when `--product` is not given.
    /// Repeated selections are collapsed, preserving first occurrence
    /// order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        if self.product.is_empty() {
            return Product::ALL.to_vec();
        }

        let mut products = Vec::new();
        for &product in &self.product {
            if !products.contains(&product) {
                products.push(product);
            }
        }
        products
    }

    /// The single explicitly selected product, if exactly one was given.
    ///
    /// This drives the single-lookup error reporting: an explicitly
    /// requested product without any configuration is worth an error
    /// object, while the default all-products sweep just yields fewer
    /// records.
    #[must_use]
    pub fn single_product(&self) -> Option<Product> {
        match self.products().as_slice() {
            [product] if !self.product.is_empty() => Some(*product),
            _ => None,
        }
    }

    /// Whether `--pretty` JSON formatting is enabled.
    #[must_use]
    pub const fn pretty(&self) -> bool {
        self.pretty
    }

    /// Extract discovery options from the CLI arguments.
    #[must_use]
    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            verbose: self.verbose,
            config_root: self.config_root.clone(),
            home: None,
        }
    }
}
