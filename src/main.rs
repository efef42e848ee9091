//! # jetbrains-recent-projects
//!
//! A small CLI tool that discovers recently opened projects of installed
//! JetBrains IDEs (IntelliJ IDEA, WebStorm, CLion, GoLand, PyCharm,
//! PhpStorm, Rider, ...) and prints them as a single JSON document for
//! consumption by search-provider/launcher integrations.
//!
//! ## Behavior
//!
//! - Locates each product's versioned configuration directory under the
//!   platform configuration root (honoring `XDG_CONFIG_HOME`) and the
//!   legacy dotted home-directory layout
//! - Selects the newest installed version per product
//! - Reads the product's recent-projects XML state file and keeps the
//!   entries that still exist on disk
//! - Prints `{"kind": "success", "projects": [...]}` on stdout
//!
//! Any fatal discovery failure is reported as
//! `{"kind": "error", "message": ..., "traceback": ...}` with a non-zero
//! exit code, so consumers always receive well-formed JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Discover all products
//! jetbrains-recent-projects
//!
//! # Only Rider, pretty-printed
//! jetbrains-recent-projects --product rider --pretty
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use jetbrains_recent_projects::{Discovery, DiscoveryOutput, product::Product};
use std::process::exit;

/// Entry point for the jetbrains-recent-projects application.
///
/// Any error escaping [`inner_main`] is serialized as a JSON error object
/// on stdout before the process exits with a non-zero status, so the
/// consumer never has to deal with a missing or truncated document.
fn main() {
    let args = Cli::parse();

    if let Err(err) = inner_main(&args) {
        print_output(&DiscoveryOutput::fatal(&err), args.pretty());
        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Dispatches the `products` subcommand, otherwise runs discovery over
/// the selected products and prints the resulting JSON document.
///
/// # Errors
///
/// Returns errors from configuration directory resolution, state file
/// parsing, or JSON serialization.
fn inner_main(args: &Cli) -> Result<()> {
    if let Some(Commands::Products) = &args.subcommand {
        print_products();
        return Ok(());
    }

    let discovery = Discovery::new(args.discovery_options(), args.products());

    // An explicitly requested single product that has no configuration at
    // all is a reportable outcome, not a process failure.
    if let Some(product) = args.single_product()
        && discovery.resolve_config_dir(product)?.is_none()
    {
        print_output(&DiscoveryOutput::missing_configuration(product), args.pretty());
        return Ok(());
    }

    let projects = discovery.discover()?;
    print_output(&DiscoveryOutput::success(projects), args.pretty());

    Ok(())
}

/// Print the table of supported products.
fn print_products() {
    println!(
        "{:<10} {:<15} {:<20} product",
        "key", "config glob", "state file"
    );
    for product in Product::ALL {
        println!(
            "{:<10} {:<15} {:<20} {product}",
            product.key(),
            product.config_dir_glob(),
            product.recent_state_file(),
        );
    }
}

/// Serialize an output document to stdout.
///
/// Serialization of these plain structures cannot realistically fail; if
/// it ever does, the error is reported on stderr so stdout is not left
/// with a half-written document.
fn print_output(output: &DiscoveryOutput, pretty: bool) {
    match output.to_json(pretty) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Error: failed to serialize output: {err}");
            exit(1);
        }
    }
}
