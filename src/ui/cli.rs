//! Command-line interface module.
//!
//! Argument parsing for both binaries lives here so the binaries themselves
//! stay thin.

use clap::Parser;

/// Example package used by `lookup` when no name is given.
pub const DEFAULT_PACKAGE: &str = "chalk";

/// CLI arguments for the single-package lookup.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Report the maintainer and author contact fields one npm package exposes"
)]
pub struct LookupArgs {
    /// Package name to query. A well-known example package is used when
    /// omitted.
    pub package: Option<String>,
}

/// CLI arguments for the batch harvest. The run is fully fixed (top 100
/// packages, fixed output path), so only `--help` and `--version` remain.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Collect the contact fields exposed by the top npm packages into a JSON report"
)]
pub struct HarvestArgs {}

/// Resolves the package name to look up, falling back to the example
/// package with a printed notice.
pub fn resolve_package(args: &LookupArgs) -> String {
    match &args.package {
        Some(name) => name.clone(),
        None => {
            println!(
                "ℹ️  No package name provided, using '{}' as an example.",
                DEFAULT_PACKAGE
            );
            println!("   Pass a package name as the first argument to query a different one.\n");
            DEFAULT_PACKAGE.to_string()
        }
    }
}
