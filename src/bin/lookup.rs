//! Single-package lookup.
//!
//! Fetches one package record from the registry and prints the contact
//! fields it exposes. All failures are printed as human-readable messages;
//! the process always exits 0.

use clap::Parser;
use npm_contact_scan::network::{DEFAULT_TIMEOUT, RegistryClient};
use npm_contact_scan::ui::cli::{LookupArgs, resolve_package};
use npm_contact_scan::ui::output;

fn main() {
    let args = LookupArgs::parse();
    let package = resolve_package(&args);

    let client = RegistryClient::new(DEFAULT_TIMEOUT);
    output::print_lookup_start(&package, &client.package_url(&package));

    match client.fetch_package(&package) {
        Ok(record) => output::print_lookup_report(&package, &record),
        Err(err) => output::print_lookup_failure(&package, &err),
    }
}
