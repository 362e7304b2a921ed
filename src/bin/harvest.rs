//! Batch harvest over the top registry packages.
//!
//! Discovers the top packages via the search endpoint, runs the harvester
//! over them, and persists the aggregate report as JSON. Failures are
//! printed and the process always exits 0; the worst outcome is an empty or
//! partial report.

use clap::Parser;
use npm_contact_scan::harvester::Harvester;
use npm_contact_scan::network::{DEFAULT_TIMEOUT, RegistryClient};
use npm_contact_scan::ui::cli::HarvestArgs;
use npm_contact_scan::ui::output;
use std::path::Path;

const TOP_PACKAGES_LIMIT: usize = 100;
const REPORT_FILE: &str = "npm_maintainer_emails.json";

fn main() {
    HarvestArgs::parse();

    let client = RegistryClient::new(DEFAULT_TIMEOUT);

    output::print_search_start(TOP_PACKAGES_LIMIT);
    let names = match client.search_top_packages(TOP_PACKAGES_LIMIT) {
        Ok(names) if names.is_empty() => {
            output::print_search_empty();
            return;
        }
        Ok(names) => names,
        Err(err) => {
            output::print_search_failure(&err);
            return;
        }
    };

    let report = Harvester::new(client).run(&names);

    match output::write_report(Path::new(REPORT_FILE), &report) {
        Ok(()) => output::print_harvest_summary(&report, REPORT_FILE),
        Err(err) => eprintln!("❌ Failed to write {}: {}", REPORT_FILE, err),
    }
}
