//! Console reporting and report persistence.
//!
//! Every line the binaries print goes through here, including:
//! - Single-package lookup reports and failure messages
//! - Batch progress, skip lines, and the final summary
//! - Writing the aggregate report to disk

use crate::extractor::extract_contacts;
use crate::models::package::PackageRecord;
use crate::models::report::HarvestReport;
use crate::network::RegistryError;
use std::fs;
use std::io;
use std::path::Path;

/// Prints the fetch announcement for a single-package lookup.
pub fn print_lookup_start(package: &str, url: &str) {
    println!("⏳ Fetching package data for '{}' from {} ...", package, url);
}

/// Prints the lookup report for a successfully fetched record.
///
/// When maintainer entries are present they are listed directly; otherwise
/// the report falls back to the author and latest version, since the
/// registry stopped exposing maintainer emails for most packages. Either
/// way the deduplicated contact strings close the report.
pub fn print_lookup_report(package: &str, record: &PackageRecord) {
    if !record.maintainers.is_empty() {
        println!(
            "\n✅ Maintainer entries found for '{}' ({}):",
            package,
            record.maintainers.len()
        );
        for maintainer in &record.maintainers {
            println!(
                "\t- name: {}, email: {}",
                maintainer.name.as_deref().unwrap_or("N/A"),
                maintainer.email.as_deref().unwrap_or("N/A")
            );
        }
    } else {
        println!("\nℹ️  The registry does not expose maintainer entries for '{}'.", package);
        if let Some(author) = &record.author {
            println!("\t- listed author: {}", author.display_name());
        }
        println!(
            "\t- latest version: {}",
            record.dist_tags.get("latest").map(String::as_str).unwrap_or("N/A")
        );
    }

    let contacts = extract_contacts(record);
    if contacts.is_empty() {
        println!("🔎 No contact strings exposed.");
    } else {
        let listed: Vec<&str> = contacts.iter().map(String::as_str).collect();
        println!("🔎 Exposed contact strings: {}", listed.join(", "));
    }
}

/// Prints a distinct message per failure kind for a single-package lookup.
pub fn print_lookup_failure(package: &str, err: &RegistryError) {
    match err {
        RegistryError::NotFound => {
            eprintln!(
                "❌ Package '{}' was not found in the registry. Please check the name.",
                package
            );
        }
        RegistryError::Http(status) => {
            eprintln!(
                "❌ The registry rejected the request for '{}' with HTTP status {}.",
                package, status
            );
        }
        RegistryError::Network(detail) => {
            eprintln!("❌ A network error occurred while reaching the registry: {}", detail);
        }
        RegistryError::MalformedResponse(detail) => {
            eprintln!("❌ The registry response for '{}' was not valid JSON: {}", package, detail);
        }
    }
}

/// Prints the search announcement for a batch run.
pub fn print_search_start(limit: usize) {
    println!("⏳ Fetching the top {} npm packages from the search endpoint...", limit);
}

/// Prints why the batch run has nothing to do and is ending early.
pub fn print_search_failure(err: &RegistryError) {
    eprintln!("❌ Failed to fetch the top package list: {}", err);
}

pub fn print_search_empty() {
    eprintln!("❌ The search endpoint returned no packages, nothing to do.");
}

/// Prints one batch progress line.
pub fn print_progress(position: usize, total: usize, package: &str) {
    println!("📦 Processing {}/{}: {}", position, total, package);
}

/// Prints the skip line for a package whose fetch failed.
pub fn print_fetch_skipped(package: &str, err: &RegistryError) {
    println!("\t⚠️  Skipping '{}': {}", package, err);
}

/// Prints the final batch summary.
pub fn print_harvest_summary(report: &HarvestReport, path: &str) {
    println!("\n💾 Results saved to {}", path);
    println!(
        "🔎 Found {} unique contact strings across {} fetched packages ({} attempted)",
        report.total_emails,
        report.package_details.len(),
        report.total_packages
    );
}

/// Writes the report to `path` as pretty-printed JSON, overwriting any
/// existing file.
pub fn write_report(path: &Path, report: &HarvestReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::ContactSet;
    use crate::models::report::PackageSummary;

    fn sample_report() -> HarvestReport {
        let emails = ContactSet::from(["a@x.com".to_string()]);
        HarvestReport {
            total_packages: 2,
            total_emails: 1,
            unique_emails: emails.clone(),
            package_details: vec![PackageSummary {
                package: "pkg-a".to_string(),
                emails,
                description: "first package".to_string(),
                downloads: 12,
            }],
        }
    }

    #[test]
    fn written_report_has_the_persisted_shape() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("report.json");

        write_report(&path, &sample_report()).expect("write should succeed");

        let raw = fs::read_to_string(&path).expect("read back");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");

        assert_eq!(value["total_packages"], 2);
        assert_eq!(value["total_emails"], 1);
        assert_eq!(value["unique_emails"], serde_json::json!(["a@x.com"]));
        assert_eq!(value["package_details"][0]["package"], "pkg-a");
        assert_eq!(value["package_details"][0]["emails"], serde_json::json!(["a@x.com"]));
        assert_eq!(value["package_details"][0]["description"], "first package");
        assert_eq!(value["package_details"][0]["downloads"], 12);
    }

    #[test]
    fn writing_overwrites_an_existing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("report.json");
        fs::write(&path, "stale contents").expect("seed file");

        write_report(&path, &sample_report()).expect("write should succeed");

        let raw = fs::read_to_string(&path).expect("read back");
        assert!(raw.starts_with('{'));
        assert!(!raw.contains("stale contents"));
    }
}
