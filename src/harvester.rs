//! Batch collection of contact fields across many packages.

use crate::extractor::{ContactSet, extract_contacts};
use crate::models::package::PackageRecord;
use crate::models::report::{HarvestReport, PackageSummary};
use crate::network::{RegistryClient, RegistryError};
use crate::ui::output;
use std::thread;
use std::time::Duration;

/// Pause between registry calls. Courtesy pacing only, not backpressure.
const FETCH_DELAY: Duration = Duration::from_millis(100);

/// Anything that can produce a package record for a name.
///
/// The live implementation is [`RegistryClient`]; tests substitute an
/// in-memory stub.
pub trait PackageSource {
    fn fetch_package(&self, name: &str) -> Result<PackageRecord, RegistryError>;
}

impl PackageSource for RegistryClient {
    fn fetch_package(&self, name: &str) -> Result<PackageRecord, RegistryError> {
        RegistryClient::fetch_package(self, name)
    }
}

/// Sequential driver that fetches each named package, extracts its
/// contacts, and folds everything into one [`HarvestReport`].
pub struct Harvester<S: PackageSource> {
    source: S,
    delay: Duration,
}

impl<S: PackageSource> Harvester<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            delay: FETCH_DELAY,
        }
    }

    /// Overrides the pacing delay between fetches.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Processes the names strictly in input order.
    ///
    /// A failed fetch is printed and skipped; it still counts toward
    /// `total_packages` but contributes no summary and no contacts. The
    /// pacing delay runs after every iteration.
    pub fn run(&self, names: &[String]) -> HarvestReport {
        let mut unique_emails = ContactSet::new();
        let mut package_details = Vec::new();

        for (position, name) in names.iter().enumerate() {
            output::print_progress(position + 1, names.len(), name);

            match self.source.fetch_package(name) {
                Ok(record) => {
                    let emails = extract_contacts(&record);
                    unique_emails.extend(emails.iter().cloned());
                    package_details.push(PackageSummary {
                        package: name.clone(),
                        emails,
                        description: record.description.unwrap_or_default(),
                        downloads: record.weekly_downloads,
                    });
                }
                Err(err) => output::print_fetch_skipped(name, &err),
            }

            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }

        HarvestReport {
            total_packages: names.len(),
            total_emails: unique_emails.len(),
            unique_emails,
            package_details,
        }
    }
}
