//! Collects the maintainer and author contact fields that npm packages
//! expose through the public registry API.
//!
//! The crate ships two binaries: `lookup` reports the contact fields of a
//! single package, `harvest` sweeps the top packages from the search
//! endpoint and persists an aggregate JSON report.

pub mod extractor;
pub mod harvester;
pub mod models;
pub mod network;
pub mod ui;

// Re-export the main types for convenience
pub use extractor::{ContactSet, extract_contacts};
pub use harvester::{Harvester, PackageSource};
pub use models::report::{HarvestReport, PackageSummary};
pub use network::{RegistryClient, RegistryError};
