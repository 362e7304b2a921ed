use crate::extractor::ContactSet;
use serde::Serialize;

/// What one successfully fetched package contributed to a harvest run.
///
/// Built once per package and never mutated afterwards. Packages whose fetch
/// failed get no summary at all.
#[derive(Debug, Clone, Serialize)]
pub struct PackageSummary {
    pub package: String,
    pub emails: ContactSet,
    pub description: String,
    pub downloads: u64,
}

/// Aggregate result of a harvest run, serialized as the persisted report.
///
/// `total_packages` counts attempted fetches, including failed ones, while
/// `package_details` holds an entry per successful fetch only. Every string
/// in `unique_emails` appears in at least one summary's `emails` set.
#[derive(Debug, Serialize)]
pub struct HarvestReport {
    pub total_packages: usize,
    pub total_emails: usize,
    pub unique_emails: ContactSet,
    pub package_details: Vec<PackageSummary>,
}
