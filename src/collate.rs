use crate::types::{Report, Variant};

/// Order reports for the document and keep only their descriptions.
///
/// `Basic` keeps scan order. `Timestamped` sorts ascending by timestamp;
/// the sort is stable, so equal timestamps stay in scan order.
pub fn collate(mut reports: Vec<Report>, variant: Variant) -> Vec<String> {
    if variant.requires_timestamp() {
        reports.sort_by_key(|r| r.timestamp);
    }
    reports.into_iter().map(|r| r.description).collect()
}
