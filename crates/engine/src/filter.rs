//! Campaign and daily-series filtering.

use adboard_core::filter::{DateRange, FilterOptions};
use adboard_core::types::{Campaign, DailyMetric};

/// Returns the order-preserving subsequence of `campaigns` matching every
/// active criterion. Criteria AND together; within a selection, membership
/// is the OR.
///
/// The date criterion is an interval-overlap test: a campaign whose flight
/// is only partially inside the window passes.
pub fn filter_campaigns(campaigns: &[Campaign], filters: &FilterOptions) -> Vec<Campaign> {
    campaigns
        .iter()
        .filter(|c| {
            filters.date_range.overlaps(c.start_date, c.end_date)
                && filters.platforms.matches(&c.platform)
                && filters.campaigns.matches(&c.id)
                && filters.objectives.matches(&c.objective)
        })
        .cloned()
        .collect()
}

/// Restricts a daily series to the window. Containment, not overlap: each
/// entry carries a point date. An open range returns the input unchanged.
pub fn filter_daily_metrics(metrics: &[DailyMetric], range: &DateRange) -> Vec<DailyMetric> {
    if range.is_open() {
        return metrics.to_vec();
    }
    metrics
        .iter()
        .filter(|m| range.contains(m.date))
        .cloned()
        .collect()
}
