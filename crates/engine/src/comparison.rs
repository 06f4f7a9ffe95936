//! Per-platform totals and the cross-platform comparison rows.

use adboard_core::types::{Campaign, Platform, PlatformComparison};

use crate::totals::guarded_ratio;

/// Base-metric sums for one platform.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlatformTotals {
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
}

/// Sums the four base metrics across all campaigns of `platform`.
pub fn platform_totals(campaigns: &[Campaign], platform: Platform) -> PlatformTotals {
    campaigns
        .iter()
        .filter(|c| c.platform == platform)
        .fold(PlatformTotals::default(), |mut acc, c| {
            acc.spend += c.metrics.spend;
            acc.impressions += c.metrics.impressions;
            acc.clicks += c.metrics.clicks;
            acc.conversions += c.metrics.conversions;
            acc
        })
}

/// One row per supported platform, in `Platform::ALL` order. A platform with
/// no campaigns still gets a row of zeroes. Ratios come from the sums with
/// the same zero-guards as the aggregate totals, never from averaging
/// per-campaign ratios.
pub fn platform_comparison(campaigns: &[Campaign]) -> Vec<PlatformComparison> {
    Platform::ALL
        .iter()
        .map(|&platform| {
            let totals = platform_totals(campaigns, platform);
            PlatformComparison {
                platform,
                spend: totals.spend,
                impressions: totals.impressions,
                clicks: totals.clicks,
                conversions: totals.conversions,
                cpm: guarded_ratio(totals.spend * 1000.0, totals.impressions as f64),
                cpc: guarded_ratio(totals.spend, totals.clicks as f64),
                ctr: guarded_ratio(totals.clicks as f64 * 100.0, totals.impressions as f64),
                cpa: guarded_ratio(totals.spend, totals.conversions as f64),
            }
        })
        .collect()
}
