//! Aggregate totals over a campaign set.

use adboard_core::types::{AggregateTotals, Campaign};

/// Neumaier-compensated summation. Spend accumulates across campaigns in
/// whatever order the caller supplies; compensation keeps the result
/// independent of that order to within one ulp.
fn stable_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for value in values {
        let t = sum + value;
        if sum.abs() >= value.abs() {
            compensation += (sum - t) + value;
        } else {
            compensation += (value - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}

/// Ratio of two aggregates, `0.0` when the denominator is zero. The
/// aggregation core is total: no NaN or infinity ever escapes.
pub(crate) fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Sums the four base metrics and derives the aggregate ratios from those
/// sums, never by averaging per-campaign ratios.
///
/// `roas` is the exception: it is the unweighted arithmetic mean of each
/// campaign's own roas, independent of spend.
pub fn calculate_totals(campaigns: &[Campaign]) -> AggregateTotals {
    let spend = stable_sum(campaigns.iter().map(|c| c.metrics.spend));
    let impressions: u64 = campaigns.iter().map(|c| c.metrics.impressions).sum();
    let clicks: u64 = campaigns.iter().map(|c| c.metrics.clicks).sum();
    let conversions: u64 = campaigns.iter().map(|c| c.metrics.conversions).sum();

    AggregateTotals {
        spend,
        impressions,
        clicks,
        conversions,
        cpm: guarded_ratio(spend * 1000.0, impressions as f64),
        cpc: guarded_ratio(spend, clicks as f64),
        ctr: guarded_ratio(clicks as f64 * 100.0, impressions as f64),
        cpa: guarded_ratio(spend, conversions as f64),
        conversion_rate: guarded_ratio(conversions as f64 * 100.0, clicks as f64),
        roas: average_roas(campaigns),
    }
}

fn average_roas(campaigns: &[Campaign]) -> f64 {
    if campaigns.is_empty() {
        return 0.0;
    }
    let total: f64 = campaigns.iter().map(|c| c.metrics.roas).sum();
    total / campaigns.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use adboard_core::types::{CampaignId, CampaignMetrics, Objective, Platform};

    fn campaign(id: &str, spend: f64, impressions: u64, clicks: u64, conversions: u64, roas: f64) -> Campaign {
        Campaign {
            id: CampaignId::new(id),
            name: format!("Campaign {id}"),
            platform: Platform::Facebook,
            objective: Objective::Sales,
            start_date: "2024-01-01".parse().unwrap(),
            end_date: "2024-01-31".parse().unwrap(),
            metrics: CampaignMetrics {
                spend,
                impressions,
                clicks,
                conversions,
                // Per-campaign ratios are producer-supplied; the aggregator
                // must ignore them for everything except roas.
                cpm: 999.0,
                cpc: 999.0,
                ctr: 999.0,
                cpa: 999.0,
                conversion_rate: 999.0,
                roas,
                cost_per_lead: None,
                reach: None,
                video_views: None,
                engagement: None,
            },
        }
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let totals = calculate_totals(&[]);
        assert_eq!(totals, AggregateTotals::default());
        assert_eq!(totals.roas, 0.0);
    }

    #[test]
    fn test_ratios_derive_from_sums() {
        // Mixed-zero inputs: spend [100, 200, 0], impressions [1000, 0, 500].
        let campaigns = vec![
            campaign("a", 100.0, 1000, 0, 0, 0.0),
            campaign("b", 200.0, 0, 0, 0, 0.0),
            campaign("c", 0.0, 500, 0, 0, 0.0),
        ];

        let totals = calculate_totals(&campaigns);
        assert_eq!(totals.spend, 300.0);
        assert_eq!(totals.impressions, 1500);
        assert_eq!(totals.cpm, 200.0);
        // Zero clicks: cpc and conversion_rate guard to 0, not NaN.
        assert_eq!(totals.cpc, 0.0);
        assert_eq!(totals.conversion_rate, 0.0);
    }

    #[test]
    fn test_zero_guards_never_produce_nan_or_infinity() {
        let campaigns = vec![campaign("a", 100.0, 0, 0, 0, 1.0)];
        let totals = calculate_totals(&campaigns);

        for value in [totals.cpm, totals.cpc, totals.ctr, totals.cpa, totals.conversion_rate] {
            assert_eq!(value, 0.0);
            assert!(value.is_finite());
        }
    }

    #[test]
    fn test_additivity_of_base_sums() {
        let group_a = vec![
            campaign("a", 123.45, 10_000, 350, 21, 2.0),
            campaign("b", 67.89, 5_500, 120, 8, 3.0),
        ];
        let group_b = vec![campaign("c", 910.11, 80_000, 2_400, 190, 4.0)];
        let whole: Vec<Campaign> = group_a.iter().chain(group_b.iter()).cloned().collect();

        let a = calculate_totals(&group_a);
        let b = calculate_totals(&group_b);
        let total = calculate_totals(&whole);

        assert!((total.spend - (a.spend + b.spend)).abs() < 1e-9);
        assert_eq!(total.impressions, a.impressions + b.impressions);
        assert_eq!(total.clicks, a.clicks + b.clicks);
        assert_eq!(total.conversions, a.conversions + b.conversions);
    }

    #[test]
    fn test_roas_is_unweighted_mean() {
        // Unequal spends: a spend-weighted average would not be 3.0.
        let campaigns = vec![
            campaign("a", 10.0, 1000, 100, 10, 2.0),
            campaign("b", 10_000.0, 1000, 100, 10, 4.0),
        ];

        let totals = calculate_totals(&campaigns);
        assert_eq!(totals.roas, 3.0);
    }

    #[test]
    fn test_derived_totals_ignore_per_campaign_ratios() {
        // Producer ratios are poisoned with 999 in the fixture; correct
        // aggregates must come out of the sums alone.
        let campaigns = vec![campaign("a", 100.0, 10_000, 400, 20, 2.5)];
        let totals = calculate_totals(&campaigns);

        assert_eq!(totals.cpm, 10.0);
        assert_eq!(totals.cpc, 0.25);
        assert_eq!(totals.ctr, 4.0);
        assert_eq!(totals.cpa, 5.0);
        assert_eq!(totals.conversion_rate, 5.0);
    }

    #[test]
    fn test_stable_sum_handles_magnitude_spread() {
        let values = [1e16, 1.0, -1e16, 1.0];
        assert_eq!(stable_sum(values.iter().copied()), 2.0);
    }
}
