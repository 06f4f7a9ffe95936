//! Dashboard view derivation — the pure replacement for a filter-driven
//! re-render loop. The presentation layer calls [`derive_view`] on every
//! filter change and renders from the result; there is no hidden state.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use adboard_core::filter::FilterOptions;
use adboard_core::types::{
    AggregateTotals, Campaign, CampaignId, DailyMetric, Dataset, Platform, PlatformComparison,
};

use crate::comparison::platform_comparison;
use crate::filter::{filter_campaigns, filter_daily_metrics};
use crate::totals::{calculate_totals, guarded_ratio};

/// Everything the presentation layer renders for one filter state.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub campaigns: Vec<Campaign>,
    pub daily_metrics: Vec<DailyMetric>,
    pub totals: AggregateTotals,
    pub platform_comparison: Vec<PlatformComparison>,
    pub generated_at: DateTime<Utc>,
}

/// Derives the full dashboard view from a dataset snapshot and the active
/// filter. Comparison rows are computed from the filtered campaign set;
/// callers that want whole-dataset rows call [`platform_comparison`]
/// directly with the unfiltered campaigns.
pub fn derive_view(dataset: &Dataset, filters: &FilterOptions) -> DashboardView {
    let campaigns = filter_campaigns(&dataset.campaigns, filters);
    let daily_metrics = filter_daily_metrics(&dataset.daily_metrics, &filters.date_range);
    let totals = calculate_totals(&campaigns);
    let comparison = platform_comparison(&campaigns);

    DashboardView {
        campaigns,
        daily_metrics,
        totals,
        platform_comparison: comparison,
        generated_at: Utc::now(),
    }
}

/// Per-campaign spend with its share of the set's total.
#[derive(Debug, Clone, Serialize)]
pub struct SpendShare {
    pub campaign_id: CampaignId,
    pub name: String,
    pub platform: Platform,
    pub spend: f64,
    pub share_pct: f64,
}

/// Spend breakdown rows for the distribution chart. Shares are zero when
/// total spend is zero.
pub fn spend_distribution(campaigns: &[Campaign]) -> Vec<SpendShare> {
    let total: f64 = campaigns.iter().map(|c| c.metrics.spend).sum();
    campaigns
        .iter()
        .map(|c| SpendShare {
            campaign_id: c.id.clone(),
            name: c.name.clone(),
            platform: c.platform,
            spend: c.metrics.spend,
            share_pct: guarded_ratio(c.metrics.spend * 100.0, total),
        })
        .collect()
}

/// Metric selectable for per-campaign ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    Spend,
    Cpm,
    Cpc,
    Ctr,
    Cpa,
    Conversions,
}

impl MetricKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Spend => "spend",
            MetricKey::Cpm => "cpm",
            MetricKey::Cpc => "cpc",
            MetricKey::Ctr => "ctr",
            MetricKey::Cpa => "cpa",
            MetricKey::Conversions => "conversions",
        }
    }

    fn value_of(self, campaign: &Campaign) -> f64 {
        let m = &campaign.metrics;
        match self {
            MetricKey::Spend => m.spend,
            MetricKey::Cpm => m.cpm,
            MetricKey::Cpc => m.cpc,
            MetricKey::Ctr => m.ctr,
            MetricKey::Cpa => m.cpa,
            MetricKey::Conversions => m.conversions as f64,
        }
    }
}

impl FromStr for MetricKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spend" => Ok(MetricKey::Spend),
            "cpm" => Ok(MetricKey::Cpm),
            "cpc" => Ok(MetricKey::Cpc),
            "ctr" => Ok(MetricKey::Ctr),
            "cpa" => Ok(MetricKey::Cpa),
            "conversions" => Ok(MetricKey::Conversions),
            other => Err(format!(
                "unknown metric '{other}' (expected spend|cpm|cpc|ctr|cpa|conversions)"
            )),
        }
    }
}

/// One row of the per-campaign metric ranking.
#[derive(Debug, Clone, Serialize)]
pub struct MetricRankRow {
    pub campaign_id: CampaignId,
    pub name: String,
    pub platform: Platform,
    pub metric: MetricKey,
    pub value: f64,
}

/// Per-campaign values of one metric, highest first. The sort is stable, so
/// ties keep input order.
pub fn rank_by_metric(campaigns: &[Campaign], metric: MetricKey) -> Vec<MetricRankRow> {
    let mut rows: Vec<MetricRankRow> = campaigns
        .iter()
        .map(|c| MetricRankRow {
            campaign_id: c.id.clone(),
            name: c.name.clone(),
            platform: c.platform,
            metric,
            value: metric.value_of(c),
        })
        .collect();
    rows.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use adboard_core::filter::{DateRange, Selection};
    use adboard_core::types::{CampaignMetrics, Objective};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn campaign(id: &str, platform: Platform, spend: f64) -> Campaign {
        Campaign {
            id: CampaignId::new(id),
            name: format!("Campaign {id}"),
            platform,
            objective: Objective::Sales,
            start_date: date("2024-01-01"),
            end_date: date("2024-01-31"),
            metrics: CampaignMetrics {
                spend,
                impressions: 10_000,
                clicks: 200,
                conversions: 10,
                cpm: spend / 10.0,
                cpc: spend / 200.0,
                ctr: 2.0,
                cpa: spend / 10.0,
                conversion_rate: 5.0,
                roas: 2.0,
                cost_per_lead: None,
                reach: None,
                video_views: None,
                engagement: None,
            },
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            campaigns: vec![
                campaign("fb-1", Platform::Facebook, 100.0),
                campaign("fb-2", Platform::Facebook, 300.0),
                campaign("g-1", Platform::Google, 600.0),
            ],
            daily_metrics: vec![
                DailyMetric {
                    date: date("2024-01-05"),
                    spend: 50.0,
                    impressions: 1_000,
                    clicks: 20,
                    conversions: 2,
                },
                DailyMetric {
                    date: date("2024-01-20"),
                    spend: 70.0,
                    impressions: 1_500,
                    clicks: 30,
                    conversions: 3,
                },
            ],
        }
    }

    #[test]
    fn test_derive_view_composes_filter_and_aggregation() {
        let view = derive_view(&dataset(), &FilterOptions::select_all());
        assert_eq!(view.campaigns.len(), 3);
        assert_eq!(view.daily_metrics.len(), 2);
        assert_eq!(view.totals.spend, 1000.0);
        assert_eq!(view.platform_comparison.len(), 2);
    }

    #[test]
    fn test_comparison_reacts_to_filter() {
        let filters = FilterOptions {
            platforms: Selection::specific([Platform::Facebook]),
            ..FilterOptions::select_all()
        };
        let view = derive_view(&dataset(), &filters);

        // Google row still exists but is zeroed: the comparison is computed
        // from the filtered set.
        let google = &view.platform_comparison[1];
        assert_eq!(google.platform, Platform::Google);
        assert_eq!(google.spend, 0.0);

        let facebook = &view.platform_comparison[0];
        assert_eq!(facebook.spend, 400.0);
    }

    #[test]
    fn test_date_filter_restricts_daily_series() {
        let filters = FilterOptions {
            date_range: DateRange::new(Some(date("2024-01-10")), None),
            ..FilterOptions::select_all()
        };
        let view = derive_view(&dataset(), &filters);
        assert_eq!(view.daily_metrics.len(), 1);
        assert_eq!(view.daily_metrics[0].date, date("2024-01-20"));
    }

    #[test]
    fn test_spend_distribution_shares_sum_to_hundred() {
        let rows = spend_distribution(&dataset().campaigns);
        let total_pct: f64 = rows.iter().map(|r| r.share_pct).sum();
        assert!((total_pct - 100.0).abs() < 1e-9);
        assert_eq!(rows[2].share_pct, 60.0);
    }

    #[test]
    fn test_spend_distribution_zero_total() {
        let campaigns = vec![campaign("a", Platform::Facebook, 0.0)];
        let rows = spend_distribution(&campaigns);
        assert_eq!(rows[0].share_pct, 0.0);
    }

    #[test]
    fn test_rank_by_metric_sorts_descending() {
        let rows = rank_by_metric(&dataset().campaigns, MetricKey::Spend);
        let ids: Vec<_> = rows.iter().map(|r| r.campaign_id.as_str()).collect();
        assert_eq!(ids, vec!["g-1", "fb-2", "fb-1"]);
    }
}
