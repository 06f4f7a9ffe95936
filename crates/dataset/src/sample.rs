//! Built-in sample dataset: a month of Facebook and Google Ads activity.
//! Deterministic given `today`, so rendered views are reproducible in tests.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use adboard_core::types::{
    Campaign, CampaignId, CampaignMetrics, DailyMetric, Dataset, Engagement, Objective, Platform,
};

/// Length of the sample window in days; the series spans `today - 30`
/// through `today` inclusive.
const WINDOW_DAYS: i64 = 30;

pub fn sample_dataset(today: NaiveDate) -> Dataset {
    Dataset {
        campaigns: sample_campaigns(today),
        daily_metrics: sample_daily_metrics(today),
    }
}

pub fn sample_campaigns(today: NaiveDate) -> Vec<Campaign> {
    let day = |offset: i64| today - Duration::days(WINDOW_DAYS - offset);

    vec![
        Campaign {
            id: CampaignId::new("fb-campaign-1"),
            name: "Summer Sale Promotion".to_string(),
            platform: Platform::Facebook,
            objective: Objective::Sales,
            start_date: day(0),
            end_date: day(30),
            metrics: CampaignMetrics {
                spend: 1250.45,
                impressions: 185_000,
                clicks: 4_350,
                conversions: 218,
                cpm: 6.76,
                cpc: 0.29,
                ctr: 2.35,
                cpa: 5.73,
                conversion_rate: 5.01,
                roas: 3.8,
                cost_per_lead: None,
                reach: Some(94_500),
                video_views: None,
                engagement: Some(Engagement {
                    likes: 1_450,
                    comments: 320,
                    shares: 175,
                }),
            },
        },
        Campaign {
            id: CampaignId::new("fb-campaign-2"),
            name: "Lead Generation Campaign".to_string(),
            platform: Platform::Facebook,
            objective: Objective::Leads,
            start_date: day(5),
            end_date: day(30),
            metrics: CampaignMetrics {
                spend: 850.20,
                impressions: 120_000,
                clicks: 3_100,
                conversions: 310,
                cpm: 7.08,
                cpc: 0.27,
                ctr: 2.58,
                cpa: 2.74,
                conversion_rate: 10.00,
                roas: 2.1,
                cost_per_lead: Some(2.74),
                reach: Some(65_000),
                video_views: None,
                engagement: Some(Engagement {
                    likes: 980,
                    comments: 210,
                    shares: 95,
                }),
            },
        },
        Campaign {
            id: CampaignId::new("fb-campaign-3"),
            name: "Brand Awareness".to_string(),
            platform: Platform::Facebook,
            objective: Objective::Awareness,
            start_date: day(10),
            end_date: day(30),
            metrics: CampaignMetrics {
                spend: 650.80,
                impressions: 220_000,
                clicks: 2_200,
                conversions: 45,
                cpm: 2.96,
                cpc: 0.30,
                ctr: 1.00,
                cpa: 14.46,
                conversion_rate: 2.05,
                roas: 1.2,
                cost_per_lead: None,
                reach: Some(145_000),
                video_views: Some(65_000),
                engagement: Some(Engagement {
                    likes: 2_350,
                    comments: 450,
                    shares: 320,
                }),
            },
        },
        Campaign {
            id: CampaignId::new("g-campaign-1"),
            name: "Search - Brand Terms".to_string(),
            platform: Platform::Google,
            objective: Objective::Traffic,
            start_date: day(0),
            end_date: day(30),
            metrics: CampaignMetrics {
                spend: 980.25,
                impressions: 45_000,
                clicks: 5_800,
                conversions: 195,
                cpm: 21.78,
                cpc: 0.17,
                ctr: 12.89,
                cpa: 5.03,
                conversion_rate: 3.36,
                roas: 4.2,
                cost_per_lead: None,
                reach: None,
                video_views: None,
                engagement: None,
            },
        },
        Campaign {
            id: CampaignId::new("g-campaign-2"),
            name: "Search - Product Terms".to_string(),
            platform: Platform::Google,
            objective: Objective::Sales,
            start_date: day(5),
            end_date: day(30),
            metrics: CampaignMetrics {
                spend: 1580.60,
                impressions: 68_000,
                clicks: 4_200,
                conversions: 285,
                cpm: 23.24,
                cpc: 0.38,
                ctr: 6.18,
                cpa: 5.55,
                conversion_rate: 6.79,
                roas: 5.1,
                cost_per_lead: None,
                reach: None,
                video_views: None,
                engagement: None,
            },
        },
        Campaign {
            id: CampaignId::new("g-campaign-3"),
            name: "Display Remarketing".to_string(),
            platform: Platform::Google,
            objective: Objective::Leads,
            start_date: day(10),
            end_date: day(30),
            metrics: CampaignMetrics {
                spend: 720.35,
                impressions: 195_000,
                clicks: 1_850,
                conversions: 135,
                cpm: 3.69,
                cpc: 0.39,
                ctr: 0.95,
                cpa: 5.34,
                conversion_rate: 7.30,
                roas: 2.8,
                cost_per_lead: Some(5.34),
                reach: None,
                video_views: None,
                engagement: None,
            },
        },
    ]
}

/// Daily series over the sample window: a sine wave plus weekend damping
/// over a slow upward trend, rounded the way the figures would arrive from
/// an ads API (spend to cents, counts to integers).
pub fn sample_daily_metrics(today: NaiveDate) -> Vec<DailyMetric> {
    (0..=WINDOW_DAYS)
        .map(|i| {
            let date = today - Duration::days(WINDOW_DAYS - i);
            let wave = (i as f64 / 5.0).sin() * 0.3 + 1.0;
            let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
            let shape = wave * if weekend { 0.7 } else { 1.0 };

            DailyMetric {
                date,
                spend: ((200.0 + i as f64 * 2.0) * shape * 100.0).round() / 100.0,
                impressions: ((28_000.0 + i as f64 * 500.0) * shape).round() as u64,
                clicks: ((750.0 + i as f64 * 15.0) * shape).round() as u64,
                conversions: ((38.0 + i as f64 * 0.8) * shape).round() as u64,
            }
        })
        .collect()
}
