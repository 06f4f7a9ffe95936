//! Import entry points: read an export file, detect its format, and
//! synthesize placeholder campaigns for the detected platform.

use std::path::Path;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use adboard_core::types::{Campaign, CampaignId, CampaignMetrics, Objective};

use crate::detect::{detect_format, CsvFormat};
use crate::error::ImportError;
use crate::validate::validate_campaign;

/// Number of placeholder campaigns synthesized per import.
const STUB_CAMPAIGNS_PER_IMPORT: usize = 5;

/// Imports campaigns from an export file on disk. `today` anchors the
/// synthesized flight dates.
pub fn import_campaigns(path: &Path, today: NaiveDate) -> Result<Vec<Campaign>, ImportError> {
    let content = std::fs::read_to_string(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    import_from_str(file_name, &content, today)
}

/// Same pipeline on already-read content; the testable core of
/// [`import_campaigns`].
pub fn import_from_str(
    file_name: &str,
    content: &str,
    today: NaiveDate,
) -> Result<Vec<Campaign>, ImportError> {
    let format = detect_format(file_name, content)?;
    info!(file = file_name, format = ?format, "detected import format");

    let campaigns = synthesize_campaigns(format, today);
    for campaign in &campaigns {
        validate_campaign(campaign)?;
    }

    info!(count = campaigns.len(), "import complete");
    Ok(campaigns)
}

fn synthesize_campaigns(format: CsvFormat, today: NaiveDate) -> Vec<Campaign> {
    let mut rng = rand::thread_rng();
    let platform = format.platform();
    let prefix = match format {
        CsvFormat::FacebookAds => "fb",
        CsvFormat::GoogleAds => "google",
    };

    (0..STUB_CAMPAIGNS_PER_IMPORT)
        .map(|i| {
            let spend = rng.gen_range(50.0..2000.0);
            let impressions = rng.gen_range(5_000..100_000);
            let clicks = rng.gen_range(100..5_000);
            let conversions = rng.gen_range(0..200);
            let roas = rng.gen_range(0.5..6.0);
            let objective = Objective::ALL[rng.gen_range(0..Objective::ALL.len())];

            let mut metrics = compute_derived(spend, impressions, clicks, conversions, roas);
            if objective == Objective::Leads {
                // Lead campaigns report acquisition cost as cost-per-lead.
                metrics.cost_per_lead = Some(metrics.cpa);
            }

            Campaign {
                id: CampaignId::new(format!("{prefix}-import-{}", Uuid::new_v4())),
                name: format!("Imported {} campaign {}", platform, i + 1),
                platform,
                objective,
                start_date: today - Duration::days(30),
                end_date: today + Duration::days(30),
                metrics,
            }
        })
        .collect()
}

/// Producer-side derived-metric computation. The engine trusts these values
/// per campaign and only recomputes aggregates; every import path must go
/// through here so the zero-guards match the engine's.
pub fn compute_derived(
    spend: f64,
    impressions: u64,
    clicks: u64,
    conversions: u64,
    roas: f64,
) -> CampaignMetrics {
    CampaignMetrics {
        spend,
        impressions,
        clicks,
        conversions,
        cpm: if impressions > 0 {
            spend / impressions as f64 * 1000.0
        } else {
            0.0
        },
        cpc: if clicks > 0 { spend / clicks as f64 } else { 0.0 },
        ctr: if impressions > 0 {
            clicks as f64 / impressions as f64 * 100.0
        } else {
            0.0
        },
        cpa: if conversions > 0 {
            spend / conversions as f64
        } else {
            0.0
        },
        conversion_rate: if clicks > 0 {
            conversions as f64 / clicks as f64 * 100.0
        } else {
            0.0
        },
        roas,
        cost_per_lead: None,
        reach: None,
        video_views: None,
        engagement: None,
    }
}
