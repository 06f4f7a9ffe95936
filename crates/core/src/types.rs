use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Supported advertising platforms. The set is fixed: comparison views
/// produce one row per member regardless of what the dataset contains.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Google,
}

impl Platform {
    /// All supported platforms, in display order.
    pub const ALL: [Platform; 2] = [Platform::Facebook, Platform::Google];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Google => "google",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "facebook" => Ok(Platform::Facebook),
            "google" => Ok(Platform::Google),
            other => Err(format!("unknown platform '{other}' (expected facebook|google)")),
        }
    }
}

/// Campaign goal category. Used for filtering and display, never for
/// computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Leads,
    Sales,
    Traffic,
    Awareness,
}

impl Objective {
    pub const ALL: [Objective; 4] = [
        Objective::Leads,
        Objective::Sales,
        Objective::Traffic,
        Objective::Awareness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::Leads => "leads",
            Objective::Sales => "sales",
            Objective::Traffic => "traffic",
            Objective::Awareness => "awareness",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Objective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leads" => Ok(Objective::Leads),
            "sales" => Ok(Objective::Sales),
            "traffic" => Ok(Objective::Traffic),
            "awareness" => Ok(Objective::Awareness),
            other => Err(format!(
                "unknown objective '{other}' (expected leads|sales|traffic|awareness)"
            )),
        }
    }
}

/// Stable campaign identifier, unique within a dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct CampaignId(pub String);

impl CampaignId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Social engagement counters, reported only by platforms that track them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Engagement {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// Measured and producer-derived performance for one campaign.
///
/// The per-campaign ratios (`cpm` through `roas`) are computed by whichever
/// pipeline produced the campaign and trusted as-is; the engine only derives
/// aggregate ratios from summed bases. Optional fields mean "not reported for
/// this objective/platform": absence is meaningful and never collapsed to
/// zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignMetrics {
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub cpm: f64,
    pub cpc: f64,
    pub ctr: f64,
    pub cpa: f64,
    pub conversion_rate: f64,
    pub roas: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_lead: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<Engagement>,
}

/// One advertising campaign with its attached metrics.
///
/// Invariant `start_date <= end_date` is enforced at the ingestion boundary,
/// not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub platform: Platform,
    pub objective: Objective,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub metrics: CampaignMetrics,
}

/// One calendar day's rollup across all campaigns. Series are ordered by
/// `date` ascending; missing days are simply absent, never gap-filled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyMetric {
    pub date: NaiveDate,
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
}

/// Aggregate totals over a campaign set.
///
/// The five rate fields are derived from the summed bases; `roas` is the
/// unweighted mean of each campaign's own roas.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AggregateTotals {
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub cpm: f64,
    pub cpc: f64,
    pub ctr: f64,
    pub cpa: f64,
    pub conversion_rate: f64,
    pub roas: f64,
}

/// One comparison row per supported platform: base sums plus ratios derived
/// from those sums.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformComparison {
    pub platform: Platform,
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub cpm: f64,
    pub cpc: f64,
    pub ctr: f64,
    pub cpa: f64,
}

/// Immutable input snapshot handed to the engine: the full campaign
/// collection and the account-level daily series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub daily_metrics: Vec<DailyMetric>,
}
