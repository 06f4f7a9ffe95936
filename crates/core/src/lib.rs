//! Core domain types for the AdBoard campaign performance dashboard.

pub mod config;
pub mod error;
pub mod filter;
pub mod types;

pub use config::AppConfig;
pub use error::{DashboardError, DashboardResult};
pub use filter::{DateRange, FilterOptions, Selection};
pub use types::{
    AggregateTotals, Campaign, CampaignId, CampaignMetrics, DailyMetric, Dataset, Engagement,
    Objective, Platform, PlatformComparison,
};
