//! Pure campaign metrics engine — filtering, aggregation, and comparison
//! views over immutable dataset snapshots.
//!
//! Every function here is total and side-effect free: inputs are read-only,
//! outputs are freshly allocated, and division by zero resolves to `0.0`
//! rather than an error. Callers re-invoke the engine on every filter change;
//! no state persists between calls.

pub mod comparison;
pub mod export;
pub mod filter;
pub mod totals;
pub mod view;

pub use comparison::{platform_comparison, platform_totals, PlatformTotals};
pub use export::campaigns_to_csv;
pub use filter::{filter_campaigns, filter_daily_metrics};
pub use totals::calculate_totals;
pub use view::{
    derive_view, rank_by_metric, spend_distribution, DashboardView, MetricKey, MetricRankRow,
    SpendShare,
};
