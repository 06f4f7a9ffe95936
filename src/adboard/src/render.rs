//! Plain-text rendering of engine outputs. Formatting and locale belong
//! here, never in the engine.

use adboard_core::types::Campaign;
use adboard_engine::{rank_by_metric, spend_distribution, DashboardView, MetricKey};

pub fn print_dashboard(view: &DashboardView, metric: Option<MetricKey>) {
    let t = &view.totals;

    println!(
        "Ads Performance Dashboard: {} campaigns, {} days",
        view.campaigns.len(),
        view.daily_metrics.len()
    );
    println!();
    println!("  Spend         ${:>14.2}", t.spend);
    println!("  Impressions   {:>15}", t.impressions);
    println!("  Clicks        {:>15}", t.clicks);
    println!("  Conversions   {:>15}", t.conversions);
    println!("  CPM           ${:>14.2}", t.cpm);
    println!("  CPC           ${:>14.2}", t.cpc);
    println!("  CTR           {:>14.2}%", t.ctr);
    println!("  CPA           ${:>14.2}", t.cpa);
    println!("  Conv. rate    {:>14.2}%", t.conversion_rate);
    println!("  ROAS          {:>15.2}", t.roas);
    println!();

    println!(
        "{:<10} {:>12} {:>12} {:>9} {:>12} {:>8} {:>7} {:>7} {:>8}",
        "platform", "spend", "impressions", "clicks", "conversions", "cpm", "cpc", "ctr", "cpa"
    );
    for row in &view.platform_comparison {
        println!(
            "{:<10} {:>12.2} {:>12} {:>9} {:>12} {:>8.2} {:>7.2} {:>6.2}% {:>8.2}",
            row.platform.as_str(),
            row.spend,
            row.impressions,
            row.clicks,
            row.conversions,
            row.cpm,
            row.cpc,
            row.ctr,
            row.cpa
        );
    }
    println!();

    println!("Spend distribution");
    for share in spend_distribution(&view.campaigns) {
        println!(
            "  {:<28} {:<9} ${:>10.2}  {:>5.1}%",
            truncate(&share.name, 28),
            share.platform.as_str(),
            share.spend,
            share.share_pct
        );
    }

    if let Some(metric) = metric {
        println!();
        println!("Campaigns by {}", metric.as_str());
        for row in rank_by_metric(&view.campaigns, metric) {
            println!(
                "  {:<28} {:<9} {:>12.2}",
                truncate(&row.name, 28),
                row.platform.as_str(),
                row.value
            );
        }
    }
}

pub fn print_import_summary(campaigns: &[Campaign]) {
    println!("Imported {} campaigns:", campaigns.len());
    for c in campaigns {
        println!(
            "  {:<44} {:<9} {:<9} {} → {}  ${:>9.2}",
            truncate(c.id.as_str(), 44),
            c.platform.as_str(),
            c.objective.as_str(),
            c.start_date,
            c.end_date,
            c.metrics.spend
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
