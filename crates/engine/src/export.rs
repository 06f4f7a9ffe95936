//! Flat-file export of the campaign table. Row rendering only — spreadsheet
//! and PDF generation stay with downstream tooling.

use std::fmt::Write as _;

use adboard_core::types::Campaign;

const CSV_HEADER: &str = "id,name,platform,objective,start_date,end_date,spend,impressions,clicks,conversions,cpm,cpc,ctr,cpa,conversion_rate,roas";

/// Renders campaigns as CSV, one row per campaign in input order. Names are
/// quoted with embedded quotes doubled per RFC 4180.
pub fn campaigns_to_csv(campaigns: &[Campaign]) -> String {
    let mut out = String::with_capacity(128 * (campaigns.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for c in campaigns {
        let m = &c.metrics;
        let _ = writeln!(
            out,
            "{},\"{}\",{},{},{},{},{:.2},{},{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            c.id,
            c.name.replace('"', "\"\""),
            c.platform,
            c.objective,
            c.start_date,
            c.end_date,
            m.spend,
            m.impressions,
            m.clicks,
            m.conversions,
            m.cpm,
            m.cpc,
            m.ctr,
            m.cpa,
            m.conversion_rate,
            m.roas,
        );
    }
    out
}
