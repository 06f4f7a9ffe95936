//! Ingestion-side validation. The aggregation engine trusts its inputs;
//! anything crossing the import boundary is checked here first.

use chrono::NaiveDate;
use thiserror::Error;

use adboard_core::types::Campaign;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("campaign {id}: start date {start} is after end date {end}")]
    DateOrder {
        id: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("campaign {id}: negative spend {spend}")]
    NegativeSpend { id: String, spend: f64 },

    #[error("campaign {id}: derived metric {field} is not finite")]
    NonFinite { id: String, field: &'static str },
}

/// Checks the schema invariants the engine assumes: date ordering,
/// non-negative spend, finite producer-derived ratios.
pub fn validate_campaign(campaign: &Campaign) -> Result<(), ValidationError> {
    if campaign.start_date > campaign.end_date {
        return Err(ValidationError::DateOrder {
            id: campaign.id.to_string(),
            start: campaign.start_date,
            end: campaign.end_date,
        });
    }

    let m = &campaign.metrics;
    if m.spend < 0.0 {
        return Err(ValidationError::NegativeSpend {
            id: campaign.id.to_string(),
            spend: m.spend,
        });
    }

    let derived = [
        ("cpm", m.cpm),
        ("cpc", m.cpc),
        ("ctr", m.ctr),
        ("cpa", m.cpa),
        ("conversion_rate", m.conversion_rate),
        ("roas", m.roas),
    ];
    for (field, value) in derived {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite {
                id: campaign.id.to_string(),
                field,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adboard_core::types::{CampaignId, CampaignMetrics, Objective, Platform};

    fn valid_campaign() -> Campaign {
        Campaign {
            id: CampaignId::new("fb-1"),
            name: "Test".to_string(),
            platform: Platform::Facebook,
            objective: Objective::Sales,
            start_date: "2024-01-01".parse().unwrap(),
            end_date: "2024-01-31".parse().unwrap(),
            metrics: CampaignMetrics {
                spend: 100.0,
                impressions: 10_000,
                clicks: 200,
                conversions: 10,
                cpm: 10.0,
                cpc: 0.5,
                ctr: 2.0,
                cpa: 10.0,
                conversion_rate: 5.0,
                roas: 2.0,
                cost_per_lead: None,
                reach: None,
                video_views: None,
                engagement: None,
            },
        }
    }

    #[test]
    fn test_valid_campaign_passes() {
        assert!(validate_campaign(&valid_campaign()).is_ok());
    }

    #[test]
    fn test_inverted_dates_rejected() {
        let mut campaign = valid_campaign();
        campaign.start_date = "2024-02-01".parse().unwrap();
        let err = validate_campaign(&campaign).unwrap_err();
        assert!(matches!(err, ValidationError::DateOrder { .. }));
    }

    #[test]
    fn test_negative_spend_rejected() {
        let mut campaign = valid_campaign();
        campaign.metrics.spend = -1.0;
        let err = validate_campaign(&campaign).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeSpend { .. }));
    }

    #[test]
    fn test_non_finite_derived_metric_rejected() {
        let mut campaign = valid_campaign();
        campaign.metrics.cpa = f64::INFINITY;
        let err = validate_campaign(&campaign).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonFinite {
                id: "fb-1".to_string(),
                field: "cpa"
            }
        );
    }
}
