use crate::error::PricingError;
use crate::models::{Property, PropertyStatus, PropertyType};
use crate::pricing::format::{format_area, format_currency, format_price_per_sq_ft};
use crate::pricing::{self, PlanQuote};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A quote with display strings alongside the raw figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub name: String,
    pub description: String,
    pub down_payment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_installment: Option<String>,
    pub total_payable: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
    pub figures: PlanQuote,
}

/// Pricing snapshot of one listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyReport {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub location: String,
    pub price: String,
    pub area: String,
    pub price_per_sq_ft: String,
    pub plans: Vec<PlanSummary>,
    pub generated_at: DateTime<Utc>,
}

impl PropertyReport {
    pub fn build(property: &Property) -> Result<Self, PricingError> {
        let quotes = pricing::quote_all(property)?;
        let plans = property
            .payment_plans
            .iter()
            .zip(quotes)
            .map(|(plan, quote)| {
                let mut badges = Vec::new();
                if plan.shows_interest_badge() {
                    badges.push(format!("{}% Interest", plan.interest_rate));
                }
                if plan.shows_discount_badge() {
                    badges.push(format!("{}% Discount", plan.discount.unwrap_or_default()));
                }

                PlanSummary {
                    name: plan.name.clone(),
                    description: plan.description.clone(),
                    down_payment: format_currency(quote.down_payment as f64),
                    monthly_installment: plan
                        .is_financed()
                        .then(|| format_currency(quote.monthly_installment as f64)),
                    total_payable: format_currency(quote.total_payable as f64),
                    interest_amount: quote.interest_amount.map(|i| format_currency(i as f64)),
                    badges,
                    figures: quote,
                }
            })
            .collect();

        Ok(Self {
            id: property.id.clone(),
            slug: property.slug.clone(),
            title: property.title.clone(),
            property_type: property.property_type,
            status: property.status,
            location: property.location.clone(),
            price: format_currency(property.price as f64),
            area: format_area(property.area),
            price_per_sq_ft: format_price_per_sq_ft(property),
            plans,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinSource;

    #[test]
    fn emerald_heights_report() {
        let catalog = BuiltinSource::catalog().unwrap();
        let property = catalog.find_by_slug("emerald-heights").unwrap();
        let report = PropertyReport::build(property).unwrap();

        assert_eq!(report.price, "PKR 70,000,000");
        assert_eq!(report.area, "1,200 sq ft");
        assert_eq!(report.price_per_sq_ft, "58,333 PKR/sq ft");
        assert_eq!(report.plans.len(), 4);

        let cash = &report.plans[0];
        assert_eq!(cash.total_payable, "PKR 66,500,000");
        assert!(cash.monthly_installment.is_none());
        assert_eq!(cash.badges, vec!["5% Discount".to_string()]);

        let two_year = &report.plans[1];
        assert_eq!(two_year.down_payment, "PKR 14,000,000");
        assert_eq!(two_year.monthly_installment.as_deref(), Some("PKR 2,584,116"));
        assert_eq!(two_year.badges, vec!["10% Interest".to_string()]);
        assert!(two_year.interest_amount.is_some());
    }
}
