mod icon;

pub use icon::IconKey;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Commercial,
    Penthouse,
    Villa,
    Shop,
    Office,
}

/// Construction / sales status of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Upcoming,
    Completed,
    Available,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Commercial => "commercial",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Villa => "villa",
            PropertyType::Shop => "shop",
            PropertyType::Office => "office",
        };
        f.write_str(label)
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PropertyStatus::Upcoming => "upcoming",
            PropertyStatus::Completed => "completed",
            PropertyStatus::Available => "available",
        };
        f.write_str(label)
    }
}

/// A feature or amenity line shown on a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Highlight {
    pub icon: IconKey,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyImage {
    pub src: String,
    pub alt: String,
}

/// One way of paying for a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Percentage of the price paid upfront (0-100)
    pub down_payment: f64,
    /// Number of monthly installments; 0 means full cash settlement
    pub installment_period: u32,
    /// Annual percentage rate on the financed remainder
    pub interest_rate: f64,
    /// Cash discount percentage, only honoured when `down_payment == 100`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl PaymentPlan {
    pub fn is_cash(&self) -> bool {
        self.down_payment == 100.0
    }

    pub fn is_financed(&self) -> bool {
        self.installment_period > 0
    }

    /// Discount that actually applies to this plan's price
    pub fn applicable_discount(&self) -> f64 {
        if self.is_cash() {
            self.discount.unwrap_or(0.0)
        } else {
            0.0
        }
    }

    pub fn shows_interest_badge(&self) -> bool {
        self.interest_rate > 0.0
    }

    pub fn shows_discount_badge(&self) -> bool {
        self.discount.is_some_and(|d| d > 0.0)
    }
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub location: String,
    /// Base cash price in whole PKR
    pub price: i64,
    /// Covered area in square feet
    pub area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy_percentage: Option<u8>,
    pub features: Vec<Highlight>,
    pub amenities: Vec<Highlight>,
    pub images: Vec<PropertyImage>,
    pub payment_plans: Vec<PaymentPlan>,
    #[serde(default)]
    pub is_corner_unit: bool,
}

impl Property {
    /// Look up one of this property's plans by id
    pub fn plan(&self, plan_id: &str) -> Option<&PaymentPlan> {
        self.payment_plans.iter().find(|plan| plan.id == plan_id)
    }

    /// Plan preselected on the booking form
    pub fn default_plan(&self) -> Option<&PaymentPlan> {
        self.payment_plans.first()
    }

    /// Price per square foot, rounded to whole PKR
    pub fn price_per_sq_ft(&self) -> i64 {
        (self.price as f64 / self.area).round() as i64
    }

    pub fn cover_image(&self) -> Option<&PropertyImage> {
        self.images.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(down_payment: f64, installment_period: u32, discount: Option<f64>) -> PaymentPlan {
        PaymentPlan {
            id: "p".to_string(),
            name: "Plan".to_string(),
            description: String::new(),
            down_payment,
            installment_period,
            interest_rate: 10.0,
            discount,
        }
    }

    #[test]
    fn discount_only_applies_to_cash_plans() {
        assert_eq!(plan(100.0, 0, Some(5.0)).applicable_discount(), 5.0);
        assert_eq!(plan(20.0, 24, Some(5.0)).applicable_discount(), 0.0);
        assert_eq!(plan(100.0, 0, None).applicable_discount(), 0.0);
    }

    #[test]
    fn badges() {
        let cash = plan(100.0, 0, Some(5.0));
        assert!(cash.shows_discount_badge());
        assert!(cash.is_cash());
        assert!(!cash.is_financed());

        let financed = plan(20.0, 24, Some(0.0));
        assert!(!financed.shows_discount_badge());
        assert!(financed.shows_interest_badge());
        assert!(financed.is_financed());
    }

    #[test]
    fn plan_deserializes_camel_case_and_optional_discount() {
        let json = r#"{
            "id": "eh-2year",
            "name": "2 Year Plan",
            "description": "20% down payment + 24 monthly installments",
            "downPayment": 20,
            "installmentPeriod": 24,
            "interestRate": 10
        }"#;
        let plan: PaymentPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.down_payment, 20.0);
        assert_eq!(plan.installment_period, 24);
        assert_eq!(plan.discount, None);
    }
}
