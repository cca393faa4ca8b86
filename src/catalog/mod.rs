//! Immutable property catalog.
//!
//! A [`Catalog`] is validated once when it is built and never mutated
//! afterwards; callers share it by reference.

pub mod builtin;
pub mod file;
pub mod traits;

pub use builtin::BuiltinSource;
pub use file::JsonFileSource;
pub use traits::CatalogSource;

use crate::error::CatalogError;
use crate::models::{IconKey, PaymentPlan, Property, PropertyStatus, PropertyType};
use crate::pricing::{self, PlanQuote};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Build a catalog, checking every listing and plan invariant
    pub fn new(properties: Vec<Property>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();

        for property in &properties {
            if !ids.insert(property.id.as_str()) {
                return Err(CatalogError::DuplicateId(property.id.clone()));
            }
            if !slugs.insert(property.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(property.slug.clone()));
            }
            validate_property(property)?;
        }

        debug!("Validated catalog of {} properties", properties.len());
        Ok(Self { properties })
    }

    /// Parse and validate a JSON array of listings
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: Value = serde_json::from_str(json)?;
        check_icon_keys(&raw)?;
        let properties: Vec<Property> = serde_json::from_value(raw)?;
        Self::new(properties)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Exact, case-sensitive slug match
    pub fn find_by_slug(&self, slug: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.slug == slug)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn by_status(&self, status: PropertyStatus) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(move |p| p.status == status)
    }

    pub fn by_type(&self, kind: PropertyType) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(move |p| p.property_type == kind)
    }

    /// Quote a plan selected by property id and plan id
    pub fn quote(&self, property_id: &str, plan_id: &str) -> Result<PlanQuote, CatalogError> {
        let property = self
            .find_by_id(property_id)
            .ok_or_else(|| CatalogError::PropertyNotFound(property_id.to_string()))?;
        let plan = property
            .plan(plan_id)
            .ok_or_else(|| CatalogError::PlanNotFound {
                property_id: property_id.to_string(),
                plan_id: plan_id.to_string(),
            })?;
        Ok(pricing::quote_plan(property, plan)?)
    }
}

/// Surface unknown icon keys as `UnknownIcon` rather than a generic parse error
fn check_icon_keys(raw: &Value) -> Result<(), CatalogError> {
    let Some(listings) = raw.as_array() else {
        return Ok(());
    };

    for listing in listings {
        for section in ["features", "amenities"] {
            let Some(entries) = listing.get(section).and_then(Value::as_array) else {
                continue;
            };
            for icon in entries.iter().filter_map(|e| e.get("icon")?.as_str()) {
                icon.parse::<IconKey>()?;
            }
        }
    }
    Ok(())
}

fn validate_property(property: &Property) -> Result<(), CatalogError> {
    let fail = |reason: &str| CatalogError::InvalidProperty {
        id: property.id.clone(),
        reason: reason.to_string(),
    };

    if property.id.is_empty() {
        return Err(fail("id is empty"));
    }
    if property.slug.is_empty() || !is_url_safe(&property.slug) {
        return Err(fail("slug must be a non-empty URL-safe string"));
    }
    if property.price <= 0 {
        return Err(fail("price must be positive"));
    }
    if !property.area.is_finite() || property.area <= 0.0 {
        return Err(fail("area must be positive"));
    }
    if property.bedrooms == Some(0) {
        return Err(fail("bedrooms must be positive"));
    }
    if property.bathrooms == Some(0) {
        return Err(fail("bathrooms must be positive"));
    }
    if property.occupancy_percentage.is_some_and(|o| o > 100) {
        return Err(fail("occupancy percentage must be within 0-100"));
    }
    if property.images.is_empty() {
        return Err(fail("at least one image is required"));
    }
    if property.payment_plans.is_empty() {
        return Err(fail("at least one payment plan is required"));
    }

    let mut plan_ids = HashSet::new();
    for plan in &property.payment_plans {
        if !plan_ids.insert(plan.id.as_str()) {
            return Err(CatalogError::DuplicatePlanId {
                property_id: property.id.clone(),
                plan_id: plan.id.clone(),
            });
        }
        validate_plan(property, plan)?;
    }
    Ok(())
}

fn validate_plan(property: &Property, plan: &PaymentPlan) -> Result<(), CatalogError> {
    let fail = |reason: &str| CatalogError::InvalidPlan {
        property_id: property.id.clone(),
        plan_id: plan.id.clone(),
        reason: reason.to_string(),
    };
    let in_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);

    if plan.id.is_empty() {
        return Err(fail("id is empty"));
    }
    if !in_range(plan.down_payment) {
        return Err(fail("down payment must be within 0-100"));
    }
    if !plan.interest_rate.is_finite() || plan.interest_rate < 0.0 {
        return Err(fail("interest rate must be non-negative"));
    }
    if plan.discount.is_some_and(|d| !in_range(d)) {
        return Err(fail("discount must be within 0-100"));
    }
    Ok(())
}

fn is_url_safe(slug: &str) -> bool {
    slug.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}
