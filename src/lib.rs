//! Property catalog and payment-plan pricing.
//!
//! Load a [`Catalog`] once (see [`catalog::BuiltinSource`] and
//! [`catalog::JsonFileSource`]), look listings up by id or slug, and price
//! their plans with [`pricing::calculate`] or [`Catalog::quote`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod report;

pub use catalog::{Catalog, CatalogSource};
pub use config::Config;
pub use error::{CatalogError, PricingError};
pub use models::{IconKey, PaymentPlan, Property, PropertyStatus, PropertyType};
pub use pricing::format::{format_area, format_currency};
pub use pricing::{calculate, PlanQuote, PricingInput};
pub use report::PropertyReport;
