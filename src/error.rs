use thiserror::Error;

/// Errors raised while building or querying the property catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate property id `{0}`")]
    DuplicateId(String),

    #[error("duplicate property slug `{0}`")]
    DuplicateSlug(String),

    #[error("property `{id}`: {reason}")]
    InvalidProperty { id: String, reason: String },

    #[error("property `{property_id}` lists plan `{plan_id}` more than once")]
    DuplicatePlanId { property_id: String, plan_id: String },

    #[error("plan `{plan_id}` of property `{property_id}`: {reason}")]
    InvalidPlan {
        property_id: String,
        plan_id: String,
        reason: String,
    },

    #[error("unknown icon key `{0}`")]
    UnknownIcon(String),

    #[error("property `{0}` not found")]
    PropertyNotFound(String),

    #[error("property `{property_id}` has no plan `{plan_id}`")]
    PlanNotFound { property_id: String, plan_id: String },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Errors raised by the installment calculator
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    /// An input falls outside the calculator's contract
    #[error("invalid argument `{field}`: {value}")]
    InvalidArgument { field: &'static str, value: f64 },

    #[error("computed `{0}` is not a finite non-negative amount")]
    NonFinite(&'static str),

    #[error("computed `{0}` does not fit in whole PKR")]
    Overflow(&'static str),
}
