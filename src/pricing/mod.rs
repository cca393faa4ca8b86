//! Payment-plan calculator.
//!
//! Turns a property's base price and one of its [`PaymentPlan`]s into the
//! figures a buyer sees: down payment, monthly installment, total payable and
//! the interest paid on top of the cash price. Every amount is rounded to a
//! whole currency unit when it is computed, so repeated calls agree exactly.

pub mod format;

use crate::error::PricingError;
use crate::models::{PaymentPlan, Property};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw calculator inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingInput {
    pub price: f64,
    pub down_payment_percent: f64,
    pub installment_period: u32,
    pub annual_interest_rate_percent: f64,
    pub discount_percent: Option<f64>,
}

impl PricingInput {
    pub fn for_plan(price: i64, plan: &PaymentPlan) -> Self {
        Self {
            price: price as f64,
            down_payment_percent: plan.down_payment,
            installment_period: plan.installment_period,
            annual_interest_rate_percent: plan.interest_rate,
            discount_percent: plan.discount,
        }
    }

    fn validate(&self) -> Result<(), PricingError> {
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(invalid("price", self.price));
        }
        if !is_percentage(self.down_payment_percent) {
            return Err(invalid("down_payment_percent", self.down_payment_percent));
        }
        let rate = self.annual_interest_rate_percent;
        if !rate.is_finite() || rate < 0.0 {
            return Err(invalid("annual_interest_rate_percent", rate));
        }
        if let Some(discount) = self.discount_percent {
            if !is_percentage(discount) {
                return Err(invalid("discount_percent", discount));
            }
        }
        Ok(())
    }

    fn is_full_cash(&self) -> bool {
        self.down_payment_percent == 100.0
    }
}

/// Figures for one property + plan combination, in whole PKR
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanQuote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    /// Price after any cash discount
    pub effective_price: i64,
    pub discount_amount: i64,
    pub down_payment: i64,
    pub financed_amount: i64,
    /// Zero when the plan has no installments
    pub monthly_installment: i64,
    pub installment_period: u32,
    pub total_payable: i64,
    /// Present only for financed plans costing more than the cash price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_amount: Option<i64>,
}

/// Compute every figure for the given inputs
pub fn calculate(input: &PricingInput) -> Result<PlanQuote, PricingError> {
    input.validate()?;

    let discount = input.discount_percent.unwrap_or(0.0);
    let effective_price = if input.is_full_cash() {
        input.price * (1.0 - discount / 100.0)
    } else {
        input.price
    };

    let down_payment_exact = effective_price * (input.down_payment_percent / 100.0);
    let remainder = effective_price - down_payment_exact;
    let down_payment = whole_units(down_payment_exact, "down_payment")?;

    let monthly_installment = amortized_payment(
        remainder,
        input.annual_interest_rate_percent,
        input.installment_period,
    )?;

    let total_payable = if input.installment_period > 0 {
        monthly_installment
            .checked_mul(i64::from(input.installment_period))
            .and_then(|installments| installments.checked_add(down_payment))
            .ok_or(PricingError::Overflow("total_payable"))?
    } else {
        whole_units(effective_price, "total_payable")?
    };

    let price = whole_units(input.price, "price")?;
    let interest_amount =
        (input.installment_period > 0 && total_payable > price).then(|| total_payable - price);

    Ok(PlanQuote {
        plan_id: None,
        plan_name: None,
        effective_price: whole_units(effective_price, "effective_price")?,
        discount_amount: whole_units(input.price - effective_price, "discount_amount")?,
        down_payment,
        financed_amount: whole_units(remainder, "financed_amount")?,
        monthly_installment,
        installment_period: input.installment_period,
        total_payable,
        interest_amount,
    })
}

/// Monthly installment alone, rounded to whole PKR
pub fn monthly_installment(
    price: f64,
    down_payment_percent: f64,
    installment_period: u32,
    annual_interest_rate_percent: f64,
    discount_percent: Option<f64>,
) -> Result<i64, PricingError> {
    let quote = calculate(&PricingInput {
        price,
        down_payment_percent,
        installment_period,
        annual_interest_rate_percent,
        discount_percent,
    })?;
    Ok(quote.monthly_installment)
}

/// Quote one of a property's plans
pub fn quote_plan(property: &Property, plan: &PaymentPlan) -> Result<PlanQuote, PricingError> {
    let mut quote = calculate(&PricingInput::for_plan(property.price, plan))?;
    debug!(
        property = %property.id,
        plan = %plan.id,
        monthly = quote.monthly_installment,
        total = quote.total_payable,
        "quoted plan"
    );
    quote.plan_id = Some(plan.id.clone());
    quote.plan_name = Some(plan.name.clone());
    Ok(quote)
}

/// Quote every plan of a property, in catalog order
pub fn quote_all(property: &Property) -> Result<Vec<PlanQuote>, PricingError> {
    property
        .payment_plans
        .iter()
        .map(|plan| quote_plan(property, plan))
        .collect()
}

/// Fixed payment that retires `principal` over `months` at `annual_rate_percent`.
fn amortized_payment(
    principal: f64,
    annual_rate_percent: f64,
    months: u32,
) -> Result<i64, PricingError> {
    if months == 0 {
        return Ok(0);
    }

    let n = f64::from(months);
    let r = annual_rate_percent / 100.0 / 12.0;
    // (1 + r)^n via ln_1p/exp_m1 so tiny rates don't collapse to 1.0
    let log_growth = n * r.ln_1p();
    let denominator = log_growth.exp_m1();
    let payment = if r == 0.0 || denominator == 0.0 {
        // Straight-line split; the annuity formula is 0/0 here.
        principal / n
    } else {
        principal * r * log_growth.exp() / denominator
    };

    whole_units(payment, "monthly_installment")
}

fn whole_units(amount: f64, what: &'static str) -> Result<i64, PricingError> {
    let rounded = amount.round();
    if !rounded.is_finite() || rounded < 0.0 {
        return Err(PricingError::NonFinite(what));
    }
    // i64::MAX as f64 is 2^63, the first value that no longer fits
    if rounded >= i64::MAX as f64 {
        return Err(PricingError::Overflow(what));
    }
    Ok(rounded as i64)
}

fn is_percentage(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

fn invalid(field: &'static str, value: f64) -> PricingError {
    PricingError::InvalidArgument { field, value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(price: f64, dp: f64, n: u32, rate: f64, discount: Option<f64>) -> PricingInput {
        PricingInput {
            price,
            down_payment_percent: dp,
            installment_period: n,
            annual_interest_rate_percent: rate,
            discount_percent: discount,
        }
    }

    #[test]
    fn two_year_plan_matches_annuity_formula() {
        let quote = calculate(&input(70_000_000.0, 20.0, 24, 10.0, None)).unwrap();

        assert_eq!(quote.down_payment, 14_000_000);
        assert_eq!(quote.financed_amount, 56_000_000);
        assert_eq!(quote.monthly_installment, 2_584_116);
        assert_eq!(quote.total_payable, 14_000_000 + 24 * 2_584_116);
        assert_eq!(quote.interest_amount, Some(quote.total_payable - 70_000_000));
        assert_eq!(quote.discount_amount, 0);
    }

    #[test]
    fn cash_plan_applies_discount() {
        let quote = calculate(&input(70_000_000.0, 100.0, 0, 0.0, Some(5.0))).unwrap();

        assert_eq!(quote.effective_price, 66_500_000);
        assert_eq!(quote.discount_amount, 3_500_000);
        assert_eq!(quote.down_payment, 66_500_000);
        assert_eq!(quote.financed_amount, 0);
        assert_eq!(quote.monthly_installment, 0);
        assert_eq!(quote.total_payable, 66_500_000);
        assert_eq!(quote.interest_amount, None);
    }

    #[test]
    fn zero_interest_is_straight_line() {
        let quote = calculate(&input(10_000_000.0, 10.0, 12, 0.0, None)).unwrap();

        assert_eq!(quote.down_payment, 1_000_000);
        assert_eq!(quote.monthly_installment, 750_000);
        assert_eq!(quote.total_payable, 10_000_000);
        assert_eq!(quote.interest_amount, None);
    }

    #[test]
    fn zero_period_has_no_monthly_figure_even_with_interest() {
        let quote = calculate(&input(5_000_000.0, 100.0, 0, 18.0, None)).unwrap();
        assert_eq!(quote.monthly_installment, 0);
        assert_eq!(quote.total_payable, 5_000_000);
    }

    #[test]
    fn discount_ignored_for_financed_plans() {
        let without = calculate(&input(50_000_000.0, 30.0, 24, 12.0, None)).unwrap();
        let with = calculate(&input(50_000_000.0, 30.0, 24, 12.0, Some(25.0))).unwrap();
        assert_eq!(without, with);
    }

    #[test]
    fn full_down_payment_with_installments_finances_nothing() {
        let quote = calculate(&input(1_000_000.0, 100.0, 12, 10.0, None)).unwrap();
        assert_eq!(quote.monthly_installment, 0);
        assert_eq!(quote.total_payable, 1_000_000);
    }

    #[test]
    fn rejects_out_of_contract_inputs() {
        let cases = [
            input(-1.0, 20.0, 24, 10.0, None),
            input(0.0, 20.0, 24, 10.0, None),
            input(f64::NAN, 20.0, 24, 10.0, None),
            input(1_000.0, 120.0, 24, 10.0, None),
            input(1_000.0, -5.0, 24, 10.0, None),
            input(1_000.0, 20.0, 24, -1.0, None),
            input(1_000.0, 20.0, 24, f64::INFINITY, None),
            input(1_000.0, 100.0, 0, 0.0, Some(150.0)),
        ];
        for case in cases {
            assert!(
                matches!(calculate(&case), Err(PricingError::InvalidArgument { .. })),
                "{case:?} should be rejected"
            );
        }
    }

    #[test]
    fn monthly_installment_helper_matches_quote() {
        let monthly = monthly_installment(70_000_000.0, 20.0, 24, 10.0, None).unwrap();
        assert_eq!(monthly, 2_584_116);
        assert_eq!(monthly_installment(70_000_000.0, 100.0, 0, 0.0, Some(5.0)), Ok(0));
    }

    #[test]
    fn tiny_positive_rate_behaves_like_zero_interest() {
        let quote = calculate(&input(10_000_000.0, 10.0, 12, 1e-15, None)).unwrap();
        assert_eq!(quote.monthly_installment, 750_000);
        assert_eq!(quote.total_payable, 10_000_000);
    }

    #[test]
    fn total_beyond_i64_is_an_overflow_error() {
        let err = calculate(&input(9.0e18, 20.0, 24, 10.0, None)).unwrap_err();
        assert_eq!(err, PricingError::Overflow("total_payable"));
    }

    #[test]
    fn amounts_beyond_i64_are_not_capped() {
        assert_eq!(whole_units(1.0e19, "price"), Err(PricingError::Overflow("price")));
        assert_eq!(whole_units(9.0e18, "price"), Ok(9_000_000_000_000_000_000));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let i = input(98_000_000.0, 10.0, 48, 15.0, None);
        assert_eq!(calculate(&i).unwrap(), calculate(&i).unwrap());
    }
}
