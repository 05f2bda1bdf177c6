//! Pricing Calculator
//!
//! Forward pricing (cost to system price) and manual-price reconciliation.
//! Every intermediate amount is rounded to cents before it feeds the next
//! step so that all call sites agree to the cent.

use tracing::{debug, warn};

use crate::core::pricing::types::{
    HealthStatus, PriceBreakdown, PricingConfig, PricingError, PricingMode, ProfitAnalysis,
    UtilityType,
};
use crate::core::pricing::utils::round2;

/// Fraction of the expected utility that may be given away before a sale
/// is flagged as `alert`
pub const ALERT_UTILITY_LOSS_RATIO: f64 = 0.5;

/// Compute the recommended system price for one service
///
/// The system price is the amount that, once commission is subtracted as a
/// percentage of itself, leaves exactly `subtotal + markup_amount`.
pub fn compute_service_price(
    cost: f64,
    expenses: f64,
    utility_type: UtilityType,
    config: &PricingConfig,
) -> Result<PriceBreakdown, PricingError> {
    validate_amounts(cost, expenses)?;
    config.validate()?;

    let utility_percent = config.utility_percent(utility_type);
    let base_utility = round2(cost * utility_percent);
    let subtotal = round2(cost + expenses + base_utility);
    let markup_amount = round2(subtotal * config.markup_percent);
    let after_markup = round2(subtotal + markup_amount);
    let system_price = round2(after_markup / (1.0 - config.commission_percent));
    let commission_amount = round2(system_price * config.commission_percent);

    debug!(
        cost,
        expenses,
        utility_type = %utility_type,
        system_price,
        "Computed service price"
    );

    Ok(PriceBreakdown {
        cost,
        expenses,
        utility_type,
        utility_percent,
        base_utility,
        subtotal,
        markup_amount,
        after_markup,
        system_price,
        commission_amount,
        mode: PricingMode::Configured,
    })
}

/// Price a service when no tenant configuration is available
///
/// No utility, markup or commission is applied; the result is flagged as
/// [`PricingMode::Degraded`] and must not be quoted as a final price.
pub fn compute_unconfigured_price(
    cost: f64,
    expenses: f64,
    utility_type: UtilityType,
) -> Result<PriceBreakdown, PricingError> {
    validate_amounts(cost, expenses)?;

    let subtotal = round2(cost + expenses);
    warn!(
        cost,
        expenses,
        "Pricing without tenant configuration; utility, markup and commission are zero"
    );

    Ok(PriceBreakdown {
        cost,
        expenses,
        utility_type,
        utility_percent: 0.0,
        base_utility: 0.0,
        subtotal,
        markup_amount: 0.0,
        after_markup: subtotal,
        system_price: subtotal,
        commission_amount: 0.0,
        mode: PricingMode::Degraded,
    })
}

/// Reconcile a manual sale price against a computed breakdown
pub fn reconcile_manual_price(
    breakdown: &PriceBreakdown,
    sale_price: f64,
    config: &PricingConfig,
) -> Result<ProfitAnalysis, PricingError> {
    reconcile_amounts(
        breakdown.cost,
        breakdown.expenses,
        breakdown.base_utility,
        sale_price,
        config,
    )
}

/// Reconciliation core shared by single services and packages
pub(crate) fn reconcile_amounts(
    cost: f64,
    expenses: f64,
    expected_utility: f64,
    sale_price: f64,
    config: &PricingConfig,
) -> Result<ProfitAnalysis, PricingError> {
    if !sale_price.is_finite() || sale_price <= 0.0 {
        return Err(PricingError::invalid_input(format!(
            "sale price must be greater than 0 (got {})",
            sale_price
        )));
    }
    config.validate()?;

    let real_commission = round2(sale_price * config.commission_percent);
    let costs_total = cost + expenses;
    let real_profit = round2(sale_price - costs_total - real_commission);
    let margin_percent = if sale_price > 0.0 {
        real_profit / sale_price * 100.0
    } else {
        0.0
    };
    let deviation = real_profit - expected_utility;
    let deviation_percent = if expected_utility > 0.0 {
        deviation / expected_utility * 100.0
    } else {
        0.0
    };
    let health_status = classify_health(real_profit, deviation, expected_utility);

    if health_status == HealthStatus::Loss {
        warn!(sale_price, real_profit, "Manual sale price does not cover costs");
    } else {
        debug!(sale_price, real_profit, health = %health_status, "Reconciled manual price");
    }

    Ok(ProfitAnalysis {
        sale_price,
        real_commission,
        costs_total,
        real_profit,
        margin_percent,
        expected_utility,
        deviation,
        deviation_percent,
        health_status,
    })
}

/// Classify a sale; the first matching tier wins
pub fn classify_health(real_profit: f64, deviation: f64, expected_utility: f64) -> HealthStatus {
    if real_profit < 0.0 {
        HealthStatus::Loss
    } else if deviation < -expected_utility * ALERT_UTILITY_LOSS_RATIO {
        HealthStatus::Alert
    } else if deviation < 0.0 {
        HealthStatus::Caution
    } else {
        HealthStatus::Healthy
    }
}

fn validate_amounts(cost: f64, expenses: f64) -> Result<(), PricingError> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(PricingError::invalid_input(format!(
            "cost must be a finite amount >= 0 (got {})",
            cost
        )));
    }
    if !expenses.is_finite() || expenses < 0.0 {
        return Err(PricingError::invalid_input(format!(
            "expenses must be a finite amount >= 0 (got {})",
            expenses
        )));
    }
    Ok(())
}
