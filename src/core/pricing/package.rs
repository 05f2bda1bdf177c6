//! Package Aggregation
//!
//! Prices each line once, weights the per-line amounts by quantity and sums
//! them. Package totals are always derived from the per-line breakdowns so
//! a package never disagrees with the services it bundles.

use tracing::debug;

use crate::core::pricing::calculator::{compute_service_price, reconcile_amounts};
use crate::core::pricing::types::{
    LineItem, PackageLine, PackageTotals, PricingConfig, PricingError, ProfitAnalysis,
    UtilityType,
};
use crate::core::pricing::utils::round2;

/// Aggregate the line items of a package into package-level totals
pub fn aggregate_package(
    items: &[LineItem],
    config: &PricingConfig,
) -> Result<PackageTotals, PricingError> {
    if items.is_empty() {
        return Err(PricingError::invalid_input(
            "a package needs at least one line item",
        ));
    }

    let mut totals = PackageTotals {
        total_cost: 0.0,
        total_expenses: 0.0,
        total_utility_services: 0.0,
        total_utility_products: 0.0,
        total_utility: 0.0,
        package_system_price: 0.0,
        lines: Vec::with_capacity(items.len()),
    };

    for item in items {
        if item.quantity == 0 {
            return Err(PricingError::invalid_input(format!(
                "line '{}' must have a quantity of at least 1",
                item.name
            )));
        }

        let expenses = item.expenses_total()?;
        let breakdown = compute_service_price(item.cost, expenses, item.utility_type, config)?;
        let quantity = f64::from(item.quantity);

        let line_utility = round2(breakdown.base_utility * quantity);
        let line_system_price = round2(breakdown.system_price * quantity);

        totals.total_cost = round2(totals.total_cost + item.cost * quantity);
        totals.total_expenses = round2(totals.total_expenses + expenses * quantity);
        match item.utility_type {
            UtilityType::Service => {
                totals.total_utility_services =
                    round2(totals.total_utility_services + line_utility);
            }
            UtilityType::Product => {
                totals.total_utility_products =
                    round2(totals.total_utility_products + line_utility);
            }
        }
        totals.total_utility = round2(totals.total_utility + line_utility);
        totals.package_system_price = round2(totals.package_system_price + line_system_price);

        totals.lines.push(PackageLine {
            name: item.name.clone(),
            quantity: item.quantity,
            breakdown,
            line_system_price,
        });
    }

    debug!(
        lines = totals.lines.len(),
        package_system_price = totals.package_system_price,
        "Aggregated package"
    );

    Ok(totals)
}

/// Reconcile a package sale price against the aggregated totals
///
/// The expected utility is the quantity-weighted utility of every line.
pub fn reconcile_package(
    totals: &PackageTotals,
    sale_price: f64,
    config: &PricingConfig,
) -> Result<ProfitAnalysis, PricingError> {
    reconcile_amounts(
        totals.total_cost,
        totals.total_expenses,
        totals.total_utility,
        sale_price,
        config,
    )
}
