//! Price snapshots
//!
//! Denormalized copy of a breakdown that callers store on a catalog service
//! or quotation line, so later configuration changes never rewrite the
//! price a client was quoted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::pricing::types::{PriceBreakdown, PricingError, PricingMode, UtilityType};
use crate::core::pricing::utils::round2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub cost_snapshot: f64,
    pub expense_snapshot: f64,
    pub utility_snapshot: f64,
    pub markup_snapshot: f64,
    pub commission_snapshot: f64,
    pub system_price_snapshot: f64,
    /// Price actually offered to the client
    pub public_price_snapshot: f64,
    pub utility_type: UtilityType,
    pub mode: PricingMode,
    pub captured_at: DateTime<Utc>,
}

impl PriceSnapshot {
    /// Capture a breakdown; the public price defaults to the system price
    pub fn capture(
        breakdown: &PriceBreakdown,
        public_price: Option<f64>,
    ) -> Result<Self, PricingError> {
        let public_price = match public_price {
            Some(price) if !price.is_finite() || price <= 0.0 => {
                return Err(PricingError::invalid_input(format!(
                    "public price must be greater than 0 (got {})",
                    price
                )));
            }
            Some(price) => round2(price),
            None => breakdown.system_price,
        };

        Ok(Self {
            cost_snapshot: breakdown.cost,
            expense_snapshot: breakdown.expenses,
            utility_snapshot: breakdown.base_utility,
            markup_snapshot: breakdown.markup_amount,
            commission_snapshot: breakdown.commission_amount,
            system_price_snapshot: breakdown.system_price,
            public_price_snapshot: public_price,
            utility_type: breakdown.utility_type,
            mode: breakdown.mode,
            captured_at: Utc::now(),
        })
    }

    /// Whether the client was offered less than the system price
    pub fn is_discounted(&self) -> bool {
        self.public_price_snapshot < self.system_price_snapshot
    }
}
