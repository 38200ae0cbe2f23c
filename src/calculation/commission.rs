//! Commission tier matching and commission calculation.
//!
//! Commission tiers are half-open intervals `[min, max)` over the monthly
//! sales amount. Tiers are checked in list order and the first match wins,
//! so a well-authored list is non-overlapping; a sales amount no tier
//! covers earns zero commission rather than an error (see
//! [`crate::models::SalaryFormula::tier_warnings`] for authoring-time
//! diagnostics).

use rust_decimal::Decimal;

use super::round_money;
use crate::models::CommissionTier;

/// Finds the first tier whose half-open interval contains `sales_amount`.
///
/// A sales amount exactly equal to a tier's `max` belongs to the next tier,
/// not this one.
pub fn match_commission_tier(
    tiers: &[CommissionTier],
    sales_amount: Decimal,
) -> Option<&CommissionTier> {
    tiers
        .iter()
        .find(|t| sales_amount >= t.min && sales_amount < t.max)
}

/// Computes the commission for a sales amount against a tier list.
///
/// Returns `round(sales_amount * rate_percent / 100)` for the matching
/// tier, or zero when no tier covers the amount.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::commission_amount;
/// use salary_engine::models::CommissionTier;
/// use rust_decimal::Decimal;
///
/// let tiers = vec![CommissionTier {
///     min: Decimal::ZERO,
///     max: Decimal::from(50000),
///     rate_percent: Decimal::from(3),
/// }];
///
/// assert_eq!(
///     commission_amount(&tiers, Decimal::from(40000)),
///     Decimal::from(1200),
/// );
/// assert_eq!(commission_amount(&tiers, Decimal::from(50000)), Decimal::ZERO);
/// ```
pub fn commission_amount(tiers: &[CommissionTier], sales_amount: Decimal) -> Decimal {
    match match_commission_tier(tiers, sales_amount) {
        Some(tier) => round_money(sales_amount * tier.rate_percent / Decimal::ONE_HUNDRED),
        None => Decimal::ZERO,
    }
}
