//! Derives ownership shares and portfolio figures from raw investment data.
//!
//! All functions are pure and total over any decimal input: no division by
//! zero, no panics, same output for the same input.

use std::collections::HashMap;

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::MAX_PROGRESS_PERCENT;

use super::{Holding, InvestmentRecord, PortfolioSummary, PropertyTotals};

/// Builds the holding for one investment record.
///
/// `share_percentage` is `amount / total * 100`. A non-positive total yields 0,
/// and the share never goes below 0. There is no upper clamp: a share above 100
/// means the totals are inconsistent and is shown as such. A ratio too large
/// for `Decimal` saturates at `Decimal::MAX`.
pub fn compute_holding(record: &InvestmentRecord, totals: &PropertyTotals) -> Holding {
    Holding {
        property_id: totals.property_id.clone(),
        property_name: totals.property_name.clone(),
        amount_invested: record.investment_amount,
        total_property_investment: totals.total_property_investment,
        share_percentage: share_percentage(
            record.investment_amount,
            totals.total_property_investment,
        ),
    }
}

fn share_percentage(amount: Decimal, total: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match amount.checked_div(total).and_then(|r| r.checked_mul(dec!(100))) {
        Some(share) => share.max(Decimal::ZERO),
        // total is positive here, so only the amount's sign decides the direction
        None if amount.is_sign_negative() => Decimal::ZERO,
        None => Decimal::MAX,
    }
}

/// Sum of `amount_invested` across holdings; zero when empty.
pub fn compute_portfolio_total(holdings: &[Holding]) -> Decimal {
    holdings
        .iter()
        .fold(Decimal::ZERO, |acc, h| acc.saturating_add(h.amount_invested))
}

/// Funded share of `price`, in percent, clamped to `[0, 100]`.
///
/// A zero price has no meaningful ratio and reports no progress.
pub fn compute_investment_progress(total_invested: Decimal, price: Decimal) -> Decimal {
    if price.is_zero() {
        return Decimal::ZERO;
    }
    let ceiling = Decimal::from(MAX_PROGRESS_PERCENT);
    let progress = match total_invested
        .checked_div(price)
        .and_then(|r| r.checked_mul(dec!(100)))
    {
        Some(p) => p,
        None if total_invested.is_sign_negative() != price.is_sign_negative() => Decimal::ZERO,
        None => ceiling,
    };
    progress.clamp(Decimal::ZERO, ceiling)
}

/// Builds one holding per property from a user's investment records.
///
/// Several records against the same property are summed first. Properties keep
/// the order in which they first appear in `records`. Records whose property has
/// no entry in `totals` are skipped.
pub fn compute_holdings(records: &[InvestmentRecord], totals: &[PropertyTotals]) -> Vec<Holding> {
    let totals_by_id: HashMap<&str, &PropertyTotals> = totals
        .iter()
        .map(|t| (t.property_id.as_str(), t))
        .collect();

    // property_id -> (user_id of the first record, summed amount)
    let mut order: Vec<&str> = Vec::new();
    let mut combined: HashMap<&str, (&str, Decimal)> = HashMap::new();
    for record in records {
        let entry = combined
            .entry(record.property_id.as_str())
            .or_insert_with(|| {
                order.push(record.property_id.as_str());
                (record.user_id.as_str(), Decimal::ZERO)
            });
        entry.1 = entry.1.saturating_add(record.investment_amount);
    }

    let mut holdings = Vec::with_capacity(order.len());
    for property_id in order {
        let Some(property_totals) = totals_by_id.get(property_id) else {
            warn!(
                "Skipping investment in property {}: no property totals available",
                property_id
            );
            continue;
        };
        let Some(&(user_id, amount)) = combined.get(property_id) else {
            continue;
        };
        let record = InvestmentRecord {
            user_id: user_id.to_string(),
            property_id: property_id.to_string(),
            investment_amount: amount,
        };
        holdings.push(compute_holding(&record, property_totals));
    }

    debug!(
        "Computed {} holdings from {} investment records",
        holdings.len(),
        records.len()
    );
    holdings
}

/// Totals shown at the top of the dashboard and holdings screens.
pub fn summarize_portfolio(holdings: Vec<Holding>) -> PortfolioSummary {
    PortfolioSummary {
        total_invested: compute_portfolio_total(&holdings),
        property_count: holdings.len(),
        holdings,
    }
}
