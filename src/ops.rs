use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    errors::Error,
    types::{CategoryRevenue, Month, MonthlyRevenue, Order, PaymentCount, ValidOrder},
};

/// Number of top categories kept in the category summary
pub const TOP_CATEGORY_COUNT: usize = 10;
/// Number of payment methods kept before folding the rest into one bucket
pub const TOP_PAYMENT_METHOD_COUNT: usize = 5;
/// Label of the bucket holding all payment methods outside the top ranks
pub const OTHER_METHOD_LABEL: &str = "Other";

/// Keeps only rows flagged valid and parses their order dates.
///
/// Validity is an exact comparison against 1; any other flag value drops the
/// row. Dates are parsed eagerly for every retained row, so a single bad date
/// fails the run before any aggregate is computed. Dates on dropped rows are
/// never parsed.
/// # Errors
/// [`Error::InvalidOrderDate`] if a retained row's date doesn't parse
pub fn filter_valid_orders(orders: Vec<Order>) -> Result<Vec<ValidOrder>, Error> {
    orders
        .into_iter()
        .filter(Order::is_valid)
        .map(ValidOrder::try_from)
        .collect()
}

/// Sums `after_discount` revenue per calendar month.
///
/// Months come back in ascending chronological order, one entry per month
/// that has at least one valid order, with no cap on the number of months.
#[must_use]
pub fn monthly_revenue(orders: &[ValidOrder]) -> Vec<MonthlyRevenue> {
    let mut revenue_by_month: BTreeMap<Month, Decimal> = BTreeMap::new();
    for order in orders {
        *revenue_by_month
            .entry(Month::from(order.order_date))
            .or_default() += order.after_discount;
    }
    revenue_by_month
        .into_iter()
        .map(|(month, revenue)| MonthlyRevenue {
            month: month.to_string(),
            revenue,
        })
        .collect()
}

/// Sums `after_discount` revenue per category, keeping only the
/// highest-revenue categories.
///
/// Entries are sorted by revenue, descending. Grouping collects categories
/// alphabetically and the sort is stable, so ties keep category-name order.
#[must_use]
pub fn top_categories(orders: &[ValidOrder]) -> Vec<CategoryRevenue> {
    let mut revenue_by_category: BTreeMap<&str, Decimal> = BTreeMap::new();
    for order in orders {
        *revenue_by_category
            .entry(order.category.as_str())
            .or_default() += order.after_discount;
    }
    let mut groups: Vec<(&str, Decimal)> = revenue_by_category.into_iter().collect();
    groups.sort_by(|(_, a), (_, b)| b.cmp(a));
    groups.truncate(TOP_CATEGORY_COUNT);
    groups
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue {
            category: category.to_string(),
            revenue,
            revenue_mil: to_millions(revenue),
        })
        .collect()
}

/// Divides an amount by one million, rounded half-away-from-zero to 2 decimals
fn to_millions(revenue: Decimal) -> Decimal {
    (revenue / Decimal::new(1_000_000, 0))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Counts valid orders per payment method, folding everything outside the top
/// [`TOP_PAYMENT_METHOD_COUNT`] methods into a single bucket.
///
/// Entries are sorted by count, descending; ties keep first-appearance order.
/// The bucket, when synthesized, goes last regardless of its own count. A
/// method literally named [`OTHER_METHOD_LABEL`] keeps its rank and absorbs
/// the remainder instead of a duplicate entry being appended.
#[must_use]
pub fn payment_distribution(orders: &[ValidOrder]) -> Vec<PaymentCount> {
    // Linear scan keeps first-appearance order; method cardinality is tiny.
    let mut counts: Vec<(String, u64)> = Vec::new();
    for order in orders {
        match counts
            .iter_mut()
            .find(|(method, _)| *method == order.payment_method)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((order.payment_method.clone(), 1)),
        }
    }
    counts.sort_by(|(_, a), (_, b)| b.cmp(a));
    fold_tail_into_other(counts, TOP_PAYMENT_METHOD_COUNT)
        .into_iter()
        .map(|(payment_method, order_count)| PaymentCount {
            payment_method,
            order_count,
        })
        .collect()
}

/// Folds all entries past `top_n` into one [`OTHER_METHOD_LABEL`] entry.
///
/// Expects `counts` sorted descending. At most `top_n + 1` entries come back;
/// with `top_n` or fewer entries the input is returned untouched.
fn fold_tail_into_other(mut counts: Vec<(String, u64)>, top_n: usize) -> Vec<(String, u64)> {
    if counts.len() <= top_n {
        return counts;
    }
    let tail_total: u64 = counts
        .split_off(top_n)
        .into_iter()
        .map(|(_, count)| count)
        .sum();
    match counts
        .iter_mut()
        .find(|(method, _)| *method == OTHER_METHOD_LABEL)
    {
        Some((_, count)) => *count += tail_total,
        None => counts.push((OTHER_METHOD_LABEL.to_string(), tail_total)),
    }
    counts
}
