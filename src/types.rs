//! Common datatypes supporting functions throughout dashprep

use std::fmt::Display;

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Formats accepted for the export's `order_date` column
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y-%m-%d %H:%M:%S", "%d/%m/%Y"];

/// A single row of the order export, as loaded.
///
/// Columns keep the export's names; extra columns in the input are ignored.
#[derive(Debug, Deserialize)]
pub struct Order {
    /// Validity flag; only rows where this equals exactly 1 count as orders
    pub(crate) is_valid: u8,
    /// Date the order was placed, unparsed
    pub(crate) order_date: String,
    /// Order amount after discounts were applied
    #[serde(deserialize_with = "rust_decimal::serde::str::deserialize")]
    pub(crate) after_discount: Decimal,
    /// Product category the order belongs to
    pub(crate) category: String,
    /// Payment method the customer paid with
    pub(crate) payment_method: String,
}

impl Order {
    /// Returns whether the row is a valid order (`is_valid` equals exactly 1)
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid == 1
    }
}

/// A valid order with its date parsed, ready for aggregation
#[derive(Debug, Clone)]
pub struct ValidOrder {
    /// Date the order was placed
    pub(crate) order_date: NaiveDate,
    /// Order amount after discounts were applied
    pub(crate) after_discount: Decimal,
    /// Product category the order belongs to
    pub(crate) category: String,
    /// Payment method the customer paid with
    pub(crate) payment_method: String,
}

impl TryFrom<Order> for ValidOrder {
    type Error = Error;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        let order_date = parse_order_date(&order.order_date)?;
        Ok(Self {
            order_date,
            after_discount: order.after_discount,
            category: order.category,
            payment_method: order.payment_method,
        })
    }
}

/// Parses an order date, trying each supported format in turn
fn parse_order_date(value: &str) -> Result<NaiveDate, Error> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }
    Err(Error::InvalidOrderDate(value.to_string()))
}

/// The calendar month an order falls in, at first-of-month granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    /// Calendar year
    year: i32,
    /// Month of the year, 1 through 12
    month: u32,
}

impl From<NaiveDate> for Month {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Revenue summed over one calendar month
#[derive(Debug, Serialize, PartialEq)]
pub struct MonthlyRevenue {
    /// Month label in `YYYY-MM` form
    pub month: String,
    /// Total `after_discount` amount across the month's valid orders
    #[serde(serialize_with = "serialize_amount")]
    pub revenue: Decimal,
}

/// Revenue summed over one product category
#[derive(Debug, Serialize, PartialEq)]
pub struct CategoryRevenue {
    /// Category name as it appears in the export
    pub category: String,
    /// Total `after_discount` amount across the category's valid orders
    #[serde(serialize_with = "serialize_amount")]
    pub revenue: Decimal,
    /// The same revenue in millions, rounded to 2 decimals for chart labels
    #[serde(serialize_with = "serialize_amount")]
    pub revenue_mil: Decimal,
}

/// Number of valid orders paid with one payment method
#[derive(Debug, Serialize, PartialEq)]
pub struct PaymentCount {
    /// Payment method label, or the synthesized `Other` bucket
    pub payment_method: String,
    /// Number of valid orders paid this way
    pub order_count: u64,
}

/// Function to help [`serde`] serialize a [`Decimal`] amount as a plain JSON
/// number. Whole amounts serialize as integers, everything else as a float.
fn serialize_amount<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.is_integer() {
        if let Some(whole) = value.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    match value.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => Err(serde::ser::Error::custom(
            "amount can't be represented as a JSON number",
        )),
    }
}
