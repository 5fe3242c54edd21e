//! Helpers for reading order exports and writing dashboard summaries

use std::io::{Read, Write};

use csv::Trim;
use serde::Serialize;

use crate::{errors::Error, types::Order};

/// Loads raw order rows from a CSV-formatted export stream.
///
/// Rows come back as-is, invalid ones included; see
/// [`ops::filter_valid_orders`](crate::ops::filter_valid_orders) for the
/// validity filter. Columns beyond the ones named in [`Order`] are ignored.
///
/// Expects input data in this format (including header):
/// ```csv
/// id,    is_valid,   order_date,   after_discount,   category,      payment_method
/// 1001,         1,   2023-01-05,         150000.0,   Electronics,   Bank Transfer
/// 1002,         0,   2023-01-06,          75000.0,   Beauty,        E-Wallet
/// ```
pub fn load_orders_from_csv<R>(reader: &mut R) -> Result<Vec<Order>, Error>
where
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut orders = Vec::new();
    for record in csv_reader.deserialize() {
        orders.push(record?);
    }
    Ok(orders)
}

/// Serializes summary rows as a JSON array of flat records, one object per
/// row, field names matching the summary's column names.
///
/// Output data will be in the form:
/// ```json
/// [{"month":"2023-01","revenue":100},{"month":"2023-02","revenue":50}]
/// ```
pub fn write_summary_json<W, T>(writer: &mut W, rows: &[T]) -> Result<(), Error>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer(writer, rows)?;
    Ok(())
}
