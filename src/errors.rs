/// Error type that can be returned by fallible operations in this crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the order export; could wrap IO or parsing errors
    #[error("Error processing CSV")]
    Load(#[from] csv::Error),
    /// A retained row's `order_date` could not be parsed into a calendar date.
    /// Raised before any aggregate is computed; rows are never skipped.
    #[error("Couldn't parse order date {0:?}")]
    InvalidOrderDate(String),
    /// Error serializing a summary to its JSON artifact
    #[error("Error writing JSON summary")]
    Write(#[from] serde_json::Error),
}
