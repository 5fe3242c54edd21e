#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
/// Error handling and custom [`Error`](std::error::Error) types
pub mod errors;
/// Functions for reading order exports and writing JSON summaries
pub mod io;
/// Aggregation steps that turn valid orders into dashboard summaries
pub mod ops;
/// Data types used throughout dashprep
pub mod types;
