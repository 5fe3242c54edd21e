use dashprep::io;
use dashprep::ops;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

/// Name of the order export read from the working directory by default
const DEFAULT_INPUT: &str = "orders.csv";
/// Output artifact for the monthly revenue summary
const MONTHLY_REVENUE_OUTPUT: &str = "monthly_revenue.json";
/// Output artifact for the top categories summary
const TOP_CATEGORIES_OUTPUT: &str = "top_categories.json";
/// Output artifact for the payment method distribution
const PAYMENT_DISTRIBUTION_OUTPUT: &str = "payment_distribution.json";

fn main() {
    let input_filename = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let input_file = match File::open(&input_filename) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Error: couldn't open order export '{input_filename}': {err}");
            eprintln!("Make sure the export file is in the directory you are running from.");
            std::process::exit(1);
        }
    };
    let mut reader = BufReader::new(input_file);
    let orders = io::load_orders_from_csv(&mut reader)
        .unwrap_or_else(|err| panic!("Failed to load orders from {input_filename}: {err}"));
    let orders = ops::filter_valid_orders(orders)
        .unwrap_or_else(|err| panic!("Failed to normalize order dates: {err}"));

    println!("Processing: monthly revenue...");
    let monthly = ops::monthly_revenue(&orders);
    write_summary(MONTHLY_REVENUE_OUTPUT, &monthly);

    println!("Processing: top categories...");
    let categories = ops::top_categories(&orders);
    write_summary(TOP_CATEGORIES_OUTPUT, &categories);

    println!("Processing: payment method distribution...");
    let payments = ops::payment_distribution(&orders);
    write_summary(PAYMENT_DISTRIBUTION_OUTPUT, &payments);

    println!();
    println!("--- Done ---");
    println!("Summaries written. The JSON files are ready for the web dashboard.");
}

/// Creates (or overwrites) `path` and writes the summary rows to it
fn write_summary<T>(path: &str, rows: &[T])
where
    T: Serialize,
{
    let file = File::create(path).unwrap_or_else(|err| panic!("Failed to create {path}: {err}"));
    let mut writer = BufWriter::new(file);
    io::write_summary_json(&mut writer, rows)
        .unwrap_or_else(|err| panic!("Failed to write summary to {path}: {err}"));
    writer
        .flush()
        .unwrap_or_else(|err| panic!("Failed to flush {path}: {err}"));
}
