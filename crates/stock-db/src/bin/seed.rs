//! # Seed Data Generator
//!
//! Populates a database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default) into ./estoque.db
//! cargo run -p stock-db --bin seed
//!
//! # Generate custom amount into another file
//! cargo run -p stock-db --bin seed -- --count 200 --db ./data/estoque.db
//! ```
//!
//! Names are `{item} {variant}`; names already present are skipped, so the
//! tool can be re-run against the same file.

use std::env;
use std::process::ExitCode;
use stock_core::NewProduct;
use stock_db::{Database, DbConfig, DbError};

const DEFAULT_COUNT: usize = 50;
const DEFAULT_DB_PATH: &str = "./estoque.db";

/// Base items with a base price.
const ITEMS: &[(&str, f64)] = &[
    ("Teclado", 120.50),
    ("Mouse", 49.90),
    ("Monitor", 899.00),
    ("Headset", 199.90),
    ("Webcam", 249.00),
    ("Cabo HDMI", 29.90),
    ("Hub USB", 89.90),
    ("SSD", 349.00),
    ("Pendrive", 39.90),
    ("Roteador", 279.00),
];

/// Variants, with a price multiplier.
const VARIANTS: &[(&str, f64)] = &[
    ("Basic", 1.0),
    ("Plus", 1.25),
    ("Pro", 1.6),
    ("Wireless", 1.4),
    ("Compact", 0.9),
];

#[tokio::main]
async fn main() -> ExitCode {
    match seed().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn seed() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut db_path = String::from(DEFAULT_DB_PATH);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                count = parse_count(args.get(i + 1).map(String::as_str))?;
                i += 1;
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: {DEFAULT_COUNT})");
                println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let store = db.products();

    println!("✓ Connected, schema ready ({} existing products)", store.count().await?);

    let mut generated = 0;
    let mut skipped = 0;

    for product in sample_products().take(count) {
        match store.add(&product).await {
            Ok(_) => generated += 1,
            Err(DbError::UniqueViolation { .. }) => skipped += 1,
            Err(e) => return Err(e.into()),
        }
    }

    println!("✓ Inserted {} products, skipped {} existing names", generated, skipped);
    println!("  Total now: {}", store.count().await?);

    db.close().await;
    Ok(())
}

/// Reads the value given to `--count`.
fn parse_count(raw: Option<&str>) -> Result<usize, String> {
    let raw = raw.ok_or("--count needs a value")?;
    raw.trim()
        .parse()
        .map_err(|_| format!("invalid --count value '{}': expected a non-negative whole number", raw))
}

/// Every item/variant combination, then numbered batches once those run out.
fn sample_products() -> impl Iterator<Item = NewProduct> {
    (0..).flat_map(|batch: usize| {
        ITEMS.iter().enumerate().flat_map(move |(item_idx, (item, base))| {
            VARIANTS
                .iter()
                .enumerate()
                .map(move |(variant_idx, (variant, factor))| {
                    let seed = batch * 1000 + item_idx * 10 + variant_idx;
                    let name = if batch == 0 {
                        format!("{} {}", item, variant)
                    } else {
                        format!("{} {} #{}", item, variant, batch + 1)
                    };
                    let price = (base * factor * 100.0).round() / 100.0;
                    let quantity = (seed * 7 % 101) as i64;
                    NewProduct::new(name, quantity, price)
                })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(Some("200")), Ok(200));
        assert_eq!(parse_count(Some(" 7 ")), Ok(7));

        let err = parse_count(Some("lots")).unwrap_err();
        assert!(err.contains("'lots'"));
        assert!(parse_count(Some("-5")).is_err());
        assert!(parse_count(None).is_err());
    }

    #[test]
    fn test_sample_names_are_unique() {
        let names: std::collections::HashSet<String> =
            sample_products().take(120).map(|p| p.name).collect();
        assert_eq!(names.len(), 120);
    }
}
