//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 60 products (default) in ./storekeep_dev.db
//! cargo run -p storekeep-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p storekeep-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p storekeep-db --bin seed -- --db ./data/storekeep.db
//! ```
//!
//! Each product gets a name built from a category word and a size variant,
//! a deterministic price and a deterministic stock quantity, so repeated
//! runs against a fresh file produce identical data.

use std::env;

use storekeep_core::Product;
use storekeep_db::{migrations, ConnectionProvider, DbConfig, ProductStore};
use tracing_subscriber::EnvFilter;

/// Base names for generated products
const NAMES: &[&str] = &[
    "Hammer", "Screwdriver", "Wrench", "Pliers", "Drill", "Saw", "Chisel", "Level", "Tape Measure",
    "Clamp", "Sander", "File", "Mallet", "Crowbar", "Socket Set", "Utility Knife", "Hacksaw",
    "Stapler", "Glue Gun", "Workbench",
];

/// Size variants with a price addon in whole currency units
const SIZES: &[(&str, f64)] = &[
    ("Small", 0.0),
    ("Medium", 2.0),
    ("Large", 4.5),
    ("Pro", 9.0),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 60;
    let mut db_path = String::from("./storekeep_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(60);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Storekeep Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 60)");
                println!("  -d, --db <PATH>    Database file path (default: ./storekeep_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Storekeep Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    // Dev-only credentials; SQLite ignores them (see DbConfig docs)
    let config = DbConfig::new(format!("sqlite://{}", db_path), "dev", "dev");
    let provider = ConnectionProvider::new(config);
    migrations::run(&provider).await?;

    println!("Connected, migrations applied");

    let store = ProductStore::new(provider);

    // Check existing products
    let existing = store.list_all().await.len();
    if existing > 0 {
        println!("Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Generate products
    println!();
    println!("Generating products...");

    let mut generated = 0;
    let start = std::time::Instant::now();

    'outer: for (name_idx, name) in NAMES.iter().enumerate() {
        for (size, price_addon) in SIZES.iter() {
            if generated >= count {
                break 'outer;
            }

            let product = generate_product(name, size, *price_addon, name_idx);
            if !store.add(&product).await {
                eprintln!("Failed to insert {}", product.name);
                continue;
            }

            generated += 1;

            if generated % 20 == 0 {
                println!("  Generated {} products...", generated);
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("Generated {} products in {:?}", generated, elapsed);

    // Verify lookups work against the seeded data
    println!();
    println!("Verifying lookup...");
    let found = store.find_by_name("hammer small").await?;
    println!("  Lookup 'hammer small': {}", if found.is_some() { "hit" } else { "miss" });

    println!();
    println!("Seed complete");

    Ok(())
}

/// Generates a single product with deterministic data.
fn generate_product(name: &str, size: &str, price_addon: f64, seed: usize) -> Product {
    // Base price 1.99 - 9.99 derived from the seed index
    let base_price = 1.99 + ((seed * 17) % 800) as f64 / 100.0;
    let quantity = ((seed * 7) % 101) as i64;

    Product::new(format!("{} {}", name, size), quantity, base_price + price_addon)
}
