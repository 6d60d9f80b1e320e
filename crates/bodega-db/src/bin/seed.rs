//! # Seed Data Generator
//!
//! Populates a dev database with products and a few weeks of backdated
//! sales so the analytics queries have something to chew on.
//!
//! ## Usage
//! ```bash
//! # Default: 40 products, ~6 weeks of sales, ./bodega_dev.db
//! cargo run -p bodega-db --bin seed
//!
//! # Custom amounts
//! cargo run -p bodega-db --bin seed -- --products 100 --weeks 12
//!
//! # Specify database path
//! cargo run -p bodega-db --bin seed -- --db ./data/bodega.db
//! ```

use chrono::{Duration, Utc};
use std::env;
use tracing::info;

use bodega_core::{Product, SaleEntry};
use bodega_db::repository::catalog::generate_product_id;
use bodega_db::repository::ledger::generate_entry_id;
use bodega_db::{CommitOutcome, Database, DbConfig};

/// Product names for realistic storefront data.
const NAMES: &[&str] = &[
    "Cafe molido 500g",
    "Azucar 1kg",
    "Arroz 1kg",
    "Frijoles negros 1kg",
    "Aceite de oliva 500ml",
    "Harina de maiz 1kg",
    "Leche entera 1L",
    "Queso fresco 250g",
    "Pan dulce",
    "Tortillas paquete",
    "Refresco cola 2L",
    "Agua mineral 1.5L",
    "Jugo de naranja 1L",
    "Galletas surtidas",
    "Chocolate en barra",
    "Atun en lata",
    "Sardinas en lata",
    "Pasta espagueti 500g",
    "Salsa de tomate 400g",
    "Detergente 1kg",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut product_count: usize = 40;
    let mut weeks: i64 = 6;
    let mut db_path = String::from("./bodega_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--products" | "-p" => {
                if i + 1 < args.len() {
                    product_count = args[i + 1].parse().unwrap_or(40);
                    i += 1;
                }
            }
            "--weeks" | "-w" => {
                if i + 1 < args.len() {
                    weeks = args[i + 1].parse().unwrap_or(6);
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
                println!("Bodega Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --products <N>  Number of products to generate (default: 40)");
                println!("  -w, --weeks <N>     Weeks of backdated sales (default: 6)");
                println!("  -d, --db <PATH>     Database file path (default: ./bodega_dev.db)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    info!(db = %db_path, products = product_count, weeks = weeks, "Seeding database");

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let catalog = db.catalog();
    let ledger = db.ledger();

    // Deterministic pseudo-random sequence; good enough for seed data.
    let mut rng_state: u64 = 0x5eed_b0de;
    let mut next = move |bound: u64| -> u64 {
        rng_state ^= rng_state << 13;
        rng_state ^= rng_state >> 7;
        rng_state ^= rng_state << 17;
        rng_state % bound
    };

    let now = Utc::now();
    let mut product_ids = Vec::with_capacity(product_count);

    for n in 0..product_count {
        let name = format!("{} #{}", NAMES[n % NAMES.len()], n / NAMES.len() + 1);
        let buy_price_cents = 100 + next(2000) as i64;
        let sell_price_cents = buy_price_cents + 50 + next(1000) as i64;

        let product = Product {
            id: generate_product_id(),
            name,
            stock: 200 + next(300) as i64,
            buy_price_cents,
            sell_price_cents,
            created_at: now,
            updated_at: now,
        };

        catalog.insert(&product).await?;
        product_ids.push((product.id, product.sell_price_cents));
    }

    // Backdated sales spread over the requested span, so both the current
    // and previous analytics windows have data.
    let mut committed = 0u64;
    let total_days = sale_days(weeks, product_ids.len());

    for day in 0..total_days {
        let sales_today = 2 + next(6);
        for _ in 0..sales_today {
            let (product_id, sell_price) = &product_ids[next(product_ids.len() as u64) as usize];
            let entry = SaleEntry {
                id: generate_entry_id(),
                product_id: product_id.clone(),
                unit_price_cents: *sell_price,
                quantity: 1 + next(4) as i64,
                created_at: now - Duration::days(total_days - day)
                    + Duration::minutes(next(600) as i64),
            };

            match ledger.commit_sale(&entry).await? {
                CommitOutcome::Committed => committed += 1,
                // Drained products just stop selling; keep going.
                CommitOutcome::InsufficientStock { .. } => {
                    catalog.restock(product_id, 100).await?;
                }
                CommitOutcome::ProductMissing => {}
            }
        }
    }

    let products = catalog.count().await?;
    let entries = ledger.count().await?;
    info!(products, entries, committed, "Seed complete");

    db.close().await;
    Ok(())
}

/// Days of backdated sales to generate. An empty catalog (`--products 0`)
/// has nothing to sell, so the sales loop must not run at all.
fn sale_days(weeks: i64, product_count: usize) -> i64 {
    if product_count == 0 {
        0
    } else {
        weeks * 7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_generates_no_sale_days() {
        assert_eq!(sale_days(6, 0), 0);
        assert_eq!(sale_days(6, 40), 42);
        assert_eq!(sale_days(0, 40), 0);
    }
}
