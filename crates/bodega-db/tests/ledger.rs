//! Integration tests for the sale-commit transaction and window
//! aggregation, against an in-memory SQLite database.

use chrono::{Duration, TimeZone, Utc};

use bodega_core::{Product, SaleEntry, TimeWindow};
use bodega_db::repository::catalog::generate_product_id;
use bodega_db::repository::ledger::generate_entry_id;
use bodega_db::{CommitOutcome, Database, DbConfig};

async fn test_db() -> Database {
    Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory database")
}

fn product(name: &str, stock: i64, buy_cents: i64, sell_cents: i64) -> Product {
    let now = Utc::now();
    Product {
        id: generate_product_id(),
        name: name.to_string(),
        stock,
        buy_price_cents: buy_cents,
        sell_price_cents: sell_cents,
        created_at: now,
        updated_at: now,
    }
}

fn entry(product: &Product, quantity: i64, at: chrono::DateTime<Utc>) -> SaleEntry {
    SaleEntry {
        id: generate_entry_id(),
        product_id: product.id.clone(),
        unit_price_cents: product.sell_price_cents,
        quantity,
        created_at: at,
    }
}

#[tokio::test]
async fn commit_decrements_stock_and_appends_entry() {
    let db = test_db().await;
    let p = product("Cafe molido 500g", 10, 500, 800);
    db.catalog().insert(&p).await.unwrap();

    let outcome = db
        .ledger()
        .commit_sale(&entry(&p, 3, Utc::now()))
        .await
        .unwrap();

    assert_eq!(outcome, CommitOutcome::Committed);

    let stored = db.catalog().get_by_id(&p.id).await.unwrap().unwrap();
    assert_eq!(stored.stock, 7);
    assert_eq!(db.ledger().count().await.unwrap(), 1);
}

#[tokio::test]
async fn oversell_writes_nothing() {
    let db = test_db().await;
    let p = product("Azucar 1kg", 7, 500, 800);
    db.catalog().insert(&p).await.unwrap();

    let outcome = db
        .ledger()
        .commit_sale(&entry(&p, 8, Utc::now()))
        .await
        .unwrap();

    assert_eq!(outcome, CommitOutcome::InsufficientStock { available: 7 });

    // No partial effects: stock untouched, ledger untouched.
    let stored = db.catalog().get_by_id(&p.id).await.unwrap().unwrap();
    assert_eq!(stored.stock, 7);
    assert_eq!(db.ledger().count().await.unwrap(), 0);
}

#[tokio::test]
async fn missing_product_writes_nothing() {
    let db = test_db().await;
    let ghost = product("Fantasma", 10, 100, 200);

    // Never inserted into the catalog.
    let outcome = db
        .ledger()
        .commit_sale(&entry(&ghost, 1, Utc::now()))
        .await
        .unwrap();

    assert_eq!(outcome, CommitOutcome::ProductMissing);
    assert_eq!(db.ledger().count().await.unwrap(), 0);
}

#[tokio::test]
async fn ledger_only_grows() {
    let db = test_db().await;
    let p = product("Arroz 1kg", 5, 300, 450);
    db.catalog().insert(&p).await.unwrap();

    let ledger = db.ledger();
    ledger.commit_sale(&entry(&p, 2, Utc::now())).await.unwrap();
    assert_eq!(ledger.count().await.unwrap(), 1);

    // A rejected sale must not shrink or grow the ledger.
    ledger.commit_sale(&entry(&p, 99, Utc::now())).await.unwrap();
    assert_eq!(ledger.count().await.unwrap(), 1);

    ledger.commit_sale(&entry(&p, 1, Utc::now())).await.unwrap();
    assert_eq!(ledger.count().await.unwrap(), 2);
}

#[tokio::test]
async fn restock_reopens_sales() {
    let db = test_db().await;
    let p = product("Pan dulce", 1, 100, 250);
    db.catalog().insert(&p).await.unwrap();

    let outcome = db
        .ledger()
        .commit_sale(&entry(&p, 3, Utc::now()))
        .await
        .unwrap();
    assert_eq!(outcome, CommitOutcome::InsufficientStock { available: 1 });

    db.catalog().restock(&p.id, 10).await.unwrap();

    let outcome = db
        .ledger()
        .commit_sale(&entry(&p, 3, Utc::now()))
        .await
        .unwrap();
    assert_eq!(outcome, CommitOutcome::Committed);

    let stored = db.catalog().get_by_id(&p.id).await.unwrap().unwrap();
    assert_eq!(stored.stock, 8);
}

#[tokio::test]
async fn window_boundary_respects_end_bound() {
    let db = test_db().await;
    let p = product("Tortillas paquete", 100, 100, 200);
    db.catalog().insert(&p).await.unwrap();

    let month_start = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();
    let ledger = db.ledger();

    ledger
        .commit_sale(&entry(&p, 1, month_start))
        .await
        .unwrap();
    ledger
        .commit_sale(&entry(&p, 2, month_start - Duration::milliseconds(1)))
        .await
        .unwrap();

    // Closed window starting at the month boundary sees only the first.
    let window = TimeWindow::closed(month_start, month_start + Duration::days(30));
    let entries = ledger.entries_in_window(&window).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].quantity, 1);

    // Half-open window ending at the boundary sees only the second.
    let before = TimeWindow::half_open(month_start - Duration::days(30), month_start);
    let entries = ledger.entries_in_window(&before).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].quantity, 2);
}

#[tokio::test]
async fn aggregate_sums_per_product() {
    let db = test_db().await;
    let coffee = product("Cafe molido 500g", 50, 500, 800);
    let sugar = product("Azucar 1kg", 50, 200, 350);
    db.catalog().insert(&coffee).await.unwrap();
    db.catalog().insert(&sugar).await.unwrap();

    let now = Utc::now();
    let ledger = db.ledger();
    ledger.commit_sale(&entry(&coffee, 3, now)).await.unwrap();
    ledger.commit_sale(&entry(&coffee, 2, now)).await.unwrap();
    ledger.commit_sale(&entry(&sugar, 4, now)).await.unwrap();

    let window = TimeWindow::closed(now - Duration::hours(1), now + Duration::hours(1));
    let rows = ledger.aggregate(&window).await.unwrap();

    assert_eq!(rows.len(), 2);
    let coffee_row = rows.iter().find(|r| r.product_id == coffee.id).unwrap();
    assert_eq!(coffee_row.quantity_sold, 5);
    assert_eq!(coffee_row.revenue_cents, 5 * 800);
    assert_eq!(coffee_row.cost_cents, 5 * 500);

    let sugar_row = rows.iter().find(|r| r.product_id == sugar.id).unwrap();
    assert_eq!(sugar_row.quantity_sold, 4);
    assert_eq!(sugar_row.revenue_cents, 4 * 350);
    assert_eq!(sugar_row.cost_cents, 4 * 200);
}

#[tokio::test]
async fn aggregate_is_idempotent() {
    let db = test_db().await;
    let p = product("Atun en lata", 20, 300, 500);
    db.catalog().insert(&p).await.unwrap();

    let now = Utc::now();
    let ledger = db.ledger();
    ledger.commit_sale(&entry(&p, 2, now)).await.unwrap();
    ledger.commit_sale(&entry(&p, 5, now)).await.unwrap();

    let window = TimeWindow::closed(now - Duration::hours(1), now + Duration::hours(1));
    let first = ledger.aggregate(&window).await.unwrap();
    let second = ledger.aggregate(&window).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn cost_follows_live_buy_price_revenue_stays_captured() {
    let db = test_db().await;
    let p = product("Aceite de oliva 500ml", 20, 500, 800);
    db.catalog().insert(&p).await.unwrap();

    let now = Utc::now();
    db.ledger().commit_sale(&entry(&p, 3, now)).await.unwrap();

    // Reprice after the sale: buy 500 → 600, sell 800 → 900.
    db.catalog().update_prices(&p.id, 600, 900).await.unwrap();

    let window = TimeWindow::closed(now - Duration::hours(1), now + Duration::hours(1));
    let rows = db.ledger().aggregate(&window).await.unwrap();

    // Revenue uses the price captured on the entry; cost re-reads the
    // product's current buy price. Intentional asymmetry.
    assert_eq!(rows[0].revenue_cents, 3 * 800);
    assert_eq!(rows[0].cost_cents, 3 * 600);
}
