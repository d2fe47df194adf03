//! Customer table DDL, seed data, and row-level access.
//!
//! The database file is disposable: [`init_store`] deletes any file left over
//! from a previous run and rebuilds schema and seed rows from scratch, so
//! every process start begins from the same state.

use crate::error::AppError;
use crate::model::Customer;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

/// Upper bound on pooled connections. SQLite serializes writers on its own;
/// this only caps concurrent readers.
const MAX_CONNECTIONS: u32 = 5;

/// Sample records inserted when the table is empty:
/// (name, role, email, phone, contacted).
const SEED_CUSTOMERS: &[(&str, &str, &str, &str, bool)] = &[
    ("Bauer Klaus", "Farmer", "klaus.bauer@farm.de", "01234 567890", true),
    ("Bauerin Anna", "Owner", "anna.bauerin@farm.de", "01234 567891", false),
    ("Müller Hans", "Worker", "hans.mueller@farm.de", "01234 567892", true),
    ("Schmidt Peter", "Manager", "peter.schmidt@farm.de", "01234 567893", false),
    ("Fischer Maria", "Assistant", "maria.fischer@farm.de", "01234 567894", true),
    ("Weber Karl", "Technician", "karl.weber@farm.de", "01234 567895", false),
    ("Meyer Lisa", "Accountant", "lisa.meyer@farm.de", "01234 567896", true),
    ("Wagner Thomas", "Driver", "thomas.wagner@farm.de", "01234 567897", false),
    ("Becker Laura", "Secretary", "laura.becker@farm.de", "01234 567898", true),
    ("Hoffmann Frank", "Guard", "frank.hoffmann@farm.de", "01234 567899", false),
];

/// Delete any existing database file, open a fresh pool, create the schema,
/// and seed the table. Startup-time only: callers treat an error as fatal.
pub async fn init_store(path: &Path) -> Result<SqlitePool, AppError> {
    remove_stale_database(path)?;
    let pool = open_pool(path).await?;
    create_customers_table(&pool).await?;
    let seeded = seed_if_empty(&pool).await?;
    if seeded > 0 {
        tracing::info!(count = seeded, "inserted seed customers");
    }
    Ok(pool)
}

/// Remove the file from a previous run. A missing file is fine; any other
/// failure is not, since the fresh-state guarantee would be silently lost.
fn remove_stale_database(path: &Path) -> Result<(), AppError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "removed previous database file");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AppError::Io(e)),
    }
}

async fn open_pool(path: &Path) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;
    Ok(pool)
}

async fn create_customers_table(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            role TEXT,
            email TEXT,
            phone TEXT,
            contacted BOOLEAN
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Insert the sample records if the table is empty. The whole batch commits
/// in one transaction, so a failure leaves the table untouched. Returns the
/// number of rows inserted.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<u64, AppError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        tracing::debug!(count, "customer table already populated, skipping seed");
        return Ok(0);
    }

    tracing::info!("customer table empty, inserting seed data");
    let mut tx = pool.begin().await?;
    for &(name, role, email, phone, contacted) in SEED_CUSTOMERS {
        sqlx::query(
            "INSERT INTO customers (name, role, email, phone, contacted) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(role)
        .bind(email)
        .bind(phone)
        .bind(contacted)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(SEED_CUSTOMERS.len() as u64)
}

/// All customers in storage order.
pub async fn list_customers(pool: &SqlitePool) -> Result<Vec<Customer>, AppError> {
    let rows = sqlx::query_as::<_, Customer>(
        "SELECT id, name, role, email, phone, contacted FROM customers",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// One customer, or `None` when no row matches.
pub async fn customer_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Customer>, AppError> {
    let row = sqlx::query_as::<_, Customer>(
        "SELECT id, name, role, email, phone, contacted FROM customers WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Insert a new row. Any id on `customer` is ignored; the id the database
/// assigned is returned.
pub async fn insert_customer(pool: &SqlitePool, customer: &Customer) -> Result<i64, AppError> {
    let result = sqlx::query(
        "INSERT INTO customers (name, role, email, phone, contacted) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&customer.name)
    .bind(&customer.role)
    .bind(&customer.email)
    .bind(&customer.phone)
    .bind(customer.contacted)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Overwrite every mutable field of the row matching `id`. Returns the rows
/// touched; zero means the id did not exist. That is not an error at this
/// layer, so callers that need existence must check the count.
pub async fn update_customer(
    pool: &SqlitePool,
    id: i64,
    customer: &Customer,
) -> Result<u64, AppError> {
    let result = sqlx::query(
        "UPDATE customers SET name = ?, role = ?, email = ?, phone = ?, contacted = ? WHERE id = ?",
    )
    .bind(&customer.name)
    .bind(&customer.role)
    .bind(&customer.email)
    .bind(&customer.phone)
    .bind(customer.contacted)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Delete the row matching `id`. Returns the rows touched; zero when the id
/// was already absent.
pub async fn delete_customer(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM customers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
