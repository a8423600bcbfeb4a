//! Database configuration module for the debt ledger.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the unique phone constraint and the cascading foreign keys come straight from the
//! `#[sea_orm(...)]` attributes on the models. Creation is idempotent (`IF NOT EXISTS`),
//! which lets the bot start against an existing ledger file.

use crate::entities::{Client, Debt, DebtPayment};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default ledger location when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/debt_ledger.sqlite?mode=rwc";

/// Gets the database URL from environment variable or returns default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Returns the parent directory of a file-backed `SQLite` URL, if it has one.
///
/// In-memory URLs and non-SQLite URLs yield `None`.
#[must_use]
pub fn sqlite_parent_dir(database_url: &str) -> Option<&Path> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}

/// Establishes a connection to the ledger database.
///
/// Creates the directory holding a file-backed `SQLite` database first, so a fresh
/// checkout can start without manual setup.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    if let Some(dir) = sqlite_parent_dir(database_url) {
        debug!("Ensuring database directory {:?} exists", dir);
        std::fs::create_dir_all(dir)?;
    }

    let db = Database::connect(database_url).await?;
    info!("Database connection opened.");
    Ok(db)
}

/// Creates the `clients`, `debts` and `debt_payments` tables if they do not exist yet.
///
/// Order matters: each table references the one created before it.
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut client_table = schema.create_table_from_entity(Client);
    let mut debt_table = schema.create_table_from_entity(Debt);
    let mut payment_table = schema.create_table_from_entity(DebtPayment);

    client_table.if_not_exists();
    debt_table.if_not_exists();
    payment_table.if_not_exists();

    db.execute(builder.build(&client_table)).await?;
    db.execute(builder.build(&debt_table)).await?;
    db.execute(builder.build(&payment_table)).await?;

    info!("Ledger tables created or already present.");
    Ok(())
}
