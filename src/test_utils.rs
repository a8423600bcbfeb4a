//! Shared test utilities for the debt ledger.
//!
//! This module provides common helper functions for setting up test databases
//! and creating clients and debts with sensible defaults.

use crate::{
    core::{client, debt},
    entities::{self, Client},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, EntityTrait};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test client with sensible defaults.
///
/// # Defaults
/// * `fullname`: `"Test Client"`
/// * `address`: None
/// * `photo`: `"/uploads/test.jpg"`
pub async fn create_test_client(
    db: &DatabaseConnection,
    phone: &str,
) -> Result<entities::client::Model> {
    create_custom_client(db, phone, "Test Client", None).await
}

/// Creates a test client with a custom name and address.
pub async fn create_custom_client(
    db: &DatabaseConnection,
    phone: &str,
    fullname: &str,
    address: Option<&str>,
) -> Result<entities::client::Model> {
    let client_id =
        client::resolve_or_create(db, phone, fullname, address, Some("/uploads/test.jpg")).await?;
    Client::find_by_id(client_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "client",
            id: client_id,
        })
}

/// Opens a test debt with the default comment `"Test debt"`.
pub async fn create_test_debt(
    db: &DatabaseConnection,
    client_id: i64,
    amount: f64,
) -> Result<entities::debt::Model> {
    debt::open_debt(db, client_id, amount, "Test debt").await
}

/// Sets up a complete test environment with one client owing one debt.
/// Returns (db, client, debt) for settlement scenarios.
pub async fn setup_with_debt(
    amount: f64,
) -> Result<(
    DatabaseConnection,
    entities::client::Model,
    entities::debt::Model,
)> {
    let db = setup_test_db().await?;
    let client = create_test_client(&db, "+996555000111").await?;
    let debt = create_test_debt(&db, client.id, amount).await?;
    Ok((db, client, debt))
}
