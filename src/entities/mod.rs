//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the ledger tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod client;
pub mod debt;
pub mod debt_payment;

// Re-export specific types to avoid conflicts
pub use client::{Column as ClientColumn, Entity as Client, Model as ClientModel};
pub use debt::{Column as DebtColumn, DebtRating, DebtStatus, Entity as Debt, Model as DebtModel};
pub use debt_payment::{
    Column as DebtPaymentColumn, Entity as DebtPayment, Model as DebtPaymentModel,
};
