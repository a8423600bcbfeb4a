//! Core business logic - framework-agnostic ledger operations.
//!
//! Nothing in here knows about Discord. Every function takes the database handle
//! it needs as an argument, so tests can hand in an in-memory `SQLite` connection or a
//! `MockDatabase`.

/// Client resolution, client search and reputation
pub mod client;
/// Debt intake, lookup, soft delete and the legacy direct-pay path
pub mod debt;
/// Client photo storage
pub mod photo;
/// Filtered, sorted and paginated listings of debts and clients
pub mod query;
/// Payment application and payment history
pub mod settlement;
