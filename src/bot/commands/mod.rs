//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Client listing and lookup commands
pub mod client;

/// Debt lifecycle commands: open, pay, delete, list
pub mod debt;

/// General utility commands
pub mod general;

// Export commands
pub use client::*;
pub use debt::*;
pub use general::*;
