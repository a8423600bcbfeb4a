//! Choice parameters shown as dropdowns in slash commands.
//!
//! Each choice maps one-to-one onto a core type, so commands never pass raw strings
//! into the ledger.

use crate::{
    core::query::SortKey,
    entities::{DebtRating, DebtStatus},
};

/// Rating picked when a payment closes a debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum RatingChoice {
    /// Paid back as agreed
    #[name = "good"]
    Good,
    /// Paid back with trouble
    #[name = "bad"]
    Bad,
    /// Do not lend again
    #[name = "untrusted"]
    Untrusted,
}

impl From<RatingChoice> for DebtRating {
    fn from(choice: RatingChoice) -> Self {
        match choice {
            RatingChoice::Good => Self::Good,
            RatingChoice::Bad => Self::Bad,
            RatingChoice::Untrusted => Self::Untrusted,
        }
    }
}

/// Status filter for the debt listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum StatusChoice {
    /// Still owed
    #[name = "active"]
    Active,
    /// Settled
    #[name = "paid"]
    Paid,
    /// Soft-deleted
    #[name = "deleted"]
    Deleted,
}

impl From<StatusChoice> for DebtStatus {
    fn from(choice: StatusChoice) -> Self {
        match choice {
            StatusChoice::Active => Self::Active,
            StatusChoice::Paid => Self::Paid,
            StatusChoice::Deleted => Self::Deleted,
        }
    }
}

/// Ordering of the debt listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum SortChoice {
    /// Newest first
    #[name = "newest"]
    Newest,
    /// Oldest first
    #[name = "oldest"]
    Oldest,
    /// Client name A-Z
    #[name = "name"]
    Name,
    /// Largest amount first
    #[name = "amount (high to low)"]
    AmountDesc,
    /// Smallest amount first
    #[name = "amount (low to high)"]
    AmountAsc,
}

impl From<SortChoice> for SortKey {
    fn from(choice: SortChoice) -> Self {
        match choice {
            SortChoice::Newest => Self::Newest,
            SortChoice::Oldest => Self::Oldest,
            SortChoice::Name => Self::ClientName,
            SortChoice::AmountDesc => Self::AmountDesc,
            SortChoice::AmountAsc => Self::AmountAsc,
        }
    }
}
