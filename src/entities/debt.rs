//! Debt entity - An amount owed by one client.
//!
//! A debt starts `active` and moves exactly once to either `paid` (through settlement)
//! or `deleted` (soft delete). The `amount` column always holds the outstanding
//! balance, never the original one; the original can be rebuilt from payment history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a debt, stored as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    /// Still owed
    #[sea_orm(string_value = "active")]
    Active,
    /// Fully settled and rated
    #[sea_orm(string_value = "paid")]
    Paid,
    /// Soft-deleted with a reason
    #[sea_orm(string_value = "deleted")]
    Deleted,
}

impl DebtStatus {
    /// Parses the wire form (`active`, `paid`, `deleted`), case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "paid" => Some(Self::Paid),
            "deleted" => Some(Self::Deleted),
            _ => None,
        }
    }

    /// The lowercase string stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paid => "paid",
            Self::Deleted => "deleted",
        }
    }
}

/// Trust signal given to a debt when it is fully paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum DebtRating {
    /// Paid back as agreed
    #[sea_orm(string_value = "good")]
    Good,
    /// Paid back, but late or with trouble
    #[sea_orm(string_value = "bad")]
    Bad,
    /// Should not be lent to again
    #[sea_orm(string_value = "untrusted")]
    Untrusted,
}

impl DebtRating {
    /// Parses the wire form (`good`, `bad`, `untrusted`), case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "good" => Some(Self::Good),
            "bad" => Some(Self::Bad),
            "untrusted" => Some(Self::Untrusted),
            _ => None,
        }
    }

    /// The lowercase string stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Untrusted => "untrusted",
        }
    }
}

/// Debt database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "debts")]
pub struct Model {
    /// Unique identifier for the debt
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the client who owes this debt
    pub client_id: i64,
    /// Outstanding amount; reaches 0 when the debt is settled
    pub amount: f64,
    /// Free-text note entered with the debt
    pub comment: String,
    /// Lifecycle state
    pub status: DebtStatus,
    /// Set only when the debt is paid
    pub rating: Option<DebtRating>,
    /// When the debt was recorded
    pub created_at: DateTimeUtc,
    /// When the debt was fully settled
    pub paid_at: Option<DateTimeUtc>,
    /// When the debt was soft-deleted
    pub deleted_at: Option<DateTimeUtc>,
    /// Why the debt was soft-deleted
    pub delete_comment: Option<String>,
}

/// Defines relationships between Debt and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each debt belongs to one client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_delete = "Cascade"
    )]
    Client,
    /// One debt has many payments
    #[sea_orm(has_many = "super::debt_payment::Entity")]
    Payments,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::debt_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
