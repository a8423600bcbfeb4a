//! Debt payment entity - One append-only record per payment applied to a debt.
//!
//! `remaining_amount` is a snapshot of the outstanding balance right after the payment,
//! so the first payment's `paid_amount + remaining_amount` is the debt's original amount.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Debt payment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "debt_payments")]
pub struct Model {
    /// Unique identifier for the payment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the debt this payment was applied to
    pub debt_id: i64,
    /// Amount handed over (may exceed what was owed)
    pub paid_amount: f64,
    /// Outstanding balance after this payment, never negative
    pub remaining_amount: f64,
    /// Note entered with the payment
    pub comment: Option<String>,
    /// When the payment was applied
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `DebtPayment` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each payment belongs to one debt
    #[sea_orm(
        belongs_to = "super::debt::Entity",
        from = "Column::DebtId",
        to = "super::debt::Column::Id",
        on_delete = "Cascade"
    )]
    Debt,
}

impl Related<super::debt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Debt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
