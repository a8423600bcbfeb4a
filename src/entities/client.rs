//! Client entity - A person who owes debts, identified by phone number.
//!
//! Clients are created once through the client resolver and reused by every later
//! debt recorded against the same phone number. They are never updated or deleted
//! by the application.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    /// Unique identifier for the client
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full name as entered when the first debt was recorded
    pub fullname: String,
    /// Phone number, the natural identity of a client
    #[sea_orm(unique)]
    pub phone: String,
    /// Optional home or work address
    pub address: Option<String>,
    /// Reference to the stored photo (required at creation, optional afterwards)
    pub photo_data: Option<String>,
    /// When the client was first recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Client and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One client has many debts
    #[sea_orm(has_many = "super::debt::Entity")]
    Debts,
}

impl Related<super::debt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Debts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
