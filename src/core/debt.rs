//! Debt business logic - recording, looking up and retiring debts.
//!
//! Debts are opened `active` for an existing client. Settlement lives in
//! [`crate::core::settlement`]; this module covers the other two ways a debt leaves the
//! active state: soft deletion with a reason, and the legacy direct-pay path.

use crate::{
    entities::{Client, Debt, DebtRating, DebtStatus, debt},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use tracing::{info, instrument, warn};

/// Checks that a debt amount is a finite number greater than zero.
///
/// Callers that write other rows before opening the debt (such as a new client) run
/// this first so a bad amount leaves nothing behind.
pub fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::validation(format!(
            "debt amount must be greater than zero, got {amount}"
        )));
    }
    Ok(())
}

/// Records a new active debt for `client_id`.
///
/// The amount must be a finite number greater than zero and the client must exist.
#[instrument(skip(db, comment))]
pub async fn open_debt(
    db: &DatabaseConnection,
    client_id: i64,
    amount: f64,
    comment: &str,
) -> Result<debt::Model> {
    validate_amount(amount)?;

    Client::find_by_id(client_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "client",
            id: client_id,
        })?;

    let model = debt::ActiveModel {
        client_id: Set(client_id),
        amount: Set(amount),
        comment: Set(comment.trim().to_string()),
        status: Set(DebtStatus::Active),
        rating: Set(None),
        created_at: Set(chrono::Utc::now()),
        paid_at: Set(None),
        deleted_at: Set(None),
        delete_comment: Set(None),
        ..Default::default()
    };

    let debt = model.insert(db).await?;
    info!(debt_id = debt.id, client_id, amount, "Opened debt");
    Ok(debt)
}

/// Fetches a debt by ID, failing with [`Error::NotFound`] if it does not exist.
pub async fn get_debt<C>(db: &C, debt_id: i64) -> Result<debt::Model>
where
    C: ConnectionTrait,
{
    Debt::find_by_id(debt_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "debt",
            id: debt_id,
        })
}

/// Marks a debt as deleted, recording when and why.
///
/// Amount, rating and `paid_at` are left as they were. The current status is not
/// checked, so a paid or already deleted debt can be deleted again to correct a mistake.
#[instrument(skip(db, reason))]
pub async fn soft_delete(db: &DatabaseConnection, debt_id: i64, reason: &str) -> Result<()> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(Error::validation("a reason is required to delete a debt"));
    }

    let result = Debt::update_many()
        .set(debt::ActiveModel {
            status: Set(DebtStatus::Deleted),
            deleted_at: Set(Some(chrono::Utc::now())),
            delete_comment: Set(Some(reason.to_string())),
            ..Default::default()
        })
        .filter(debt::Column::Id.eq(debt_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "debt",
            id: debt_id,
        });
    }

    info!(debt_id, "Soft-deleted debt");
    Ok(())
}

/// Legacy: closes a debt with a rating without recording a payment.
///
/// The outstanding amount is left untouched and no payment row is written, so the
/// payment history no longer explains the debt. Kept only for older callers; use
/// [`crate::core::settlement::apply_payment`] instead.
#[doc(hidden)]
#[instrument(skip(db))]
pub async fn mark_paid_directly(
    db: &DatabaseConnection,
    debt_id: i64,
    rating: DebtRating,
) -> Result<()> {
    let result = Debt::update_many()
        .set(debt::ActiveModel {
            status: Set(DebtStatus::Paid),
            rating: Set(Some(rating)),
            paid_at: Set(Some(chrono::Utc::now())),
            ..Default::default()
        })
        .filter(debt::Column::Id.eq(debt_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "debt",
            id: debt_id,
        });
    }

    warn!(debt_id, "Debt closed through the legacy direct-pay path");
    Ok(())
}
