//! Debt settlement - applying payments to outstanding debts.
//!
//! [`apply_payment`] is the only way a debt should reach the `paid` state. It runs as a
//! single database transaction: the payment row and the debt update are committed
//! together or not at all, so the payment history always explains the outstanding
//! amount. Over-payment is accepted and treated as exact settlement; no change is
//! recorded.

use crate::{
    entities::{Debt, DebtPayment, DebtRating, DebtStatus, debt, debt_payment},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Outcome of a successful [`apply_payment`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    /// Outstanding amount after the payment (0 when closed)
    pub remaining: f64,
    /// Whether the payment fully settled the debt
    pub closed: bool,
    /// The payment row that was recorded
    pub payment: debt_payment::Model,
}

/// Outstanding amount after paying `paid` against `outstanding`, clamped at zero.
#[must_use]
pub fn remaining_after(outstanding: f64, paid: f64) -> f64 {
    (outstanding - paid).max(0.0)
}

/// Applies a payment to an active debt.
///
/// Steps, all inside one transaction:
/// 1. Read the debt (exclusive row lock where the backend supports one).
/// 2. Require a non-empty `comment`, a positive finite `paid_amount` and an active debt.
/// 3. Compute the remaining amount, clamped at zero.
/// 4. Append a payment row with the paid and remaining amounts.
/// 5. If nothing remains, zero the debt and mark it paid with `rating_if_closing`, which
///    is then mandatory. Otherwise store the new outstanding amount.
///
/// Any failure rolls the whole transaction back when `txn` is dropped uncommitted.
#[instrument(skip(db, comment))]
pub async fn apply_payment(
    db: &DatabaseConnection,
    debt_id: i64,
    paid_amount: f64,
    comment: &str,
    rating_if_closing: Option<DebtRating>,
) -> Result<Settlement> {
    let txn = db.begin().await?;

    let debt = Debt::find_by_id(debt_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(Error::NotFound {
            entity: "debt",
            id: debt_id,
        })?;

    let comment = comment.trim();
    if comment.is_empty() {
        return Err(Error::validation("a comment is required for every payment"));
    }
    if !paid_amount.is_finite() || paid_amount <= 0.0 {
        return Err(Error::validation(format!(
            "payment amount must be greater than zero, got {paid_amount}"
        )));
    }
    if debt.status != DebtStatus::Active {
        return Err(Error::validation(format!(
            "debt {debt_id} is {} and cannot take payments",
            debt.status.as_str()
        )));
    }

    let remaining = remaining_after(debt.amount, paid_amount);
    let closing_rating = if remaining <= 0.0 {
        let rating = rating_if_closing
            .ok_or_else(|| Error::validation("a rating is required to close a debt"))?;
        Some(rating)
    } else {
        None
    };

    let now = chrono::Utc::now();
    let payment = debt_payment::ActiveModel {
        debt_id: Set(debt_id),
        paid_amount: Set(paid_amount),
        remaining_amount: Set(remaining),
        comment: Set(Some(comment.to_string())),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut update: debt::ActiveModel = debt.into();
    match closing_rating {
        Some(rating) => {
            update.amount = Set(0.0);
            update.status = Set(DebtStatus::Paid);
            update.rating = Set(Some(rating));
            update.paid_at = Set(Some(now));
        }
        None => {
            update.amount = Set(remaining);
        }
    }
    update.update(&txn).await?;

    txn.commit().await?;

    let closed = closing_rating.is_some();
    if closed {
        info!(debt_id, paid_amount, "Debt fully settled");
    } else {
        info!(debt_id, paid_amount, remaining, "Partial payment recorded");
    }

    Ok(Settlement {
        remaining,
        closed,
        payment,
    })
}

/// Lists every payment applied to a debt, newest first.
///
/// Returns an empty list for a debt without payments (or an unknown debt).
pub async fn payment_history<C>(db: &C, debt_id: i64) -> Result<Vec<debt_payment::Model>>
where
    C: ConnectionTrait,
{
    let payments = DebtPayment::find()
        .filter(debt_payment::Column::DebtId.eq(debt_id))
        .order_by_desc(debt_payment::Column::CreatedAt)
        .order_by_desc(debt_payment::Column::Id)
        .all(db)
        .await?;
    debug!(debt_id, count = payments.len(), "Loaded payment history");
    Ok(payments)
}
