//! Client business logic - resolving phone numbers to clients and summarizing them.
//!
//! A client is identified by phone number. [`resolve_or_create`] returns the existing
//! client for a known phone and ignores every other supplied field; for an unseen phone
//! it requires a photo and inserts a new row. [`search_clients`] powers the lookup
//! dropdown and annotates each hit with whether the client still owes money and a
//! reputation derived from the ratings of their paid debts.

use crate::{
    entities::{Client, Debt, DebtRating, DebtStatus, client, debt},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait, prelude::*};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Maximum number of hits returned by [`search_clients`].
pub const CLIENT_SEARCH_LIMIT: u64 = 5;

/// Worst rating across a client's paid debts.
///
/// Variants are declared in increasing severity so `Ord` gives the precedence
/// `untrusted > bad > good > none`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reputation {
    /// No paid debts yet
    #[default]
    None,
    /// Every paid debt was rated good
    Good,
    /// At least one paid debt was rated bad, none untrusted
    Bad,
    /// At least one paid debt was rated untrusted
    Untrusted,
}

impl Reputation {
    /// Lowercase label used in responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Untrusted => "untrusted",
        }
    }

    /// Folds the ratings of a client's paid debts into a single reputation.
    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = DebtRating>,
    {
        ratings
            .into_iter()
            .map(Self::from)
            .max()
            .unwrap_or_default()
    }
}

impl From<DebtRating> for Reputation {
    fn from(rating: DebtRating) -> Self {
        match rating {
            DebtRating::Good => Self::Good,
            DebtRating::Bad => Self::Bad,
            DebtRating::Untrusted => Self::Untrusted,
        }
    }
}

/// A client as shown in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSummary {
    /// Client ID
    pub id: i64,
    /// Full name
    pub fullname: String,
    /// Phone number
    pub phone: String,
    /// Address, if one was recorded
    pub address: Option<String>,
    /// Photo reference, if one was recorded
    pub photo_data: Option<String>,
    /// Whether any of the client's debts is still active
    pub has_active_debt: bool,
    /// Worst rating across the client's paid debts
    pub reputation: Reputation,
}

impl ClientSummary {
    fn from_client(client: client::Model, debts: &[debt::Model]) -> Self {
        let own = || debts.iter().filter(|d| d.client_id == client.id);
        let has_active_debt = own().any(|d| d.status == DebtStatus::Active);
        let reputation = Reputation::from_ratings(
            own()
                .filter(|d| d.status == DebtStatus::Paid)
                .filter_map(|d| d.rating),
        );

        Self {
            id: client.id,
            fullname: client.fullname,
            phone: client.phone,
            address: client.address,
            photo_data: client.photo_data,
            has_active_debt,
            reputation,
        }
    }
}

/// Finds a client by exact phone number.
pub async fn find_client_by_phone<C>(db: &C, phone: &str) -> Result<Option<client::Model>>
where
    C: ConnectionTrait,
{
    Client::find()
        .filter(client::Column::Phone.eq(phone))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a client by its unique ID.
pub async fn get_client_by_id<C>(db: &C, client_id: i64) -> Result<Option<client::Model>>
where
    C: ConnectionTrait,
{
    Client::find_by_id(client_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns the ID of the client with `phone`, creating the client if none exists.
///
/// For a known phone every other argument is ignored; existing clients are never
/// updated. A new client needs a non-empty `photo_ref`. The lookup and the insert run in
/// one transaction; if a concurrent request inserts the same phone first, the unique
/// constraint fires and this returns [`Error::Conflict`] so the caller can retry.
#[instrument(skip(db, fullname, address, photo_ref))]
pub async fn resolve_or_create(
    db: &DatabaseConnection,
    phone: &str,
    fullname: &str,
    address: Option<&str>,
    photo_ref: Option<&str>,
) -> Result<i64> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(Error::validation("phone number is required"));
    }

    let txn = db.begin().await?;

    if let Some(existing) = find_client_by_phone(&txn, phone).await? {
        txn.commit().await?;
        debug!(client_id = existing.id, "Phone already known, reusing client");
        return Ok(existing.id);
    }

    let photo_ref = photo_ref
        .map(str::trim)
        .filter(|photo| !photo.is_empty())
        .ok_or_else(|| Error::validation("photo required for new client"))?;

    let client = insert_client(&txn, phone, fullname, address, photo_ref).await?;
    txn.commit().await?;

    info!(client_id = client.id, "Created new client");
    Ok(client.id)
}

/// Inserts a client row, turning a unique-phone violation into [`Error::Conflict`].
pub(crate) async fn insert_client<C>(
    db: &C,
    phone: &str,
    fullname: &str,
    address: Option<&str>,
    photo_ref: &str,
) -> Result<client::Model>
where
    C: ConnectionTrait,
{
    let model = client::ActiveModel {
        fullname: Set(fullname.trim().to_string()),
        phone: Set(phone.to_string()),
        address: Set(address
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)),
        photo_data: Set(Some(photo_ref.to_string())),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    model.insert(db).await.map_err(|err| {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            warn!("Client with phone {} was created concurrently", phone);
            Error::Conflict {
                message: format!("a client with phone {phone} was just created, retry the lookup"),
            }
        } else {
            Error::Database(err)
        }
    })
}

/// Searches clients by name or phone and annotates each hit with debt status.
///
/// Returns at most [`CLIENT_SEARCH_LIMIT`] clients in ID order. Matching is a
/// case-insensitive substring match (ASCII case folding, as `SQLite`'s `LIKE` does).
#[instrument(skip(db))]
pub async fn search_clients(db: &DatabaseConnection, query: &str) -> Result<Vec<ClientSummary>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::validation("search query is required"));
    }

    let clients = Client::find()
        .filter(
            Condition::any()
                .add(client::Column::Fullname.contains(query))
                .add(client::Column::Phone.contains(query)),
        )
        .order_by_asc(client::Column::Id)
        .limit(CLIENT_SEARCH_LIMIT)
        .all(db)
        .await?;

    if clients.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = clients.iter().map(|c| c.id).collect();
    let debts = Debt::find()
        .filter(debt::Column::ClientId.is_in(ids))
        .all(db)
        .await?;

    Ok(clients
        .into_iter()
        .map(|c| ClientSummary::from_client(c, &debts))
        .collect())
}
