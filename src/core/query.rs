//! Listing business logic - filtered, sorted and paginated views over debts and clients.
//!
//! Filters are described as data first: [`DebtFilter::clauses`] turns the optional
//! request fields into a list of typed [`DebtClause`]s, and each clause compiles to a
//! `SeaORM` [`Condition`]. Values always travel as bound parameters, never spliced into
//! SQL text. Listings return a [`Page`] carrying both the requested slice and the total
//! number of matching rows.

use crate::{
    entities::{Client, Debt, DebtRating, DebtStatus, client, debt},
    errors::{Error, Result},
};
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use sea_orm::{Condition, QueryOrder, Select, SelectTwo, prelude::*};
use serde::Serialize;
use tracing::{debug, instrument};

/// One page of results plus the total number of rows matching the filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Rows on the requested page (empty, never absent, when nothing matches)
    pub data: Vec<T>,
    /// Number of rows matching the filter, ignoring pagination
    pub total: u64,
}

/// Converts a 1-based page number into the 0-based index the paginator wants.
///
/// Pages below 1 are treated as page 1.
#[must_use]
pub const fn page_index(page: u64) -> u64 {
    page.saturating_sub(1)
}

/// Largest row offset the store accepts (SQL offsets are signed 64-bit).
const MAX_OFFSET: u64 = i64::MAX.unsigned_abs();

/// Paginator index for `page`, rejecting pages whose row offset would overflow.
pub fn checked_page_index(page: u64, page_size: u64) -> Result<u64> {
    let index = page_index(page);
    page_size
        .max(1)
        .checked_mul(index)
        .filter(|offset| *offset <= MAX_OFFSET)
        .map(|_| index)
        .ok_or_else(|| Error::validation(format!("page {page} is out of range")))
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| Error::validation(format!("invalid date '{value}', expected YYYY-MM-DD")))
}

/// Half-open UTC range `[start, end)` covering one calendar day.
#[must_use]
pub fn day_bounds(date: NaiveDate) -> (DateTimeUtc, DateTimeUtc) {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    (start, start + TimeDelta::days(1))
}

/// Ordering of the debt listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most recent first, ties broken by descending ID
    #[default]
    Newest,
    /// Oldest first, ties broken by ascending ID
    Oldest,
    /// Client name A to Z
    ClientName,
    /// Largest outstanding amount first
    AmountDesc,
    /// Smallest outstanding amount first
    AmountAsc,
}

impl SortKey {
    /// Parses the wire form (`date_new`, `date_old`, `name`, `amount_desc`, `amount_asc`).
    ///
    /// An empty string selects the default order.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "" | "date_new" => Some(Self::Newest),
            "date_old" => Some(Self::Oldest),
            "name" => Some(Self::ClientName),
            "amount_desc" => Some(Self::AmountDesc),
            "amount_asc" => Some(Self::AmountAsc),
            _ => None,
        }
    }

    /// The wire form of this sort key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "date_new",
            Self::Oldest => "date_old",
            Self::ClientName => "name",
            Self::AmountDesc => "amount_desc",
            Self::AmountAsc => "amount_asc",
        }
    }
}

/// A single typed predicate over the debt listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtClause {
    /// Exact status match
    Status(DebtStatus),
    /// Debts of one client
    Client(i64),
    /// Substring of client name, phone, address or debt comment
    Search(String),
    /// Created on this calendar day
    CreatedOn(NaiveDate),
    /// Deleted on this calendar day
    DeletedOn(NaiveDate),
}

impl DebtClause {
    /// Compiles the clause into a `SeaORM` condition over `debts` joined with `clients`.
    #[must_use]
    pub fn into_condition(self) -> Condition {
        match self {
            Self::Status(status) => Condition::all().add(debt::Column::Status.eq(status)),
            Self::Client(client_id) => Condition::all().add(debt::Column::ClientId.eq(client_id)),
            Self::Search(text) => Condition::any()
                .add(client::Column::Fullname.contains(text.as_str()))
                .add(client::Column::Phone.contains(text.as_str()))
                .add(client::Column::Address.contains(text.as_str()))
                .add(debt::Column::Comment.contains(text.as_str())),
            Self::CreatedOn(date) => {
                let (start, end) = day_bounds(date);
                Condition::all()
                    .add(debt::Column::CreatedAt.gte(start))
                    .add(debt::Column::CreatedAt.lt(end))
            }
            Self::DeletedOn(date) => {
                let (start, end) = day_bounds(date);
                Condition::all()
                    .add(debt::Column::DeletedAt.gte(start))
                    .add(debt::Column::DeletedAt.lt(end))
            }
        }
    }
}

/// Request for a page of debts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtFilter {
    /// Free-text search
    pub search: Option<String>,
    /// Calendar day (creation day, or deletion day when filtering deleted debts)
    pub date: Option<NaiveDate>,
    /// Exact status
    pub status: Option<DebtStatus>,
    /// Exact client; 0 means any client
    pub client_id: Option<i64>,
    /// Result ordering
    pub sort: SortKey,
    /// 1-based page number
    pub page: u64,
    /// Rows per page
    pub page_size: u64,
}

impl Default for DebtFilter {
    fn default() -> Self {
        Self {
            search: None,
            date: None,
            status: None,
            client_id: None,
            sort: SortKey::default(),
            page: 1,
            page_size: 20,
        }
    }
}

impl DebtFilter {
    fn deleted_view(&self) -> bool {
        self.status == Some(DebtStatus::Deleted)
    }

    /// The typed predicates this filter applies, in a stable order.
    #[must_use]
    pub fn clauses(&self) -> Vec<DebtClause> {
        let mut clauses = Vec::new();

        if let Some(status) = self.status {
            clauses.push(DebtClause::Status(status));
        }
        if let Some(client_id) = self.client_id.filter(|id| *id > 0) {
            clauses.push(DebtClause::Client(client_id));
        }
        if let Some(text) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            clauses.push(DebtClause::Search(text.to_string()));
        }
        if let Some(date) = self.date {
            clauses.push(if self.deleted_view() {
                DebtClause::DeletedOn(date)
            } else {
                DebtClause::CreatedOn(date)
            });
        }

        clauses
    }

    /// All clauses AND-ed into one condition.
    #[must_use]
    pub fn condition(&self) -> Condition {
        self.clauses()
            .into_iter()
            .fold(Condition::all(), |cond, clause| cond.add(clause.into_condition()))
    }

    fn apply_order(
        &self,
        select: SelectTwo<debt::Entity, client::Entity>,
    ) -> SelectTwo<debt::Entity, client::Entity> {
        let timeline = if self.deleted_view() {
            debt::Column::DeletedAt
        } else {
            debt::Column::CreatedAt
        };

        match self.sort {
            SortKey::Newest => select
                .order_by_desc(timeline)
                .order_by_desc(debt::Column::Id),
            SortKey::Oldest => select.order_by_asc(timeline).order_by_asc(debt::Column::Id),
            SortKey::ClientName => select
                .order_by_asc(client::Column::Fullname)
                .order_by_asc(debt::Column::Id),
            SortKey::AmountDesc => select
                .order_by_desc(debt::Column::Amount)
                .order_by_asc(debt::Column::Id),
            SortKey::AmountAsc => select
                .order_by_asc(debt::Column::Amount)
                .order_by_asc(debt::Column::Id),
        }
    }
}

/// A debt joined with the client who owes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtRow {
    /// Debt ID
    pub debt_id: i64,
    /// Client ID
    pub client_id: i64,
    /// Client full name
    pub fullname: String,
    /// Client phone
    pub phone: String,
    /// Client address
    pub address: Option<String>,
    /// Client photo reference
    pub photo_data: Option<String>,
    /// Outstanding amount
    pub amount: f64,
    /// Debt comment
    pub comment: String,
    /// Debt status
    pub status: DebtStatus,
    /// Rating given at settlement
    pub rating: Option<DebtRating>,
    /// When the debt was recorded
    pub created_at: DateTimeUtc,
    /// When the debt was settled
    pub paid_at: Option<DateTimeUtc>,
    /// When the debt was deleted
    pub deleted_at: Option<DateTimeUtc>,
    /// Why the debt was deleted
    pub delete_comment: Option<String>,
}

impl DebtRow {
    fn new(debt: debt::Model, client: client::Model) -> Self {
        Self {
            debt_id: debt.id,
            client_id: client.id,
            fullname: client.fullname,
            phone: client.phone,
            address: client.address,
            photo_data: client.photo_data,
            amount: debt.amount,
            comment: debt.comment,
            status: debt.status,
            rating: debt.rating,
            created_at: debt.created_at,
            paid_at: debt.paid_at,
            deleted_at: debt.deleted_at,
            delete_comment: debt.delete_comment,
        }
    }
}

/// Lists debts matching `filter`, one page at a time.
#[instrument(skip(db))]
pub async fn list_debts(db: &DatabaseConnection, filter: &DebtFilter) -> Result<Page<DebtRow>> {
    let index = checked_page_index(filter.page, filter.page_size)?;
    let select = Debt::find()
        .find_also_related(Client)
        .filter(filter.condition());
    let paginator = filter
        .apply_order(select)
        .paginate(db, filter.page_size.max(1));

    let total = paginator.num_items().await?;
    let rows = paginator.fetch_page(index).await?;
    debug!(total, returned = rows.len(), "Listed debts");

    // Every debt has a client (foreign key), so the join never comes back empty
    let data = rows
        .into_iter()
        .filter_map(|(debt, client)| client.map(|client| DebtRow::new(debt, client)))
        .collect();

    Ok(Page { data, total })
}

/// Request for a page of clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFilter {
    /// Substring of name, phone or address
    pub search: Option<String>,
    /// Calendar day the client was recorded
    pub date: Option<NaiveDate>,
    /// 1-based page number
    pub page: u64,
    /// Rows per page
    pub page_size: u64,
}

impl Default for ClientFilter {
    fn default() -> Self {
        Self {
            search: None,
            date: None,
            page: 1,
            page_size: 200,
        }
    }
}

impl ClientFilter {
    /// All predicates of this filter as one condition.
    #[must_use]
    pub fn condition(&self) -> Condition {
        let mut cond = Condition::all();

        if let Some(text) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            cond = cond.add(
                Condition::any()
                    .add(client::Column::Fullname.contains(text))
                    .add(client::Column::Phone.contains(text))
                    .add(client::Column::Address.contains(text)),
            );
        }
        if let Some(date) = self.date {
            let (start, end) = day_bounds(date);
            cond = cond
                .add(client::Column::CreatedAt.gte(start))
                .add(client::Column::CreatedAt.lt(end));
        }

        cond
    }

    fn select(&self) -> Select<client::Entity> {
        Client::find()
            .filter(self.condition())
            .order_by_desc(client::Column::CreatedAt)
            .order_by_desc(client::Column::Id)
    }
}

/// Lists clients matching `filter`, newest first.
#[instrument(skip(db))]
pub async fn list_clients(
    db: &DatabaseConnection,
    filter: &ClientFilter,
) -> Result<Page<client::Model>> {
    let index = checked_page_index(filter.page, filter.page_size)?;
    let paginator = filter.select().paginate(db, filter.page_size.max(1));

    let total = paginator.num_items().await?;
    let data = paginator.fetch_page(index).await?;
    debug!(total, returned = data.len(), "Listed clients");

    Ok(Page { data, total })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::{debt as debt_ops, settlement};
    use crate::test_utils::*;
    use chrono::{TimeZone, Utc};
    use sea_orm::Set;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Rewrites the timestamps of a debt so date filters can be tested.
    async fn backdate(
        db: &DatabaseConnection,
        debt_id: i64,
        created: DateTimeUtc,
        deleted: Option<DateTimeUtc>,
    ) -> Result<()> {
        let mut model: debt::ActiveModel = debt_ops::get_debt(db, debt_id).await?.into();
        model.created_at = Set(created);
        if deleted.is_some() {
            model.deleted_at = Set(deleted);
        }
        model.update(db).await?;
        Ok(())
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse(""), Some(SortKey::Newest));
        assert_eq!(SortKey::parse("date_old"), Some(SortKey::Oldest));
        assert_eq!(SortKey::parse("name"), Some(SortKey::ClientName));
        assert_eq!(SortKey::parse("amount_desc"), Some(SortKey::AmountDesc));
        assert_eq!(SortKey::parse("amount_asc"), Some(SortKey::AmountAsc));
        assert_eq!(SortKey::parse("random"), None);
        assert_eq!(SortKey::AmountAsc.as_str(), "amount_asc");
    }

    #[test]
    fn test_page_index_floors_to_first_page() {
        assert_eq!(page_index(0), 0);
        assert_eq!(page_index(1), 0);
        assert_eq!(page_index(3), 2);
    }

    #[test]
    fn test_checked_page_index_bounds() {
        assert_eq!(checked_page_index(1, 20).unwrap(), 0);
        assert_eq!(checked_page_index(4, 0).unwrap(), 3);
        assert!(matches!(
            checked_page_index(u64::MAX, 20),
            Err(Error::Validation { .. })
        ));
        // Fits in u64 but not in a signed SQL offset
        assert!(matches!(
            checked_page_index(MAX_OFFSET, 2),
            Err(Error::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_huge_page_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let client = create_test_client(&db, "+996700300").await?;
        create_test_debt(&db, client.id, 10.0).await?;

        let debts = list_debts(
            &db,
            &DebtFilter {
                page: u64::MAX,
                ..DebtFilter::default()
            },
        )
        .await;
        assert!(matches!(debts, Err(Error::Validation { .. })));

        let clients = list_clients(
            &db,
            &ClientFilter {
                page: u64::MAX,
                ..ClientFilter::default()
            },
        )
        .await;
        assert!(matches!(clients, Err(Error::Validation { .. })));

        Ok(())
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-05-01").unwrap(), date(2024, 5, 1));
        assert!(matches!(
            parse_date("01.05.2024"),
            Err(Error::Validation { .. })
        ));
    }

    #[test]
    fn test_day_bounds() {
        let (start, end) = day_bounds(date(2024, 2, 29));
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_clauses_from_filter() {
        let empty = DebtFilter::default();
        assert!(empty.clauses().is_empty());

        let filter = DebtFilter {
            search: Some("  bread ".to_string()),
            date: Some(date(2024, 5, 1)),
            status: Some(DebtStatus::Active),
            client_id: Some(3),
            ..DebtFilter::default()
        };
        assert_eq!(
            filter.clauses(),
            vec![
                DebtClause::Status(DebtStatus::Active),
                DebtClause::Client(3),
                DebtClause::Search("bread".to_string()),
                DebtClause::CreatedOn(date(2024, 5, 1)),
            ]
        );
    }

    #[test]
    fn test_deleted_status_switches_date_column() {
        let filter = DebtFilter {
            date: Some(date(2024, 5, 1)),
            status: Some(DebtStatus::Deleted),
            ..DebtFilter::default()
        };
        assert_eq!(
            filter.clauses(),
            vec![
                DebtClause::Status(DebtStatus::Deleted),
                DebtClause::DeletedOn(date(2024, 5, 1)),
            ]
        );
    }

    #[test]
    fn test_blank_search_and_zero_client_are_ignored() {
        let filter = DebtFilter {
            search: Some("   ".to_string()),
            client_id: Some(0),
            ..DebtFilter::default()
        };
        assert!(filter.clauses().is_empty());
    }

    #[tokio::test]
    async fn test_list_debts_empty() -> Result<()> {
        let db = setup_test_db().await?;

        let page = list_debts(&db, &DebtFilter::default()).await?;
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_pagination_second_page() -> Result<()> {
        let db = setup_test_db().await?;
        let client = create_test_client(&db, "+996700001").await?;
        for i in 1..=15 {
            create_test_debt(&db, client.id, f64::from(i)).await?;
        }

        let filter = DebtFilter {
            page: 2,
            page_size: 10,
            ..DebtFilter::default()
        };
        let page = list_debts(&db, &filter).await?;
        assert_eq!(page.total, 15);
        assert_eq!(page.data.len(), 5);

        // Page 0 behaves like page 1
        let first = list_debts(
            &db,
            &DebtFilter {
                page: 0,
                page_size: 10,
                ..DebtFilter::default()
            },
        )
        .await?;
        assert_eq!(first.data.len(), 10);
        assert_eq!(first.total, 15);

        Ok(())
    }

    #[tokio::test]
    async fn test_sort_orders() -> Result<()> {
        let db = setup_test_db().await?;
        let zara = create_custom_client(&db, "+1", "Zara", None).await?;
        let adil = create_custom_client(&db, "+2", "Adil", None).await?;

        let first = create_test_debt(&db, zara.id, 50.0).await?;
        let second = create_test_debt(&db, adil.id, 10.0).await?;
        let third = create_test_debt(&db, zara.id, 90.0).await?;

        let ids = |page: Page<DebtRow>| page.data.iter().map(|r| r.debt_id).collect::<Vec<_>>();
        let sorted = |sort| DebtFilter {
            sort,
            ..DebtFilter::default()
        };

        assert_eq!(
            ids(list_debts(&db, &sorted(SortKey::Newest)).await?),
            vec![third.id, second.id, first.id]
        );
        assert_eq!(
            ids(list_debts(&db, &sorted(SortKey::Oldest)).await?),
            vec![first.id, second.id, third.id]
        );
        assert_eq!(
            ids(list_debts(&db, &sorted(SortKey::ClientName)).await?),
            vec![second.id, first.id, third.id]
        );
        assert_eq!(
            ids(list_debts(&db, &sorted(SortKey::AmountDesc)).await?),
            vec![third.id, first.id, second.id]
        );
        assert_eq!(
            ids(list_debts(&db, &sorted(SortKey::AmountAsc)).await?),
            vec![second.id, first.id, third.id]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_newest_first_breaks_ties_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        let client = create_test_client(&db, "+996700002").await?;
        let same_moment = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let a = create_test_debt(&db, client.id, 1.0).await?;
        let b = create_test_debt(&db, client.id, 2.0).await?;
        backdate(&db, a.id, same_moment, None).await?;
        backdate(&db, b.id, same_moment, None).await?;

        let page = list_debts(&db, &DebtFilter::default()).await?;
        let ids: Vec<i64> = page.data.iter().map(|r| r.debt_id).collect();
        assert_eq!(ids, vec![b.id, a.id]);

        Ok(())
    }

    #[tokio::test]
    async fn test_search_matches_client_fields_and_comment() -> Result<()> {
        let db = setup_test_db().await?;
        let aibek = create_custom_client(&db, "+996700111", "Aibek", Some("Osh bazaar")).await?;
        let nurlan = create_custom_client(&db, "+996555222", "Nurlan", None).await?;

        let by_name = create_test_debt(&db, aibek.id, 10.0).await?;
        let by_comment = debt_ops::open_debt(&db, nurlan.id, 20.0, "Two sacks of FLOUR").await?;

        let search = |text: &str| DebtFilter {
            search: Some(text.to_string()),
            ..DebtFilter::default()
        };

        let page = list_debts(&db, &search("aibek")).await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].debt_id, by_name.id);
        assert_eq!(page.data[0].fullname, "Aibek");
        assert_eq!(page.data[0].address.as_deref(), Some("Osh bazaar"));

        let page = list_debts(&db, &search("BAZAAR")).await?;
        assert_eq!(page.total, 1);

        let page = list_debts(&db, &search("555222")).await?;
        assert_eq!(page.data[0].debt_id, by_comment.id);

        let page = list_debts(&db, &search("flour")).await?;
        assert_eq!(page.data[0].debt_id, by_comment.id);
        assert_eq!(page.data[0].comment, "Two sacks of FLOUR");

        Ok(())
    }

    #[tokio::test]
    async fn test_status_and_client_filters() -> Result<()> {
        let db = setup_test_db().await?;
        let first = create_test_client(&db, "+996700010").await?;
        let second = create_test_client(&db, "+996700020").await?;

        let paid = create_test_debt(&db, first.id, 10.0).await?;
        settlement::apply_payment(&db, paid.id, 10.0, "cash", Some(DebtRating::Good)).await?;
        let active = create_test_debt(&db, first.id, 20.0).await?;
        create_test_debt(&db, second.id, 30.0).await?;

        let page = list_debts(
            &db,
            &DebtFilter {
                status: Some(DebtStatus::Paid),
                ..DebtFilter::default()
            },
        )
        .await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].debt_id, paid.id);
        assert_eq!(page.data[0].rating, Some(DebtRating::Good));

        let page = list_debts(
            &db,
            &DebtFilter {
                status: Some(DebtStatus::Active),
                client_id: Some(first.id),
                ..DebtFilter::default()
            },
        )
        .await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].debt_id, active.id);

        let page = list_debts(
            &db,
            &DebtFilter {
                client_id: Some(second.id),
                ..DebtFilter::default()
            },
        )
        .await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].client_id, second.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_deleted_filter_uses_deletion_date() -> Result<()> {
        let db = setup_test_db().await?;
        let client = create_test_client(&db, "+996700030").await?;
        let may_1 = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let june_10 = Utc.with_ymd_and_hms(2024, 6, 10, 18, 0, 0).unwrap();

        // Created on May 1st, deleted on June 10th
        let debt = create_test_debt(&db, client.id, 15.0).await?;
        debt_ops::soft_delete(&db, debt.id, "wrong amount").await?;
        backdate(&db, debt.id, may_1, Some(june_10)).await?;

        let deleted_on = |day| DebtFilter {
            status: Some(DebtStatus::Deleted),
            date: Some(day),
            ..DebtFilter::default()
        };

        let page = list_debts(&db, &deleted_on(date(2024, 6, 10))).await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].debt_id, debt.id);
        assert_eq!(page.data[0].delete_comment.as_deref(), Some("wrong amount"));

        let page = list_debts(&db, &deleted_on(date(2024, 5, 1))).await?;
        assert_eq!(page.total, 0);

        // Without the deleted status the creation date applies
        let page = list_debts(
            &db,
            &DebtFilter {
                date: Some(date(2024, 5, 1)),
                ..DebtFilter::default()
            },
        )
        .await?;
        assert_eq!(page.total, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_deleted_view_orders_by_deletion_time() -> Result<()> {
        let db = setup_test_db().await?;
        let client = create_test_client(&db, "+996700040").await?;

        let older = create_test_debt(&db, client.id, 1.0).await?;
        let newer = create_test_debt(&db, client.id, 2.0).await?;
        debt_ops::soft_delete(&db, older.id, "x").await?;
        debt_ops::soft_delete(&db, newer.id, "y").await?;

        // The older debt was deleted last
        backdate(
            &db,
            older.id,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
        )
        .await?;
        backdate(
            &db,
            newer.id,
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap()),
        )
        .await?;

        let page = list_debts(
            &db,
            &DebtFilter {
                status: Some(DebtStatus::Deleted),
                ..DebtFilter::default()
            },
        )
        .await?;
        let ids: Vec<i64> = page.data.iter().map(|r| r.debt_id).collect();
        assert_eq!(ids, vec![older.id, newer.id]);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_clients() -> Result<()> {
        let db = setup_test_db().await?;
        let first = create_custom_client(&db, "+996700050", "Aibek", Some("Bishkek")).await?;
        let second = create_custom_client(&db, "+996700060", "Nurlan", None).await?;

        let all = list_clients(&db, &ClientFilter::default()).await?;
        assert_eq!(all.total, 2);
        // Newest first
        assert_eq!(all.data[0].id, second.id);
        assert_eq!(all.data[1].id, first.id);

        let by_address = list_clients(
            &db,
            &ClientFilter {
                search: Some("bishkek".to_string()),
                ..ClientFilter::default()
            },
        )
        .await?;
        assert_eq!(by_address.total, 1);
        assert_eq!(by_address.data[0].id, first.id);

        let other_day = list_clients(
            &db,
            &ClientFilter {
                date: Some(date(2000, 1, 1)),
                ..ClientFilter::default()
            },
        )
        .await?;
        assert_eq!(other_day.total, 0);
        assert!(other_day.data.is_empty());

        let today = list_clients(
            &db,
            &ClientFilter {
                date: Some(Utc::now().date_naive()),
                page: 2,
                page_size: 1,
                ..ClientFilter::default()
            },
        )
        .await?;
        assert_eq!(today.total, 2);
        assert_eq!(today.data.len(), 1);

        Ok(())
    }
}
