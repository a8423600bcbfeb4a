//! Text rendering for ledger rows in Discord messages.
//!
//! All functions are pure so they can be tested without a Discord connection.

use crate::{
    core::{
        client::{ClientSummary, Reputation},
        query::DebtRow,
    },
    entities::{DebtStatus, client, debt_payment},
};

/// Discord caps embed descriptions at 4096 characters; stay safely below.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4000;

/// Formats a monetary amount with two decimals.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Number of pages needed for `total` rows, never less than one.
#[must_use]
pub const fn page_count(total: u64, page_size: u64) -> u64 {
    let pages = total.div_ceil(if page_size == 0 { 1 } else { page_size });
    if pages == 0 { 1 } else { pages }
}

/// Emoji marking a reputation level.
#[must_use]
pub const fn reputation_badge(reputation: Reputation) -> &'static str {
    match reputation {
        Reputation::None => "⚪",
        Reputation::Good => "🟢",
        Reputation::Bad => "🟡",
        Reputation::Untrusted => "🔴",
    }
}

/// One line (plus comment line) describing a debt in a listing.
#[must_use]
pub fn format_debt_line(row: &DebtRow) -> String {
    let state = match row.status {
        DebtStatus::Active => "active".to_string(),
        DebtStatus::Paid => match row.rating {
            Some(rating) => format!("paid ({})", rating.as_str()),
            None => "paid".to_string(),
        },
        DebtStatus::Deleted => match &row.delete_comment {
            Some(reason) => format!("deleted: {reason}"),
            None => "deleted".to_string(),
        },
    };

    let mut line = format!(
        "`#{}` **{}** ({}) · {} · {} · {}",
        row.debt_id,
        row.fullname,
        row.phone,
        format_amount(row.amount),
        state,
        row.created_at.format("%Y-%m-%d")
    );
    if !row.comment.is_empty() {
        line.push_str("\n  ↳ ");
        line.push_str(&row.comment);
    }
    line
}

/// One line describing a payment.
#[must_use]
pub fn format_payment_line(payment: &debt_payment::Model) -> String {
    format!(
        "{} · paid {} · left {} · {}",
        payment.created_at.format("%Y-%m-%d %H:%M"),
        format_amount(payment.paid_amount),
        format_amount(payment.remaining_amount),
        payment.comment.as_deref().unwrap_or("-")
    )
}

/// One line describing a client in a listing.
#[must_use]
pub fn format_client_line(client: &client::Model) -> String {
    match &client.address {
        Some(address) => format!(
            "`#{}` **{}** ({}) · {}",
            client.id, client.fullname, client.phone, address
        ),
        None => format!("`#{}` **{}** ({})", client.id, client.fullname, client.phone),
    }
}

/// One line describing a search hit, with reputation and active-debt markers.
#[must_use]
pub fn format_client_summary(summary: &ClientSummary) -> String {
    let owes = if summary.has_active_debt {
        " · owes money"
    } else {
        ""
    };
    format!(
        "{} `#{}` **{}** ({}) · reputation: {}{}",
        reputation_badge(summary.reputation),
        summary.id,
        summary.fullname,
        summary.phone,
        summary.reputation.as_str(),
        owes
    )
}

/// Short label for an autocomplete entry.
#[must_use]
pub fn autocomplete_label(summary: &ClientSummary) -> String {
    format!(
        "{} {} · {}",
        reputation_badge(summary.reputation),
        summary.fullname,
        summary.phone
    )
}

/// Joins lines with newlines, stopping before `limit` characters and marking the cut.
///
/// A first line that is longer than `limit` on its own is shortened rather than dropped.
#[must_use]
pub fn join_limited<I>(lines: I, limit: usize) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = String::new();
    for line in lines {
        let extra = if out.is_empty() { 0 } else { 1 };
        if out.chars().count() + extra + line.chars().count() > limit {
            if out.is_empty() {
                out.extend(line.chars().take(limit.saturating_sub(1)));
                out.push('…');
            } else {
                out.push_str("\n…");
            }
            break;
        }
        if extra == 1 {
            out.push('\n');
        }
        out.push_str(&line);
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::DebtRating;
    use chrono::{TimeZone, Utc};

    fn row() -> DebtRow {
        DebtRow {
            debt_id: 7,
            client_id: 3,
            fullname: "Aibek".to_string(),
            phone: "+996700".to_string(),
            address: None,
            photo_data: None,
            amount: 12.5,
            comment: "bread".to_string(),
            status: DebtStatus::Paid,
            rating: Some(DebtRating::Good),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            paid_at: None,
            deleted_at: None,
            delete_comment: None,
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 20), 1);
        assert_eq!(page_count(15, 10), 2);
        assert_eq!(page_count(20, 10), 2);
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn test_format_debt_line() {
        assert_eq!(
            format_debt_line(&row()),
            "`#7` **Aibek** (+996700) · 12.50 · paid (good) · 2024-05-01\n  ↳ bread"
        );

        let deleted = DebtRow {
            status: DebtStatus::Deleted,
            delete_comment: Some("typo".to_string()),
            comment: String::new(),
            ..row()
        };
        assert_eq!(
            format_debt_line(&deleted),
            "`#7` **Aibek** (+996700) · 12.50 · deleted: typo · 2024-05-01"
        );
    }

    #[test]
    fn test_format_client_summary() {
        let summary = ClientSummary {
            id: 3,
            fullname: "Aibek".to_string(),
            phone: "+996700".to_string(),
            address: None,
            photo_data: None,
            has_active_debt: true,
            reputation: Reputation::Untrusted,
        };
        assert_eq!(
            format_client_summary(&summary),
            "🔴 `#3` **Aibek** (+996700) · reputation: untrusted · owes money"
        );
        assert_eq!(autocomplete_label(&summary), "🔴 Aibek · +996700");
    }

    #[test]
    fn test_join_limited() {
        let lines = vec!["aaaa".to_string(), "bbbb".to_string(), "cccc".to_string()];
        assert_eq!(join_limited(lines.clone(), 100), "aaaa\nbbbb\ncccc");
        assert_eq!(join_limited(lines, 9), "aaaa\nbbbb\n…");
        assert_eq!(join_limited(Vec::new(), 10), "");
    }

    #[test]
    fn test_join_limited_shortens_oversized_first_line() {
        let lines = vec!["abcdefghij".to_string(), "kl".to_string()];
        assert_eq!(join_limited(lines, 5), "abcd…");

        let long = "x".repeat(EMBED_DESCRIPTION_LIMIT + 50);
        let out = join_limited(vec![long], EMBED_DESCRIPTION_LIMIT);
        assert_eq!(out.chars().count(), EMBED_DESCRIPTION_LIMIT);
        assert!(out.ends_with('…'));
    }
}
