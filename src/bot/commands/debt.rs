//! Debt Discord commands - `adddebt`, `pay`, `deletedebt`, `debts` and `payments`.
//!
//! Each command validates its Discord input, calls into the core ledger and renders
//! the result. Core errors propagate to the framework error handler, which replies
//! with the error message.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            choices::{RatingChoice, SortChoice, StatusChoice},
            format::{
                EMBED_DESCRIPTION_LIMIT, format_amount, format_debt_line, format_payment_line,
                join_limited, page_count,
            },
            handlers::autocomplete,
        },
        core::{
            client, debt, photo,
            query::{self, DebtFilter},
            settlement,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::{info, warn};

    /// Resolves the client by phone, retrying once if a concurrent insert won the race.
    async fn resolve_client(
        ctx: poise::Context<'_, BotData, Error>,
        phone: &str,
        fullname: &str,
        address: Option<&str>,
        photo_ref: Option<&str>,
    ) -> Result<i64> {
        let db = &ctx.data().database;
        match client::resolve_or_create(db, phone, fullname, address, photo_ref).await {
            Err(err) if err.is_retryable() => {
                warn!("Retrying client lookup after: {}", err);
                client::resolve_or_create(db, phone, fullname, address, photo_ref).await
            }
            other => other,
        }
    }

    /// Records a new debt, creating the client on first use of a phone number.
    ///
    /// A photo is only needed (and only stored) when the phone number is not known yet.
    #[poise::command(slash_command)]
    pub async fn adddebt(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Client phone number"]
        #[autocomplete = "autocomplete::autocomplete_client_phone"]
        phone: String,
        #[description = "Client full name"] fullname: String,
        #[description = "Amount owed"] amount: f64,
        #[description = "What the debt is for"] comment: Option<String>,
        #[description = "Client address"] address: Option<String>,
        #[description = "Client photo, required for a new client"] photo: Option<
            serenity::Attachment,
        >,
    ) -> Result<()> {
        // Reject a bad amount before a client row or photo file is written
        debt::validate_amount(amount)?;

        // Downloading a photo can outlast the interaction deadline
        ctx.defer().await?;

        let data = ctx.data();
        let known = client::find_client_by_phone(&data.database, phone.trim()).await?;

        let photo_ref = match (&known, photo) {
            (None, Some(attachment)) => {
                let bytes = attachment.download().await?;
                let reference = photo::save_photo(
                    &data.settings.photos.directory,
                    &fullname,
                    &bytes,
                    chrono::Utc::now(),
                )
                .await?;
                Some(reference)
            }
            _ => None,
        };

        let client_id = resolve_client(
            ctx,
            &phone,
            &fullname,
            address.as_deref(),
            photo_ref.as_deref(),
        )
        .await?;
        let debt = debt::open_debt(
            &data.database,
            client_id,
            amount,
            comment.as_deref().unwrap_or_default(),
        )
        .await?;

        info!(debt_id = debt.id, client_id, "Debt recorded via Discord");
        let who = known.map_or_else(|| format!("new client {fullname}"), |c| c.fullname);
        ctx.say(format!(
            "✅ Recorded debt #{} of {} for {} ({})",
            debt.id,
            format_amount(debt.amount),
            who,
            phone.trim()
        ))
        .await?;
        Ok(())
    }

    /// Records a payment against an active debt.
    #[poise::command(slash_command, prefix_command)]
    pub async fn pay(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Debt ID"] debt_id: i64,
        #[description = "Amount paid"] amount: f64,
        #[description = "Payment note"] comment: String,
        #[description = "Rating, required when this payment settles the debt"] rating: Option<
            RatingChoice,
        >,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let outcome =
            settlement::apply_payment(db, debt_id, amount, &comment, rating.map(Into::into))
                .await?;

        let message = if outcome.closed {
            format!(
                "✅ Debt #{debt_id} is fully paid ({} received)",
                format_amount(outcome.payment.paid_amount)
            )
        } else {
            format!(
                "✅ Received {} for debt #{debt_id}, {} still owed",
                format_amount(outcome.payment.paid_amount),
                format_amount(outcome.remaining)
            )
        };
        ctx.say(message).await?;
        Ok(())
    }

    /// Removes a debt from the active list, keeping it for history.
    #[poise::command(slash_command, prefix_command)]
    pub async fn deletedebt(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Debt ID"] debt_id: i64,
        #[description = "Why the debt is being deleted"] reason: String,
    ) -> Result<()> {
        debt::soft_delete(&ctx.data().database, debt_id, &reason).await?;
        ctx.say(format!("🗑️ Debt #{debt_id} deleted: {}", reason.trim()))
            .await?;
        Ok(())
    }

    /// Lists debts with optional filters.
    #[poise::command(slash_command, prefix_command)]
    pub async fn debts(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name, phone, address or comment contains"] search: Option<String>,
        #[description = "Day recorded (or deleted), YYYY-MM-DD"] date: Option<String>,
        #[description = "Only debts with this status"] status: Option<StatusChoice>,
        #[description = "Only debts of this client"] client_id: Option<i64>,
        #[description = "Ordering"] sort: Option<SortChoice>,
        #[description = "Page number"] page: Option<u64>,
    ) -> Result<()> {
        let data = ctx.data();
        let filter = DebtFilter {
            search,
            date: date.as_deref().map(query::parse_date).transpose()?,
            status: status.map(Into::into),
            client_id,
            sort: sort.map(Into::into).unwrap_or_default(),
            page: page.unwrap_or(1).max(1),
            page_size: data.settings.pagination.debts_page_size,
        };

        let result = query::list_debts(&data.database, &filter).await?;

        let description = if result.data.is_empty() {
            "No debts match.".to_string()
        } else {
            join_limited(
                result.data.iter().map(format_debt_line),
                EMBED_DESCRIPTION_LIMIT,
            )
        };

        let embed = serenity::CreateEmbed::default()
            .title("📒 Debts")
            .description(description)
            .color(0x00E6_7E22)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "Page {} of {} · {} total · {}",
                filter.page,
                page_count(result.total, filter.page_size),
                result.total,
                filter.sort.as_str()
            )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows the payments made against a debt, newest first.
    #[poise::command(slash_command, prefix_command)]
    pub async fn payments(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Debt ID"] debt_id: i64,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let debt = debt::get_debt(db, debt_id).await?;
        let history = settlement::payment_history(db, debt_id).await?;

        let description = if history.is_empty() {
            "No payments yet.".to_string()
        } else {
            join_limited(
                history.iter().map(format_payment_line),
                EMBED_DESCRIPTION_LIMIT,
            )
        };

        let embed = serenity::CreateEmbed::default()
            .title(format!("💸 Payments for debt #{}", debt.id))
            .description(description)
            .color(0x0034_98DB)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "Outstanding {} · {} · {} payment{}",
                format_amount(debt.amount),
                debt.status.as_str(),
                history.len(),
                if history.len() == 1 { "" } else { "s" }
            )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
