//! Client Discord commands - `clients` and `client`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            format::{
                EMBED_DESCRIPTION_LIMIT, format_client_line, format_client_summary, join_limited,
                page_count,
            },
            handlers::autocomplete,
        },
        core::{
            client,
            query::{self, ClientFilter},
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    /// Lists clients, newest first.
    #[poise::command(slash_command, prefix_command)]
    pub async fn clients(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name, phone or address contains"] search: Option<String>,
        #[description = "Day the client was added, YYYY-MM-DD"] date: Option<String>,
        #[description = "Page number"] page: Option<u64>,
    ) -> Result<()> {
        let data = ctx.data();
        let filter = ClientFilter {
            search,
            date: date.as_deref().map(query::parse_date).transpose()?,
            page: page.unwrap_or(1).max(1),
            page_size: data.settings.pagination.clients_page_size,
        };

        let result = query::list_clients(&data.database, &filter).await?;

        let description = if result.data.is_empty() {
            "No clients match.".to_string()
        } else {
            join_limited(
                result.data.iter().map(format_client_line),
                EMBED_DESCRIPTION_LIMIT,
            )
        };

        let embed = serenity::CreateEmbed::default()
            .title("👥 Clients")
            .description(description)
            .color(0x0034_98DB)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "Page {} of {} · {} total",
                filter.page,
                page_count(result.total, filter.page_size),
                result.total
            )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Finds clients by name or phone and shows their reputation.
    #[poise::command(slash_command, prefix_command)]
    pub async fn client(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Part of a name or phone number"]
        #[autocomplete = "autocomplete::autocomplete_client_phone"]
        query: String,
    ) -> Result<()> {
        let matches = client::search_clients(&ctx.data().database, &query).await?;

        if matches.is_empty() {
            ctx.say(format!("No clients match '{}'.", query.trim()))
                .await?;
            return Ok(());
        }

        let embed = serenity::CreateEmbed::default()
            .title("🔎 Client search")
            .description(join_limited(
                matches.iter().map(format_client_summary),
                EMBED_DESCRIPTION_LIMIT,
            ))
            .color(0x002E_CC71)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "Showing up to {} matches",
                client::CLIENT_SEARCH_LIMIT
            )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
