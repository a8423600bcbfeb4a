//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions come from the same client search the `/client` command uses, so the
//! user sees each candidate's reputation before picking a phone number.

use crate::{
    bot::{BotData, format::autocomplete_label},
    core::client,
    errors::Error,
};
use poise::serenity_prelude as serenity;
use tracing::debug;

/// Discord rejects choice labels longer than this.
const CHOICE_NAME_LIMIT: usize = 100;

/// Provides client suggestions for a phone parameter.
///
/// Each choice is labelled with the client's name, phone and reputation badge and
/// fills in the phone number. Empty input yields no suggestions.
pub async fn autocomplete_client_phone(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    if partial.trim().is_empty() {
        return Vec::new();
    }

    let matches = match client::search_clients(&ctx.data().database, partial).await {
        Ok(matches) => matches,
        Err(e) => {
            debug!("Client autocomplete failed: {}", e);
            return Vec::new();
        }
    };

    matches
        .into_iter()
        .map(|summary| {
            let label: String = autocomplete_label(&summary)
                .chars()
                .take(CHOICE_NAME_LIMIT)
                .collect();
            serenity::AutocompleteChoice::new(label, summary.phone)
        })
        .collect()
}
