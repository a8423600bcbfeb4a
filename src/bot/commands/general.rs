//! General Discord commands - ping and help.
//! These commands don't touch the database.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Text shown by `/help`.
    pub(crate) const HELP_TEXT: &str = "**Debt Ledger Help**\n\
        Keep track of who owes what and how they pay it back.\n\n\
        **Debts**\n\
        • `/adddebt <phone> <name> <amount> [comment] [address] [photo]` - Records a debt. New clients need a photo.\n\
        • `/pay <debt_id> <amount> <comment> [rating]` - Records a payment. A rating is required when it settles the debt.\n\
        • `/deletedebt <debt_id> <reason>` - Removes a debt from the active list, keeping it for history.\n\
        • `/debts [search] [date] [status] [client_id] [sort] [page]` - Lists debts.\n\
        • `/payments <debt_id>` - Shows the payment history of a debt, newest first.\n\n\
        **Clients**\n\
        • `/client <query>` - Finds clients by name or phone and shows their reputation.\n\
        • `/clients [search] [date] [page]` - Lists clients.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.\n\n\
        Dates use the `YYYY-MM-DD` format.";

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say(HELP_TEXT).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
