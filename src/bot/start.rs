use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner.
///
/// Builds the serenity client and runs it until the gateway connection shuts
/// down. Everything after the connection (channel lookup, startup message,
/// refresh scheduler) happens in the ready handler.
///
/// # Arguments
/// - `config` - Application configuration, handed to the event handler
///
/// # Returns
/// - `Ok(())` - The client ran and shut down cleanly
/// - `Err(AppError)` - Client construction or the gateway connection failed
pub async fn start_bot(config: Config) -> Result<(), AppError> {
    // Configure gateway intents - what events the bot will receive
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(config.clone());

    // Build the client
    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
