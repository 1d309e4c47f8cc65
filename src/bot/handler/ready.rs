//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot
//! successfully connects to Discord's gateway and completes the initial
//! handshake. All one-time setup happens here: the API key check, the status
//! channel lookup, the startup placeholder message, and the refresh scheduler.

use std::sync::Arc;

use serenity::all::{ChannelId, Context, Ready};
use tokio::sync::Mutex;

use crate::api::votemap::VotemapApiClient;
use crate::config::Config;
use crate::scheduler::board_refresh;
use crate::service::votemap_board::embed;
use crate::service::votemap_board::gateway::{BoardMessenger, DiscordBoardMessenger};
use crate::service::votemap_board::VotemapBoardService;

/// Handles the ready event when the bot connects to Discord.
///
/// Exits the process with status 1 when no API key is configured; that check
/// is deferred to here so the operator sees it once the Discord connection is
/// known to work. A missing channel or a failed startup message is logged and
/// leaves the gateway connection up but the board idle; everything past that
/// point only logs.
///
/// # Arguments
/// - `config` - Application configuration
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(config: &Config, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let Some(api_key) = config.api_key.clone() else {
        tracing::error!("API_KEY is not set. Please provide an API key.");
        std::process::exit(1);
    };

    let channel_id = ChannelId::new(config.discord_channel_id);

    if let Err(e) = ctx.http.get_channel(channel_id).await {
        tracing::error!(
            "Channel {} not found, check DISCORD_CHANNEL_ID: {}",
            channel_id,
            e
        );
        return;
    }

    let messenger = DiscordBoardMessenger::new(ctx.http.clone(), channel_id);

    // Post the placeholder the first refresh will edit or replace
    let startup_message = match messenger.post_board(embed::build_startup_embed()).await {
        Ok(message_id) => message_id,
        Err(e) => {
            tracing::error!("Error posting startup message to channel: {}", e);
            return;
        }
    };

    let source = VotemapApiClient::new(config.api_endpoint.clone(), api_key);

    let mut service = VotemapBoardService::new(source, messenger);
    service.adopt_message(startup_message);

    let service = Arc::new(Mutex::new(service));

    if let Err(e) = board_refresh::start_scheduler(service, config.poll_interval).await {
        tracing::error!("Failed to start votemap board scheduler: {}", e);
    }
}
