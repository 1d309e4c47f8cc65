//! Discord messaging seam for the votemap board.
//!
//! The board service talks to the status channel through the `BoardMessenger`
//! trait so the refresh cycle can be tested with a recording fake. The
//! production implementation wraps serenity's HTTP client and is bound to the
//! single configured channel.

use std::sync::Arc;

use serenity::all::{ChannelId, CreateEmbed, CreateMessage, EditMessage, MessageId};
use serenity::async_trait;
use serenity::http::Http;

use crate::error::AppError;

/// Posts and edits the votemap board message in the status channel.
#[async_trait]
pub trait BoardMessenger: Send + Sync {
    /// Sends a new board message to the channel.
    ///
    /// # Returns
    /// - `Ok(MessageId)` - Id of the newly posted message
    /// - `Err(AppError)` - Discord API error
    async fn post_board(&self, embed: CreateEmbed) -> Result<MessageId, AppError>;

    /// Replaces the embed of an existing board message.
    ///
    /// # Returns
    /// - `Ok(())` - Message edited
    /// - `Err(AppError)` - Discord API error
    async fn edit_board(&self, message_id: MessageId, embed: CreateEmbed) -> Result<(), AppError>;
}

/// Board messenger backed by serenity, bound to one channel.
pub struct DiscordBoardMessenger {
    /// Discord HTTP client for sending and editing messages
    http: Arc<Http>,
    /// The status channel the board lives in
    channel_id: ChannelId,
}

impl DiscordBoardMessenger {
    /// Creates a messenger for the given channel.
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl BoardMessenger for DiscordBoardMessenger {
    async fn post_board(&self, embed: CreateEmbed) -> Result<MessageId, AppError> {
        let message = self
            .channel_id
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(message.id)
    }

    async fn edit_board(&self, message_id: MessageId, embed: CreateEmbed) -> Result<(), AppError> {
        self.http
            .edit_message(
                self.channel_id,
                message_id,
                &EditMessage::new().embed(embed),
                vec![],
            )
            .await?;

        Ok(())
    }
}
