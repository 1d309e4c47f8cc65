//! Live votemap board service.
//!
//! This module owns the poll-and-mirror cycle: fetch the current votemap
//! snapshot, decide whether the map set changed, and either edit the board
//! message in place or post a fresh one. The service is organized into
//! separate modules by concern:
//! - `diff` - Snapshot change detection
//! - `embed` - Board embed building
//! - `gateway` - Discord messaging seam

pub mod diff;
pub mod embed;
pub mod gateway;

#[cfg(test)]
mod test;

use serenity::all::MessageId;

use crate::api::votemap::VotemapStatusSource;
use crate::error::AppError;
use crate::model::votemap::VotemapSnapshot;
use crate::service::votemap_board::gateway::BoardMessenger;

/// Service keeping the votemap board message in sync with the game server.
///
/// Holds the only mutable state in the system: the previous snapshot (for
/// change detection) and the id of the live board message. Both are touched
/// exclusively from `refresh`, which the scheduler runs one cycle at a time.
pub struct VotemapBoardService<S, M> {
    /// Source of votemap snapshots (the status API in production)
    source: S,
    /// Messenger for posting and editing the board message
    messenger: M,
    /// Snapshot from the previous poll; `None` before the first poll
    previous: Option<VotemapSnapshot>,
    /// The live board message; `None` until one has been posted or adopted
    current_message: Option<MessageId>,
}

impl<S, M> VotemapBoardService<S, M>
where
    S: VotemapStatusSource,
    M: BoardMessenger,
{
    /// Creates a board service with no prior snapshot and no held message.
    pub fn new(source: S, messenger: M) -> Self {
        Self {
            source,
            messenger,
            previous: None,
            current_message: None,
        }
    }

    /// Adopts an already-posted message as the current board message.
    ///
    /// Used for the startup placeholder, which the first refresh then edits
    /// or replaces like any other board message.
    pub fn adopt_message(&mut self, message_id: MessageId) {
        self.current_message = Some(message_id);
    }

    /// The message currently treated as the live board, if any.
    pub fn current_message(&self) -> Option<MessageId> {
        self.current_message
    }

    /// Runs one poll-and-update cycle.
    ///
    /// Fetches the current snapshot, then posts a new board message when the
    /// map set changed (or none is held yet) and edits the held message
    /// otherwise. A replaced message is abandoned, not deleted. Poll failures
    /// are logged and rendered as an empty board so the cycle keeps running;
    /// the next tick is the retry.
    ///
    /// The previous snapshot is overwritten before the Discord call, so a
    /// failed post does not re-trigger "changed" on the next tick by itself.
    ///
    /// # Returns
    /// - `Ok(())` - Board posted or edited
    /// - `Err(AppError)` - Discord post/edit failed, or embed building failed
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        let snapshot = match self.source.fetch_status().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Error fetching votemap status: {}", e);
                VotemapSnapshot::new()
            }
        };

        let changed = diff::map_set_changed(&snapshot, self.previous.as_ref());
        let board = embed::build_board_embed(&snapshot)?;
        self.previous = Some(snapshot);

        match self.current_message {
            Some(message_id) if !changed => {
                self.messenger.edit_board(message_id, board).await?;
            }
            _ => {
                // Map set changed or no message held yet: post a new board
                // and abandon the old one
                let message_id = self.messenger.post_board(board).await?;
                self.current_message = Some(message_id);
            }
        }

        Ok(())
    }
}
