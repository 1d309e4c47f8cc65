//! Votemap board embed building.
//!
//! Builds the Discord embeds shown in the status channel: the live board with
//! one field per map, and the placeholder posted while the bot starts up.

use serenity::all::{CreateEmbed, Timestamp};

use crate::error::AppError;
use crate::model::votemap::VotemapSnapshot;

/// Board embed color (green).
const BOARD_COLOR: u32 = 0x00ff00;

/// Builds the live votemap board embed for a snapshot.
///
/// One field per map entry: the field name is `"<map> (<N> votes)"`, the value
/// is the comma-joined voter list or a placeholder when nobody voted yet. An
/// empty snapshot produces an embed with no fields. The embed timestamp is set
/// to the build time.
///
/// # Arguments
/// - `snapshot` - The snapshot to render
///
/// # Returns
/// - `Ok(CreateEmbed)` - Board embed ready for posting or editing
/// - `Err(AppError::InternalError)` - Current time is not a valid Discord timestamp
pub fn build_board_embed(snapshot: &VotemapSnapshot) -> Result<CreateEmbed, AppError> {
    let mut embed = CreateEmbed::new()
        .color(BOARD_COLOR)
        .title("🗳️ Votemap Live")
        .description("Current votemap status");

    for entry in snapshot {
        let voters_list = if entry.voters.is_empty() {
            "No votes yet".to_string()
        } else {
            entry.voters.join(", ")
        };

        embed = embed.field(
            format!("{} ({} votes)", entry.map.pretty_name, entry.voters.len()),
            format!("Voters: {}", voters_list),
            false,
        );
    }

    let now = chrono::Utc::now();
    let timestamp = Timestamp::from_unix_timestamp(now.timestamp()).map_err(|e| {
        AppError::InternalError(format!(
            "Invalid embed timestamp {}: {}",
            now.timestamp(),
            e
        ))
    })?;

    Ok(embed.timestamp(timestamp))
}

/// Builds the placeholder embed posted at startup, before the first poll.
pub fn build_startup_embed() -> CreateEmbed {
    CreateEmbed::new().description("Starting Votemap Live...")
}
