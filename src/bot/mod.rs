//! Discord bot integration.
//!
//! This module provides the Discord side of the bot: building and starting the
//! serenity client, and the ready handler that wires up the votemap board once
//! the gateway connection is established. The bot's only outward activity is
//! the single board message it keeps updated; it processes no commands and
//! reacts to no other events.
//!
//! # Gateway Intents
//!
//! The bot connects with `GUILDS`, `GUILD_MESSAGES` and `MESSAGE_CONTENT`.

pub mod handler;
pub mod start;
