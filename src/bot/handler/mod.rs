use std::sync::atomic::{AtomicBool, Ordering};

use serenity::all::{Context, EventHandler, Ready};
use serenity::async_trait;

use crate::config::Config;

pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Application configuration for the ready handler
    config: Config,
    /// Whether the ready handler has already run for this process
    started: AtomicBool,
}

impl Handler {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        // Serenity re-emits ready after a gateway resume; the board and its
        // scheduler must only be set up once per process
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::debug!("Ready re-emitted after reconnect, board already running");
            return;
        }

        ready::handle_ready(&self.config, ctx, ready).await;
    }
}
