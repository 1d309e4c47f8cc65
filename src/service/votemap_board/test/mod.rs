use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serenity::all::{CreateEmbed, MessageId};
use serenity::async_trait;

use crate::api::votemap::VotemapStatusSource;
use crate::error::AppError;
use crate::model::votemap::{MapInfo, MapVoteEntry, VotemapSnapshot};
use crate::service::votemap_board::gateway::BoardMessenger;

mod build_board_embed;

/// Helper to build a map vote entry for fixtures
fn entry(id: &str, pretty_name: &str, voters: &[&str]) -> MapVoteEntry {
    MapVoteEntry {
        map: MapInfo {
            id: id.to_string(),
            pretty_name: pretty_name.to_string(),
        },
        voters: voters.iter().map(|v| v.to_string()).collect(),
    }
}

/// Extracts (name, value) pairs from a serialized embed's fields
fn embed_fields(embed: &serde_json::Value) -> Vec<(String, String)> {
    embed
        .get("fields")
        .and_then(|fields| fields.as_array())
        .map(|fields| {
            fields
                .iter()
                .map(|field| {
                    (
                        field["name"].as_str().unwrap().to_string(),
                        field["value"].as_str().unwrap().to_string(),
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Status source that replays a scripted sequence of poll results.
struct ScriptedStatusSource {
    responses: Mutex<VecDeque<Result<VotemapSnapshot, AppError>>>,
}

impl ScriptedStatusSource {
    fn new(responses: Vec<Result<VotemapSnapshot, AppError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }
}

#[async_trait]
impl VotemapStatusSource for ScriptedStatusSource {
    async fn fetch_status(&self) -> Result<VotemapSnapshot, AppError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted source ran out of responses")
    }
}

/// Board messenger that records posts and edits instead of calling Discord.
///
/// Posted messages receive fake ids counting up from 1. Clones share the
/// recorded log, so a test can keep one handle while the service owns another.
#[derive(Clone)]
struct RecordingMessenger {
    posts: Arc<Mutex<Vec<serde_json::Value>>>,
    edits: Arc<Mutex<Vec<(MessageId, serde_json::Value)>>>,
    next_id: Arc<AtomicU64>,
}

impl RecordingMessenger {
    fn new() -> Self {
        Self {
            posts: Arc::new(Mutex::new(Vec::new())),
            edits: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    fn posts(&self) -> Vec<serde_json::Value> {
        self.posts.lock().unwrap().clone()
    }

    fn edits(&self) -> Vec<(MessageId, serde_json::Value)> {
        self.edits.lock().unwrap().clone()
    }
}

#[async_trait]
impl BoardMessenger for RecordingMessenger {
    async fn post_board(&self, embed: CreateEmbed) -> Result<MessageId, AppError> {
        self.posts
            .lock()
            .unwrap()
            .push(serde_json::to_value(&embed).unwrap());

        Ok(MessageId::new(self.next_id.fetch_add(1, Ordering::SeqCst)))
    }

    async fn edit_board(&self, message_id: MessageId, embed: CreateEmbed) -> Result<(), AppError> {
        self.edits
            .lock()
            .unwrap()
            .push((message_id, serde_json::to_value(&embed).unwrap()));

        Ok(())
    }
}
