//! Votemap snapshot domain models and the status endpoint wire format.

use serde::Deserialize;

use crate::error::api::ApiError;

/// Identity of a map offered in the current votemap round.
///
/// The `id` is the stable identifier the game server uses for the map; the
/// `pretty_name` is the human-readable name shown on the board.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapInfo {
    /// Stable map identifier. Unique within a snapshot.
    pub id: String,
    /// Human-readable map name.
    pub pretty_name: String,
}

/// One map option in a votemap round together with the players voting for it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapVoteEntry {
    /// The map this entry tallies votes for.
    pub map: MapInfo,
    /// Identifiers of the players that voted for this map.
    pub voters: Vec<String>,
}

/// Ordered set of map vote entries as returned by one poll.
///
/// Snapshots are ephemeral: the board service holds at most the current and
/// the previous one, and the previous is overwritten every tick.
pub type VotemapSnapshot = Vec<MapVoteEntry>;

/// Wire format of the votemap status endpoint.
///
/// The endpoint reports errors in-band: `failed` is set with an optional
/// `error` message, and `result` carries the snapshot on success. Unknown
/// fields in the response body are ignored.
#[derive(Debug, Deserialize)]
pub struct VotemapStatusResponse {
    /// Whether the API considers this request failed.
    pub failed: bool,
    /// Error message accompanying a failed request, if the API supplied one.
    #[serde(default)]
    pub error: Option<String>,
    /// The snapshot payload. Missing or null is treated as an empty snapshot.
    #[serde(default)]
    pub result: Option<VotemapSnapshot>,
}

impl VotemapStatusResponse {
    /// Extracts the snapshot, honoring the in-band `failed` flag.
    ///
    /// # Returns
    /// - `Ok(VotemapSnapshot)` - The snapshot; empty when `result` was absent
    /// - `Err(ApiError::Failed)` - The API reported `failed: true`
    pub fn into_snapshot(self) -> Result<VotemapSnapshot, ApiError> {
        if self.failed {
            return Err(ApiError::Failed(
                self.error
                    .unwrap_or_else(|| "API request failed".to_string()),
            ));
        }

        Ok(self.result.unwrap_or_default())
    }
}
