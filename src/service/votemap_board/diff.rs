//! Snapshot change detection.

use crate::model::votemap::VotemapSnapshot;

/// Reports whether the set of maps up for vote changed between two snapshots.
///
/// Policy:
/// - no prior snapshot → changed;
/// - entry counts differ → changed;
/// - otherwise the map ids of both snapshots are sorted, joined and compared
///   as strings → changed iff they differ.
///
/// Only membership of map ids is compared. Vote counts and voter lists for
/// maps that stay present do not count as a change; those still reach the
/// channel through the edit path.
///
/// # Arguments
/// - `new` - Snapshot from the current poll
/// - `old` - Snapshot from the previous poll, if one exists
pub fn map_set_changed(new: &VotemapSnapshot, old: Option<&VotemapSnapshot>) -> bool {
    let Some(old) = old else {
        // No previous data, assume changed
        return true;
    };

    if new.len() != old.len() {
        return true;
    }

    joined_map_ids(new) != joined_map_ids(old)
}

/// Sorts a snapshot's map ids lexicographically and joins them with commas.
fn joined_map_ids(snapshot: &VotemapSnapshot) -> String {
    let mut ids: Vec<&str> = snapshot.iter().map(|entry| entry.map.id.as_str()).collect();
    ids.sort_unstable();
    ids.join(",")
}
