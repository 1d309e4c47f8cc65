use super::{embed_fields, entry};
use crate::service::votemap_board::embed::{build_board_embed, build_startup_embed};

/// Tests rendering a snapshot with voters into board fields.
///
/// Verifies one field per map with the "<name> (<N> votes)" heading and the
/// comma-joined voter list, in snapshot order.
///
/// Expected: two fields with counts and voter lists
#[test]
fn renders_one_field_per_map() {
    let snapshot = vec![
        entry("m1", "Carentan", &["alice", "bob"]),
        entry("m2", "Foy", &["carol"]),
    ];

    let embed = build_board_embed(&snapshot).unwrap();
    let value = serde_json::to_value(&embed).unwrap();

    let fields = embed_fields(&value);
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].0, "Carentan (2 votes)");
    assert_eq!(fields[0].1, "Voters: alice, bob");
    assert_eq!(fields[1].0, "Foy (1 votes)");
    assert_eq!(fields[1].1, "Voters: carol");
}

/// Tests rendering a map nobody has voted for yet.
///
/// Expected: a zero-vote heading with the "No votes yet" placeholder
#[test]
fn renders_placeholder_for_zero_voters() {
    let snapshot = vec![entry("m1", "Omaha Beach", &[])];

    let embed = build_board_embed(&snapshot).unwrap();
    let value = serde_json::to_value(&embed).unwrap();

    let fields = embed_fields(&value);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].0, "Omaha Beach (0 votes)");
    assert_eq!(fields[0].1, "Voters: No votes yet");
}

/// Tests the board chrome and the empty-snapshot case.
///
/// Verifies title, description and color are always present, and that an
/// empty snapshot renders a board with no fields rather than failing.
///
/// Expected: chrome set, zero fields
#[test]
fn empty_snapshot_renders_bare_board() {
    let embed = build_board_embed(&Vec::new()).unwrap();
    let value = serde_json::to_value(&embed).unwrap();

    assert_eq!(value["title"], "🗳️ Votemap Live");
    assert_eq!(value["description"], "Current votemap status");
    assert_eq!(value["color"], 0x00ff00);
    assert!(embed_fields(&value).is_empty());
}

/// Tests that the board embed carries a timestamp.
///
/// Expected: a timestamp value is serialized
#[test]
fn board_embed_has_timestamp() {
    let embed = build_board_embed(&Vec::new()).unwrap();
    let value = serde_json::to_value(&embed).unwrap();

    assert!(value.get("timestamp").is_some());
}

/// Tests the startup placeholder embed.
///
/// Expected: only the placeholder description, no title or fields
#[test]
fn startup_embed_is_placeholder_only() {
    let embed = build_startup_embed();
    let value = serde_json::to_value(&embed).unwrap();

    assert_eq!(value["description"], "Starting Votemap Live...");
    assert!(value.get("title").is_none());
    assert!(embed_fields(&value).is_empty());
}
