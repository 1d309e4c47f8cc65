use crate::model::votemap::VotemapStatusResponse;


/// Helper to parse a votemap status response body from a JSON fixture
fn parse(json: &str) -> VotemapStatusResponse {
    serde_json::from_str(json).expect("fixture should deserialize")
}
