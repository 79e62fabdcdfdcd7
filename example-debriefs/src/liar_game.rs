//! The liar-game post-survey: a realistic schema exercising every widget
//! kind, plus a storage snapshot as the game client would leave it.

use debrief::{MemoryStore, SurveyDocument, store};

/// The session id used throughout the seeded fixture.
pub const SAMPLE_SESSION_ID: &str = "11f0b3a2-4c1d-4a7e-9f36-2d8e5f6a7b8c";

const SURVEY_ITEM: &str = include_str!("../data/survey_item.json");

const LAST_ENDED: &str = r#"{
    "descriptions": {
        "Mara": "I kept asking where everyone was at nine.",
        "Jonas": "I mostly agreed with whoever spoke last.",
        "Priya": "I am the one filling this in."
    },
    "publicState": {
        "turn": { "order": ["Mara", "Jonas", "Priya"] },
        "players": [{ "name": "Mara" }, { "name": "Jonas" }, { "name": "Priya" }]
    },
    "privateState": { "myName": "Priya" }
}"#;

/// Parse the bundled schema document.
pub fn survey_document() -> anyhow::Result<SurveyDocument> {
    Ok(serde_json::from_str(SURVEY_ITEM)?)
}

/// A client-storage snapshot from just after the game ended: session id,
/// consent timestamp, and the cached transcript.
pub fn seeded_store() -> MemoryStore {
    MemoryStore::new()
        .with_entry(store::SESSION_ID_KEY, SAMPLE_SESSION_ID)
        .with_entry(store::CONSENTED_AT_KEY, "2026-08-29T09:12:45.118Z")
        .with_entry(store::LAST_ENDED_KEY, LAST_ENDED)
        .with_entry(
            store::LAST_DESCRIPTIONS_KEY,
            r#"{"Mara":"older, shorter description"}"#,
        )
}
