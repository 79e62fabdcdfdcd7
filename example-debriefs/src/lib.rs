//! Ready-made debrief fixtures: the liar-game post-survey schema and a
//! seeded client-storage snapshot, for demos and end-to-end tests.

pub mod liar_game;

pub use liar_game::{seeded_store, survey_document, SAMPLE_SESSION_ID};
