//! # debrief
//!
//! Pagination and response engine for the liar-game post-experiment survey.
//!
//! Given the static question schema and the flat answer map, this crate
//! computes everything the (external) UI needs to drive the survey:
//!
//! - how the schema partitions into pages ([`PageModel`])
//! - which input widget applies to each question ([`classify`], [`QuestionView`])
//! - whether a page or the whole survey is complete ([`SurveySession`])
//! - the final-guess candidate set derived from the game transcript
//!   ([`FinalGuessContext`])
//! - the nested submission payload and the session-duration telemetry
//!
//! Rendering, HTTP, and storage stay outside: the engine talks to them
//! through the `SessionStore` and `EventLogger` capabilities. In-memory
//! implementations ([`MemoryStore`], [`RecordingLogger`]) serve tests and
//! headless runs.

// Re-export all types from debrief-types
pub use debrief_types::*;

mod text;
pub use text::{NormalizedQuestion, normalize_question_text};

mod paginate;
pub use paginate::{PageModel, SurveyPage};

mod classify;
pub use classify::{QuestionView, SectionView, classify, question_view, section_view};

mod transcript;
pub use transcript::{
    DescriptionEntry, FinalGuessContext, GameTranscript, PlayerRecord, PrivateState, PublicState,
    TurnState, UNKNOWN_CANDIDATE,
};

pub mod store;

mod memory;
pub use memory::{MemoryStore, RecordingLogger, RejectedEvent};

mod submit;
pub use submit::{SessionDuration, build_payload, sections_complete};

mod session;
pub use session::{SubmissionOutcome, SurveySession};
