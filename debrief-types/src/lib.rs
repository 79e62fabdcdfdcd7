//! Core types for the debrief crate.
//!
//! This crate provides the foundational types for the post-survey engine:
//! - `QuestionSchema` and `SurveyDocument` - the static question asset
//! - `SectionGroup` and `Question` - derived, insertion-ordered structure
//! - `ResponseMap` and `ResponseKey` - collected answers and flat keys
//! - `QuestionWidget` - the tagged result of answer-widget classification
//! - `SessionStore` and `EventLogger` traits - injected collaborators

mod response_key;
pub use response_key::ResponseKey;

mod responses;
pub use responses::{ResponseError, ResponseMap};

mod section;
pub use section::{
    ATTITUDE_KEYS, FINAL_GUESS_KEY, MESSAGE_STRENGTH_KEY, Question, SectionGroup, is_attitude_key,
};

mod schema;
pub use schema::{QuestionSchema, SurveyDocument};

mod widget;
pub use widget::{
    ChoiceOption, LIKERT_HIGH_LABEL, LIKERT_LOW_LABEL, QuestionWidget, SCALE_POINTS, binary_options,
    scale_values,
};

mod event;
pub use event::{DURATION_EVENT, EventRecord, LogAck, RESPONSES_EVENT, STARTED_EVENT};

mod error;
pub use error::SurveyError;

mod traits;
pub use traits::{EventLogger, SessionStore};
