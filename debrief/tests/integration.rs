//! Integration tests driving a full survey session against the in-memory
//! collaborators.

use debrief::{
    DURATION_EVENT, FinalGuessContext, MemoryStore, PageModel, QuestionWidget, RESPONSES_EVENT,
    RecordingLogger, ResponseKey, STARTED_EVENT, SurveyDocument, SurveySession, classify, store,
};

fn document() -> SurveyDocument {
    serde_json::from_str(
        r#"{
        "post_survey": {
            "message_strength": {
                "M1": "The first claim held up under questioning.",
                "M2": "The second claim held up under questioning."
            },
            "ai_usage": {
                "U1": "Have you used AI chat assistants before? 1=Yes, 2=No"
            },
            "ai_perception": {
                "A1": "The agents' messages were easy to follow."
            },
            "trust_ai": {
                "T1": "(Only if U1 = Yes) I trusted the agents' claims during the game."
            },
            "experience": {
                "E1": "Boring ↔ Exciting"
            },
            "attitude_clarity": {
                "C1": "I prefer unambiguous answers."
            },
            "final_guess": {
                "F1": "Who do you think was the liar?"
            }
        }
    }"#,
    )
    .unwrap()
}

fn seeded_store() -> MemoryStore {
    MemoryStore::new()
        .with_entry(store::SESSION_ID_KEY, "s-42")
        .with_entry(store::CONSENTED_AT_KEY, "2026-08-29T10:00:00.000Z")
        .with_entry(
            store::LAST_ENDED_KEY,
            r#"{
                "descriptions": { "Mia": "spoke in riddles", "Riley": "that is me" },
                "publicState": {
                    "turn": { "order": ["Mia", "Noah", "Riley"] },
                    "players": [{ "name": "Mia" }, { "name": "Noah" }, { "name": "Riley" }]
                },
                "privateState": { "myName": "Riley" }
            }"#,
        )
        .with_entry(store::LAST_DESCRIPTIONS_KEY, r#"{"Noah":"counted cards"}"#)
}

fn answer_everything(session: &mut SurveySession<MemoryStore>) {
    let keys: Vec<ResponseKey> = session
        .sections()
        .iter()
        .flat_map(|section| section.questions().iter())
        .map(|question| question.response_key().clone())
        .collect();
    for key in keys {
        let value = match key.section() {
            "message_strength" => "yes",
            "final_guess" => "Mia",
            "ai_usage" => "1",
            _ => "4",
        };
        session.answer(key, value);
    }
}

#[test]
fn pages_flatten_back_to_the_schema() {
    let document = document();
    let sections = document.post_survey.section_groups();
    let model = PageModel::partition(&sections);

    let mut paged: Vec<String> = model
        .questions()
        .map(|q| q.response_key().to_string())
        .collect();
    let mut expected: Vec<String> = sections
        .iter()
        .flat_map(|s| s.questions().iter())
        .map(|q| q.response_key().to_string())
        .collect();
    assert_eq!(paged.len(), expected.len());
    paged.sort();
    expected.sort();
    assert_eq!(paged, expected);
}

#[test]
fn reserved_sections_pin_first_and_last_pages() {
    let document = document();
    let sections = document.post_survey.section_groups();
    let model = PageModel::partition(&sections);

    assert!(model.pages()[0].contains_section("message_strength"));
    assert_eq!(model.pages()[0].sections().len(), 1);

    let last = model.pages().last().unwrap();
    let keys: Vec<&str> = last.sections().iter().map(|s| s.key()).collect();
    assert_eq!(keys, vec!["attitude_clarity", "final_guess"]);
}

#[test]
fn widget_selection_covers_every_mode() {
    let session = SurveySession::load(&document(), seeded_store());

    let views: Vec<_> = (0..session.pages().len())
        .flat_map(|index| session.page_views(index))
        .flat_map(|section| section.questions)
        .collect();

    let widget_of = |key: &str| {
        views
            .iter()
            .find(|view| view.response_key.as_str() == key)
            .map(|view| view.widget.clone())
            .unwrap()
    };

    assert_eq!(widget_of("message_strength.M1"), QuestionWidget::Binary);
    assert!(matches!(
        widget_of("ai_usage.U1"),
        QuestionWidget::NumberedChoice(_)
    ));
    assert_eq!(widget_of("ai_perception.A1"), QuestionWidget::Likert);
    assert_eq!(widget_of("trust_ai.T1"), QuestionWidget::Likert);
    assert_eq!(
        widget_of("experience.E1"),
        QuestionWidget::BipolarScale {
            low: "Boring".to_string(),
            high: "Exciting".to_string(),
        }
    );
    assert_eq!(widget_of("final_guess.F1"), QuestionWidget::FinalGuess);
}

#[test]
fn classifier_matches_section_precedence() {
    // The final-guess section keeps its widget even for scale-shaped text.
    assert_eq!(
        classify("final_guess", "Boring ↔ Exciting"),
        QuestionWidget::FinalGuess
    );
}

#[test]
fn completion_is_monotonic() {
    let mut session = SurveySession::load(&document(), seeded_store());
    let mut complete_pages = 0;

    let keys: Vec<ResponseKey> = session
        .sections()
        .iter()
        .flat_map(|section| section.questions().iter())
        .map(|question| question.response_key().clone())
        .collect();
    for key in keys {
        session.answer(key, "answered");
        let now_complete = (0..session.pages().len())
            .filter(|&index| session.page_complete(index))
            .count();
        assert!(now_complete >= complete_pages, "page completion regressed");
        complete_pages = now_complete;
    }
    assert!(session.is_complete());
}

#[test]
fn answers_persist_and_rehydrate() {
    let mut session = SurveySession::load(&document(), seeded_store());
    session.answer("experience.E1", "6");

    // A reload from the same store sees the persisted answer.
    let raw = serde_json::to_string(session.responses()).unwrap();
    let store = seeded_store().with_entry(store::responses_key("s-42"), raw);
    let reloaded = SurveySession::load(&document(), store);
    assert_eq!(
        reloaded.response(&ResponseKey::from("experience.E1")),
        Some("6")
    );
}

#[test]
fn malformed_persisted_answers_start_clean() {
    let store = seeded_store().with_entry(store::responses_key("s-42"), "{oops");
    let session = SurveySession::load(&document(), store);
    assert!(session.responses().is_empty());
}

#[test]
fn mark_started_fires_once() {
    let mut session = SurveySession::load(&document(), seeded_store());
    let mut logger = RecordingLogger::new();

    session.mark_started(&mut logger);
    session.mark_started(&mut logger);

    assert_eq!(logger.kinds(), vec![STARTED_EVENT]);
    assert!(logger.events()[0].ts.is_some());
}

#[test]
fn started_event_failure_is_swallowed() {
    let mut session = SurveySession::load(&document(), seeded_store());
    let mut logger = RecordingLogger::new().rejecting(STARTED_EVENT);

    session.mark_started(&mut logger);
    assert!(logger.events().is_empty());
}

#[test]
fn final_guess_candidates_exclude_the_respondent() {
    let session = SurveySession::load(&document(), seeded_store());
    let context = session.final_guess_context();

    assert_eq!(context.my_name.as_deref(), Some("Riley"));
    assert_eq!(context.player_options, vec!["Mia", "Noah"]);
    assert!(context.has_descriptions);

    // Live descriptions win; the fallback fills the missing one.
    let noah = context.entries.iter().find(|e| e.name == "Noah").unwrap();
    assert_eq!(noah.text, "counted cards");
    let mia = context.entries.iter().find(|e| e.name == "Mia").unwrap();
    assert_eq!(mia.text, "spoke in riddles");
}

#[test]
fn missing_transcript_degrades_to_sentinel() {
    let store = MemoryStore::new().with_entry(store::SESSION_ID_KEY, "s-1");
    let session = SurveySession::load(&document(), store);
    let context = session.final_guess_context();
    assert_eq!(context.player_options, vec!["Unknown"]);
    assert_eq!(context, FinalGuessContext::build(None, None));
}

#[test]
fn submit_emits_responses_then_duration() {
    let mut session = SurveySession::load(&document(), seeded_store());
    answer_everything(&mut session);
    let mut logger = RecordingLogger::new();

    let outcome = session
        .submit_at(&mut logger, "2026-08-29T10:20:30.400Z")
        .unwrap();
    assert!(outcome.responses_logged);
    assert!(outcome.duration_logged);
    assert_eq!(logger.kinds(), vec![RESPONSES_EVENT, DURATION_EVENT]);

    let payload = logger.events()[0].payload.as_ref().unwrap();
    assert_eq!(payload["final_guess"]["F1"], "Mia");
    assert_eq!(payload["message_strength"]["M2"], "yes");

    let duration = logger.events()[1].payload.as_ref().unwrap();
    assert_eq!(duration["duration_seconds"], 1230);
    assert_eq!(duration["started_at"], "2026-08-29T10:00:00.000Z");
}

#[test]
fn submission_payload_omits_unanswered() {
    let mut session = SurveySession::load(&document(), seeded_store());
    session.answer("ai_perception.A1", "5");
    let mut logger = RecordingLogger::new();

    session
        .submit_at(&mut logger, "2026-08-29T10:20:30.400Z")
        .unwrap();
    let payload = logger.events()[0].payload.as_ref().unwrap();
    let object = payload.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("ai_perception"));
}

#[test]
fn rejected_submission_surfaces_the_error() {
    let mut session = SurveySession::load(&document(), seeded_store());
    answer_everything(&mut session);
    let mut logger = RecordingLogger::new().rejecting(RESPONSES_EVENT);

    let result = session.submit_at(&mut logger, "2026-08-29T10:20:30.400Z");
    assert!(result.is_err());
    assert!(logger.events().is_empty());
}

#[test]
fn rejected_duration_is_best_effort() {
    let mut session = SurveySession::load(&document(), seeded_store());
    answer_everything(&mut session);
    let mut logger = RecordingLogger::new().rejecting(DURATION_EVENT);

    let outcome = session
        .submit_at(&mut logger, "2026-08-29T10:20:30.400Z")
        .unwrap();
    assert!(outcome.responses_logged);
    assert!(!outcome.duration_logged);
    assert_eq!(logger.kinds(), vec![RESPONSES_EVENT]);
}

#[test]
fn duration_is_skipped_when_clock_runs_backwards() {
    let mut session = SurveySession::load(&document(), seeded_store());
    answer_everything(&mut session);
    let mut logger = RecordingLogger::new();

    // Ended before the stored consent timestamp.
    let outcome = session
        .submit_at(&mut logger, "2026-08-29T09:59:59.000Z")
        .unwrap();
    assert!(outcome.responses_logged);
    assert!(!outcome.duration_logged);
    assert_eq!(logger.kinds(), vec![RESPONSES_EVENT]);
}

#[test]
fn submit_without_session_id_emits_nothing() {
    let mut session = SurveySession::load(&document(), MemoryStore::new());
    answer_everything(&mut session);
    let mut logger = RecordingLogger::new();

    let outcome = session.submit(&mut logger).unwrap();
    assert!(!outcome.responses_logged);
    assert!(logger.events().is_empty());
}

#[test]
fn navigation_clamps_to_valid_pages() {
    let session = SurveySession::load(&document(), seeded_store());
    let last = session.pages().len() - 1;

    assert_eq!(session.resolve_page(-1), 0);
    assert_eq!(session.resolve_page(1), 1);
    assert_eq!(session.resolve_page(i64::MAX), last);
    assert!(session.page_views(last + 1).is_empty());
    assert!(session.page_complete(last + 1));
}
