//! The per-session page-state holder.
//!
//! `SurveySession` ties the pieces together for one respondent: the
//! schema-derived sections and pages, the growing answer map, and the
//! injected store. There is exactly one logical writer (the current
//! session), so every mutation persists synchronously.

use chrono::{SecondsFormat, Utc};

use debrief_types::{
    DURATION_EVENT, EventLogger, EventRecord, RESPONSES_EVENT, ResponseKey, ResponseMap,
    STARTED_EVENT, SectionGroup, SessionStore, SurveyDocument, SurveyError,
};
use indexmap::IndexMap;

use crate::classify::{SectionView, section_view};
use crate::paginate::PageModel;
use crate::submit::{SessionDuration, build_payload, payload_value, sections_complete};
use crate::store;
use crate::transcript::FinalGuessContext;

/// What the submission actually recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// The survey-response event was acknowledged.
    pub responses_logged: bool,

    /// The duration telemetry event was acknowledged.
    pub duration_logged: bool,
}

/// One respondent's survey in progress.
#[derive(Debug, Clone)]
pub struct SurveySession<S: SessionStore> {
    sections: Vec<SectionGroup>,
    pages: PageModel,
    responses: ResponseMap,
    session_id: Option<String>,
    store: S,
}

impl<S: SessionStore> SurveySession<S> {
    /// Derive pages from the document and rehydrate any persisted answers.
    pub fn load(document: &SurveyDocument, store: S) -> Self {
        let sections = document.post_survey.section_groups();
        let pages = PageModel::partition(&sections);
        let session_id = store::session_id(&store);
        let responses = match session_id.as_deref() {
            Some(id) => store::load_responses(&store, id),
            None => ResponseMap::new(),
        };
        Self {
            sections,
            pages,
            responses,
            session_id,
            store,
        }
    }

    /// The session identifier, when one was established.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// The derived sections, in schema order.
    pub fn sections(&self) -> &[SectionGroup] {
        &self.sections
    }

    /// The derived page model.
    pub fn pages(&self) -> &PageModel {
        &self.pages
    }

    /// The current answers.
    pub fn responses(&self) -> &ResponseMap {
        &self.responses
    }

    /// Record the first visit: persist the started-at marker and emit the
    /// started event. Both are skipped on revisits, and the event is
    /// best-effort telemetry.
    pub fn mark_started<L: EventLogger>(&mut self, logger: &mut L) {
        let Some(session_id) = self.session_id.clone() else {
            return;
        };
        let key = store::started_at_key(&session_id);
        if self.store.get(&key).is_some() {
            return;
        }
        let started_at = current_timestamp();
        self.store.set(&key, &started_at);

        let event = EventRecord::new(session_id, STARTED_EVENT).with_ts(started_at);
        if let Err(error) = logger.log_event(event) {
            let error: anyhow::Error = error.into();
            tracing::warn!(%error, "post-survey started event was not recorded");
        }
    }

    /// Record an answer and synchronously persist the whole map.
    pub fn answer(&mut self, key: impl Into<ResponseKey>, value: impl Into<String>) {
        self.responses.insert(key.into(), value.into());
        if let Some(session_id) = self.session_id.clone() {
            store::save_responses(&mut self.store, &session_id, &self.responses);
        }
    }

    /// The current answer for a question, when recorded. Widgets are
    /// controlled: they re-populate from here on every render.
    pub fn response(&self, key: &ResponseKey) -> Option<&str> {
        self.responses.get(key)
    }

    /// The render views of the sections on one page. Out-of-range indices
    /// yield no views, mirroring the clamped navigation.
    pub fn page_views(&self, index: usize) -> Vec<SectionView> {
        match self.pages.page(index) {
            Some(page) => page.sections().iter().map(section_view).collect(),
            None => Vec::new(),
        }
    }

    /// Check that every question on the given page has a non-empty answer.
    pub fn page_complete(&self, index: usize) -> bool {
        match self.pages.page(index) {
            Some(page) => sections_complete(page.sections(), &self.responses),
            None => true,
        }
    }

    /// Check that every question across all pages has a non-empty answer.
    /// Gates the final submit action independently of the current page.
    pub fn is_complete(&self) -> bool {
        sections_complete(self.sections.iter(), &self.responses)
    }

    /// Resolve a requested page index, clamping out-of-range values.
    pub fn resolve_page(&self, requested: i64) -> usize {
        self.pages.clamp_index(requested)
    }

    /// Build the final-guess candidate context from the cached transcript
    /// and fallback descriptions.
    pub fn final_guess_context(&self) -> FinalGuessContext {
        let transcript = store::load_transcript(&self.store);
        let fallback = store::load_descriptions(&self.store);
        FinalGuessContext::build(transcript.as_ref(), fallback.as_ref())
    }

    /// The nested submission payload for the current answers.
    pub fn submission_payload(&self) -> IndexMap<String, IndexMap<String, String>> {
        build_payload(&self.sections, &self.responses)
    }

    /// Submit the survey at the current time.
    pub fn submit<L: EventLogger>(
        &mut self,
        logger: &mut L,
    ) -> Result<SubmissionOutcome, SurveyError> {
        self.submit_at(logger, &current_timestamp())
    }

    /// Submit the survey: emit the response event, then the duration
    /// telemetry, sequentially.
    ///
    /// A rejected response event is returned as an error; the duration
    /// event is best-effort and only reflected in the outcome. Without a
    /// session id nothing is emitted and submission still succeeds.
    pub fn submit_at<L: EventLogger>(
        &mut self,
        logger: &mut L,
        ended_at: &str,
    ) -> Result<SubmissionOutcome, SurveyError> {
        let Some(session_id) = self.session_id.clone() else {
            return Ok(SubmissionOutcome::default());
        };

        let payload = payload_value(self.submission_payload());
        let event = EventRecord::new(session_id.clone(), RESPONSES_EVENT).with_payload(payload);
        logger.log_event(event).map_err(SurveyError::submission)?;
        let mut outcome = SubmissionOutcome {
            responses_logged: true,
            duration_logged: false,
        };

        if let Some(consented_at) = self.store.get(store::CONSENTED_AT_KEY) {
            if let Some(duration) = SessionDuration::between(&consented_at, ended_at) {
                let event = EventRecord::new(session_id, DURATION_EVENT)
                    .with_payload(duration.payload());
                match logger.log_event(event) {
                    Ok(_) => outcome.duration_logged = true,
                    Err(error) => {
                        let error: anyhow::Error = error.into();
                        tracing::warn!(%error, "session duration event was not recorded");
                    }
                }
            }
        }

        Ok(outcome)
    }
}

/// Now, formatted the way the surrounding pages write timestamps.
pub(crate) fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
