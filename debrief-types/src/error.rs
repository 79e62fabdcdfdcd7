/// Error type for survey submission.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The logging collaborator rejected the survey-response event.
    ///
    /// Unlike the telemetry events, this one carries the actual response
    /// data, so the rejection is surfaced to the caller.
    #[error("survey submission was not recorded: {0}")]
    SubmissionRejected(#[source] anyhow::Error),
}

impl SurveyError {
    /// Create a submission error from any logger error type.
    pub fn submission(err: impl Into<anyhow::Error>) -> Self {
        Self::SubmissionRejected(err.into())
    }
}
