use crate::{FeedbackParticipantType, QuestionError, QuestionType};

/// Error type for routing edits to question editors.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// The event belongs to a different question type than the editor.
    #[error("Cannot apply {event} to a {expected} editor")]
    EventMismatch {
        expected: QuestionType,
        event: &'static str,
    },

    /// The response was recorded for a different question type.
    #[error("A {response} response cannot answer a {question} question")]
    ResponseMismatch {
        question: QuestionType,
        response: QuestionType,
    },

    /// This question type has no answer editor.
    #[error("{0} questions have no answer editor")]
    NoAnswerEditor(QuestionType),

    /// This question type has no details editor.
    #[error("{0} questions have no details editor")]
    NoDetailsEditor(QuestionType),

    /// Options cannot be generated from this participant category.
    #[error("Options cannot be generated from {0}")]
    NotGeneratable(FeedbackParticipantType),

    /// The records themselves are malformed.
    #[error(transparent)]
    Question(#[from] QuestionError),
}

impl EditError {
    /// Check if this error was caused by routing to the wrong editor.
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            Self::EventMismatch { .. } | Self::ResponseMismatch { .. }
        )
    }
}
