use crate::QuestionError;

/// An editor for a respondent's answer to one question.
///
/// The editor owns both records for as long as the answer is being edited.
/// It reads the question details (choices, bounds) and only ever writes the
/// response.
pub trait AnswerEditor: Sized {
    /// The question details this editor reads.
    type Question;

    /// The response this editor writes.
    type Response;

    /// Set up editing state from a question and a (possibly stale) response.
    ///
    /// The response may have been recorded against an older version of the
    /// question; implementations reconcile it with the current details.
    fn initialize(question: Self::Question, response: Self::Response) -> Self;

    /// Get the question details.
    fn question(&self) -> &Self::Question;

    /// Get the response as edited so far.
    fn response(&self) -> &Self::Response;

    /// Finish editing and hand back the response.
    fn into_response(self) -> Self::Response;
}

/// An editor for the author-side configuration of one question.
pub trait DetailsEditor: Sized {
    /// The question details this editor maintains.
    type Question;

    /// Take ownership of existing details.
    ///
    /// # Returns
    /// * `Ok(editor)` if the details satisfy the type's structural invariants
    /// * `Err` describing the first violated invariant otherwise
    fn initialize(details: Self::Question) -> Result<Self, QuestionError>;

    /// Get the details as edited so far.
    fn details(&self) -> &Self::Question;

    /// Finish editing and hand back the details.
    fn into_details(self) -> Self::Question;
}
