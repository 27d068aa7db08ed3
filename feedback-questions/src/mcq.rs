//! Answer editor for multiple-choice, single-answer questions.
//!
//! Exactly one of the following holds at any time: nothing is chosen, one
//! listed choice is chosen, or the respondent is typing their own answer.

use tracing::{debug, warn};

use crate::{AnswerEditor, McqQuestionDetails, McqResponseDetails};

/// Tracks which choice of an MCQ question is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct McqAnswerEditor {
    question: McqQuestionDetails,
    response: McqResponseDetails,
    /// Index of the selected listed choice.
    selected: Option<usize>,
}

impl McqAnswerEditor {
    /// Select the listed choice at `index`, dropping any typed-in answer.
    ///
    /// # Panics
    /// Panics if `index` is not a valid choice index.
    pub fn select_option(&mut self, index: usize) {
        let answer = self.question.choices[index].clone();
        debug!(index, previous = ?self.selected, "Selecting MCQ choice");

        self.response.is_other = false;
        self.response.other_field_content.clear();
        self.response.answer = answer;
        self.selected = Some(index);
    }

    /// Switch the "other" answer on or off.
    ///
    /// Switching it on deselects the listed choice. Switching it off throws
    /// away the typed text; switching back on starts from an empty field.
    pub fn toggle_other_option(&mut self) {
        self.response.is_other = !self.response.is_other;
        if self.response.is_other {
            self.response.answer.clear();
            self.selected = None;
        } else {
            self.response.other_field_content.clear();
        }
        debug!(is_other = self.response.is_other, "Toggled MCQ other answer");
    }

    /// Replace the typed-in answer.
    ///
    /// Nothing stops this from being called while "other" is off; the host
    /// is expected to only offer the field while it is on.
    pub fn set_other_field_content(&mut self, text: impl Into<String>) {
        self.response.other_field_content = text.into();
    }

    /// Index of the selected listed choice, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Check if the listed choice at `index` is the selected one.
    pub fn is_option_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// One flag per choice, set only for the selected choice.
    pub fn option_selection(&self) -> Vec<bool> {
        (0..self.question.choices.len())
            .map(|index| self.is_option_selected(index))
            .collect()
    }

    /// Check if the respondent is giving their own answer.
    pub fn is_other(&self) -> bool {
        self.response.is_other
    }

    /// The typed-in answer.
    pub fn other_field_content(&self) -> &str {
        &self.response.other_field_content
    }

    /// The selected choice's text, or `""` when none is selected.
    pub fn answer(&self) -> &str {
        &self.response.answer
    }
}

impl AnswerEditor for McqAnswerEditor {
    type Question = McqQuestionDetails;
    type Response = McqResponseDetails;

    /// Restores the previous selection and repairs a response that breaks
    /// the one-answer rule. An "other" answer wins over a listed choice. A
    /// previous answer that no longer matches any choice is discarded, which
    /// leaves the editor with nothing selected.
    fn initialize(question: McqQuestionDetails, mut response: McqResponseDetails) -> Self {
        let selected = if response.is_other {
            if !response.answer.is_empty() {
                debug!(answer = %response.answer, "Dropping listed answer of an other response");
                response.answer.clear();
            }
            None
        } else {
            response.other_field_content.clear();
            if response.answer.is_empty() {
                None
            } else {
                let position = question.position_of(&response.answer);
                if position.is_none() {
                    warn!(
                        answer = %response.answer,
                        choices = question.choices.len(),
                        "Previous MCQ answer is not among the current choices"
                    );
                    response.answer.clear();
                }
                position
            }
        };

        Self {
            question,
            response,
            selected,
        }
    }

    fn question(&self) -> &McqQuestionDetails {
        &self.question
    }

    fn response(&self) -> &McqResponseDetails {
        &self.response
    }

    fn into_response(self) -> McqResponseDetails {
        self.response
    }
}
