//! Host-facing entry point: one editor per question instance, driven by
//! discrete input events.

use std::fmt;

use tracing::{debug, warn};

use crate::{
    AnswerEditor, DetailsEditor, EditError, FeedbackParticipantType, McqAnswerEditor,
    MsqDetailsEditor, QuestionDetails, QuestionType, RankOptionsAnswerEditor, ResponseDetails,
};

/// A discrete user input a host form forwards to an editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditEvent {
    // MCQ answers
    /// A listed choice was clicked.
    SelectOption(usize),
    /// The "other" answer was clicked.
    ToggleOtherAnswer,
    /// The "other" text field was committed.
    SetOtherFieldContent(String),

    // Rank-options answers
    /// A rank was picked for an option; `0` un-ranks it.
    SetRank { index: usize, rank: u32 },

    // MSQ details
    /// A choice was dragged from one position and dropped at another.
    ReorderChoice { from: usize, to: usize },
    SetChoiceText { index: usize, text: String },
    SetWeight { index: usize, weight: f64 },
    AddChoice,
    RemoveChoice(usize),
    ToggleWeights(bool),
    ToggleOtherChoice(bool),
    SetOtherWeight(f64),
    ToggleGeneratedOptions(bool),
    SetGeneratedOptionsFor(FeedbackParticipantType),
    ToggleMaxSelectable(bool),
    SetMaxSelectable(usize),
    ToggleMinSelectable(bool),
    SetMinSelectable(usize),
    SetQuestionText(String),
}

impl EditEvent {
    /// Short name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectOption(_) => "SelectOption",
            Self::ToggleOtherAnswer => "ToggleOtherAnswer",
            Self::SetOtherFieldContent(_) => "SetOtherFieldContent",
            Self::SetRank { .. } => "SetRank",
            Self::ReorderChoice { .. } => "ReorderChoice",
            Self::SetChoiceText { .. } => "SetChoiceText",
            Self::SetWeight { .. } => "SetWeight",
            Self::AddChoice => "AddChoice",
            Self::RemoveChoice(_) => "RemoveChoice",
            Self::ToggleWeights(_) => "ToggleWeights",
            Self::ToggleOtherChoice(_) => "ToggleOtherChoice",
            Self::SetOtherWeight(_) => "SetOtherWeight",
            Self::ToggleGeneratedOptions(_) => "ToggleGeneratedOptions",
            Self::SetGeneratedOptionsFor(_) => "SetGeneratedOptionsFor",
            Self::ToggleMaxSelectable(_) => "ToggleMaxSelectable",
            Self::SetMaxSelectable(_) => "SetMaxSelectable",
            Self::ToggleMinSelectable(_) => "ToggleMinSelectable",
            Self::SetMinSelectable(_) => "SetMinSelectable",
            Self::SetQuestionText(_) => "SetQuestionText",
        }
    }
}

/// A state the host should warn about. None of these block editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Two options were given the same rank.
    DuplicateRanks,
    /// Some options are ranked, but fewer than required.
    TooFewRanked { min: usize },
    /// More options are ranked than allowed.
    TooManyRanked { max: usize },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRanks => write!(f, "The same rank should not be given multiple times."),
            Self::TooFewRanked { min } => write!(f, "You must rank at least {min} options."),
            Self::TooManyRanked { max } => write!(f, "You cannot rank more than {max} options."),
        }
    }
}

/// The editor of one question instance, whichever type it is.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionEditor {
    McqAnswer(McqAnswerEditor),
    RankOptionsAnswer(RankOptionsAnswerEditor),
    MsqDetails(MsqDetailsEditor),
}

impl QuestionEditor {
    /// Build the answer editor for a question and its previous response.
    pub fn for_answer(
        question: QuestionDetails,
        response: ResponseDetails,
    ) -> Result<Self, EditError> {
        match (question, response) {
            (QuestionDetails::Mcq(q), ResponseDetails::Mcq(r)) => {
                Ok(Self::McqAnswer(McqAnswerEditor::initialize(q, r)))
            }
            (QuestionDetails::RankOptions(q), ResponseDetails::RankOptions(r)) => Ok(
                Self::RankOptionsAnswer(RankOptionsAnswerEditor::initialize(q, r)),
            ),
            (QuestionDetails::Msq(_), _) => Err(EditError::NoAnswerEditor(QuestionType::Msq)),
            (question, response) => Err(EditError::ResponseMismatch {
                question: question.question_type(),
                response: response.question_type(),
            }),
        }
    }

    /// Build the details editor for a question.
    pub fn for_details(question: QuestionDetails) -> Result<Self, EditError> {
        match question {
            QuestionDetails::Msq(details) => {
                Ok(Self::MsqDetails(MsqDetailsEditor::initialize(details)?))
            }
            other => Err(EditError::NoDetailsEditor(other.question_type())),
        }
    }

    /// The question type this editor works on.
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::McqAnswer(_) => QuestionType::Mcq,
            Self::RankOptionsAnswer(_) => QuestionType::RankOptions,
            Self::MsqDetails(_) => QuestionType::Msq,
        }
    }

    /// Apply one input event.
    ///
    /// An event meant for another question type is rejected and leaves the
    /// editor untouched.
    ///
    /// # Panics
    /// Panics if the event carries an index outside the current lists.
    pub fn apply(&mut self, event: EditEvent) -> Result<(), EditError> {
        let expected = self.question_type();
        let name = event.name();
        debug!(question_type = %expected, event = name, "Applying edit event");

        let mismatch = || -> Result<(), EditError> {
            warn!(question_type = %expected, event = name, "Edit event does not fit editor");
            Err(EditError::EventMismatch {
                expected,
                event: name,
            })
        };

        match self {
            Self::McqAnswer(editor) => match event {
                EditEvent::SelectOption(index) => editor.select_option(index),
                EditEvent::ToggleOtherAnswer => editor.toggle_other_option(),
                EditEvent::SetOtherFieldContent(text) => editor.set_other_field_content(text),
                _ => return mismatch(),
            },
            Self::RankOptionsAnswer(editor) => match event {
                EditEvent::SetRank { index, rank } => editor.set_rank(index, rank),
                _ => return mismatch(),
            },
            Self::MsqDetails(editor) => match event {
                EditEvent::ReorderChoice { from, to } => editor.reorder(from, to),
                EditEvent::SetChoiceText { index, text } => editor.set_choice_text(index, text),
                EditEvent::SetWeight { index, weight } => editor.set_weight(index, weight),
                EditEvent::AddChoice => editor.add_choice(),
                EditEvent::RemoveChoice(index) => editor.remove_choice(index),
                EditEvent::ToggleWeights(enabled) => editor.toggle_weights(enabled),
                EditEvent::ToggleOtherChoice(enabled) => editor.toggle_other_option(enabled),
                EditEvent::SetOtherWeight(weight) => editor.set_other_weight(weight),
                EditEvent::ToggleGeneratedOptions(enabled) => {
                    editor.toggle_generated_options(enabled)
                }
                EditEvent::SetGeneratedOptionsFor(participants) => {
                    editor.set_generated_options_for(participants)?
                }
                EditEvent::ToggleMaxSelectable(enabled) => editor.toggle_max_selectable(enabled),
                EditEvent::SetMaxSelectable(max) => editor.set_max_selectable(max),
                EditEvent::ToggleMinSelectable(enabled) => editor.toggle_min_selectable(enabled),
                EditEvent::SetMinSelectable(min) => editor.set_min_selectable(min),
                EditEvent::SetQuestionText(text) => editor.set_question_text(text),
                _ => return mismatch(),
            },
        }
        Ok(())
    }

    /// Everything the host should currently warn about.
    pub fn validation_warnings(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        if let Self::RankOptionsAnswer(editor) = self {
            if editor.has_duplicate_ranks() {
                warnings.push(ValidationWarning::DuplicateRanks);
            }
            if let (true, Some(min)) = (editor.is_below_minimum(), editor.min_to_rank()) {
                warnings.push(ValidationWarning::TooFewRanked { min });
            }
            if let (true, Some(max)) = (editor.is_above_maximum(), editor.max_to_rank()) {
                warnings.push(ValidationWarning::TooManyRanked { max });
            }
        }
        warnings
    }

    /// Snapshot of the question details, for the host's serializer.
    pub fn question_details(&self) -> QuestionDetails {
        match self {
            Self::McqAnswer(editor) => editor.question().clone().into(),
            Self::RankOptionsAnswer(editor) => editor.question().clone().into(),
            Self::MsqDetails(editor) => editor.details().clone().into(),
        }
    }

    /// Snapshot of the response, if this editor edits one.
    pub fn response_details(&self) -> Option<ResponseDetails> {
        match self {
            Self::McqAnswer(editor) => Some(editor.response().clone().into()),
            Self::RankOptionsAnswer(editor) => Some(editor.response().clone().into()),
            Self::MsqDetails(_) => None,
        }
    }
}

impl From<McqAnswerEditor> for QuestionEditor {
    fn from(editor: McqAnswerEditor) -> Self {
        Self::McqAnswer(editor)
    }
}

impl From<RankOptionsAnswerEditor> for QuestionEditor {
    fn from(editor: RankOptionsAnswerEditor) -> Self {
        Self::RankOptionsAnswer(editor)
    }
}

impl From<MsqDetailsEditor> for QuestionEditor {
    fn from(editor: MsqDetailsEditor) -> Self {
        Self::MsqDetails(editor)
    }
}
