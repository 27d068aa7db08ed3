//! # feedback-questions
//!
//! Editing and validation state for feedback questions. Presentation-agnostic.
//!
//! Each question type pairs a details record (what the author configured)
//! with a response record (what a respondent has answered so far). The
//! editors in this crate own those records while they are being edited and
//! keep each type's structural rules intact:
//!
//! - [`McqAnswerEditor`] - single choice, or a typed-in "other" answer, never both
//! - [`RankOptionsAnswerEditor`] - one rank slot per option, with warnings for
//!   duplicate ranks and unmet bounds
//! - [`MsqDetailsEditor`] - choices and their weights kept in lock-step
//!
//! ## Usage
//!
//! ```rust
//! use feedback_questions::{AnswerEditor, McqAnswerEditor, McqQuestionDetails, McqResponseDetails};
//!
//! let question = McqQuestionDetails::new(["Red", "Green", "Blue"]).with_other_enabled();
//! let mut editor = McqAnswerEditor::initialize(question, McqResponseDetails::default());
//!
//! editor.select_option(1);
//! assert_eq!(editor.answer(), "Green");
//!
//! editor.toggle_other_option();
//! editor.set_other_field_content("Teal");
//! assert_eq!(editor.selected_index(), None);
//! ```
//!
//! Hosts that handle several question types hold a [`QuestionEditor`] and feed
//! it [`EditEvent`]s. Editing never fails on domain grounds; problems are
//! reported through [`QuestionEditor::validation_warnings`].
//!
//! Editors log state transitions through `tracing`; install a subscriber in
//! the host to see them.

// Re-export all records from feedback-question-types
pub use feedback_question_types::*;

mod traits;
pub use traits::{AnswerEditor, DetailsEditor};

mod error;
pub use error::EditError;

mod mcq;
pub use mcq::McqAnswerEditor;

mod rank_options;
pub use rank_options::RankOptionsAnswerEditor;

mod msq;
pub use msq::{
    DEFAULT_GENERATED_PARTICIPANT_TYPE, DEFAULT_MAX_SELECTABLE, DEFAULT_MIN_SELECTABLE,
    MsqDetailsEditor,
};

mod editor;
pub use editor::{EditEvent, QuestionEditor, ValidationWarning};

// Scripted host for exercising editors without a form
mod scripted_host;
pub use scripted_host::{ScriptError, ScriptedHost};
