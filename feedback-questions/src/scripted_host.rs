//! Scripted host for driving editors without a form.
//!
//! `ScriptedHost` replays a fixed list of input events into a
//! [`QuestionEditor`], the way a form would as the user clicks and types.
//! This is useful for testing editing flows end to end.
//!
//! # Example
//!
//! ```rust
//! use feedback_questions::{
//!     QuestionEditor, RankOptionsQuestionDetails, RankOptionsResponseDetails, ScriptedHost,
//!     ValidationWarning,
//! };
//!
//! let mut editor = QuestionEditor::for_answer(
//!     RankOptionsQuestionDetails::new(["Apple", "Banana"]).with_bounds(1, 1).into(),
//!     RankOptionsResponseDetails::default().into(),
//! )
//! .unwrap();
//!
//! let warnings = ScriptedHost::new()
//!     .with_rank(0, 1)
//!     .with_rank(1, 1)
//!     .run(&mut editor)
//!     .unwrap();
//!
//! assert!(warnings.contains(&ValidationWarning::DuplicateRanks));
//! ```

use crate::{EditError, EditEvent, QuestionEditor, ValidationWarning};

/// A host that plays back pre-recorded input events.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHost {
    events: Vec<EditEvent>,
}

/// Error type for ScriptedHost.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Step {step} ({event}) failed: {source}")]
    StepFailed {
        step: usize,
        event: &'static str,
        #[source]
        source: EditError,
    },
}

impl ScriptedHost {
    /// Create a host with an empty script.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event to the script.
    pub fn with_event(mut self, event: EditEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Append a click on a listed MCQ choice.
    pub fn with_selection(self, index: usize) -> Self {
        self.with_event(EditEvent::SelectOption(index))
    }

    /// Append a click on the MCQ "other" answer.
    pub fn with_other_toggle(self) -> Self {
        self.with_event(EditEvent::ToggleOtherAnswer)
    }

    /// Append a commit of the MCQ "other" text field.
    pub fn with_other_text(self, text: impl Into<String>) -> Self {
        self.with_event(EditEvent::SetOtherFieldContent(text.into()))
    }

    /// Append a rank pick.
    pub fn with_rank(self, index: usize, rank: u32) -> Self {
        self.with_event(EditEvent::SetRank { index, rank })
    }

    /// Append a drag-and-drop of an MSQ choice.
    pub fn with_reorder(self, from: usize, to: usize) -> Self {
        self.with_event(EditEvent::ReorderChoice { from, to })
    }

    /// Apply every event in order, stopping at the first rejected one.
    ///
    /// # Returns
    /// * `Ok(warnings)` - the validation warnings after the last event
    /// * `Err` - the step that was rejected; earlier steps stay applied
    pub fn run(&self, editor: &mut QuestionEditor) -> Result<Vec<ValidationWarning>, ScriptError> {
        for (step, event) in self.events.iter().enumerate() {
            let name = event.name();
            editor
                .apply(event.clone())
                .map_err(|source| ScriptError::StepFailed {
                    step,
                    event: name,
                    source,
                })?;
        }
        Ok(editor.validation_warnings())
    }
}
