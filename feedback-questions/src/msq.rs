//! Details editor for multiple-choice, multiple-answer questions.

use tracing::debug;

use crate::{DetailsEditor, EditError, FeedbackParticipantType, MsqQuestionDetails, QuestionError};

/// Maximum selectable choices set when the constraint is switched on.
pub const DEFAULT_MAX_SELECTABLE: usize = 2;

/// Minimum selectable choices set when the constraint is switched on.
pub const DEFAULT_MIN_SELECTABLE: usize = 1;

/// Category picked when generated options are switched on.
pub const DEFAULT_GENERATED_PARTICIPANT_TYPE: FeedbackParticipantType =
    FeedbackParticipantType::Students;

/// Maintains the configuration of an MSQ question.
///
/// While weights are enabled, `weights[i]` belongs to `choices[i]`: every
/// operation that adds, removes or moves a choice does the same to its
/// weight. The details are only handed out by shared reference so the
/// pairing cannot be broken from outside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MsqDetailsEditor {
    details: MsqQuestionDetails,
}

impl MsqDetailsEditor {
    /// Start from the default (empty, unconstrained) details.
    pub fn new() -> Self {
        Self::default()
    }

    /// The choice texts, in display order.
    pub fn choices(&self) -> &[String] {
        &self.details.choices
    }

    /// The weights, empty while weights are disabled.
    pub fn weights(&self) -> &[f64] {
        &self.details.weights
    }

    /// Replace the prompt text.
    pub fn set_question_text(&mut self, text: impl Into<String>) {
        self.details.question_text = text.into();
    }

    /// Move the choice at `from` to `to`, carrying its weight along.
    ///
    /// Both indices are clamped to the list, as a drag-and-drop list does.
    pub fn reorder(&mut self, from: usize, to: usize) {
        debug!(from, to, "Reordering MSQ choice");
        move_item(&mut self.details.choices, from, to);
        if self.details.has_assigned_weights {
            move_item(&mut self.details.weights, from, to);
        }
    }

    /// # Panics
    /// Panics if `index` is not a valid choice index.
    pub fn set_choice_text(&mut self, index: usize, text: impl Into<String>) {
        self.details.choices[index] = text.into();
    }

    /// # Panics
    /// Panics if weights are disabled or `index` is not a valid choice index.
    pub fn set_weight(&mut self, index: usize, weight: f64) {
        self.details.weights[index] = weight;
    }

    /// Append an empty choice, with a zero weight if weights are enabled.
    pub fn add_choice(&mut self) {
        self.details.choices.push(String::new());
        if self.details.has_assigned_weights {
            self.details.weights.push(0.0);
        }
        debug!(choices = self.details.choices.len(), "Added MSQ choice");
    }

    /// Remove the choice at `index` together with its weight.
    ///
    /// # Panics
    /// Panics if `index` is not a valid choice index.
    pub fn remove_choice(&mut self, index: usize) {
        self.details.choices.remove(index);
        if self.details.has_assigned_weights {
            self.details.weights.remove(index);
        }
        debug!(index, choices = self.details.choices.len(), "Removed MSQ choice");
    }

    /// Switch weights on or off.
    ///
    /// Either way previously entered weights are gone: switching on starts
    /// every choice at zero, switching off also zeroes the "other" weight.
    pub fn toggle_weights(&mut self, enabled: bool) {
        self.details.has_assigned_weights = enabled;
        if enabled {
            self.details.weights = vec![0.0; self.details.choices.len()];
        } else {
            self.details.weights.clear();
            self.details.other_weight = 0.0;
        }
        debug!(enabled, "Toggled MSQ weights");
    }

    /// Switch the free-text "other" choice on or off.
    pub fn toggle_other_option(&mut self, enabled: bool) {
        self.details.other_enabled = enabled;
        if !enabled {
            self.details.other_weight = 0.0;
        }
    }

    /// Weight of the "other" answer. Only meaningful while weights are on.
    pub fn set_other_weight(&mut self, weight: f64) {
        self.details.other_weight = weight;
    }

    /// Switch generated options on (from [`DEFAULT_GENERATED_PARTICIPANT_TYPE`]) or off.
    ///
    /// A category picked earlier is not remembered.
    pub fn toggle_generated_options(&mut self, enabled: bool) {
        self.details.generate_options_for = if enabled {
            DEFAULT_GENERATED_PARTICIPANT_TYPE
        } else {
            FeedbackParticipantType::None
        };
        debug!(enabled, "Toggled MSQ generated options");
    }

    /// Pick the category options are generated from.
    ///
    /// # Returns
    /// * `Ok(())` - the category is one of [`crate::GENERATABLE_PARTICIPANT_TYPES`]
    /// * `Err(EditError::NotGeneratable)` - it is not; nothing changes
    pub fn set_generated_options_for(
        &mut self,
        participants: FeedbackParticipantType,
    ) -> Result<(), EditError> {
        if !participants.is_generatable() {
            return Err(EditError::NotGeneratable(participants));
        }
        self.details.generate_options_for = participants;
        Ok(())
    }

    /// Switch the maximum on (at [`DEFAULT_MAX_SELECTABLE`]) or off.
    pub fn toggle_max_selectable(&mut self, enabled: bool) {
        self.details.max_selectable = enabled.then_some(DEFAULT_MAX_SELECTABLE);
    }

    /// Switch the minimum on (at [`DEFAULT_MIN_SELECTABLE`]) or off.
    pub fn toggle_min_selectable(&mut self, enabled: bool) {
        self.details.min_selectable = enabled.then_some(DEFAULT_MIN_SELECTABLE);
    }

    /// Set the maximum, switching it on if needed.
    pub fn set_max_selectable(&mut self, max: usize) {
        self.details.max_selectable = Some(max);
    }

    /// Set the minimum, switching it on if needed.
    pub fn set_min_selectable(&mut self, min: usize) {
        self.details.min_selectable = Some(min);
    }

    /// Check if choices carry weights.
    pub fn is_weights_enabled(&self) -> bool {
        self.details.has_assigned_weights
    }

    /// Check if choices are generated from a participant category.
    pub fn is_generated_options_enabled(&self) -> bool {
        !self.details.generate_options_for.is_none()
    }

    /// Check if a maximum number of selections is set.
    pub fn is_max_selectable_enabled(&self) -> bool {
        self.details.max_selectable.is_some()
    }

    /// Check if a minimum number of selections is set.
    pub fn is_min_selectable_enabled(&self) -> bool {
        self.details.min_selectable.is_some()
    }

    /// The maximum to show in the input, even while the constraint is off.
    pub fn display_max_selectable(&self) -> usize {
        self.details.max_selectable.unwrap_or(DEFAULT_MAX_SELECTABLE)
    }

    /// The minimum to show in the input, even while the constraint is off.
    pub fn display_min_selectable(&self) -> usize {
        self.details.min_selectable.unwrap_or(DEFAULT_MIN_SELECTABLE)
    }

    /// Upper bound for the minimum input, so the minimum never exceeds the
    /// maximum.
    pub fn max_allowed_for_min_selectable(&self) -> usize {
        self.details
            .max_selectable
            .unwrap_or(self.details.choices.len())
    }
}

impl DetailsEditor for MsqDetailsEditor {
    type Question = MsqQuestionDetails;

    fn initialize(details: MsqQuestionDetails) -> Result<Self, QuestionError> {
        details.check_weights()?;
        Ok(Self { details })
    }

    fn details(&self) -> &MsqQuestionDetails {
        &self.details
    }

    fn into_details(self) -> MsqQuestionDetails {
        self.details
    }
}

fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let Some(last) = items.len().checked_sub(1) else {
        return;
    };
    let (from, to) = (from.min(last), to.min(last));
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
}
