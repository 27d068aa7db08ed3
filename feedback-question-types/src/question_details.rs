use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{FeedbackParticipantType, QuestionError, sentinel};

/// The closed set of question types this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    /// Multiple choice, single answer.
    #[serde(rename = "MCQ")]
    Mcq,

    /// Multiple choice, multiple answers.
    #[serde(rename = "MSQ")]
    Msq,

    /// Rank a list of options.
    #[serde(rename = "RANK_OPTIONS")]
    RankOptions,
}

impl QuestionType {
    /// The wire name used in the `questionType` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mcq => "MCQ",
            Self::Msq => "MSQ",
            Self::RankOptions => "RANK_OPTIONS",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration of a multiple-choice, single-answer question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct McqQuestionDetails {
    /// The prompt shown to respondents.
    pub question_text: String,

    /// The choices, in display order.
    #[serde(rename = "mcqChoices")]
    pub choices: Vec<String>,

    /// Whether respondents may type in their own answer.
    pub other_enabled: bool,
}

impl McqQuestionDetails {
    /// Create details with the given choices.
    pub fn new(choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the prompt text.
    pub fn with_question_text(mut self, text: impl Into<String>) -> Self {
        self.question_text = text.into();
        self
    }

    /// Allow a free-text "other" answer.
    pub fn with_other_enabled(mut self) -> Self {
        self.other_enabled = true;
        self
    }

    /// Find the index of a choice by its text.
    pub fn position_of(&self, choice: &str) -> Option<usize> {
        self.choices.iter().position(|c| c == choice)
    }
}

/// Configuration of a multiple-choice, multiple-answer question.
///
/// When `has_assigned_weights` is set, `weights[i]` is the weight of
/// `choices[i]` and both lists have the same length. Otherwise `weights` is
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MsqQuestionDetailsWire")]
pub struct MsqQuestionDetails {
    pub question_text: String,

    #[serde(rename = "msqChoices")]
    pub choices: Vec<String>,

    pub other_enabled: bool,

    pub has_assigned_weights: bool,

    #[serde(rename = "msqWeights")]
    pub weights: Vec<f64>,

    /// Weight of the "other" answer; only meaningful with weights enabled.
    #[serde(rename = "msqOtherWeight")]
    pub other_weight: f64,

    /// Roster category the options are generated from, if any.
    pub generate_options_for: FeedbackParticipantType,

    #[serde(rename = "minSelectableChoices", with = "sentinel::no_value")]
    pub min_selectable: Option<usize>,

    #[serde(rename = "maxSelectableChoices", with = "sentinel::no_value")]
    pub max_selectable: Option<usize>,
}

impl MsqQuestionDetails {
    /// Create unweighted details with the given choices.
    pub fn new(choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_question_text(mut self, text: impl Into<String>) -> Self {
        self.question_text = text.into();
        self
    }

    /// Enable weights with the given values, one per choice.
    pub fn with_weights(mut self, weights: impl IntoIterator<Item = f64>) -> Self {
        self.has_assigned_weights = true;
        self.weights = weights.into_iter().collect();
        self
    }

    pub fn with_other_enabled(mut self) -> Self {
        self.other_enabled = true;
        self
    }

    pub fn with_generated_options_for(mut self, participants: FeedbackParticipantType) -> Self {
        self.generate_options_for = participants;
        self
    }

    pub fn with_min_selectable(mut self, min: usize) -> Self {
        self.min_selectable = Some(min);
        self
    }

    pub fn with_max_selectable(mut self, max: usize) -> Self {
        self.max_selectable = Some(max);
        self
    }

    /// Verify that choices and weights pair up.
    pub fn check_weights(&self) -> Result<(), QuestionError> {
        if self.has_assigned_weights {
            if self.weights.len() != self.choices.len() {
                return Err(QuestionError::WeightCountMismatch {
                    choices: self.choices.len(),
                    weights: self.weights.len(),
                });
            }
        } else if !self.weights.is_empty() {
            return Err(QuestionError::UnexpectedWeights {
                weights: self.weights.len(),
            });
        }
        Ok(())
    }
}

// Decoding goes through this mirror so the pairing is checked before a
// record exists.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MsqQuestionDetailsWire {
    question_text: String,
    msq_choices: Vec<String>,
    other_enabled: bool,
    has_assigned_weights: bool,
    msq_weights: Vec<f64>,
    msq_other_weight: f64,
    generate_options_for: FeedbackParticipantType,
    #[serde(with = "sentinel::no_value")]
    min_selectable_choices: Option<usize>,
    #[serde(with = "sentinel::no_value")]
    max_selectable_choices: Option<usize>,
}

impl TryFrom<MsqQuestionDetailsWire> for MsqQuestionDetails {
    type Error = QuestionError;

    fn try_from(wire: MsqQuestionDetailsWire) -> Result<Self, Self::Error> {
        let details = Self {
            question_text: wire.question_text,
            choices: wire.msq_choices,
            other_enabled: wire.other_enabled,
            has_assigned_weights: wire.has_assigned_weights,
            weights: wire.msq_weights,
            other_weight: wire.msq_other_weight,
            generate_options_for: wire.generate_options_for,
            min_selectable: wire.min_selectable_choices,
            max_selectable: wire.max_selectable_choices,
        };
        details.check_weights()?;
        Ok(details)
    }
}

/// Configuration of a rank-options question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankOptionsQuestionDetails {
    pub question_text: String,

    /// The options to be ranked.
    pub options: Vec<String>,

    /// Least number of options a respondent must rank, if constrained.
    #[serde(with = "sentinel::zero_unset")]
    pub min_options_to_be_ranked: Option<NonZeroUsize>,

    /// Most options a respondent may rank, if constrained.
    #[serde(with = "sentinel::zero_unset")]
    pub max_options_to_be_ranked: Option<NonZeroUsize>,
}

impl RankOptionsQuestionDetails {
    /// Create unconstrained details with the given options.
    pub fn new(options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_question_text(mut self, text: impl Into<String>) -> Self {
        self.question_text = text.into();
        self
    }

    /// Set ranking bounds. Zero means unconstrained, as on the wire.
    pub fn with_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_options_to_be_ranked = NonZeroUsize::new(min);
        self.max_options_to_be_ranked = NonZeroUsize::new(max);
        self
    }
}

/// Details of any supported question, tagged by `questionType` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "questionType")]
pub enum QuestionDetails {
    #[serde(rename = "MCQ")]
    Mcq(McqQuestionDetails),

    #[serde(rename = "MSQ")]
    Msq(MsqQuestionDetails),

    #[serde(rename = "RANK_OPTIONS")]
    RankOptions(RankOptionsQuestionDetails),
}

impl QuestionDetails {
    /// Get the question type.
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::Mcq(_) => QuestionType::Mcq,
            Self::Msq(_) => QuestionType::Msq,
            Self::RankOptions(_) => QuestionType::RankOptions,
        }
    }

    /// Get the prompt text.
    pub fn question_text(&self) -> &str {
        match self {
            Self::Mcq(d) => &d.question_text,
            Self::Msq(d) => &d.question_text,
            Self::RankOptions(d) => &d.question_text,
        }
    }

    /// Decode details from a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, QuestionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode details as a JSON payload.
    pub fn to_json(&self) -> Result<String, QuestionError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<McqQuestionDetails> for QuestionDetails {
    fn from(details: McqQuestionDetails) -> Self {
        Self::Mcq(details)
    }
}

impl From<MsqQuestionDetails> for QuestionDetails {
    fn from(details: MsqQuestionDetails) -> Self {
        Self::Msq(details)
    }
}

impl From<RankOptionsQuestionDetails> for QuestionDetails {
    fn from(details: RankOptionsQuestionDetails) -> Self {
        Self::RankOptions(details)
    }
}
