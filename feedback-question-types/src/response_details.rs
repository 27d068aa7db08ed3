use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{QuestionError, QuestionType, sentinel};

/// A respondent's answer to a multiple-choice, single-answer question.
///
/// At most one of "a listed choice is the answer" and `is_other` holds, and
/// `other_field_content` is empty whenever `is_other` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct McqResponseDetails {
    /// Text of the chosen choice, empty if nothing is chosen.
    pub answer: String,

    /// Whether the respondent chose to type in their own answer.
    pub is_other: bool,

    /// The typed-in answer.
    pub other_field_content: String,
}

impl McqResponseDetails {
    /// A response that picked one of the listed choices.
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            ..Self::default()
        }
    }

    /// A response that typed in its own answer.
    pub fn with_other(content: impl Into<String>) -> Self {
        Self {
            answer: String::new(),
            is_other: true,
            other_field_content: content.into(),
        }
    }
}

/// A respondent's ranking of the options of a rank-options question.
///
/// `answers[i]` is the rank given to option `i`, or `None` if that option has
/// not been ranked. Duplicate ranks are representable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankOptionsResponseDetails {
    #[serde(with = "sentinel::rank_answers")]
    pub answers: Vec<Option<NonZeroU32>>,
}

impl RankOptionsResponseDetails {
    /// Build from raw ranks, where `0` marks an unranked option.
    pub fn from_ranks(ranks: impl IntoIterator<Item = u32>) -> Self {
        Self {
            answers: ranks.into_iter().map(NonZeroU32::new).collect(),
        }
    }

    /// The ranks as wire numbers, `0` for unranked options.
    pub fn ranks(&self) -> Vec<u32> {
        self.answers
            .iter()
            .map(|rank| rank.map_or(crate::RANK_OPTIONS_ANSWER_NOT_SUBMITTED, NonZeroU32::get))
            .collect()
    }
}

/// Response details of any supported answer form, tagged by `questionType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "questionType")]
pub enum ResponseDetails {
    #[serde(rename = "MCQ")]
    Mcq(McqResponseDetails),

    #[serde(rename = "RANK_OPTIONS")]
    RankOptions(RankOptionsResponseDetails),
}

impl ResponseDetails {
    /// Get the question type this response answers.
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::Mcq(_) => QuestionType::Mcq,
            Self::RankOptions(_) => QuestionType::RankOptions,
        }
    }

    /// Decode a response from a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, QuestionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode a response as a JSON payload.
    pub fn to_json(&self) -> Result<String, QuestionError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<McqResponseDetails> for ResponseDetails {
    fn from(details: McqResponseDetails) -> Self {
        Self::Mcq(details)
    }
}

impl From<RankOptionsResponseDetails> for ResponseDetails {
    fn from(details: RankOptionsResponseDetails) -> Self {
        Self::RankOptions(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mcq_response_wire_names() {
        let response = McqResponseDetails::with_other("Purple");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["answer"], "");
        assert_eq!(json["isOther"], true);
        assert_eq!(json["otherFieldContent"], "Purple");
    }

    #[test]
    fn from_ranks_treats_zero_as_unranked() {
        let response = RankOptionsResponseDetails::from_ranks([2, 0, 1]);
        assert_eq!(response.answers[0], NonZeroU32::new(2));
        assert_eq!(response.answers[1], None);
        assert_eq!(response.ranks(), vec![2, 0, 1]);
    }

    #[test]
    fn tagged_response_round_trip() -> anyhow::Result<()> {
        let response: ResponseDetails = RankOptionsResponseDetails::from_ranks([0, 3]).into();
        let json = response.to_json()?;
        assert_eq!(json, r#"{"questionType":"RANK_OPTIONS","answers":[0,3]}"#);
        assert_eq!(ResponseDetails::from_json(&json)?, response);
        Ok(())
    }

    #[test]
    fn unknown_question_type_is_rejected() {
        let result = ResponseDetails::from_json(r#"{"questionType":"TEXT","answer":"hi"}"#);
        assert!(matches!(result, Err(QuestionError::Json(_))));
    }
}
