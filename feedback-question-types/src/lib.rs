//! Core records for feedback questions.
//!
//! This crate provides the plain data the question editors work on:
//! - `McqQuestionDetails`, `MsqQuestionDetails`, `RankOptionsQuestionDetails` -
//!   what the question author configured
//! - `McqResponseDetails`, `RankOptionsResponseDetails` - what a respondent
//!   has answered so far
//! - `QuestionDetails` and `ResponseDetails` - tagged unions for the wire
//! - The sentinels collaborators use for "unset" numbers

mod sentinel;
pub use sentinel::{NO_VALUE, RANK_OPTIONS_ANSWER_NOT_SUBMITTED};

mod participant_type;
pub use participant_type::{FeedbackParticipantType, GENERATABLE_PARTICIPANT_TYPES};

mod question_details;
pub use question_details::{
    McqQuestionDetails, MsqQuestionDetails, QuestionDetails, QuestionType,
    RankOptionsQuestionDetails,
};

mod response_details;
pub use response_details::{McqResponseDetails, RankOptionsResponseDetails, ResponseDetails};

mod error;
pub use error::QuestionError;
