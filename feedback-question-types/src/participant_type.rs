use std::fmt;

use serde::{Deserialize, Serialize};

/// A roster category that question options can be generated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackParticipantType {
    /// Options are typed in by the question author.
    #[default]
    None,
    Students,
    StudentsExcludingSelf,
    Teams,
    TeamsExcludingSelf,
    Instructors,
}

/// The categories offered when options are generated instead of typed in.
pub const GENERATABLE_PARTICIPANT_TYPES: [FeedbackParticipantType; 5] = [
    FeedbackParticipantType::Students,
    FeedbackParticipantType::StudentsExcludingSelf,
    FeedbackParticipantType::Teams,
    FeedbackParticipantType::TeamsExcludingSelf,
    FeedbackParticipantType::Instructors,
];

impl FeedbackParticipantType {
    /// Check if this is the `None` marker (options are not generated).
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Check if options can be generated from this category.
    pub fn is_generatable(&self) -> bool {
        GENERATABLE_PARTICIPANT_TYPES.contains(self)
    }

    /// The wire name, e.g. `STUDENTS_EXCLUDING_SELF`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Students => "STUDENTS",
            Self::StudentsExcludingSelf => "STUDENTS_EXCLUDING_SELF",
            Self::Teams => "TEAMS",
            Self::TeamsExcludingSelf => "TEAMS_EXCLUDING_SELF",
            Self::Instructors => "INSTRUCTORS",
        }
    }
}

impl fmt::Display for FeedbackParticipantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
