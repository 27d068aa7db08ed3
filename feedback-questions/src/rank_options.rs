//! Answer editor for rank-options questions.
//!
//! Ranks are never validated on write. A respondent can give two options the
//! same rank or rank more options than allowed; the predicates on
//! [`RankOptionsAnswerEditor`] report such states so the host can warn.

use std::collections::HashSet;
use std::num::{NonZeroU32, NonZeroUsize};
use std::ops::RangeInclusive;

use tracing::debug;

use crate::{AnswerEditor, RankOptionsQuestionDetails, RankOptionsResponseDetails};

/// Tracks the rank given to each option of a rank-options question.
#[derive(Debug, Clone, PartialEq)]
pub struct RankOptionsAnswerEditor {
    question: RankOptionsQuestionDetails,
    /// Always holds exactly one entry per option.
    response: RankOptionsResponseDetails,
}

impl RankOptionsAnswerEditor {
    /// Number of options on offer.
    pub fn option_count(&self) -> usize {
        self.question.options.len()
    }

    /// The ranks a respondent can pick from: `1..=option_count`.
    pub fn available_ranks(&self) -> RangeInclusive<u32> {
        1..=u32::try_from(self.option_count()).unwrap_or(u32::MAX)
    }

    /// Give option `index` the rank `rank`; `0` un-ranks it.
    ///
    /// # Panics
    /// Panics if `index` is not a valid option index.
    pub fn set_rank(&mut self, index: usize, rank: u32) {
        debug!(index, rank, "Assigning rank");
        self.response.answers[index] = NonZeroU32::new(rank);
    }

    /// Un-rank option `index`.
    ///
    /// # Panics
    /// Panics if `index` is not a valid option index.
    pub fn clear_rank(&mut self, index: usize) {
        self.set_rank(index, crate::RANK_OPTIONS_ANSWER_NOT_SUBMITTED);
    }

    /// The rank of option `index`, if it has one.
    pub fn rank_of(&self, index: usize) -> Option<u32> {
        self.response
            .answers
            .get(index)
            .copied()
            .flatten()
            .map(NonZeroU32::get)
    }

    fn ranked(&self) -> impl Iterator<Item = NonZeroU32> + '_ {
        self.response.answers.iter().flatten().copied()
    }

    /// Number of options that currently have a rank.
    pub fn ranked_count(&self) -> usize {
        self.ranked().count()
    }

    /// Check if no option has a rank yet.
    pub fn is_none_ranked(&self) -> bool {
        self.ranked_count() == 0
    }

    /// Check if two ranked options share a rank.
    pub fn has_duplicate_ranks(&self) -> bool {
        let mut seen = HashSet::new();
        self.ranked().any(|rank| !seen.insert(rank))
    }

    /// The least number of options to rank, if the question sets one.
    pub fn min_to_rank(&self) -> Option<usize> {
        self.question.min_options_to_be_ranked.map(NonZeroUsize::get)
    }

    /// The most options that may be ranked, if the question sets a limit.
    pub fn max_to_rank(&self) -> Option<usize> {
        self.question.max_options_to_be_ranked.map(NonZeroUsize::get)
    }

    /// Check if the question sets a minimum.
    pub fn is_min_enabled(&self) -> bool {
        self.min_to_rank().is_some()
    }

    /// Check if the question sets a maximum.
    pub fn is_max_enabled(&self) -> bool {
        self.max_to_rank().is_some()
    }

    /// Check if some, but too few, options are ranked.
    ///
    /// Ranking nothing at all is not flagged: an untouched question is not
    /// an insufficient one.
    pub fn is_below_minimum(&self) -> bool {
        let Some(min) = self.min_to_rank() else {
            return false;
        };
        let ranked = self.ranked_count();
        ranked > 0 && ranked < min
    }

    /// Check if more options are ranked than allowed.
    pub fn is_above_maximum(&self) -> bool {
        self.max_to_rank()
            .is_some_and(|max| self.ranked_count() > max)
    }
}

impl AnswerEditor for RankOptionsAnswerEditor {
    type Question = RankOptionsQuestionDetails;
    type Response = RankOptionsResponseDetails;

    /// Fits the recorded ranks to the current options. Ranks recorded for
    /// options that no longer exist are dropped; new options start unranked.
    fn initialize(
        question: RankOptionsQuestionDetails,
        mut response: RankOptionsResponseDetails,
    ) -> Self {
        let count = question.options.len();
        let dropped = response
            .answers
            .iter()
            .skip(count)
            .filter(|rank| rank.is_some())
            .count();
        if dropped > 0 {
            debug!(dropped, options = count, "Dropping ranks of removed options");
        }
        response.answers.resize(count, None);

        Self { question, response }
    }

    fn question(&self) -> &RankOptionsQuestionDetails {
        &self.question
    }

    fn response(&self) -> &RankOptionsResponseDetails {
        &self.response
    }

    fn into_response(self) -> RankOptionsResponseDetails {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(min: usize, max: usize, ranks: &[u32]) -> RankOptionsAnswerEditor {
        RankOptionsAnswerEditor::initialize(
            RankOptionsQuestionDetails::new(["A", "B", "C"]).with_bounds(min, max),
            RankOptionsResponseDetails::from_ranks(ranks.iter().copied()),
        )
    }

    #[test]
    fn initialize_fills_missing_entries() {
        let editor = editor(0, 0, &[]);
        assert_eq!(editor.response().ranks(), vec![0, 0, 0]);
        assert!(editor.is_none_ranked());
    }

    #[test]
    fn initialize_drops_ranks_of_removed_options() {
        let editor = editor(0, 0, &[3, 0, 1, 2, 4]);
        assert_eq!(editor.response().ranks(), vec![3, 0, 1]);
    }

    #[test]
    fn available_ranks_follow_option_count() {
        let editor = editor(0, 0, &[]);
        let ranks = editor.available_ranks();
        assert_eq!(ranks.clone().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(ranks.count(), 3);

        let empty = RankOptionsAnswerEditor::initialize(
            RankOptionsQuestionDetails::default(),
            RankOptionsResponseDetails::default(),
        );
        assert_eq!(empty.available_ranks().count(), 0);
    }

    #[test]
    fn set_rank_accepts_anything() {
        let mut editor = editor(0, 0, &[]);
        editor.set_rank(0, 2);
        editor.set_rank(1, 2);
        editor.set_rank(2, 99);
        assert_eq!(editor.response().ranks(), vec![2, 2, 99]);

        editor.clear_rank(2);
        assert_eq!(editor.rank_of(2), None);
        assert_eq!(editor.rank_of(0), Some(2));
        assert_eq!(editor.ranked_count(), 2);
    }

    #[test]
    fn duplicate_ranks() {
        assert!(!editor(0, 0, &[0, 0, 0]).has_duplicate_ranks());
        assert!(!editor(0, 0, &[1, 0, 2]).has_duplicate_ranks());
        assert!(!editor(0, 0, &[3, 1, 2]).has_duplicate_ranks());
        assert!(editor(0, 0, &[1, 0, 1]).has_duplicate_ranks());
        assert!(editor(0, 0, &[2, 2, 2]).has_duplicate_ranks());
    }

    #[test]
    fn below_minimum_ignores_untouched_question() {
        assert!(!editor(2, 0, &[0, 0, 0]).is_below_minimum());
        assert!(editor(2, 0, &[1, 0, 0]).is_below_minimum());
        assert!(!editor(2, 0, &[1, 2, 0]).is_below_minimum());
        assert!(!editor(0, 0, &[1, 0, 0]).is_below_minimum());
    }

    #[test]
    fn above_maximum_only_when_enabled() {
        assert!(editor(0, 1, &[1, 2, 0]).is_above_maximum());
        assert!(!editor(0, 2, &[1, 2, 0]).is_above_maximum());
        assert!(!editor(0, 0, &[1, 2, 3]).is_above_maximum());
    }

    #[test]
    fn bounds_enabled() {
        let editor = editor(1, 0, &[]);
        assert!(editor.is_min_enabled());
        assert!(!editor.is_max_enabled());
        assert_eq!(editor.min_to_rank(), Some(1));
        assert_eq!(editor.max_to_rank(), None);
    }

    #[test]
    fn zero_bounds_from_json_are_disabled() {
        let question: RankOptionsQuestionDetails = serde_json::from_str(
            r#"{"options": ["A", "B"], "minOptionsToBeRanked": 0, "maxOptionsToBeRanked": 0}"#,
        )
        .unwrap();
        let editor =
            RankOptionsAnswerEditor::initialize(question, RankOptionsResponseDetails::default());
        assert!(!editor.is_min_enabled());
        assert!(!editor.is_max_enabled());
        assert!(!editor.is_above_maximum());
    }
}
