//! Quiz engine.
//!
//! A [`QuizSession`] holds the answers picked during one visit to the quiz
//! view and the score computed from them. Sessions borrow the question bank
//! and are dropped when the view goes away, so nothing leaks between visits.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::QuizError;
use crate::model::Question;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizState {
    /// No answers picked yet.
    Unanswered,
    /// Some, but not all, questions answered.
    PartiallyAnswered,
    /// Every question has an answer, not yet scored.
    FullyAnswered,
    /// A score has been computed for the current selections.
    Scored,
}

/// Per-question outcome after scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionResult {
    pub question_id: u32,
    /// The option the user picked, if any.
    pub selected: Option<usize>,
    pub correct_option: usize,
    pub is_correct: bool,
}

/// The transient state of one quiz attempt.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    questions: &'a [Question],
    selections: BTreeMap<u32, usize>,
    score: Option<usize>,
}

impl<'a> QuizSession<'a> {
    /// Start a fresh session over `questions`.
    pub fn new(questions: &'a [Question]) -> Self {
        Self {
            questions,
            selections: BTreeMap::new(),
            score: None,
        }
    }

    /// Record `option_index` as the answer to `question_id`, replacing any
    /// earlier pick.
    ///
    /// Changing an answer after scoring clears the score, so a view never
    /// shows a score that disagrees with the highlighted answers.
    pub fn select(&mut self, question_id: u32, option_index: usize) -> Result<(), QuizError> {
        let valid = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .is_some_and(|q| q.has_option(option_index));
        if !valid {
            return Err(QuizError::InvalidSelection {
                question_id,
                option_index,
            });
        }

        let previous = self.selections.insert(question_id, option_index);
        if previous != Some(option_index) && self.score.take().is_some() {
            tracing::debug!(question_id, "selection changed after scoring, score cleared");
        }
        Ok(())
    }

    /// Count the questions whose current selection is the correct option and
    /// store the result. Unanswered questions count as wrong.
    pub fn submit_for_scoring(&mut self) -> usize {
        let score = self
            .questions
            .iter()
            .filter(|q| self.selection(q.id).is_some_and(|i| q.is_correct(i)))
            .count();
        self.score = Some(score);
        score
    }

    /// Drop all selections and the score.
    pub fn reset(&mut self) {
        self.selections.clear();
        self.score = None;
    }

    /// The last computed score, if any.
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    /// The option currently picked for `question_id`.
    pub fn selection(&self, question_id: u32) -> Option<usize> {
        self.selections.get(&question_id).copied()
    }

    pub fn selections(&self) -> &BTreeMap<u32, usize> {
        &self.selections
    }

    pub fn questions(&self) -> &'a [Question] {
        self.questions
    }

    /// Number of questions in the bank.
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    pub fn state(&self) -> QuizState {
        if self.score.is_some() {
            QuizState::Scored
        } else if self.selections.is_empty() {
            QuizState::Unanswered
        } else if self.selections.len() < self.questions.len() {
            QuizState::PartiallyAnswered
        } else {
            QuizState::FullyAnswered
        }
    }

    /// Per-question breakdown against the current selections.
    pub fn results(&self) -> Vec<QuestionResult> {
        self.questions
            .iter()
            .map(|q| {
                let selected = self.selection(q.id);
                QuestionResult {
                    question_id: q.id,
                    selected,
                    correct_option: q.correct_option,
                    is_correct: selected.is_some_and(|i| q.is_correct(i)),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Vec<Question> {
        vec![
            Question {
                id: 1,
                prompt: "Q1".into(),
                options: vec!["A".into(), "B".into()],
                correct_option: 1,
            },
            Question {
                id: 2,
                prompt: "Q2".into(),
                options: vec!["A".into(), "B".into(), "C".into()],
                correct_option: 1,
            },
        ]
    }

    #[test]
    fn fresh_session_is_empty() {
        let questions = bank();
        let session = QuizSession::new(&questions);
        assert_eq!(session.score(), None);
        assert!(session.selections().is_empty());
        assert_eq!(session.state(), QuizState::Unanswered);
        assert_eq!(session.total(), 2);
    }

    #[test]
    fn all_correct_scores_two() {
        let questions = bank();
        let mut session = QuizSession::new(&questions);
        session.select(1, 1).unwrap();
        session.select(2, 1).unwrap();
        assert_eq!(session.submit_for_scoring(), 2);
        assert_eq!(session.score(), Some(2));
    }

    #[test]
    fn all_wrong_scores_zero() {
        let questions = bank();
        let mut session = QuizSession::new(&questions);
        session.select(1, 0).unwrap();
        session.select(2, 2).unwrap();
        assert_eq!(session.submit_for_scoring(), 0);
        assert_eq!(session.state(), QuizState::Scored);
    }

    #[test]
    fn unanswered_questions_count_as_wrong() {
        let questions = bank();
        let mut session = QuizSession::new(&questions);
        session.select(1, 1).unwrap();
        assert_eq!(session.state(), QuizState::PartiallyAnswered);
        assert_eq!(session.submit_for_scoring(), 1);
    }

    #[test]
    fn empty_submission_scores_zero() {
        let questions = bank();
        let mut session = QuizSession::new(&questions);
        assert_eq!(session.submit_for_scoring(), 0);
        assert_eq!(session.score(), Some(0));
    }

    #[test]
    fn last_selection_wins() {
        let questions = bank();
        let mut session = QuizSession::new(&questions);
        session.select(1, 0).unwrap();
        session.select(1, 1).unwrap();
        session.select(2, 1).unwrap();
        session.select(2, 2).unwrap();
        assert_eq!(session.selection(1), Some(1));
        assert_eq!(session.selection(2), Some(2));
        assert_eq!(session.state(), QuizState::FullyAnswered);
        assert_eq!(session.submit_for_scoring(), 1);
    }

    #[test]
    fn scoring_is_idempotent() {
        let questions = bank();
        let mut session = QuizSession::new(&questions);
        session.select(2, 1).unwrap();
        let first = session.submit_for_scoring();
        let second = session.submit_for_scoring();
        assert_eq!(first, second);
    }

    #[test]
    fn changing_answer_after_scoring_clears_score() {
        let questions = bank();
        let mut session = QuizSession::new(&questions);
        session.select(1, 1).unwrap();
        session.select(2, 1).unwrap();
        assert_eq!(session.submit_for_scoring(), 2);

        session.select(2, 0).unwrap();
        assert_eq!(session.score(), None);
        assert_eq!(session.state(), QuizState::FullyAnswered);
        assert_eq!(session.submit_for_scoring(), 1);
    }

    #[test]
    fn reselecting_same_answer_keeps_score() {
        let questions = bank();
        let mut session = QuizSession::new(&questions);
        session.select(1, 1).unwrap();
        session.submit_for_scoring();
        session.select(1, 1).unwrap();
        assert_eq!(session.score(), Some(1));
    }

    #[test]
    fn invalid_selection_leaves_state_untouched() {
        let questions = bank();
        let mut session = QuizSession::new(&questions);
        session.select(1, 1).unwrap();
        session.submit_for_scoring();

        assert_eq!(
            session.select(9, 0),
            Err(QuizError::InvalidSelection {
                question_id: 9,
                option_index: 0
            })
        );
        assert!(session.select(1, 2).is_err());
        assert_eq!(session.selection(1), Some(1));
        assert_eq!(session.score(), Some(1));
    }

    #[test]
    fn reset_returns_to_fresh_state() {
        let questions = bank();
        let mut session = QuizSession::new(&questions);
        session.select(1, 1).unwrap();
        session.submit_for_scoring();
        session.reset();
        assert_eq!(session.score(), None);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.state(), QuizState::Unanswered);
    }

    #[test]
    fn results_report_each_question() {
        let questions = bank();
        let mut session = QuizSession::new(&questions);
        session.select(1, 0).unwrap();
        let results = session.results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].selected, Some(0));
        assert!(!results[0].is_correct);
        assert_eq!(results[1].selected, None);
        assert_eq!(results[1].correct_option, 1);
    }

    #[test]
    fn score_matches_last_selections_for_many_sequences() {
        let questions = bank();
        // (question, option) sequences; expected score computed from the final picks.
        let sequences: Vec<Vec<(u32, usize)>> = vec![
            vec![],
            vec![(1, 0), (1, 1)],
            vec![(2, 2), (1, 1), (2, 1)],
            vec![(1, 1), (2, 1), (1, 0)],
            vec![(2, 0), (2, 2), (2, 1), (2, 0)],
        ];
        for seq in sequences {
            let mut session = QuizSession::new(&questions);
            let mut last = BTreeMap::new();
            for &(qid, opt) in &seq {
                session.select(qid, opt).unwrap();
                last.insert(qid, opt);
            }
            let expected = questions
                .iter()
                .filter(|q| last.get(&q.id) == Some(&q.correct_option))
                .count();
            assert_eq!(session.submit_for_scoring(), expected, "sequence {seq:?}");
        }
    }
}
