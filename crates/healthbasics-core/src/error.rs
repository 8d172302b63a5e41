//! Quiz error types.

use thiserror::Error;

/// Errors raised by the quiz engine.
///
/// These signal a caller bug (a view offering a choice that does not exist),
/// not a condition the user can recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The question id is not in the bank, or the option index is out of range.
    #[error("invalid selection: question {question_id}, option {option_index}")]
    InvalidSelection {
        question_id: u32,
        option_index: usize,
    },
}
