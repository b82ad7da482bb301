use crate::models::Role;
use thiserror::Error;

/// Everything that can go wrong while driving the classroom.
///
/// The `Display` text of each variant is what the user sees at the prompt.
#[derive(Debug, Error)]
pub enum ClassroomError {
    #[error("Username and password cannot be empty.")]
    EmptyCredentials,

    #[error("Invalid number.")]
    InvalidQuestionCount(String),

    #[error("Invalid correct option.")]
    InvalidCorrectOption(String),

    #[error("{} authentication failed.", .0.title())]
    AuthenticationFailed(Role),

    #[error("No quizzes available.")]
    NoQuizzes,

    #[error("No questions to answer.")]
    NoPendingQuestions,

    #[error("User not found.")]
    UnknownUser(String),

    #[error("No score record for {0}.")]
    MissingScoreRecord(String),

    #[error("Cancelled.")]
    Cancelled,

    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ClassroomError {
    /// Diagnostic line for the log, including the offending input.
    pub fn log_line(&self) -> String {
        match self {
            ClassroomError::InvalidQuestionCount(input) => {
                format!("Rejected question count {:?}", input)
            }
            ClassroomError::InvalidCorrectOption(input) => {
                format!("Rejected correct option {:?}", input)
            }
            ClassroomError::UnknownUser(username) => {
                format!("Attendance check for unknown user {}", username)
            }
            other => other.to_string(),
        }
    }

    /// Returns `true` if the session cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ClassroomError::Cancelled | ClassroomError::InputClosed | ClassroomError::Io(_)
        )
    }
}
