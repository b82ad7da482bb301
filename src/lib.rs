pub mod attendance;
pub mod config;
pub mod error;
pub mod identity;
pub mod logger;
pub mod models;
pub mod qa;
pub mod quiz;
pub mod session;
pub mod store;
pub mod terminal;

#[cfg(test)]
mod session_tests;

// Re-exports for convenience
pub use config::{Config, PasswordInput};
pub use error::ClassroomError;
pub use models::{
    AnswerLetter, AnsweredQuestion, AppState, Grade, Quiz, QuizQuestion, Role, ScoreRecord, User,
};
pub use session::SessionController;
pub use store::ClassroomStore;
pub use terminal::{ConsoleTerminal, MaskedLineReader, PlainLineReader, RawModeReader, Terminal};
