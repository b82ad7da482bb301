use crate::models::{AnsweredQuestion, Quiz, ScoreRecord, User};
use std::collections::VecDeque;

/// In-memory state for one classroom session.
///
/// Owned by the session controller and lent to the services; dropped at exit.
#[derive(Debug, Default)]
pub struct ClassroomStore {
    users: Vec<User>,
    quizzes: Vec<Quiz>,
    pending_questions: VecDeque<String>,
    answered_questions: Vec<AnsweredQuestion>,
    scores: Vec<ScoreRecord>,
}

impl ClassroomStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn users_mut(&mut self) -> impl Iterator<Item = &mut User> {
        self.users.iter_mut()
    }

    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn add_quiz(&mut self, quiz: Quiz) {
        self.quizzes.push(quiz);
    }

    /// The most recently added quiz.
    pub fn active_quiz(&self) -> Option<&Quiz> {
        self.quizzes.last()
    }

    pub fn pending_questions(&self) -> &VecDeque<String> {
        &self.pending_questions
    }

    pub fn push_pending(&mut self, question: String) {
        self.pending_questions.push_back(question);
    }

    pub fn peek_pending(&self) -> Option<&str> {
        self.pending_questions.front().map(String::as_str)
    }

    pub fn pop_pending(&mut self) -> Option<String> {
        self.pending_questions.pop_front()
    }

    pub fn answered_questions(&self) -> &[AnsweredQuestion] {
        &self.answered_questions
    }

    pub fn push_answered(&mut self, answered: AnsweredQuestion) {
        self.answered_questions.push(answered);
    }

    /// Score records in the order their students first registered.
    pub fn scores(&self) -> &[ScoreRecord] {
        &self.scores
    }

    pub fn score(&self, username: &str) -> Option<&ScoreRecord> {
        self.scores.iter().find(|r| r.username == username)
    }

    pub fn score_mut(&mut self, username: &str) -> Option<&mut ScoreRecord> {
        self.scores.iter_mut().find(|r| r.username == username)
    }

    /// Inserts a fresh record, resetting an existing one for the same name in place.
    pub fn reset_score(&mut self, username: &str) {
        match self.score_mut(username) {
            Some(record) => *record = ScoreRecord::new(username),
            None => self.scores.push(ScoreRecord::new(username)),
        }
    }
}
