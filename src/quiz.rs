use crate::error::ClassroomError;
use crate::logger;
use crate::models::{AnswerLetter, Grade, POINTS_PER_CORRECT_ANSWER, Quiz, QuizQuestion};
use crate::store::ClassroomStore;

/// Result of one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    /// Points earned in this attempt only.
    pub session_score: u32,
    /// Running total after this attempt.
    pub total_score: u32,
    pub grade: Grade,
}

/// The general-knowledge quiz loaded at startup.
pub fn default_quiz() -> Quiz {
    vec![
        QuizQuestion::new("What is 7 × 8?", ["54", "56", "58", "64"], AnswerLetter::B),
        QuizQuestion::new(
            "What planet is known as the Red Planet?",
            ["Earth", "Mars", "Jupiter", "Venus"],
            AnswerLetter::B,
        ),
        QuizQuestion::new(
            "What is the past tense of 'go'?",
            ["goed", "goes", "went", "going"],
            AnswerLetter::C,
        ),
        QuizQuestion::new(
            "Who was the first President of the USA?",
            [
                "Abraham Lincoln",
                "George Washington",
                "John Adams",
                "Thomas Jefferson",
            ],
            AnswerLetter::B,
        ),
        QuizQuestion::new(
            "Which is the largest ocean?",
            ["Atlantic", "Indian", "Pacific", "Arctic"],
            AnswerLetter::C,
        ),
    ]
}

pub fn load_default_quiz(store: &mut ClassroomStore) {
    store.add_quiz(default_quiz());
    logger::log("Loaded default quiz");
}

/// Any integer is accepted; negative counts mean no questions.
pub fn parse_question_count(input: &str) -> Result<usize, ClassroomError> {
    let count: i128 = input
        .trim()
        .parse()
        .map_err(|_| ClassroomError::InvalidQuestionCount(input.to_string()))?;
    Ok(usize::try_from(count.max(0)).unwrap_or(usize::MAX))
}

/// Appends an authored quiz; it becomes the active quiz.
pub fn create_quiz(store: &mut ClassroomStore, quiz: Quiz) {
    logger::log(&format!("Created quiz with {} questions", quiz.len()));
    store.add_quiz(quiz);
}

/// Case and surrounding whitespace are ignored. Blank or unrecognised
/// answers count as no answer.
pub fn parse_answer(input: &str) -> Option<AnswerLetter> {
    input.parse().ok()
}

pub fn score_answers(quiz: &[QuizQuestion], answers: &[Option<AnswerLetter>]) -> u32 {
    quiz.iter()
        .zip(answers)
        .filter(|(question, answer)| question.is_correct(**answer))
        .count() as u32
        * POINTS_PER_CORRECT_ANSWER
}

/// Runs the active quiz for a student.
///
/// `answer_for` is asked once per question, in order, for the raw answer text.
pub fn take_quiz<F>(
    store: &mut ClassroomStore,
    username: &str,
    mut answer_for: F,
) -> Result<QuizOutcome, ClassroomError>
where
    F: FnMut(&QuizQuestion) -> Result<String, ClassroomError>,
{
    let quiz = store.active_quiz().ok_or(ClassroomError::NoQuizzes)?.clone();
    if store.score(username).is_none() {
        return Err(ClassroomError::MissingScoreRecord(username.to_string()));
    }

    let mut answers = Vec::with_capacity(quiz.len());
    for question in &quiz {
        answers.push(parse_answer(&answer_for(question)?));
    }
    let session_score = score_answers(&quiz, &answers);

    let record = store
        .score_mut(username)
        .ok_or_else(|| ClassroomError::MissingScoreRecord(username.to_string()))?;
    record.score += session_score;
    let total_score = record.score;
    let grade = assign_grade(store, username)?;

    logger::log(&format!(
        "{} scored {} (total {}, grade {})",
        username, session_score, total_score, grade
    ));

    Ok(QuizOutcome {
        session_score,
        total_score,
        grade,
    })
}

/// Recomputes the grade from the cumulative score.
pub fn assign_grade(store: &mut ClassroomStore, username: &str) -> Result<Grade, ClassroomError> {
    let record = store
        .score_mut(username)
        .ok_or_else(|| ClassroomError::MissingScoreRecord(username.to_string()))?;
    record.grade = Grade::for_score(record.score);
    Ok(record.grade)
}

pub fn performance_summary(store: &ClassroomStore) -> Vec<String> {
    store
        .scores()
        .iter()
        .map(|r| format!("{}: Score = {}, Grade = {}", r.username, r.score, r.grade))
        .collect()
}
