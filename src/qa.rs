use crate::error::ClassroomError;
use crate::logger;
use crate::models::AnsweredQuestion;
use crate::store::ClassroomStore;

/// Queues a student's question. The asker is logged but not stored.
pub fn ask_question(store: &mut ClassroomStore, student_name: &str, text: &str) {
    store.push_pending(text.to_string());
    logger::log(&format!("{} asked a question", student_name));
}

/// Pairs the oldest pending question with `answer` and moves it to the answered log.
pub fn answer_question(
    store: &mut ClassroomStore,
    answer: &str,
) -> Result<AnsweredQuestion, ClassroomError> {
    let question = store.pop_pending().ok_or(ClassroomError::NoPendingQuestions)?;
    let answered = AnsweredQuestion {
        question,
        answer: answer.to_string(),
    };
    store.push_answered(answered.clone());
    logger::log(&format!(
        "Answered question, {} still pending",
        store.pending_questions().len()
    ));
    Ok(answered)
}
