#[cfg(test)]
mod session_flow_tests {
    use crate::error::ClassroomError;
    use crate::models::{AppState, Grade};
    use crate::quiz::load_default_quiz;
    use crate::session::{MainChoice, SessionController, StudentChoice, TeacherChoice};
    use crate::store::ClassroomStore;
    use crate::terminal::ScriptedTerminal;

    fn controller(inputs: &[&str]) -> SessionController<ScriptedTerminal> {
        let mut store = ClassroomStore::new();
        load_default_quiz(&mut store);
        SessionController::new(store, ScriptedTerminal::new(inputs))
    }

    fn said(controller: &SessionController<ScriptedTerminal>, line: &str) -> bool {
        controller.terminal().output.iter().any(|l| l == line)
    }

    /// Register alice and bob, take the default quiz, mark and check attendance.
    #[test]
    fn test_end_to_end_classroom_scenario() {
        let mut session = controller(&[
            "1", "alice", "pw1", // register student
            "2", "bob", "pw2", // register teacher
            "3", "alice", "pw1", // login student
            "2", "B", "B", "C", "B", "C", // take quiz
            "6", // logout
            "4", "bob", "pw2", // login teacher
            "3", // mark attendance
            "5", // logout
            "3", "alice", "pw1", // login student
            "3", // check attendance
            "6", // logout
            "5", // exit
        ]);

        session.run().unwrap();

        assert_eq!(session.state(), &AppState::Exit);
        assert!(said(&session, "Student alice registered successfully."));
        assert!(said(&session, "Teacher bob registered successfully."));
        assert!(said(&session, "alice's grade: A"));
        assert!(said(&session, "Quiz completed. Score: 100"));
        assert!(said(&session, "Marked: alice"));
        assert!(said(&session, "Attendance: marked"));
        assert!(said(&session, "Goodbye!"));

        let record = session.store().score("alice").unwrap();
        assert_eq!(record.score, 100);
        assert_eq!(record.grade, Grade::A);
    }

    #[test]
    fn test_quiz_prints_question_and_options() {
        let mut session = controller(&[
            "1", "alice", "pw", "3", "alice", "pw", "2", "A", "A", "A", "A", "A",
        ]);
        for _ in 0..3 {
            session.step().unwrap();
        }

        let transcript = session.terminal().transcript();
        assert!(transcript.contains(
            "\nWhat is 7 × 8?\nA. 54\nB. 56\nC. 58\nD. 64\nYour answer (A/B/C/D): "
        ));
        assert!(said(&session, "alice's grade: D"));
        assert!(said(&session, "Quiz completed. Score: 0"));
    }

    #[test]
    fn test_failed_login_stays_on_main_menu() {
        let mut session = controller(&["1", "alice", "pw1", "4", "alice", "pw1"]);
        session.step().unwrap();
        session.step().unwrap();

        assert_eq!(session.state(), &AppState::MainMenu);
        assert!(said(&session, "Teacher authentication failed."));
    }

    #[test]
    fn test_successful_login_enters_role_menu() {
        let mut session = controller(&["2", "bob", "pw2", "4", "bob", "pw2"]);
        session.step().unwrap();
        session.step().unwrap();

        assert!(said(&session, "Teacher authentication successful."));
        assert_eq!(
            session.state(),
            &AppState::TeacherMenu {
                username: "bob".to_string()
            }
        );
    }

    #[test]
    fn test_empty_registration_is_rejected() {
        let mut session = controller(&["1", "", "pw"]);
        session.step().unwrap();

        assert!(said(&session, "Username and password cannot be empty."));
        assert!(session.store().users().is_empty());
        assert!(session.store().scores().is_empty());
    }

    #[test]
    fn test_questions_flow_from_student_to_teacher() {
        let mut session = controller(&[
            "1", "alice", "pw", "2", "bob", "pw", // register both
            "3", "alice", "pw", "1", "What is ownership?", "1", "What is borrowing?", "6",
            "4", "bob", "pw", "1", "Single owner", "5",
            "3", "alice", "pw", "5", "6", "5",
        ]);

        session.run().unwrap();

        assert!(said(&session, "alice asked: What is ownership?"));
        assert!(said(&session, "Q: What is ownership?"));
        assert!(said(&session, "Answer recorded."));
        assert!(said(&session, "\n--- Answered Questions ---"));
        assert!(said(&session, "Q: What is ownership?\nA: Single owner"));
        assert_eq!(session.store().answered_questions().len(), 1);
        assert_eq!(session.store().peek_pending(), Some("What is borrowing?"));
    }

    #[test]
    fn test_empty_queues_are_reported() {
        let mut session = controller(&[
            "1", "alice", "pw", "2", "bob", "pw",
            "3", "alice", "pw", "5", "6",
            "4", "bob", "pw", "1", "5", "5",
        ]);

        session.run().unwrap();

        assert!(said(&session, "No answered questions."));
        assert!(said(&session, "No questions to answer."));
    }

    #[test]
    fn test_teacher_creates_quiz_that_becomes_active() {
        let mut session = controller(&[
            "2", "bob", "pw", "1", "alice", "pw",
            "4", "bob", "pw", "2", "1", "Capital of France?", "Rome", "Paris", "Oslo", "Bern", "b", "5",
            "3", "alice", "pw", "2", "B", "4", "6", "5",
        ]);

        session.run().unwrap();

        assert!(said(&session, "Quiz created successfully."));
        assert_eq!(session.store().quizzes().len(), 2);
        assert!(said(&session, "\nCapital of France?"));
        assert!(said(&session, "Quiz completed. Score: 20"));
        assert!(said(&session, "\n--- Performance Summary ---"));
        assert!(said(&session, "alice: Score = 20, Grade = D"));
    }

    #[test]
    fn test_invalid_quiz_input_leaves_bank_unchanged() {
        let mut session = controller(&[
            "2", "bob", "pw", "4", "bob", "pw",
            "2", "many",
            "2", "1", "Q?", "a", "b", "c", "d", "E",
        ]);
        for _ in 0..4 {
            session.step().unwrap();
        }

        assert!(said(&session, "Invalid number."));
        assert!(said(&session, "Invalid correct option."));
        assert_eq!(session.store().quizzes().len(), 1);
    }

    #[test]
    fn test_huge_question_count_prompts_without_preallocating() {
        let mut session = controller(&[
            "2", "bob", "pw", "4", "bob", "pw",
            "2", "18446744073709551615", "Q?", "a", "b", "c", "d", "E",
        ]);
        for _ in 0..3 {
            session.step().unwrap();
        }

        assert!(said(&session, "Enter question 1: "));
        assert!(said(&session, "Invalid correct option."));
        assert_eq!(session.store().quizzes().len(), 1);
    }

    #[test]
    fn test_negative_question_count_creates_empty_quiz() {
        let mut session = controller(&["2", "bob", "pw", "4", "bob", "pw", "2", "-1"]);
        for _ in 0..3 {
            session.step().unwrap();
        }

        assert!(said(&session, "Quiz created successfully."));
        assert_eq!(session.store().quizzes().len(), 2);
        assert_eq!(session.store().active_quiz().map(|q| q.len()), Some(0));
    }

    #[test]
    fn test_unmarked_attendance_and_invalid_choices() {
        let mut session = controller(&["9", "1", "alice", "pw", "3", "alice", "pw", "7", "3"]);
        for _ in 0..5 {
            session.step().unwrap();
        }

        let invalid = session
            .terminal()
            .output
            .iter()
            .filter(|l| *l == "Invalid option.")
            .count();
        assert_eq!(invalid, 2);
        assert!(said(&session, "Attendance: not marked"));
    }

    #[test]
    fn test_data_survives_logout() {
        let mut session = controller(&[
            "1", "alice", "pw", "3", "alice", "pw", "2", "B", "B", "C", "B", "C", "6",
            "3", "alice", "pw", "2", "B", "B", "C", "B", "C", "6", "5",
        ]);

        session.run().unwrap();

        assert_eq!(session.store().score("alice").unwrap().score, 200);
    }

    #[test]
    fn test_input_closed_is_fatal() {
        let mut session = controller(&["1", "alice"]);
        let result = session.run();

        assert!(matches!(result, Err(ClassroomError::InputClosed)));
        assert!(session.store().users().is_empty());
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MainChoice::parse(" 5 "), Some(MainChoice::Exit));
        assert_eq!(MainChoice::parse("6"), None);
        assert_eq!(StudentChoice::parse("6"), Some(StudentChoice::Logout));
        assert_eq!(TeacherChoice::parse("5"), Some(TeacherChoice::Logout));
        assert_eq!(TeacherChoice::parse("6"), None);
    }
}
