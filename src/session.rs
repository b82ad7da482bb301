use crate::attendance;
use crate::error::ClassroomError;
use crate::identity;
use crate::logger;
use crate::models::{AnswerLetter, AppState, QuizQuestion, Role};
use crate::qa;
use crate::quiz;
use crate::store::ClassroomStore;
use crate::terminal::Terminal;

const MAIN_MENU: &str =
    "1. Register Student\n2. Register Teacher\n3. Login Student\n4. Login Teacher\n5. Exit";
const STUDENT_MENU: &str = "1. Ask Question\n2. Take Quiz\n3. Check Attendance\n4. View Performance\n5. View Answers\n6. Logout";
const TEACHER_MENU: &str =
    "1. Answer Question\n2. Create Quiz\n3. Mark Attendance\n4. View Performance\n5. Logout";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Register(Role),
    Login(Role),
    Exit,
}

impl MainChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MainChoice::Register(Role::Student)),
            "2" => Some(MainChoice::Register(Role::Teacher)),
            "3" => Some(MainChoice::Login(Role::Student)),
            "4" => Some(MainChoice::Login(Role::Teacher)),
            "5" => Some(MainChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentChoice {
    AskQuestion,
    TakeQuiz,
    CheckAttendance,
    ViewPerformance,
    ViewAnswers,
    Logout,
}

impl StudentChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(StudentChoice::AskQuestion),
            "2" => Some(StudentChoice::TakeQuiz),
            "3" => Some(StudentChoice::CheckAttendance),
            "4" => Some(StudentChoice::ViewPerformance),
            "5" => Some(StudentChoice::ViewAnswers),
            "6" => Some(StudentChoice::Logout),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherChoice {
    AnswerQuestion,
    CreateQuiz,
    MarkAttendance,
    ViewPerformance,
    Logout,
}

impl TeacherChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(TeacherChoice::AnswerQuestion),
            "2" => Some(TeacherChoice::CreateQuiz),
            "3" => Some(TeacherChoice::MarkAttendance),
            "4" => Some(TeacherChoice::ViewPerformance),
            "5" => Some(TeacherChoice::Logout),
            _ => None,
        }
    }
}

/// How the process finishes once the session stops.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Finished,
    /// Interrupted while a password was being typed.
    Cancelled,
    /// Interrupted anywhere else.
    Interrupted,
    Failed(String),
}

impl SessionEnd {
    pub fn from_result(result: &Result<(), ClassroomError>) -> Self {
        match result {
            Ok(()) | Err(ClassroomError::InputClosed) => SessionEnd::Finished,
            Err(ClassroomError::Cancelled) => SessionEnd::Cancelled,
            Err(e) => SessionEnd::Failed(e.to_string()),
        }
    }

    pub fn on_interrupt(password_prompt_active: bool) -> Self {
        if password_prompt_active {
            SessionEnd::Cancelled
        } else {
            SessionEnd::Interrupted
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SessionEnd::Finished => 0,
            SessionEnd::Cancelled | SessionEnd::Failed(_) => 1,
            SessionEnd::Interrupted => 130,
        }
    }

    /// Prints the closing message, if any, and exits the process.
    pub fn finish(self) -> ! {
        match &self {
            SessionEnd::Finished => logger::log("Session finished"),
            SessionEnd::Cancelled => {
                logger::log("Password entry cancelled");
                println!("\nCancelled.");
            }
            SessionEnd::Interrupted => logger::log("Interrupted"),
            SessionEnd::Failed(e) => {
                logger::log(&format!("Fatal error: {}", e));
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(self.exit_code())
    }
}

/// Role-gated menu loop. Owns the classroom state for the whole run.
pub struct SessionController<T: Terminal> {
    store: ClassroomStore,
    terminal: T,
    state: AppState,
}

impl<T: Terminal> SessionController<T> {
    pub fn new(store: ClassroomStore, terminal: T) -> Self {
        Self {
            store,
            terminal,
            state: AppState::MainMenu,
        }
    }

    pub fn store(&self) -> &ClassroomStore {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Runs menus until the user exits. Only fatal errors are returned.
    pub fn run(&mut self) -> Result<(), ClassroomError> {
        while self.state != AppState::Exit {
            self.step()?;
        }
        Ok(())
    }

    /// Shows the current menu and handles one choice.
    ///
    /// Recoverable errors are printed and leave the state unchanged.
    pub fn step(&mut self) -> Result<(), ClassroomError> {
        let result = match self.state.clone() {
            AppState::MainMenu => self.main_menu(),
            AppState::StudentMenu { username } => self.student_menu(&username),
            AppState::TeacherMenu { username } => self.teacher_menu(&username),
            AppState::Exit => Ok(()),
        };

        match result {
            Err(e) if !e.is_fatal() => {
                logger::log(&e.log_line());
                self.terminal.say(&e.to_string())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<(), ClassroomError> {
        self.terminal.say("\n--- Main Menu ---")?;
        self.terminal.say(MAIN_MENU)?;
        let choice = self.terminal.prompt("Choice: ")?;

        match MainChoice::parse(&choice) {
            Some(MainChoice::Register(role)) => self.register(role),
            Some(MainChoice::Login(role)) => self.login(role),
            Some(MainChoice::Exit) => {
                self.terminal.say("Goodbye!")?;
                logger::log("Session ended");
                self.state = AppState::Exit;
                Ok(())
            }
            None => self.terminal.say("Invalid option."),
        }
    }

    fn register(&mut self, role: Role) -> Result<(), ClassroomError> {
        let username = self
            .terminal
            .prompt(&format!("{} username: ", role.title()))?;
        let password = self
            .terminal
            .prompt_password(&format!("{} password: ", role.title()))?;

        identity::register(&mut self.store, &username, &password, role)?;
        self.terminal.say(&format!(
            "{} {} registered successfully.",
            role.title(),
            username
        ))
    }

    fn login(&mut self, role: Role) -> Result<(), ClassroomError> {
        let username = self.terminal.prompt(&format!("Enter {} username: ", role))?;
        let password = self
            .terminal
            .prompt_password(&format!("Enter {} password: ", role))?;

        let username = identity::authenticate(&self.store, role, &username, &password)?
            .username
            .clone();
        self.terminal
            .say(&format!("{} authentication successful.", role.title()))?;

        self.state = match role {
            Role::Student => AppState::StudentMenu { username },
            Role::Teacher => AppState::TeacherMenu { username },
        };
        Ok(())
    }

    fn logout(&mut self, username: &str) -> Result<(), ClassroomError> {
        logger::log(&format!("{} logged out", username));
        self.state = AppState::MainMenu;
        Ok(())
    }

    fn student_menu(&mut self, username: &str) -> Result<(), ClassroomError> {
        self.terminal.say("\nStudent Menu:")?;
        self.terminal.say(STUDENT_MENU)?;
        let choice = self.terminal.prompt("Choice: ")?;

        match StudentChoice::parse(&choice) {
            Some(StudentChoice::AskQuestion) => {
                let question = self.terminal.prompt("Enter question: ")?;
                qa::ask_question(&mut self.store, username, &question);
                self.terminal
                    .say(&format!("{} asked: {}", username, question))
            }
            Some(StudentChoice::TakeQuiz) => self.take_quiz(username),
            Some(StudentChoice::CheckAttendance) => {
                let status = if attendance::check_attendance(&self.store, username)? {
                    "marked"
                } else {
                    "not marked"
                };
                self.terminal.say(&format!("Attendance: {}", status))
            }
            Some(StudentChoice::ViewPerformance) => self.view_performance(),
            Some(StudentChoice::ViewAnswers) => self.view_answers(),
            Some(StudentChoice::Logout) => self.logout(username),
            None => self.terminal.say("Invalid option."),
        }
    }

    fn teacher_menu(&mut self, username: &str) -> Result<(), ClassroomError> {
        self.terminal.say("\nTeacher Menu:")?;
        self.terminal.say(TEACHER_MENU)?;
        let choice = self.terminal.prompt("Choice: ")?;

        match TeacherChoice::parse(&choice) {
            Some(TeacherChoice::AnswerQuestion) => self.answer_question(),
            Some(TeacherChoice::CreateQuiz) => self.create_quiz(),
            Some(TeacherChoice::MarkAttendance) => {
                for name in attendance::mark_attendance_for_all_students(&mut self.store) {
                    self.terminal.say(&format!("Marked: {}", name))?;
                }
                Ok(())
            }
            Some(TeacherChoice::ViewPerformance) => self.view_performance(),
            Some(TeacherChoice::Logout) => self.logout(username),
            None => self.terminal.say("Invalid option."),
        }
    }

    fn take_quiz(&mut self, username: &str) -> Result<(), ClassroomError> {
        let terminal = &mut self.terminal;
        let outcome = quiz::take_quiz(&mut self.store, username, |question| {
            terminal.say(&format!("\n{}", question.text))?;
            for (letter, option) in AnswerLetter::ALL.iter().zip(&question.options) {
                terminal.say(&format!("{}. {}", letter, option))?;
            }
            terminal.prompt("Your answer (A/B/C/D): ")
        })?;

        self.terminal
            .say(&format!("{}'s grade: {}", username, outcome.grade))?;
        self.terminal
            .say(&format!("Quiz completed. Score: {}", outcome.session_score))
    }

    fn answer_question(&mut self) -> Result<(), ClassroomError> {
        let question = self
            .store
            .peek_pending()
            .map(str::to_string)
            .ok_or(ClassroomError::NoPendingQuestions)?;
        self.terminal.say(&format!("Q: {}", question))?;
        let answer = self.terminal.prompt("Your answer: ")?;

        qa::answer_question(&mut self.store, &answer)?;
        self.terminal.say("Answer recorded.")
    }

    fn create_quiz(&mut self) -> Result<(), ClassroomError> {
        let count = self.terminal.prompt("How many questions to add? ")?;
        let count = quiz::parse_question_count(&count)?;

        let mut questions = Vec::new();
        for i in 0..count {
            let text = self
                .terminal
                .prompt(&format!("Enter question {}: ", i + 1))?;
            let mut options: [String; 4] = Default::default();
            for (slot, letter) in options.iter_mut().zip(AnswerLetter::ALL) {
                *slot = self.terminal.prompt(&format!("Option {}: ", letter))?;
            }
            let correct = self.terminal.prompt("Enter correct option (A/B/C/D): ")?;
            questions.push(QuizQuestion::from_input(text, options, &correct)?);
        }

        quiz::create_quiz(&mut self.store, questions);
        self.terminal.say("Quiz created successfully.")
    }

    fn view_performance(&mut self) -> Result<(), ClassroomError> {
        self.terminal.say("\n--- Performance Summary ---")?;
        for line in quiz::performance_summary(&self.store) {
            self.terminal.say(&line)?;
        }
        Ok(())
    }

    fn view_answers(&mut self) -> Result<(), ClassroomError> {
        if self.store.answered_questions().is_empty() {
            return self.terminal.say("No answered questions.");
        }

        self.terminal.say("\n--- Answered Questions ---")?;
        for answered in self.store.answered_questions() {
            self.terminal
                .say(&format!("Q: {}\nA: {}", answered.question, answered.answer))?;
        }
        Ok(())
    }
}
