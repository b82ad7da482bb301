use crate::error::ClassroomError;
use std::fmt;
use std::str::FromStr;

/// Number of points a correct quiz answer is worth.
pub const POINTS_PER_CORRECT_ANSWER: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Capitalised form used at the start of messages.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Teacher => write!(f, "teacher"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub attendance: bool,
}

impl User {
    pub fn new(username: &str, password: &str, role: Role) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role,
            attendance: false,
        }
    }

    pub fn matches(&self, role: Role, username: &str, password: &str) -> bool {
        self.role == role && self.username == username && self.password == password
    }
}

/// One of the four multiple-choice options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub const ALL: [AnswerLetter; 4] = [
        AnswerLetter::A,
        AnswerLetter::B,
        AnswerLetter::C,
        AnswerLetter::D,
    ];
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            AnswerLetter::A => "A",
            AnswerLetter::B => "B",
            AnswerLetter::C => "C",
            AnswerLetter::D => "D",
        };
        write!(f, "{}", letter)
    }
}

impl FromStr for AnswerLetter {
    type Err = ClassroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(AnswerLetter::A),
            "B" => Ok(AnswerLetter::B),
            "C" => Ok(AnswerLetter::C),
            "D" => Ok(AnswerLetter::D),
            _ => Err(ClassroomError::InvalidCorrectOption(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub text: String,
    pub options: [String; 4],
    pub correct_answer: AnswerLetter,
}

impl QuizQuestion {
    pub fn new(text: &str, options: [&str; 4], correct_answer: AnswerLetter) -> Self {
        Self {
            text: text.to_string(),
            options: options.map(str::to_string),
            correct_answer,
        }
    }

    /// Builds a question from raw authoring input, normalising the answer letter.
    pub fn from_input(
        text: String,
        options: [String; 4],
        correct_answer: &str,
    ) -> Result<Self, ClassroomError> {
        Ok(Self {
            text,
            options,
            correct_answer: correct_answer.parse()?,
        })
    }

    pub fn is_correct(&self, answer: Option<AnswerLetter>) -> bool {
        answer == Some(self.correct_answer)
    }
}

pub type Quiz = Vec<QuizQuestion>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    NotAvailable,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn for_score(score: u32) -> Self {
        match score {
            90.. => Grade::A,
            75..=89 => Grade::B,
            50..=74 => Grade::C,
            _ => Grade::D,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grade = match self {
            Grade::NotAvailable => "N/A",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        };
        write!(f, "{}", grade)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub username: String,
    pub score: u32,
    pub grade: Grade,
}

impl ScoreRecord {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            score: 0,
            grade: Grade::NotAvailable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    MainMenu,
    StudentMenu { username: String },
    TeacherMenu { username: String },
    Exit,
}
