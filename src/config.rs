use crate::terminal::{MaskedLineReader, PlainLineReader, RawModeReader};
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PasswordInput {
    /// Raw terminal mode, one `*` per typed character
    Masked,
    /// Ordinary visible line
    Plain,
}

#[derive(Debug, Parser)]
#[command(name = "classroom", version, about = "Terminal virtual classroom manager")]
pub struct Config {
    /// How passwords are read (defaults to masked when stdin is a terminal)
    #[arg(long, value_enum)]
    pub password_input: Option<PasswordInput>,

    /// Start without the built-in general-knowledge quiz
    #[arg(long)]
    pub no_default_quiz: bool,

    /// Append diagnostic messages to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn password_input(&self) -> PasswordInput {
        self.password_input.unwrap_or_else(|| {
            if std::io::stdin().is_terminal() {
                PasswordInput::Masked
            } else {
                PasswordInput::Plain
            }
        })
    }

    pub fn password_reader(&self) -> Box<dyn MaskedLineReader> {
        match self.password_input() {
            PasswordInput::Masked => Box::new(RawModeReader),
            PasswordInput::Plain => Box::new(PlainLineReader),
        }
    }
}
