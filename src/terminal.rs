use crate::error::ClassroomError;
use crate::logger;
use crate::session::SessionEnd;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

static PASSWORD_PROMPT_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn password_prompt_active() -> bool {
    PASSWORD_PROMPT_ACTIVE.load(Ordering::SeqCst)
}

/// Marks a plain password prompt as open until dropped.
struct PasswordPromptGuard;

impl PasswordPromptGuard {
    fn open() -> Self {
        PASSWORD_PROMPT_ACTIVE.store(true, Ordering::SeqCst);
        PasswordPromptGuard
    }
}

impl Drop for PasswordPromptGuard {
    fn drop(&mut self) {
        PASSWORD_PROMPT_ACTIVE.store(false, Ordering::SeqCst);
    }
}

/// Turns SIGINT into a session end. In raw mode Ctrl+C arrives as a key
/// event instead, so this only fires for plain input.
pub fn spawn_interrupt_watcher() -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("classroom::interrupt_watcher".to_string())
        .spawn(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("Interrupt watcher unavailable: {}", e));
                    return;
                }
            };

            match rt.block_on(tokio::signal::ctrl_c()) {
                Ok(()) => SessionEnd::on_interrupt(password_prompt_active()).finish(),
                Err(e) => logger::log(&format!("Interrupt watcher failed: {}", e)),
            }
        })
}

/// Line-oriented I/O the session controller talks through.
pub trait Terminal {
    /// Prints `prompt` and reads one line without its terminator.
    fn prompt(&mut self, prompt: &str) -> Result<String, ClassroomError>;

    /// Like [`Terminal::prompt`] but the typed text is not shown.
    fn prompt_password(&mut self, prompt: &str) -> Result<String, ClassroomError>;

    fn say(&mut self, message: &str) -> Result<(), ClassroomError>;
}

pub trait MaskedLineReader {
    fn read_masked(&mut self, prompt: &str) -> Result<String, ClassroomError>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum PasswordStep {
    Echo,
    Erase,
    Ignore,
    Submit,
    Cancel,
}

/// Applies one key press to the password buffer and says what to show.
pub fn handle_password_key(buffer: &mut String, key: KeyEvent) -> PasswordStep {
    if key.kind != KeyEventKind::Press {
        return PasswordStep::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            PasswordStep::Cancel
        }
        KeyCode::Enter => PasswordStep::Submit,
        KeyCode::Backspace | KeyCode::Delete => {
            if buffer.pop().is_some() {
                PasswordStep::Erase
            } else {
                PasswordStep::Ignore
            }
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            PasswordStep::Echo
        }
        _ => PasswordStep::Ignore,
    }
}

/// Reads key events in raw mode, echoing `*` for each character.
#[derive(Debug, Default)]
pub struct RawModeReader;

impl RawModeReader {
    fn read_keys(out: &mut impl Write) -> Result<String, ClassroomError> {
        let mut buffer = String::new();
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            match handle_password_key(&mut buffer, key) {
                PasswordStep::Echo => write!(out, "*")?,
                PasswordStep::Erase => write!(out, "\x08 \x08")?,
                PasswordStep::Ignore => continue,
                PasswordStep::Submit => {
                    write!(out, "\r\n")?;
                    out.flush()?;
                    return Ok(buffer);
                }
                PasswordStep::Cancel => return Err(ClassroomError::Cancelled),
            }
            out.flush()?;
        }
    }
}

impl MaskedLineReader for RawModeReader {
    fn read_masked(&mut self, prompt: &str) -> Result<String, ClassroomError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        enable_raw_mode()?;
        let result = Self::read_keys(&mut stdout);
        disable_raw_mode()?;
        result
    }
}

/// Reads the password as an ordinary visible line, for piped input.
#[derive(Debug, Default)]
pub struct PlainLineReader;

impl MaskedLineReader for PlainLineReader {
    fn read_masked(&mut self, prompt: &str) -> Result<String, ClassroomError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        let _prompt = PasswordPromptGuard::open();
        read_line(&mut io::stdin().lock())
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String, ClassroomError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ClassroomError::InputClosed);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Stdin/stdout terminal with a pluggable password reader.
pub struct ConsoleTerminal {
    passwords: Box<dyn MaskedLineReader>,
}

impl ConsoleTerminal {
    pub fn new(passwords: Box<dyn MaskedLineReader>) -> Self {
        Self { passwords }
    }
}

impl Terminal for ConsoleTerminal {
    fn prompt(&mut self, prompt: &str) -> Result<String, ClassroomError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        read_line(&mut io::stdin().lock())
    }

    fn prompt_password(&mut self, prompt: &str) -> Result<String, ClassroomError> {
        self.passwords.read_masked(prompt)
    }

    fn say(&mut self, message: &str) -> Result<(), ClassroomError> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", message)?;
        Ok(())
    }
}

/// Terminal fed from a fixed list of input lines, recording everything shown.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    inputs: std::collections::VecDeque<String>,
    pub output: Vec<String>,
}

#[cfg(test)]
impl ScriptedTerminal {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }
}

#[cfg(test)]
impl Terminal for ScriptedTerminal {
    fn prompt(&mut self, prompt: &str) -> Result<String, ClassroomError> {
        self.output.push(prompt.to_string());
        self.inputs.pop_front().ok_or(ClassroomError::InputClosed)
    }

    fn prompt_password(&mut self, prompt: &str) -> Result<String, ClassroomError> {
        self.prompt(prompt)
    }

    fn say(&mut self, message: &str) -> Result<(), ClassroomError> {
        self.output.push(message.to_string());
        Ok(())
    }
}
