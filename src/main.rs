use clap::Parser;
use std::process;
use virtual_classroom::session::SessionEnd;
use virtual_classroom::terminal::spawn_interrupt_watcher;
use virtual_classroom::{ClassroomStore, Config, ConsoleTerminal, SessionController, logger, quiz};

fn main() {
    let config = Config::parse();

    if let Some(path) = &config.log_file
        && let Err(e) = logger::init(path)
    {
        eprintln!("Error: cannot open log file {}: {}", path.display(), e);
        process::exit(1);
    }
    logger::log("Classroom started");

    if let Err(e) = spawn_interrupt_watcher() {
        logger::log(&format!("Could not start interrupt watcher: {}", e));
    }

    let mut store = ClassroomStore::new();
    if !config.no_default_quiz {
        quiz::load_default_quiz(&mut store);
    }

    let terminal = ConsoleTerminal::new(config.password_reader());
    let mut session = SessionController::new(store, terminal);

    let result = session.run();
    SessionEnd::from_result(&result).finish()
}
