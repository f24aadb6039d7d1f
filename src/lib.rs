//! # java-quiz
//!
//! A terminal quiz about the Java ecosystem. Questions live in an embedded
//! SQLite store, are filtered by version and category, and are asked one at
//! a time with an explanation after each answer.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use java_quiz::{
//!     load_seed_questions, QuestionRepository, QuestionStore, Quiz, QuizError,
//!     RepositoryWorker, TomlSettingsStore,
//! };
//!
//! fn main() -> Result<(), QuizError> {
//!     let runtime = tokio::runtime::Runtime::new()?;
//!     let repository = Arc::new(QuestionRepository::new(QuestionStore::open("java_quiz.db")?));
//!     let (worker, events) = RepositoryWorker::spawn(repository, runtime.handle());
//!     worker.seed(load_seed_questions(None));
//!
//!     let settings = Box::new(TomlSettingsStore::new("settings.toml"));
//!     Quiz::new(worker, events, settings).run()
//! }
//! ```

mod app;
pub mod config;
pub mod data;
pub mod error;
mod feedback;
pub mod logging;
pub mod models;
pub mod runner;
pub mod selection;
pub mod terminal;
mod ui;

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

pub use app::{App, SettingsField};
pub use config::{MemorySettingsStore, QuestionCount, Settings, SettingsStore, TomlSettingsStore};
pub use data::{
    load_questions_from_json, load_seed_questions, QuestionFilter, QuestionRepository,
    QuestionStore, RepositoryWorker, Ticket, WorkerEvent,
};
pub use error::{LoadError, QuizError, SettingsError};
pub use feedback::Feedback;
pub use models::{AppState, Question};
pub use runner::{AnswerOutcome, Phase, QuizRunner, Score};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A quiz session that can be run in the terminal.
pub struct Quiz {
    app: App,
    events: UnboundedReceiver<WorkerEvent>,
    feedback: Feedback<io::Stdout>,
}

impl Quiz {
    /// Create a new quiz on top of a running repository worker.
    pub fn new(
        worker: RepositoryWorker,
        events: UnboundedReceiver<WorkerEvent>,
        settings_store: Box<dyn SettingsStore>,
    ) -> Self {
        Self {
            app: App::new(worker, settings_store),
            events,
            feedback: Feedback::stdout(),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = self.run_event_loop(&mut term);
        terminal::restore()?;
        info!("Quiz closed");
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    fn run_event_loop(&mut self, terminal: &mut terminal::AppTerminal) -> Result<(), QuizError> {
        loop {
            while let Ok(worker_event) = self.events.try_recv() {
                self.app.handle_worker_event(worker_event);
            }

            terminal.draw(|frame| ui::render(frame, &self.app))?;

            if !event::poll(INPUT_POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if handle_input(&mut self.app, &mut self.feedback, key.code) {
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Returns true if the app should exit.
fn handle_input<W: Write>(app: &mut App, feedback: &mut Feedback<W>, key: KeyCode) -> bool {
    if let KeyCode::Char('q') | KeyCode::Char('Q') = key {
        if app.state == AppState::Settings {
            app.close_settings();
        }
        return true;
    }

    match app.state {
        AppState::Selection => handle_selection_input(app, key),
        AppState::Quiz => handle_quiz_input(app, feedback, key),
        AppState::Result => handle_result_input(app, key),
        AppState::Settings => handle_settings_input(app, key),
    }
    false
}

fn handle_selection_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.selection_down(),
        KeyCode::Char(' ') => app.selection_activate(),
        KeyCode::Enter => match app.selection().step() {
            selection::SelectionStep::Category => app.selection_activate(),
            selection::SelectionStep::Version => app.start_selected(),
        },
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_all_questions(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.open_settings(),
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc => app.selection_back(),
        _ => {}
    }
}

fn handle_quiz_input<W: Write>(app: &mut App, feedback: &mut Feedback<W>, key: KeyCode) {
    let outcome = match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Char(c @ '1'..='4') => app.answer(c as usize - '1' as usize),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => {
            app.next_question();
            None
        }
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc => {
            app.abandon_quiz();
            None
        }
        _ => None,
    };

    if let Some(outcome) = outcome {
        feedback.answer(app.settings(), outcome.correct);
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        _ => {}
    }
}

fn handle_settings_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.settings_up(),
        KeyCode::Down | KeyCode::Char('j') => app.settings_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_setting(),
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc => app.close_settings(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::runtime::Handle;

    use super::*;
    use crate::data::fixtures::question;

    async fn quiz_app() -> (App, UnboundedReceiver<WorkerEvent>) {
        let repository = Arc::new(QuestionRepository::new(QuestionStore::open_in_memory().unwrap()));
        repository
            .seed_if_empty(&[question(1, "only", 2, "21", "General")])
            .unwrap();
        let (worker, mut events) = RepositoryWorker::spawn(repository, &Handle::current());
        let mut app = App::new(worker, Box::new(MemorySettingsStore::default()));
        app.handle_worker_event(events.recv().await.unwrap());
        (app, events)
    }

    #[tokio::test]
    async fn test_number_key_answers_and_rings() {
        let (mut app, mut events) = quiz_app().await;
        let mut feedback = Feedback::new(Vec::new());

        assert!(!handle_input(&mut app, &mut feedback, KeyCode::Char('a')));
        app.handle_worker_event(events.recv().await.unwrap());
        assert_eq!(app.state, AppState::Quiz);

        handle_input(&mut app, &mut feedback, KeyCode::Char('3'));
        assert_eq!(
            app.runner().unwrap().phase(),
            Phase::AnswerLocked {
                selected: 2,
                correct: true
            }
        );

        handle_input(&mut app, &mut feedback, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::Result);
    }

    #[tokio::test]
    async fn test_quit_from_any_screen() {
        let (mut app, _events) = quiz_app().await;
        let mut feedback = Feedback::new(Vec::new());

        handle_input(&mut app, &mut feedback, KeyCode::Char('s'));
        assert_eq!(app.state, AppState::Settings);
        assert!(handle_input(&mut app, &mut feedback, KeyCode::Char('q')));
    }
}
