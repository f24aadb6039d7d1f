use tracing::{debug, error, info, warn};

use crate::config::{Settings, SettingsStore};
use crate::data::{QuestionFilter, RepositoryWorker, Ticket, WorkerEvent};
use crate::models::{AppState, OPTION_SLOTS};
use crate::runner::{AnswerOutcome, Phase, QuizRunner};
use crate::selection::SelectionFlow;

/// Rows on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    QuestionCount,
    DarkMode,
    Sound,
    Vibration,
}

impl SettingsField {
    pub const ALL: [SettingsField; 4] = [
        SettingsField::QuestionCount,
        SettingsField::DarkMode,
        SettingsField::Sound,
        SettingsField::Vibration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::QuestionCount => "Questions per quiz",
            Self::DarkMode => "Dark mode",
            Self::Sound => "Sound",
            Self::Vibration => "Vibration",
        }
    }
}

pub struct App {
    pub state: AppState,
    worker: RepositoryWorker,
    settings_store: Box<dyn SettingsStore>,
    settings: Settings,
    settings_cursor: usize,
    selection: SelectionFlow,
    runner: Option<QuizRunner>,
    selected_option: usize,
    result_scroll: usize,
    pending_choices: Option<Ticket>,
    pending_run: Option<Ticket>,
    status: Option<String>,
}

impl App {
    /// Build the app and request the selection choices.
    pub fn new(worker: RepositoryWorker, settings_store: Box<dyn SettingsStore>) -> Self {
        let settings = settings_store.load();
        let mut app = Self {
            state: AppState::Selection,
            worker,
            settings_store,
            settings,
            settings_cursor: 0,
            selection: SelectionFlow::new(),
            runner: None,
            selected_option: 0,
            result_scroll: 0,
            pending_choices: None,
            pending_run: None,
            status: None,
        };
        app.reload_choices();
        app
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_cursor(&self) -> usize {
        self.settings_cursor
    }

    pub fn selection(&self) -> &SelectionFlow {
        &self.selection
    }

    pub fn runner(&self) -> Option<&QuizRunner> {
        self.runner.as_ref()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn reload_choices(&mut self) {
        self.selection.set_loading(true);
        self.pending_choices = Some(self.worker.load_choices());
    }

    /// Apply a result from the background worker. Results for requests the
    /// app is no longer waiting on are dropped.
    pub fn handle_worker_event(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Seeded { inserted } => {
                debug!("Seed finished, {} questions inserted", inserted);
            }
            WorkerEvent::SeedFailed { reason } => {
                self.status = Some(format!("Could not load questions: {}", reason));
            }
            WorkerEvent::Changed { generation } => {
                debug!("Question store changed (generation {})", generation);
                if matches!(self.state, AppState::Selection | AppState::Settings) {
                    self.reload_choices();
                }
            }
            WorkerEvent::Choices {
                ticket,
                versions,
                categories,
            } => {
                if self.pending_choices != Some(ticket) {
                    debug!("Discarding stale choices (ticket {})", ticket);
                    return;
                }
                self.pending_choices = None;
                self.selection.set_choices(versions, categories);
            }
            WorkerEvent::Resolved {
                ticket,
                filter,
                questions,
            } => {
                if self.pending_run != Some(ticket) || self.state != AppState::Selection {
                    debug!("Discarding stale questions (ticket {})", ticket);
                    return;
                }
                self.pending_run = None;
                self.start_run(filter, questions);
            }
        }
    }

    fn start_run(&mut self, filter: QuestionFilter, questions: Vec<crate::models::Question>) {
        match QuizRunner::new(questions) {
            Some(runner) => {
                info!(
                    "Starting quiz with {} questions for {:?}",
                    runner.total(),
                    filter
                );
                self.selection.set_loading(false);
                self.runner = Some(runner);
                self.selected_option = 0;
                self.state = AppState::Quiz;
            }
            None => {
                warn!("No questions for {:?}, staying on selection", filter);
                self.selection.reject_empty();
            }
        }
    }

    fn request_run(&mut self, filter: QuestionFilter) {
        self.selection.set_loading(true);
        self.pending_run = Some(self.worker.resolve(filter, self.settings.question_count));
    }

    // Selection screen

    pub fn selection_up(&mut self) {
        self.selection.move_up();
    }

    pub fn selection_down(&mut self) {
        self.selection.move_down();
    }

    pub fn selection_activate(&mut self) {
        self.selection.activate();
    }

    pub fn selection_back(&mut self) {
        self.pending_run = None;
        self.selection.set_loading(false);
        self.selection.back();
    }

    pub fn start_selected(&mut self) {
        if let Some(filter) = self.selection.confirm() {
            self.request_run(filter);
        }
    }

    pub fn start_all_questions(&mut self) {
        let filter = self.selection.all_questions();
        self.request_run(filter);
    }

    // Quiz screen

    fn option_available(&self, option: usize) -> bool {
        self.runner
            .as_ref()
            .is_some_and(|runner| runner.is_option_available(option))
    }

    pub fn select_next_option(&mut self) {
        for step in 1..=OPTION_SLOTS {
            let candidate = (self.selected_option + step) % OPTION_SLOTS;
            if self.option_available(candidate) {
                self.selected_option = candidate;
                return;
            }
        }
    }

    pub fn select_previous_option(&mut self) {
        for step in 1..=OPTION_SLOTS {
            let candidate = (self.selected_option + OPTION_SLOTS * 2 - step) % OPTION_SLOTS;
            if self.option_available(candidate) {
                self.selected_option = candidate;
                return;
            }
        }
    }

    /// Lock in the highlighted option.
    pub fn submit_answer(&mut self) -> Option<AnswerOutcome> {
        self.answer(self.selected_option)
    }

    /// Lock in `option` directly (number keys).
    pub fn answer(&mut self, option: usize) -> Option<AnswerOutcome> {
        let runner = self.runner.as_mut()?;
        let outcome = runner.select(option)?;
        self.selected_option = option;
        Some(outcome)
    }

    /// Next question, or results after the last one.
    pub fn next_question(&mut self) {
        let Some(runner) = self.runner.as_mut() else {
            return;
        };
        match runner.advance() {
            Phase::Finished => {
                let score = runner.score();
                info!("Quiz finished: {}/{}", score.correct, score.total);
                self.result_scroll = 0;
                self.state = AppState::Result;
            }
            Phase::AwaitingAnswer => self.selected_option = 0,
            Phase::AnswerLocked { .. } => {}
        }
    }

    pub fn abandon_quiz(&mut self) {
        info!("Quiz abandoned");
        self.restart();
    }

    // Result screen

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self
            .runner
            .as_ref()
            .map_or(0, |runner| runner.total().saturating_sub(1));
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.state = AppState::Selection;
        self.runner = None;
        self.selected_option = 0;
        self.result_scroll = 0;
        self.pending_run = None;
        self.selection = SelectionFlow::new();
        self.reload_choices();
    }

    // Settings screen

    pub fn open_settings(&mut self) {
        self.pending_run = None;
        self.selection.set_loading(self.pending_choices.is_some());
        self.settings_cursor = 0;
        self.state = AppState::Settings;
    }

    pub fn settings_up(&mut self) {
        let count = SettingsField::ALL.len();
        self.settings_cursor = (self.settings_cursor + count - 1) % count;
    }

    pub fn settings_down(&mut self) {
        self.settings_cursor = (self.settings_cursor + 1) % SettingsField::ALL.len();
    }

    pub fn toggle_setting(&mut self) {
        match SettingsField::ALL[self.settings_cursor] {
            SettingsField::QuestionCount => {
                self.settings.question_count = self.settings.question_count.next_choice();
            }
            SettingsField::DarkMode => self.settings.dark_mode = !self.settings.dark_mode,
            SettingsField::Sound => self.settings.sound_enabled = !self.settings.sound_enabled,
            SettingsField::Vibration => {
                self.settings.vibration_enabled = !self.settings.vibration_enabled;
            }
        }
    }

    /// Save settings and return to selection.
    pub fn close_settings(&mut self) {
        match self.settings_store.save(&self.settings) {
            Ok(()) => self.status = None,
            Err(e) => {
                error!("Failed to save settings: {}", e);
                self.status = Some("Settings could not be saved".to_string());
            }
        }
        self.selection.clear_notice();
        self.state = AppState::Selection;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::runtime::Handle;
    use tokio::sync::mpsc::UnboundedReceiver;

    use super::*;
    use crate::config::{MemorySettingsStore, QuestionCount};
    use crate::data::fixtures::question;
    use crate::data::{QuestionRepository, QuestionStore};
    use crate::selection::NO_QUESTIONS_AVAILABLE;

    async fn app_with(
        questions: &[crate::models::Question],
        settings: Settings,
    ) -> (App, UnboundedReceiver<WorkerEvent>) {
        let repository = Arc::new(QuestionRepository::new(QuestionStore::open_in_memory().unwrap()));
        repository.seed_if_empty(questions).unwrap();
        let (worker, events) = RepositoryWorker::spawn(repository, &Handle::current());
        let app = App::new(worker, Box::new(MemorySettingsStore::new(settings)));
        (app, events)
    }

    async fn pump(app: &mut App, events: &mut UnboundedReceiver<WorkerEvent>) {
        let event = events.recv().await.unwrap();
        app.handle_worker_event(event);
    }

    fn sample() -> Vec<crate::models::Question> {
        vec![
            question(1, "one", 0, "17", "Concurrency"),
            question(2, "two", 1, "17", "Collections"),
            question(3, "three", 2, "21", "Concurrency"),
        ]
    }

    #[tokio::test]
    async fn test_choices_loaded_on_start() {
        let (mut app, mut events) = app_with(&sample(), Settings::default()).await;
        assert!(app.selection().is_loading());

        pump(&mut app, &mut events).await;
        assert!(!app.selection().is_loading());
        assert_eq!(app.selection().versions(), &["21".to_string(), "17".to_string()]);
        assert_eq!(
            app.selection().categories(),
            &["Collections".to_string(), "Concurrency".to_string()]
        );
    }

    #[tokio::test]
    async fn test_empty_result_stays_on_selection() {
        let (mut app, mut events) = app_with(&sample(), Settings::default()).await;
        pump(&mut app, &mut events).await;

        app.selection.choose_category(Some("Collections".to_string()));
        app.selection.toggle_version("21");
        app.start_selected();
        pump(&mut app, &mut events).await;

        assert_eq!(app.state, AppState::Selection);
        assert!(app.runner().is_none());
        assert_eq!(app.selection().notice(), Some(NO_QUESTIONS_AVAILABLE));
    }

    #[tokio::test]
    async fn test_run_to_results() {
        let settings = Settings {
            question_count: QuestionCount::All,
            ..Settings::default()
        };
        let (mut app, mut events) = app_with(&sample(), settings).await;
        pump(&mut app, &mut events).await;

        app.selection.choose_category(None);
        app.selection.toggle_version("17");
        app.start_selected();
        pump(&mut app, &mut events).await;
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.runner().unwrap().total(), 2);

        for _ in 0..2 {
            let correct_index = app.runner().unwrap().current().correct_index;
            assert!(app.answer(correct_index).unwrap().correct);
            assert!(app.answer(3).is_none());
            app.next_question();
        }

        assert_eq!(app.state, AppState::Result);
        let score = app.runner().unwrap().score();
        assert_eq!((score.correct, score.total), (2, 2));
    }

    #[tokio::test]
    async fn test_stale_run_is_discarded() {
        let (mut app, mut events) = app_with(&sample(), Settings::default()).await;
        pump(&mut app, &mut events).await;

        app.start_all_questions();
        app.selection_back();
        pump(&mut app, &mut events).await;

        assert_eq!(app.state, AppState::Selection);
        assert!(app.runner().is_none());
    }

    #[tokio::test]
    async fn test_settings_toggle_and_save() {
        let (mut app, _events) = app_with(&sample(), Settings::default()).await;
        app.open_settings();
        assert_eq!(app.state, AppState::Settings);

        app.toggle_setting();
        app.settings_down();
        app.toggle_setting();
        app.close_settings();

        assert_eq!(app.state, AppState::Selection);
        assert_eq!(app.settings().question_count, QuestionCount::Limited(15));
        assert!(app.settings().dark_mode);
        assert_eq!(app.settings_store.load(), *app.settings());
    }

    #[tokio::test]
    async fn test_option_navigation_skips_missing_slots() {
        let mut short = question(1, "short", 0, "17", "General");
        short.options.truncate(2);
        let (mut app, mut events) = app_with(&[short], Settings::default()).await;
        pump(&mut app, &mut events).await;

        app.start_all_questions();
        pump(&mut app, &mut events).await;
        assert_eq!(app.state, AppState::Quiz);

        app.select_next_option();
        assert_eq!(app.selected_option(), 1);
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
        app.select_previous_option();
        assert_eq!(app.selected_option(), 1);
    }

    #[tokio::test]
    async fn test_question_without_options_reaches_results() {
        let mut empty = question(1, "empty", 0, "17", "General");
        empty.options.clear();
        let (mut app, mut events) = app_with(&[empty], Settings::default()).await;
        pump(&mut app, &mut events).await;

        app.start_all_questions();
        pump(&mut app, &mut events).await;
        assert_eq!(app.state, AppState::Quiz);
        assert!(app.submit_answer().is_none());

        app.next_question();
        assert_eq!(app.state, AppState::Result);
        let score = app.runner().unwrap().score();
        assert_eq!((score.correct, score.total), (0, 1));
    }
}
