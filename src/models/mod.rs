mod question;

pub use question::{Question, DEFAULT_CATEGORY, OPTION_SLOTS};

/// Screen the application is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Choosing a category and versions.
    Selection,
    /// Answering questions.
    Quiz,
    /// Final score and breakdown.
    Result,
    /// Editing settings.
    Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::Selection
    }
}
