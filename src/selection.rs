//! Category and version selection.
//!
//! The screen has two steps: pick a category (or all of them), then pick
//! one or more versions. "All questions" skips both.

use crate::data::QuestionFilter;

pub const NO_VERSION_SELECTED: &str = "Please select at least one version";
pub const NO_QUESTIONS_AVAILABLE: &str = "No questions available for the selected criteria";
pub const ALL_CATEGORIES_LABEL: &str = "All categories";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStep {
    Category,
    Version,
}

#[derive(Debug, Clone)]
pub struct SelectionFlow {
    versions: Vec<String>,
    categories: Vec<String>,
    chosen_versions: Vec<String>,
    chosen_category: Option<String>,
    step: SelectionStep,
    cursor: usize,
    loading: bool,
    notice: Option<String>,
}

impl Default for SelectionFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionFlow {
    pub fn new() -> Self {
        Self {
            versions: Vec::new(),
            categories: Vec::new(),
            chosen_versions: Vec::new(),
            chosen_category: None,
            step: SelectionStep::Category,
            cursor: 0,
            loading: true,
            notice: None,
        }
    }

    pub fn set_choices(&mut self, versions: Vec<String>, categories: Vec<String>) {
        self.chosen_versions.retain(|v| versions.contains(v));
        self.versions = versions;
        self.categories = categories;
        self.loading = false;
        self.cursor = self.cursor.min(self.entry_count().saturating_sub(1));
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn step(&self) -> SelectionStep {
        self.step
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn chosen_versions(&self) -> &[String] {
        &self.chosen_versions
    }

    pub fn chosen_category(&self) -> Option<&str> {
        self.chosen_category.as_deref()
    }

    pub fn is_version_chosen(&self, version: &str) -> bool {
        self.chosen_versions.iter().any(|v| v == version)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Rows on the current step. The category step starts with "All categories".
    pub fn entry_count(&self) -> usize {
        match self.step {
            SelectionStep::Category => self.categories.len() + 1,
            SelectionStep::Version => self.versions.len(),
        }
    }

    pub fn move_down(&mut self) {
        let count = self.entry_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn move_up(&mut self) {
        let count = self.entry_count();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Act on the row under the cursor: choose a category, or toggle a version.
    pub fn activate(&mut self) {
        match self.step {
            SelectionStep::Category => {
                let category = match self.cursor {
                    0 => None,
                    i => self.categories.get(i - 1).cloned(),
                };
                self.choose_category(category);
            }
            SelectionStep::Version => {
                if let Some(version) = self.versions.get(self.cursor).cloned() {
                    self.toggle_version(&version);
                }
            }
        }
    }

    /// `None` means all categories. Moves on to version selection.
    pub fn choose_category(&mut self, category: Option<String>) {
        self.chosen_category = category;
        self.step = SelectionStep::Version;
        self.cursor = 0;
        self.notice = None;
    }

    pub fn toggle_version(&mut self, version: &str) {
        if let Some(position) = self.chosen_versions.iter().position(|v| v == version) {
            self.chosen_versions.remove(position);
        } else {
            self.chosen_versions.push(version.to_string());
        }
        self.notice = None;
    }

    /// Back to category selection, keeping chosen versions.
    pub fn back(&mut self) {
        self.step = SelectionStep::Category;
        self.cursor = 0;
        self.notice = None;
    }

    /// Filter for the chosen versions and category, or a notice when no
    /// version is chosen.
    pub fn confirm(&mut self) -> Option<QuestionFilter> {
        if self.chosen_versions.is_empty() {
            self.notice = Some(NO_VERSION_SELECTED.to_string());
            return None;
        }
        self.notice = None;
        Some(QuestionFilter::new(
            Some(self.chosen_versions.clone()),
            self.chosen_category.clone(),
        ))
    }

    /// The "All questions" shortcut.
    pub fn all_questions(&mut self) -> QuestionFilter {
        self.notice = None;
        QuestionFilter::all()
    }

    /// The resolved list was empty: stay here and say so.
    pub fn reject_empty(&mut self) {
        self.loading = false;
        self.notice = Some(NO_QUESTIONS_AVAILABLE.to_string());
    }
}
