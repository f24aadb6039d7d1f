//! User settings and their persistence.
//!
//! Settings are a small set of keys with fixed defaults. They are loaded
//! and saved through [`SettingsStore`] so the rest of the app never touches
//! the file format.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SettingsError;

/// Persisted question counts at or above this value mean "all questions".
pub const ALL_QUESTIONS_SENTINEL: u32 = 999;

pub const DEFAULT_QUESTION_COUNT: u32 = 10;
pub const DEFAULT_DARK_MODE: bool = false;
pub const DEFAULT_SOUND_ENABLED: bool = true;
pub const DEFAULT_VIBRATION_ENABLED: bool = true;

/// How many questions a run asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum QuestionCount {
    Limited(usize),
    All,
}

impl QuestionCount {
    /// Choices offered on the settings screen, in display order.
    pub const CHOICES: [QuestionCount; 5] = [
        QuestionCount::Limited(5),
        QuestionCount::Limited(10),
        QuestionCount::Limited(15),
        QuestionCount::Limited(20),
        QuestionCount::All,
    ];

    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Limited(n) => Some(n),
            Self::All => None,
        }
    }

    /// The choice after this one, wrapping around.
    pub fn next_choice(self) -> Self {
        let position = Self::CHOICES.iter().position(|c| *c == self);
        match position {
            Some(i) => Self::CHOICES[(i + 1) % Self::CHOICES.len()],
            None => Self::CHOICES[0],
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Limited(n) => n.to_string(),
            Self::All => "All".to_string(),
        }
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        Self::Limited(DEFAULT_QUESTION_COUNT as usize)
    }
}

impl From<u32> for QuestionCount {
    fn from(raw: u32) -> Self {
        match raw {
            0 => Self::default(),
            n if n >= ALL_QUESTIONS_SENTINEL => Self::All,
            n => Self::Limited(n as usize),
        }
    }
}

impl From<QuestionCount> for u32 {
    fn from(count: QuestionCount) -> Self {
        match count {
            QuestionCount::Limited(n) => n.min(ALL_QUESTIONS_SENTINEL as usize - 1) as u32,
            QuestionCount::All => ALL_QUESTIONS_SENTINEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub question_count: QuestionCount,
    pub dark_mode: bool,
    pub sound_enabled: bool,
    pub vibration_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            question_count: QuestionCount::default(),
            dark_mode: DEFAULT_DARK_MODE,
            sound_enabled: DEFAULT_SOUND_ENABLED,
            vibration_enabled: DEFAULT_VIBRATION_ENABLED,
        }
    }
}

/// Narrow persistence interface for [`Settings`].
pub trait SettingsStore: Send {
    /// Never fails: anything unreadable yields defaults.
    fn load(&self) -> Settings;

    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

/// Settings kept in a TOML file.
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Settings {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No settings at {} ({}), using defaults", self.path.display(), e);
                return Settings::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|e| {
            warn!("Ignoring unreadable settings in {}: {}", self.path.display(), e);
            Settings::default()
        })
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let content = toml::to_string(settings)?;
        fs::write(&self.path, content).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Settings held in memory only.
#[derive(Default)]
pub struct MemorySettingsStore {
    settings: Mutex<Settings>,
}

impl MemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Settings {
        self.settings.lock().map(|s| *s).unwrap_or_default()
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Ok(mut current) = self.settings.lock() {
            *current = *settings;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_count_sentinel() {
        assert_eq!(QuestionCount::from(999), QuestionCount::All);
        assert_eq!(QuestionCount::from(5000), QuestionCount::All);
        assert_eq!(QuestionCount::from(15), QuestionCount::Limited(15));
        assert_eq!(QuestionCount::from(0), QuestionCount::default());
        assert_eq!(u32::from(QuestionCount::All), ALL_QUESTIONS_SENTINEL);
    }

    #[test]
    fn test_question_count_cycles_through_choices() {
        let mut count = QuestionCount::Limited(5);
        for _ in 0..QuestionCount::CHOICES.len() {
            count = count.next_choice();
        }
        assert_eq!(count, QuestionCount::Limited(5));
        assert_eq!(QuestionCount::Limited(20).next_choice(), QuestionCount::All);
        assert_eq!(QuestionCount::Limited(7).next_choice(), QuestionCount::Limited(5));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlSettingsStore::new(dir.path().join("settings.toml"));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlSettingsStore::new(dir.path().join("settings.toml"));
        let settings = Settings {
            question_count: QuestionCount::All,
            dark_mode: true,
            sound_enabled: false,
            vibration_enabled: true,
        };

        store.save(&settings).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("question_count = 999"));
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_partial_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        fs::write(&path, "dark_mode = true\n").unwrap();
        let settings = TomlSettingsStore::new(&path).load();
        assert!(settings.dark_mode);
        assert_eq!(settings.question_count, QuestionCount::default());
        assert!(settings.sound_enabled);

        fs::write(&path, "question_count = \"lots\"").unwrap();
        assert_eq!(TomlSettingsStore::new(&path).load(), Settings::default());
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySettingsStore::default();
        let mut settings = store.load();
        settings.sound_enabled = false;
        store.save(&settings).unwrap();
        assert!(!store.load().sound_enabled);
    }
}
