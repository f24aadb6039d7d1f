//! Read-side query layer over the question store.
//!
//! Every read degrades to an empty list on storage failure; the only write
//! is the one-time seed.

use std::cmp::Ordering;
use std::sync::{Mutex, MutexGuard};

use rand::seq::SliceRandom;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::config::QuestionCount;
use crate::data::store::QuestionStore;
use crate::error::QuizError;
use crate::models::Question;

/// Single-value filter argument meaning "no filter".
pub const ALL: &str = "All";

/// Versions and category chosen on the selection screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub versions: Option<Vec<String>>,
    pub category: Option<String>,
}

impl QuestionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(versions: Option<Vec<String>>, category: Option<String>) -> Self {
        Self { versions, category }
    }

    /// Whether `question` would be returned by this filter.
    pub fn matches(&self, question: &Question) -> bool {
        let version_ok = match self.versions.as_deref() {
            None | Some([]) => true,
            Some(versions) => versions.iter().any(|v| *v == question.version),
        };
        let category_ok = match normalize(self.category.as_deref()) {
            None => true,
            Some(category) => question.category == category,
        };
        version_ok && category_ok
    }
}

/// `None`, empty and `"All"` all collapse to `None`.
fn normalize(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL)
}

pub struct QuestionRepository {
    store: Mutex<QuestionStore>,
    changes: watch::Sender<u64>,
}

impl QuestionRepository {
    pub fn new(store: QuestionStore) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            store: Mutex::new(store),
            changes,
        }
    }

    fn store(&self) -> MutexGuard<'_, QuestionStore> {
        // A panic while holding the lock cannot leave the store half-written:
        // the only write runs in a transaction.
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Receives the write generation; it changes after every successful write.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Insert `questions` only if the store is empty. Returns rows inserted.
    pub fn seed_if_empty(&self, questions: &[Question]) -> Result<usize, QuizError> {
        let mut store = self.store();
        if store.count()? > 0 {
            debug!("Question store already seeded");
            return Ok(0);
        }

        let inserted = store.insert_all(questions)?;
        drop(store);

        self.changes.send_modify(|generation| *generation += 1);
        info!("Seeded question store with {} questions", inserted);
        Ok(inserted)
    }

    pub fn question_count(&self) -> usize {
        self.read("count questions", |store| store.count())
            .unwrap_or(0)
    }

    pub fn all_questions(&self) -> Vec<Question> {
        self.read("load all questions", |store| store.all())
            .unwrap_or_default()
    }

    pub fn question_by_id(&self, id: i64) -> Option<Question> {
        self.read("load question", |store| store.by_id(id)).flatten()
    }

    pub fn by_version(&self, version: Option<&str>) -> Vec<Question> {
        match normalize(version) {
            None => self.all_questions(),
            Some(version) => self
                .read("filter by version", |store| store.by_version(version))
                .unwrap_or_default(),
        }
    }

    pub fn by_category(&self, category: Option<&str>) -> Vec<Question> {
        match normalize(category) {
            None => self.all_questions(),
            Some(category) => self
                .read("filter by category", |store| store.by_category(category))
                .unwrap_or_default(),
        }
    }

    pub fn by_version_and_category(
        &self,
        version: Option<&str>,
        category: Option<&str>,
    ) -> Vec<Question> {
        match (normalize(version), normalize(category)) {
            (None, None) => self.all_questions(),
            (None, category) => self.by_category(category),
            (version, None) => self.by_version(version),
            (Some(version), Some(category)) => self
                .read("filter by version and category", |store| {
                    store.by_version_and_category(version, category)
                })
                .unwrap_or_default(),
        }
    }

    /// Union over `versions`. No versions means no questions.
    pub fn by_versions(&self, versions: &[String]) -> Vec<Question> {
        if versions.is_empty() {
            debug!("No versions given, returning no questions");
            return Vec::new();
        }
        self.read("filter by versions", |store| store.by_versions(versions))
            .unwrap_or_default()
    }

    /// Absent (or empty) versions fall back to the category filter alone.
    pub fn by_versions_and_category(
        &self,
        versions: Option<&[String]>,
        category: Option<&str>,
    ) -> Vec<Question> {
        let questions = match (versions.filter(|v| !v.is_empty()), normalize(category)) {
            (None, category) => self.by_category(category),
            (Some(versions), None) => self.by_versions(versions),
            (Some(versions), Some(category)) => self
                .read("filter by versions and category", |store| {
                    store.by_versions_and_category(versions, category)
                })
                .unwrap_or_default(),
        };

        if questions.is_empty() {
            warn!(
                "No questions found for versions: {:?}, category: {:?}",
                versions, category
            );
        }
        questions
    }

    pub fn questions_for(&self, filter: &QuestionFilter) -> Vec<Question> {
        self.by_versions_and_category(filter.versions.as_deref(), filter.category.as_deref())
    }

    /// Shuffled selection of at most `count` questions matching `filter`.
    pub fn random_subset(&self, count: QuestionCount, filter: &QuestionFilter) -> Vec<Question> {
        let mut questions = self.questions_for(filter);
        questions.shuffle(&mut rand::thread_rng());
        if let Some(limit) = count.limit() {
            questions.truncate(limit);
        }
        questions
    }

    /// Non-numeric tags such as "Core" first, then numeric versions newest first.
    pub fn distinct_versions(&self) -> Vec<String> {
        let mut versions = self
            .read("list versions", |store| store.versions())
            .unwrap_or_default();
        versions.sort_by(|a, b| compare_versions(a, b));
        versions
    }

    pub fn distinct_categories(&self) -> Vec<String> {
        self.read("list categories", |store| store.categories())
            .unwrap_or_default()
    }

    pub fn categories_for_version(&self, version: &str) -> Vec<String> {
        self.read("list categories for version", |store| {
            store.categories_for_version(version)
        })
        .unwrap_or_default()
    }

    fn read<T>(
        &self,
        what: &str,
        query: impl FnOnce(&QuestionStore) -> rusqlite::Result<T>,
    ) -> Option<T> {
        let store = self.store();
        match query(&store) {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Failed to {}: {}", what, e);
                None
            }
        }
    }
}

fn compare_versions(a: &str, b: &str) -> Ordering {
    match (a.parse::<u32>(), b.parse::<u32>()) {
        (Ok(a), Ok(b)) => b.cmp(&a),
        (Ok(_), Err(_)) => Ordering::Greater,
        (Err(_), Ok(_)) => Ordering::Less,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::data::fixtures::question;
    use crate::data::seed::question_bank;

    fn repository(questions: &[Question]) -> QuestionRepository {
        let repository = QuestionRepository::new(QuestionStore::open_in_memory().unwrap());
        repository.seed_if_empty(questions).unwrap();
        repository
    }

    fn ids(questions: &[Question]) -> Vec<i64> {
        questions.iter().map(|q| q.id).collect()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_seed_if_empty_is_idempotent() {
        let repository = QuestionRepository::new(QuestionStore::open_in_memory().unwrap());
        let bank = question_bank();

        assert_eq!(repository.seed_if_empty(&bank).unwrap(), bank.len());
        assert_eq!(repository.seed_if_empty(&bank).unwrap(), 0);
        assert_eq!(repository.question_count(), bank.len());
    }

    #[test]
    fn test_single_version_none_means_all() {
        let repository = repository(&question_bank());
        let all = repository.all_questions();

        assert_eq!(repository.by_version(None), all);
        assert_eq!(repository.by_version(Some(ALL)), all);
        assert_eq!(repository.by_category(None), all);
        assert_eq!(repository.by_version_and_category(None, Some(ALL)), all);
    }

    #[test]
    fn test_empty_version_set_means_none() {
        let repository = repository(&question_bank());
        assert!(repository.by_versions(&[]).is_empty());
        assert!(!repository.by_version(None).is_empty());
    }

    #[test]
    fn test_by_versions_union_covers_everything() {
        let repository = repository(&question_bank());
        let all = repository.all_questions();

        let mut seen = HashSet::new();
        for version in repository.distinct_versions() {
            let set = vec![version.clone()];
            let questions = repository.by_versions(&set);
            assert!(questions.iter().all(|q| q.version == version));
            seen.extend(ids(&questions));
        }
        assert_eq!(seen, ids(&all).into_iter().collect());

        let everything = repository.by_versions(&repository.distinct_versions());
        assert_eq!(everything, all);
    }

    #[test]
    fn test_versions_and_category_degrade() {
        let repository = repository(&[
            question(1, "a", 0, "17", "Concurrency"),
            question(2, "b", 0, "17", "Collections"),
            question(3, "c", 0, "21", "Concurrency"),
        ]);
        let seventeen = strings(&["17"]);

        assert_eq!(
            ids(&repository.by_versions_and_category(Some(seventeen.as_slice()), Some("Concurrency"))),
            vec![1]
        );
        assert_eq!(
            ids(&repository.by_versions_and_category(Some(seventeen.as_slice()), None)),
            vec![1, 2]
        );
        assert_eq!(
            ids(&repository.by_versions_and_category(None, Some("Concurrency"))),
            vec![1, 3]
        );
        assert_eq!(
            ids(&repository.by_versions_and_category(Some(&[][..]), Some("Concurrency"))),
            vec![1, 3]
        );
        assert_eq!(ids(&repository.by_versions_and_category(None, None)), vec![1, 2, 3]);
        assert_eq!(
            ids(&repository.by_version_and_category(Some("21"), Some("Concurrency"))),
            vec![3]
        );
        assert!(repository
            .by_versions_and_category(Some(strings(&["8"]).as_slice()), Some("Concurrency"))
            .is_empty());
    }

    #[test]
    fn test_distinct_versions_order() {
        let repository = repository(&[
            question(1, "a", 0, "8", "General"),
            question(2, "b", 0, "21", "General"),
            question(3, "c", 0, "Core", "General"),
            question(4, "d", 0, "17", "General"),
        ]);

        assert_eq!(
            repository.distinct_versions(),
            strings(&["Core", "21", "17", "8"])
        );
    }

    #[test]
    fn test_distinct_categories_sorted() {
        let repository = repository(&question_bank());
        let categories = repository.distinct_categories();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert!(categories.contains(&"Concurrency".to_string()));
        assert_eq!(
            repository.categories_for_version("18"),
            strings(&["APIs"])
        );
    }

    #[test]
    fn test_random_subset_bounds() {
        let repository = repository(&question_bank());
        let filter = QuestionFilter::new(Some(strings(&["Core", "21"])), None);
        let matching = repository.questions_for(&filter).len();

        let subset = repository.random_subset(QuestionCount::Limited(3), &filter);
        assert_eq!(subset.len(), 3.min(matching));
        assert!(subset.iter().all(|q| filter.matches(q)));

        let unique: HashSet<i64> = subset.iter().map(|q| q.id).collect();
        assert_eq!(unique.len(), subset.len());

        let everything = repository.random_subset(QuestionCount::All, &filter);
        assert_eq!(everything.len(), matching);

        let large = repository.random_subset(QuestionCount::Limited(500), &filter);
        assert_eq!(large.len(), matching);

        let none = QuestionFilter::new(Some(strings(&["99"])), None);
        assert!(repository.random_subset(QuestionCount::All, &none).is_empty());
    }

    #[test]
    fn test_seed_bumps_generation() {
        let repository = QuestionRepository::new(QuestionStore::open_in_memory().unwrap());
        let receiver = repository.subscribe();
        assert_eq!(*receiver.borrow(), 0);

        repository.seed_if_empty(&question_bank()).unwrap();
        assert_eq!(*receiver.borrow(), 1);

        repository.seed_if_empty(&question_bank()).unwrap();
        assert_eq!(*receiver.borrow(), 1);
    }

    #[test]
    fn test_filter_matches() {
        let q = question(1, "a", 0, "17", "Concurrency");
        assert!(QuestionFilter::all().matches(&q));
        assert!(QuestionFilter::new(Some(strings(&["17"])), Some(ALL.to_string())).matches(&q));
        assert!(!QuestionFilter::new(Some(strings(&["21"])), None).matches(&q));
        assert!(!QuestionFilter::new(None, Some("Collections".to_string())).matches(&q));
    }
}
