//! SQLite-backed question table.
//!
//! The table is keyed by question id and holds the options as a JSON
//! array. Schema changes are handled by dropping and recreating the table;
//! its content is always re-derivable from the seed bank.

use std::path::Path;

use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Result, Row};
use tracing::{debug, info, warn};

use crate::models::Question;

/// Bumped whenever the table layout changes.
pub const SCHEMA_VERSION: i64 = 2;

const COLUMNS: &str =
    "id, question_text, options, correct_answer_index, explanation, java_version, category";

pub struct QuestionStore {
    conn: Connection,
}

impl QuestionStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening question store at {}", path.display());
        let store = Self {
            conn: Connection::open(path)?,
        };
        store.init()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init()?;
        Ok(store)
    }

    fn init(&self) -> Result<()> {
        let version: i64 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if version != SCHEMA_VERSION {
            if version != 0 {
                warn!(
                    "Question store schema {} does not match {}, recreating",
                    version, SCHEMA_VERSION
                );
            }
            self.conn.execute_batch("DROP TABLE IF EXISTS questions;")?;
        }

        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY,
                question_text TEXT NOT NULL,
                options TEXT NOT NULL,
                correct_answer_index INTEGER NOT NULL,
                explanation TEXT NOT NULL,
                java_version TEXT NOT NULL,
                category TEXT NOT NULL DEFAULT 'General'
            );

            CREATE INDEX IF NOT EXISTS idx_questions_version ON questions(java_version);
            CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
            "#,
        )?;
        self.conn
            .pragma_update(None, "user_version", SCHEMA_VERSION)?;
        Ok(())
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Bulk insert in one transaction, replacing rows with the same id.
    pub fn insert_all(&mut self, questions: &[Question]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO questions
                 (id, question_text, options, correct_answer_index, explanation, java_version, category)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for question in questions {
                let options = serde_json::to_string(&question.options)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
                stmt.execute(params![
                    question.id,
                    question.text,
                    options,
                    question.correct_index as i64,
                    question.explanation,
                    question.version,
                    question.category,
                ])?;
            }
        }
        tx.commit()?;
        info!("Inserted {} questions", questions.len());
        Ok(questions.len())
    }

    pub fn all(&self) -> Result<Vec<Question>> {
        self.select("", [])
    }

    pub fn by_id(&self, id: i64) -> Result<Option<Question>> {
        let sql = format!("SELECT {} FROM questions WHERE id = ?1", COLUMNS);
        self.conn
            .query_row(&sql, params![id], question_from_row)
            .optional()
    }

    pub fn by_version(&self, version: &str) -> Result<Vec<Question>> {
        self.select("WHERE java_version = ?1", params![version])
    }

    pub fn by_versions(&self, versions: &[String]) -> Result<Vec<Question>> {
        if versions.is_empty() {
            return Ok(Vec::new());
        }
        let clause = format!("WHERE java_version IN ({})", placeholders(versions.len(), 1));
        self.select(&clause, params_from_iter(versions.iter()))
    }

    pub fn by_category(&self, category: &str) -> Result<Vec<Question>> {
        self.select("WHERE category = ?1", params![category])
    }

    pub fn by_version_and_category(&self, version: &str, category: &str) -> Result<Vec<Question>> {
        self.select(
            "WHERE java_version = ?1 AND category = ?2",
            params![version, category],
        )
    }

    pub fn by_versions_and_category(
        &self,
        versions: &[String],
        category: &str,
    ) -> Result<Vec<Question>> {
        if versions.is_empty() {
            return Ok(Vec::new());
        }
        let clause = format!(
            "WHERE category = ?1 AND java_version IN ({})",
            placeholders(versions.len(), 2)
        );
        let args = std::iter::once(category).chain(versions.iter().map(String::as_str));
        self.select(&clause, params_from_iter(args))
    }

    /// Distinct versions in no particular order.
    pub fn versions(&self) -> Result<Vec<String>> {
        self.strings("SELECT DISTINCT java_version FROM questions", [])
    }

    pub fn categories(&self) -> Result<Vec<String>> {
        self.strings(
            "SELECT DISTINCT category FROM questions ORDER BY category",
            [],
        )
    }

    pub fn categories_for_version(&self, version: &str) -> Result<Vec<String>> {
        self.strings(
            "SELECT DISTINCT category FROM questions WHERE java_version = ?1 ORDER BY category",
            params![version],
        )
    }

    fn select<P: rusqlite::Params>(&self, clause: &str, params: P) -> Result<Vec<Question>> {
        let sql = format!("SELECT {} FROM questions {} ORDER BY id", COLUMNS, clause);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params, question_from_row)?;
        rows.collect()
    }

    fn strings<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| row.get(0))?;
        rows.collect()
    }
}

/// `?start, ?start+1, ...` for `count` parameters.
fn placeholders(count: usize, start: usize) -> String {
    (start..start + count)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

fn question_from_row(row: &Row<'_>) -> Result<Question> {
    let id: i64 = row.get(0)?;
    let options_json: String = row.get(2)?;
    let options = serde_json::from_str(&options_json).unwrap_or_else(|e| {
        warn!("Question {} has undecodable options: {}", id, e);
        Vec::new()
    });
    let correct_index: i64 = row.get(3)?;

    Ok(Question {
        id,
        text: row.get(1)?,
        options,
        correct_index: usize::try_from(correct_index).unwrap_or(usize::MAX),
        explanation: row.get(4)?,
        version: row.get(5)?,
        category: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::question;

    fn sample() -> Vec<Question> {
        vec![
            question(3, "Q3", 0, "21", "Concurrency"),
            question(1, "Q1", 1, "17", "Language Features"),
            question(2, "Q2", 2, "17", "Concurrency"),
        ]
    }

    #[test]
    fn test_insert_and_read_ordered_by_id() {
        let mut store = QuestionStore::open_in_memory().unwrap();
        assert_eq!(store.count().unwrap(), 0);
        store.insert_all(&sample()).unwrap();

        let ids: Vec<i64> = store.all().unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let first = store.by_id(1).unwrap().unwrap();
        assert_eq!(first.options.len(), 4);
        assert_eq!(first.correct_index, 1);
        assert!(store.by_id(42).unwrap().is_none());
    }

    #[test]
    fn test_insert_replaces_on_conflict() {
        let mut store = QuestionStore::open_in_memory().unwrap();
        store.insert_all(&sample()).unwrap();
        store
            .insert_all(&[question(1, "Q1 revised", 0, "17", "General")])
            .unwrap();

        assert_eq!(store.count().unwrap(), 3);
        assert_eq!(store.by_id(1).unwrap().unwrap().text, "Q1 revised");
    }

    #[test]
    fn test_filters() {
        let mut store = QuestionStore::open_in_memory().unwrap();
        store.insert_all(&sample()).unwrap();

        assert_eq!(store.by_version("17").unwrap().len(), 2);
        assert_eq!(store.by_category("Concurrency").unwrap().len(), 2);
        assert_eq!(
            store
                .by_version_and_category("17", "Concurrency")
                .unwrap()
                .iter()
                .map(|q| q.id)
                .collect::<Vec<_>>(),
            vec![2]
        );
        let versions = vec!["17".to_string(), "21".to_string()];
        assert_eq!(
            store
                .by_versions_and_category(&versions, "Concurrency")
                .unwrap()
                .iter()
                .map(|q| q.id)
                .collect::<Vec<_>>(),
            vec![2, 3]
        );
        assert!(store.by_versions(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_distinct_values() {
        let mut store = QuestionStore::open_in_memory().unwrap();
        store.insert_all(&sample()).unwrap();

        let mut versions = store.versions().unwrap();
        versions.sort();
        assert_eq!(versions, vec!["17", "21"]);
        assert_eq!(
            store.categories().unwrap(),
            vec!["Concurrency", "Language Features"]
        );
        assert_eq!(store.categories_for_version("21").unwrap(), vec!["Concurrency"]);
    }

    #[test]
    fn test_schema_mismatch_recreates_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.db");
        {
            let mut store = QuestionStore::open(&path).unwrap();
            store.insert_all(&sample()).unwrap();
            store.conn.pragma_update(None, "user_version", 1).unwrap();
        }

        let store = QuestionStore::open(&path).unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.db");
        {
            let mut store = QuestionStore::open(&path).unwrap();
            store.insert_all(&sample()).unwrap();
        }

        let store = QuestionStore::open(&path).unwrap();
        assert_eq!(store.count().unwrap(), 3);
    }
}
