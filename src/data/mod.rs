mod loader;
mod repository;
pub mod seed;
mod store;
mod worker;

pub use loader::{load_questions_from_json, load_seed_questions};
pub use repository::{QuestionFilter, QuestionRepository, ALL};
pub use store::{QuestionStore, SCHEMA_VERSION};
pub use worker::{RepositoryWorker, Ticket, WorkerEvent};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::Question;

    /// A four-option question whose options are named after `text`.
    pub fn question(id: i64, text: &str, correct_index: usize, version: &str, category: &str) -> Question {
        Question {
            id,
            text: text.to_string(),
            options: (1..=4).map(|i| format!("{} option {}", text, i)).collect(),
            correct_index,
            explanation: format!("Explanation for {}", text),
            version: version.to_string(),
            category: category.to_string(),
        }
    }
}
