use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::data::seed::question_bank;
use crate::error::LoadError;
use crate::models::Question;

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    for question in questions.iter().filter(|q| !q.is_well_formed()) {
        warn!(
            "Question {} has {} options and correct index {}",
            question.id,
            question.options.len(),
            question.correct_index
        );
    }

    Ok(questions)
}

/// Questions to seed the store with: the JSON file when it loads, the
/// embedded bank otherwise.
pub fn load_seed_questions(path: Option<&Path>) -> Vec<Question> {
    let Some(path) = path else {
        return question_bank();
    };

    match load_questions_from_json(path) {
        Ok(questions) => {
            info!("Loaded {} questions from {}", questions.len(), path.display());
            questions
        }
        Err(e) => {
            warn!("{}, falling back to the embedded question bank", e);
            question_bank()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_file() {
        let file = write_file(
            r#"[{
                "id": 1,
                "questionText": "What is Java?",
                "options": ["a", "b", "c", "d"],
                "correctAnswerIndex": 1,
                "explanation": "A language.",
                "javaVersion": "Core",
                "category": "General"
            }]"#,
        );

        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].version, "Core");
    }

    #[test]
    fn test_load_errors() {
        let garbage = write_file("not json");
        assert!(matches!(
            load_questions_from_json(garbage.path()),
            Err(LoadError::Parse { .. })
        ));

        let empty = write_file("[]");
        assert!(matches!(
            load_questions_from_json(empty.path()),
            Err(LoadError::Empty { .. })
        ));

        assert!(matches!(
            load_questions_from_json("/definitely/not/here.json"),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn test_short_options_are_kept() {
        let file = write_file(
            r#"[{
                "id": 9,
                "questionText": "Pick one",
                "options": ["yes", "no"],
                "correctAnswerIndex": 0,
                "explanation": "",
                "javaVersion": "21"
            }]"#,
        );

        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions[0].options.len(), 2);
    }

    #[test]
    fn test_seed_falls_back_to_embedded_bank() {
        let garbage = write_file("{ broken");
        let questions = load_seed_questions(Some(garbage.path()));
        assert_eq!(questions, question_bank());
        assert_eq!(load_seed_questions(None), question_bank());
    }
}
